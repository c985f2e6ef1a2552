/// Settings for a single batch run.
///
/// Built fresh from the command line on every invocation and passed down by
/// reference; nothing in here is global.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Trace every classified line, not only the rejected ones.
    pub verbose: bool,
    /// Suppress headers and summaries (0 = everything, 1 = data only).
    pub quiet: u8,
    /// Parse log files on the rayon pool instead of one after the other.
    ///
    /// The resulting dataset is identical either way.
    pub parallel: bool,
}
