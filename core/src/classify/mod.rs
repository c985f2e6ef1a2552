//! Line classifiers.
//!
//! Each diagnostic tool gets a stateless classifier that maps one line of its
//! output to an [`Outcome`]. The runner owns all state; classifiers only look
//! at the text they are given.

use std::fmt;

use netlog_common::error::FieldError;
use netlog_common::host::Indexed;

pub mod dig;
pub mod ping;
pub mod traceroute;

pub use dig::DigClassifier;
pub use ping::PingClassifier;
pub use traceroute::TracerouteClassifier;

/// What a single line turned out to be.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<R> {
    /// A record to append to the host.
    Record(R),
    /// The tool's banner line; nothing to store.
    Start,
    /// The tool's summary line; the rest of the log is ignored.
    End,
    /// A line matched a pattern but one of its fields did not parse.
    Malformed(FieldError),
    /// No pattern matched.
    Unrecognized,
}

impl<R: fmt::Debug> fmt::Display for Outcome<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Record(r) => write!(f, "{r:?}"),
            Outcome::Start => f.write_str("start of log"),
            Outcome::End => f.write_str("end of log"),
            Outcome::Malformed(e) => write!(f, "malformed: {e}"),
            Outcome::Unrecognized => f.write_str("unrecognized"),
        }
    }
}

/// Maps the lines of one tool's output to records.
pub trait LineClassifier: Sync {
    type Record: Indexed + fmt::Debug + Send;

    /// Name of the tool, used in diagnostics.
    fn tool(&self) -> &'static str;

    /// Selects the lines worth classifying. Line-oriented tools keep all of
    /// them; section-oriented tools narrow the log down first.
    fn candidates<'a>(&self, lines: &[&'a str]) -> Vec<&'a str> {
        lines.to_vec()
    }

    fn classify(&self, line: &str) -> Outcome<Self::Record>;
}

pub(crate) fn parse_u64(field: &'static str, raw: &str) -> Result<u64, FieldError> {
    raw.trim().parse().map_err(|_| FieldError::new(field, raw))
}
