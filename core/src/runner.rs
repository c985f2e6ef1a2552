//! Drives a classifier over a single log.

use std::fs;
use std::path::Path;

use tracing::{debug, trace, warn};

use netlog_common::error::LogError;
use netlog_common::host::HostState;
use netlog_common::source::LogSource;

use crate::classify::{LineClassifier, Outcome};

/// Reads `source` from disk and parses it.
///
/// Returns `Ok(None)` for an empty log: there is nothing to parse and no host
/// is registered for it.
pub fn run_file<C: LineClassifier>(
    classifier: &C,
    source: &LogSource,
) -> Result<Option<HostState<C::Record>>, LogError> {
    debug!("start parsing for {} in {}", source.dest, source.path.display());

    let content: String = fs::read_to_string(&source.path).map_err(|e| LogError::Unreadable {
        path: source.path.clone(),
        source: e,
    })?;

    if content.lines().all(str::is_empty) {
        warn!("{} log {} is empty, nothing to parse", classifier.tool(), source.path.display());
        return Ok(None);
    }

    Ok(Some(run_text(classifier, &source.dest, &source.path, &content)))
}

/// Parses log text already in memory into a fresh host.
pub fn run_text<C: LineClassifier>(
    classifier: &C,
    dest: &str,
    log: &Path,
    content: &str,
) -> HostState<C::Record> {
    let lines: Vec<&str> = content.lines().collect();
    let mut host: HostState<C::Record> = HostState::new(dest, log);

    for line in classifier.candidates(&lines) {
        let outcome: Outcome<C::Record> = classifier.classify(line);
        trace!("{} {}  => {}    {}", dest, line, outcome, log.display());

        match outcome {
            Outcome::Record(record) => {
                if let Err(rejected) = host.append(record) {
                    warn!("{rejected}");
                }
            }
            Outcome::Start => {}
            Outcome::End => break,
            Outcome::Malformed(e) => {
                warn!("{} {}: {e} in line {line:?}", classifier.tool(), dest);
                host.note_unrecognized(line);
            }
            Outcome::Unrecognized => {
                debug!("{} {}: unrecognized line {line:?}", classifier.tool(), dest);
                host.note_unrecognized(line);
            }
        }
    }

    host
}
