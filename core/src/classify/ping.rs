//! Classifier for `ping` output.
//!
//! Expects logs taken with `LANG=C ping -O -c <n> <dest>`. Without `-O`, ping
//! prints nothing for lost replies and sequence slots after a loss can only
//! be placed by their own `icmp_seq`; no reordering is attempted.

use std::sync::OnceLock;

use regex::Regex;

use netlog_common::error::FieldError;
use netlog_common::record::PingRecord;

use super::{LineClassifier, Outcome, parse_u64};

const TIMEOUT_MESSAGE: &str = "no answer yet";

static REPLY: OnceLock<Regex> = OnceLock::new();
static ERROR: OnceLock<Regex> = OnceLock::new();
static TIMEOUT: OnceLock<Regex> = OnceLock::new();

fn reply_pattern() -> &'static Regex {
    REPLY.get_or_init(|| {
        Regex::new(
            r"^(?P<size>\d+) bytes from (?P<dest>[^:]+):.*icmp_seq=(?P<seq>\d+).*ttl=(?P<ttl>\d+).*time=(?P<rtt>[0-9.]+) ms",
        )
        .expect("reply pattern is valid")
    })
}

/// The reporter may be a router on the path rather than the destination.
fn error_pattern() -> &'static Regex {
    ERROR.get_or_init(|| {
        Regex::new(r"^[Ff]rom (?P<reporter>\S+).*icmp_seq=(?P<seq>\d+)\s+(?P<msg>.*)$")
            .expect("error pattern is valid")
    })
}

fn timeout_pattern() -> &'static Regex {
    TIMEOUT.get_or_init(|| {
        Regex::new(r"^[nN]o [aA]nswer yet for icmp_seq=(?P<seq>\d+)")
            .expect("timeout pattern is valid")
    })
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PingClassifier;

impl PingClassifier {
    fn reply(caps: &regex::Captures<'_>) -> Result<PingRecord, FieldError> {
        let seq: u64 = parse_u64("icmp_seq", &caps["seq"])?;
        let raw_rtt: &str = &caps["rtt"];
        let rtt: f64 = raw_rtt
            .parse()
            .map_err(|_| FieldError::new("time", raw_rtt))?;
        Ok(PingRecord::reply(seq, rtt))
    }

    fn failure(caps: &regex::Captures<'_>) -> Result<PingRecord, FieldError> {
        let seq: u64 = parse_u64("icmp_seq", &caps["seq"])?;
        Ok(PingRecord::failure(
            seq,
            &caps["msg"],
            Some(caps["reporter"].to_string()),
        ))
    }

    fn timeout(caps: &regex::Captures<'_>) -> Result<PingRecord, FieldError> {
        let seq: u64 = parse_u64("icmp_seq", &caps["seq"])?;
        Ok(PingRecord::failure(seq, TIMEOUT_MESSAGE, None))
    }
}

impl LineClassifier for PingClassifier {
    type Record = PingRecord;

    fn tool(&self) -> &'static str {
        "ping"
    }

    fn classify(&self, line: &str) -> Outcome<PingRecord> {
        let parsed = if let Some(caps) = reply_pattern().captures(line) {
            Self::reply(&caps)
        } else if let Some(caps) = error_pattern().captures(line) {
            Self::failure(&caps)
        } else if let Some(caps) = timeout_pattern().captures(line) {
            Self::timeout(&caps)
        } else if line.starts_with("PING") {
            return Outcome::Start;
        } else if line.contains("ping statistics") {
            return Outcome::End;
        } else {
            return Outcome::Unrecognized;
        };

        match parsed {
            Ok(record) => Outcome::Record(record),
            Err(e) => Outcome::Malformed(e),
        }
    }
}
