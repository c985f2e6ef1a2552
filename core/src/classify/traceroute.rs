//! Classifier for numeric `traceroute -n` output.

use std::net::Ipv4Addr;
use std::sync::OnceLock;

use regex::Regex;

use netlog_common::error::FieldError;
use netlog_common::record::TracerouteRecord;
use netlog_common::record::traceroute::NO_ADDRESS;

use super::{LineClassifier, Outcome, parse_u64};

static ANSWERED: OnceLock<Regex> = OnceLock::new();
static SILENT: OnceLock<Regex> = OnceLock::new();

/// A hop number, optional `*` markers for the probes that timed out, then the
/// address of the router that finally answered.
fn answered_pattern() -> &'static Regex {
    ANSWERED.get_or_init(|| {
        Regex::new(
            r"^(?P<hop>\s*\d+)\s*(?P<timeouts>[\*\s]*)(?P<ip>\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3})\s+(?P<extra>.*)$",
        )
        .expect("answered hop pattern is valid")
    })
}

fn silent_pattern() -> &'static Regex {
    SILENT.get_or_init(|| {
        Regex::new(r"^(?P<hop>\s*\d+)\s*(?P<timeouts>[\*\s]*)\s*$")
            .expect("silent hop pattern is valid")
    })
}

fn count_timeouts(markers: &str) -> u32 {
    markers.chars().filter(|&c| c == '*').count() as u32
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TracerouteClassifier;

impl TracerouteClassifier {
    fn answered(caps: &regex::Captures<'_>) -> Result<TracerouteRecord, FieldError> {
        let raw_ip: &str = &caps["ip"];
        let address: Ipv4Addr = raw_ip
            .parse()
            .map_err(|_| FieldError::new("address", raw_ip))?;
        Ok(TracerouteRecord {
            hop: parse_u64("hop", &caps["hop"])?,
            address,
            timeouts: count_timeouts(&caps["timeouts"]),
        })
    }

    fn silent(caps: &regex::Captures<'_>) -> Result<TracerouteRecord, FieldError> {
        Ok(TracerouteRecord {
            hop: parse_u64("hop", &caps["hop"])?,
            address: NO_ADDRESS,
            timeouts: count_timeouts(&caps["timeouts"]),
        })
    }
}

impl LineClassifier for TracerouteClassifier {
    type Record = TracerouteRecord;

    fn tool(&self) -> &'static str {
        "traceroute"
    }

    fn classify(&self, line: &str) -> Outcome<TracerouteRecord> {
        let parsed = if let Some(caps) = silent_pattern().captures(line) {
            Self::silent(&caps)
        } else if let Some(caps) = answered_pattern().captures(line) {
            Self::answered(&caps)
        } else if line.starts_with("traceroute") {
            return Outcome::Start;
        } else {
            return Outcome::Unrecognized;
        };

        match parsed {
            Ok(record) => Outcome::Record(record),
            Err(e) => Outcome::Malformed(e),
        }
    }
}
