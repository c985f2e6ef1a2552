use crate::host::{HostState, Indexed};

/// One `icmp_seq` outcome from a ping log.
///
/// Replies carry an `rtt`; router errors and explicit timeouts carry an
/// `error` message instead and leave `rtt` empty.
#[derive(Debug, Clone, PartialEq)]
pub struct PingRecord {
    pub sequence: u64,
    /// Round-trip time in milliseconds.
    pub rtt: Option<f64>,
    pub error: Option<String>,
    /// Router or host that sent the error, when it is not the destination.
    pub reporter: Option<String>,
}

impl PingRecord {
    pub fn reply(sequence: u64, rtt: f64) -> Self {
        Self {
            sequence,
            rtt: Some(rtt),
            error: None,
            reporter: None,
        }
    }

    pub fn failure(sequence: u64, error: impl Into<String>, reporter: Option<String>) -> Self {
        Self {
            sequence,
            rtt: None,
            error: Some(error.into()),
            reporter,
        }
    }
}

impl Indexed for PingRecord {
    fn index(&self) -> Option<u64> {
        Some(self.sequence)
    }
}

impl HostState<PingRecord> {
    /// True when at least one reply came back.
    pub fn is_alive(&self) -> bool {
        self.records().iter().any(|r| r.rtt.is_some())
    }

    /// RTT per sequence slot; missing sequences and failures are `None`.
    pub fn rtts(&self) -> Vec<Option<f64>> {
        self.slots()
            .into_iter()
            .map(|slot| slot.and_then(|r| r.rtt))
            .collect()
    }

    /// `(sequence, rtt)` for every stored record, optionally only replies.
    pub fn rtt_pairs(&self, replies_only: bool) -> Vec<(u64, Option<f64>)> {
        self.records()
            .iter()
            .filter(|r| !replies_only || r.rtt.is_some())
            .map(|r| (r.sequence, r.rtt))
            .collect()
    }

    /// Distinct error messages, in the order they were first seen.
    pub fn errors(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for msg in self.records().iter().filter_map(|r| r.error.as_deref()) {
            if !seen.contains(&msg) {
                seen.push(msg);
            }
        }
        seen
    }

    pub fn errors_with_seq(&self) -> Vec<(u64, &str)> {
        self.records()
            .iter()
            .filter_map(|r| r.error.as_deref().map(|e| (r.sequence, e)))
            .collect()
    }
}
