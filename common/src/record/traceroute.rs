use std::net::Ipv4Addr;

use crate::host::{HostState, Indexed};

/// Address recorded for a hop where every probe timed out.
pub const NO_ADDRESS: Ipv4Addr = Ipv4Addr::UNSPECIFIED;

/// One hop line from a traceroute log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracerouteRecord {
    pub hop: u64,
    /// Responding router, or [`NO_ADDRESS`] when nothing answered.
    pub address: Ipv4Addr,
    /// Number of `*` markers printed before the address.
    pub timeouts: u32,
}

impl TracerouteRecord {
    pub fn is_silent(&self) -> bool {
        self.address == NO_ADDRESS
    }
}

impl Indexed for TracerouteRecord {
    fn index(&self) -> Option<u64> {
        Some(self.hop)
    }
}

impl HostState<TracerouteRecord> {
    /// Address per hop slot; hops that never appeared are `None`.
    pub fn addresses(&self) -> Vec<Option<Ipv4Addr>> {
        self.slots()
            .into_iter()
            .map(|slot| slot.map(|r| r.address))
            .collect()
    }

    /// `(hop, address)` for every stored hop, optionally skipping silent ones.
    pub fn hops(&self, answered_only: bool) -> Vec<(u64, Ipv4Addr)> {
        self.records()
            .iter()
            .filter(|r| !answered_only || !r.is_silent())
            .map(|r| (r.hop, r.address))
            .collect()
    }
}
