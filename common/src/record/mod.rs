//! Typed records, one per diagnostic tool.

pub mod dig;
pub mod ping;
pub mod traceroute;

pub use dig::DigRecord;
pub use ping::PingRecord;
pub use traceroute::TracerouteRecord;
