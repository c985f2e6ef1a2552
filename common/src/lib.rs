//! Shared data model for the netlog workspace.
//!
//! Everything the parsers produce and the table builders consume lives here:
//! typed records for each diagnostic tool, the per-destination [`host::HostState`]
//! store, the insertion-ordered [`ordered::OrderedMap`] and the [`cell::Cell`]
//! value written into every table slot.

pub mod cell;
pub mod config;
pub mod error;
pub mod host;
pub mod ordered;
pub mod record;
pub mod source;
