//! Parsing and tabulation engine.
//!
//! [`classify`] turns individual log lines into typed records, [`runner`]
//! drives a classifier over one log file into a [`HostState`], [`batch`]
//! collects every destination of a run together with the global maxima, and
//! [`table`] aligns the result into a rectangular dataset. [`stats`] derives
//! latency summaries from a single ping host.
//!
//! [`HostState`]: netlog_common::host::HostState

pub mod batch;
pub mod classify;
pub mod runner;
pub mod stats;
pub mod table;
