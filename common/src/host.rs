//! Per-destination record store.
//!
//! A [`HostState`] holds the records parsed from one destination's log, in the
//! order they appeared. Indexed records (ping sequence numbers, traceroute hop
//! counts) must strictly increase: anything at or below the stored maximum is
//! refused and the existing data is left untouched.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::RejectedIndex;

/// A record that may carry an ordinal index and may belong to a bucket.
pub trait Indexed {
    /// Sequence number or hop count. `None` means the record is not sequenced
    /// and is always accepted.
    fn index(&self) -> Option<u64>;

    /// Key of the bucket the record is grouped under, if any.
    fn bucket(&self) -> Option<&str> {
        None
    }
}

#[derive(Debug, Clone)]
pub struct HostState<R> {
    dest: String,
    log: PathBuf,
    records: Vec<R>,
    max_index: u64,
    buckets: BTreeMap<String, Vec<usize>>,
    rejected: usize,
    unrecognized: Vec<String>,
}

impl<R: Indexed> HostState<R> {
    pub fn new(dest: impl Into<String>, log: impl Into<PathBuf>) -> Self {
        Self {
            dest: dest.into(),
            log: log.into(),
            records: Vec::new(),
            max_index: 0,
            buckets: BTreeMap::new(),
            rejected: 0,
            unrecognized: Vec::new(),
        }
    }

    /// Stores `record` unless its index fails to advance the stored maximum.
    ///
    /// On rejection the state is unchanged apart from the rejection counter.
    pub fn append(&mut self, record: R) -> Result<(), RejectedIndex> {
        if let Some(index) = record.index() {
            if index <= self.max_index {
                self.rejected += 1;
                return Err(RejectedIndex {
                    dest: self.dest.clone(),
                    index,
                    max: self.max_index,
                });
            }
            self.max_index = index;
        }

        if let Some(key) = record.bucket() {
            self.buckets
                .entry(key.to_string())
                .or_default()
                .push(self.records.len());
        }
        self.records.push(record);
        Ok(())
    }

    /// Keeps a line no classifier pattern matched, for diagnostics.
    pub fn note_unrecognized(&mut self, line: impl Into<String>) {
        self.unrecognized.push(line.into());
    }

    pub fn dest(&self) -> &str {
        &self.dest
    }

    pub fn log(&self) -> &Path {
        &self.log
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Highest index accepted so far, 0 when nothing indexed was stored.
    pub fn max_index(&self) -> u64 {
        self.max_index
    }

    pub fn rejected(&self) -> usize {
        self.rejected
    }

    pub fn unrecognized(&self) -> &[String] {
        &self.unrecognized
    }

    /// Records of one bucket, in insertion order.
    pub fn bucket(&self, key: &str) -> impl Iterator<Item = &R> {
        self.buckets
            .get(key)
            .into_iter()
            .flatten()
            .map(|&pos| &self.records[pos])
    }

    pub fn bucket_len(&self, key: &str) -> usize {
        self.buckets.get(key).map_or(0, Vec::len)
    }

    /// Bucket keys with their lengths, sorted by key.
    pub fn bucket_lens(&self) -> impl Iterator<Item = (&str, usize)> {
        self.buckets.iter().map(|(k, v)| (k.as_str(), v.len()))
    }

    /// Lays indexed records out by position: slot `i` holds the record with
    /// index `i + 1`, or `None` when that index never arrived.
    ///
    /// The result has exactly `max_index()` slots.
    pub fn slots(&self) -> Vec<Option<&R>> {
        let mut slots: Vec<Option<&R>> = vec![None; self.max_index as usize];
        for record in &self.records {
            if let Some(index) = record.index() {
                slots[index as usize - 1] = Some(record);
            }
        }
        slots
    }
}
