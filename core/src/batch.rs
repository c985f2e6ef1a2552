//! The context of one batch run.
//!
//! A [`Batch`] owns every destination parsed during a run, in log-list
//! order, together with the running [`Maxima`] the table builders size their
//! columns from. It lives for one invocation and is never persisted.

use std::collections::BTreeMap;

use rayon::prelude::*;
use tracing::{error, warn};

use netlog_common::config::Config;
use netlog_common::error::LogError;
use netlog_common::host::{HostState, Indexed};
use netlog_common::ordered::OrderedMap;
use netlog_common::source::LogSource;

use crate::classify::LineClassifier;
use crate::runner;

/// Largest counts seen over all hosts of a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Maxima {
    /// Highest sequence number or hop count.
    pub index: u64,
    /// Longest bucket per bucket key (dig record type).
    pub buckets: BTreeMap<String, usize>,
}

impl Maxima {
    pub fn absorb<R: Indexed>(&mut self, host: &HostState<R>) {
        self.index = self.index.max(host.max_index());
        for (key, len) in host.bucket_lens() {
            let slot: &mut usize = self.buckets.entry(key.to_string()).or_insert(0);
            *slot = (*slot).max(len);
        }
    }

    pub fn bucket(&self, key: &str) -> usize {
        self.buckets.get(key).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.index == 0 && self.buckets.values().all(|&len| len == 0)
    }
}

/// Called after each log file with the number of files done so far.
pub type ProgressFn<'a> = &'a (dyn Fn(usize) + Sync);

#[derive(Debug, Clone)]
pub struct Batch<R> {
    hosts: OrderedMap<HostState<R>>,
    maxima: Maxima,
    failures: usize,
}

impl<R> Default for Batch<R> {
    fn default() -> Self {
        Self {
            hosts: OrderedMap::new(),
            maxima: Maxima::default(),
            failures: 0,
        }
    }
}

impl<R: Indexed + Send> Batch<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses every source and collects the results in list order.
    ///
    /// With `cfg.parallel` the files are parsed on the rayon pool; the merge
    /// still walks the results in list order, so the outcome is the same as
    /// a sequential run. A file that cannot be read is logged and skipped.
    pub fn ingest<C>(
        classifier: &C,
        sources: &[LogSource],
        cfg: &Config,
        progress: Option<ProgressFn<'_>>,
    ) -> Self
    where
        C: LineClassifier<Record = R>,
    {
        let done = std::sync::atomic::AtomicUsize::new(0);
        let parse = |source: &LogSource| {
            let result = runner::run_file(classifier, source);
            let n: usize = done.fetch_add(1, std::sync::atomic::Ordering::Relaxed) + 1;
            if let Some(report) = progress {
                report(n);
            }
            result
        };

        let results: Vec<Result<Option<HostState<R>>, LogError>> = if cfg.parallel {
            sources.par_iter().map(parse).collect()
        } else {
            sources.iter().map(parse).collect()
        };

        let mut batch = Self::new();
        for result in results {
            match result {
                Ok(Some(host)) => batch.register(host),
                Ok(None) => {}
                Err(e) => {
                    error!("{e}");
                    batch.failures += 1;
                }
            }
        }
        batch
    }

    /// Adds a parsed host and folds it into the maxima.
    ///
    /// A destination seen twice keeps its first position; the newer state
    /// replaces the older one.
    pub fn register(&mut self, host: HostState<R>) {
        self.maxima.absorb(&host);
        let dest: String = host.dest().to_string();
        if self.hosts.insert(dest.clone(), host).is_some() {
            warn!("destination {dest} listed more than once, keeping the last log");
        }
    }

    pub fn hosts(&self) -> &OrderedMap<HostState<R>> {
        &self.hosts
    }

    pub fn host(&self, dest: &str) -> Option<&HostState<R>> {
        self.hosts.get(dest)
    }

    pub fn maxima(&self) -> &Maxima {
        &self.maxima
    }

    /// Number of log files that could not be read.
    pub fn failures(&self) -> usize {
        self.failures
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }
}
