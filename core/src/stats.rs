//! Latency summaries for a single ping host.
//!
//! Both the statistics and the histogram work on the host's slot series
//! ([`HostState::rtts`]), so a sequence number that never arrived counts as a
//! null exactly like an explicit timeout.

use thiserror::Error;

use netlog_common::host::HostState;
use netlog_common::record::PingRecord;

#[derive(Debug, Clone, PartialEq)]
pub struct RttStatistics {
    pub nulls: usize,
    pub total: usize,
    pub valid: usize,
    pub min: f64,
    pub max: f64,
    pub median: f64,
    pub mean: f64,
}

/// Summarises a series of optional RTTs.
///
/// Min, max, median and mean are taken over the non-null values only.
/// Returns `None` when there is no value to summarise.
pub fn summarize(values: &[Option<f64>]) -> Option<RttStatistics> {
    let mut valid: Vec<f64> = values.iter().flatten().copied().collect();
    if valid.is_empty() {
        return None;
    }
    valid.sort_by(f64::total_cmp);

    let n: usize = valid.len();
    let median: f64 = if n % 2 == 1 {
        valid[n / 2]
    } else {
        (valid[n / 2 - 1] + valid[n / 2]) / 2.0
    };

    Some(RttStatistics {
        nulls: values.len() - n,
        total: values.len(),
        valid: n,
        min: valid[0],
        max: valid[n - 1],
        median,
        mean: valid.iter().sum::<f64>() / n as f64,
    })
}

pub fn statistics(host: &HostState<PingRecord>) -> Option<RttStatistics> {
    summarize(&host.rtts())
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HistogramError {
    #[error("bin width must be a positive number, got {0}")]
    BinWidth(f64),
    #[error("histogram range is inverted: min {min} > max {max}")]
    Range { min: f64, max: f64 },
    #[error("bin width {width} would need {edges} edges, at most {max} are allowed", max = MAX_EDGES)]
    TooManyBins { width: f64, edges: f64 },
}

/// Optional overrides; anything left `None` is derived from the data.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HistogramParams {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub bin_width: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// Bin edges; bin `i` spans `edges[i]..edges[i + 1]`.
    pub edges: Vec<f64>,
    /// One count per bin.
    pub counts: Vec<usize>,
    /// Values that were null.
    pub nulls: usize,
}

impl Histogram {
    /// `(low, high, count)` per bin.
    pub fn bins(&self) -> impl Iterator<Item = (f64, f64, usize)> + '_ {
        self.edges
            .windows(2)
            .zip(&self.counts)
            .map(|(edge, &count)| (edge[0], edge[1], count))
    }
}

/// Number of bins used when no width is given.
pub const DEFAULT_BINS: f64 = 7.0;

/// Upper bound on the number of bin edges a histogram may have.
pub const MAX_EDGES: usize = 10_000;

/// Builds a fixed-width histogram of the non-null values plus a null count.
///
/// Edges are stepped like `arange(min, max + width, width)`: edge `i` is
/// `min + i * width`. Every bin is half open except the last, which also
/// takes values equal to its upper edge. There is always at least one bin.
/// Values outside the edges are not counted. Returns `Ok(None)` when there is no data to derive defaults from.
pub fn bin(values: &[Option<f64>], params: HistogramParams) -> Result<Option<Histogram>, HistogramError> {
    let Some(summary) = summarize(values) else {
        return Ok(None);
    };

    let min: f64 = params.min.unwrap_or(summary.min);
    let max: f64 = params.max.unwrap_or(summary.max);
    if min > max {
        return Err(HistogramError::Range { min, max });
    }

    let width: f64 = match params.bin_width {
        Some(w) if !(w.is_finite() && w > 0.0) => return Err(HistogramError::BinWidth(w)),
        Some(w) => w,
        None if max > min => (max - min) / DEFAULT_BINS,
        None => 1.0,
    };

    let stop: f64 = max + width;
    let wanted: f64 = ((stop - min) / width).ceil();
    if !(wanted <= MAX_EDGES as f64) {
        return Err(HistogramError::TooManyBins { width, edges: wanted });
    }
    let n_edges: usize = (wanted as usize).max(2);
    let edges: Vec<f64> = (0..n_edges).map(|i| min + i as f64 * width).collect();
    let n_bins: usize = edges.len().saturating_sub(1);
    let mut counts: Vec<usize> = vec![0; n_bins];

    if n_bins > 0 {
        let first: f64 = edges[0];
        let last: f64 = edges[n_bins];
        for &v in values.iter().flatten() {
            if v < first || v > last {
                continue;
            }
            let idx: usize = edges.partition_point(|&e| e <= v).saturating_sub(1).min(n_bins - 1);
            counts[idx] += 1;
        }
    }

    Ok(Some(Histogram {
        edges,
        counts,
        nulls: summary.nulls,
    }))
}

pub fn histogram(
    host: &HostState<PingRecord>,
    params: HistogramParams,
) -> Result<Option<Histogram>, HistogramError> {
    bin(&host.rtts(), params)
}
