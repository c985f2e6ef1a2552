use colored::*;
use tracing::warn;

use netlog_common::host::HostState;
use netlog_common::record::PingRecord;
use netlog_core::batch::Batch;
use netlog_core::stats::{self, Histogram, HistogramError, HistogramParams};

use crate::terminal::{colors, format, print};

/// Bar lines of a histogram, the null bucket last.
pub fn render(hist: &Histogram) -> Vec<String> {
    let mut lines: Vec<String> = hist
        .bins()
        .map(|(low, high, count)| {
            format!(
                "range {:>4.3} - {:>4.3}: ({:4}) {}",
                low,
                high,
                count,
                "*".repeat(count).color(colors::BAR)
            )
        })
        .collect();
    lines.push(format!("None: {}", hist.nulls));
    lines
}

/// Prints the statistics and the RTT histogram of one host.
pub fn display(idx: usize, host: &HostState<PingRecord>, params: HistogramParams) -> Result<(), HistogramError> {
    print::tree_head(idx, host.dest());

    let Some(summary) = stats::statistics(host) else {
        print::print_status(format!("no valid data for {}", host.dest()));
        return Ok(());
    };
    print::as_tree_one_level(format::statistics_to_detail(&summary));

    if let Some(hist) = stats::histogram(host, params)? {
        for line in render(&hist) {
            print::print(&format!("    {line}"));
        }
    }
    Ok(())
}

/// Displays every host of the batch in list order.
///
/// A host whose histogram cannot be built is reported and skipped. Returns
/// the number of hosts skipped that way.
pub fn display_all(batch: &Batch<PingRecord>, params: HistogramParams) -> usize {
    let mut skipped: usize = 0;
    for (idx, host) in batch.hosts().values().enumerate() {
        if let Err(e) = display(idx, host, params) {
            warn!("no histogram for {}: {e}", host.dest());
            skipped += 1;
        }
    }
    skipped
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn host(dest: &str, rtts: &[f64]) -> HostState<PingRecord> {
        let mut host = HostState::new(dest, format!("logs/{dest}"));
        for (i, &rtt) in rtts.iter().enumerate() {
            host.append(PingRecord::reply(i as u64 + 1, rtt)).unwrap();
        }
        host
    }

    #[test]
    fn renders_bars_and_null_bucket() {
        colored::control::set_override(false);
        let hist = Histogram {
            edges: vec![0.0, 1.5, 3.0],
            counts: vec![2, 0],
            nulls: 1,
        };
        assert_eq!(
            render(&hist),
            vec![
                "range 0.000 - 1.500: (   2) **".to_string(),
                "range 1.500 - 3.000: (   0) ".to_string(),
                "None: 1".to_string(),
            ]
        );
    }

    #[test]
    fn host_with_inverted_range_is_skipped() {
        let mut batch = Batch::new();
        batch.register(host("192.0.2.1", &[10.0, 12.0]));
        batch.register(host("192.0.2.2", &[60.0, 80.0]));
        batch.register(host("192.0.2.3", &[11.0]));

        let params = HistogramParams {
            min: Some(50.0),
            ..HistogramParams::default()
        };
        assert_eq!(display_all(&batch, params), 2);
        assert_eq!(display_all(&batch, HistogramParams::default()), 0);
    }
}
