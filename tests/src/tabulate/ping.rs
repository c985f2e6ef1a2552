use netlog_common::cell::Cell;
use netlog_common::config::Config;
use netlog_core::batch::Batch;
use netlog_core::classify::PingClassifier;
use netlog_core::stats::{self, HistogramParams};
use netlog_core::table::{PingColumns, ping_table};
use pretty_assertions::assert_eq;

use crate::util::{LogDir, ping_log, reply};

#[test]
fn unreachable_host_is_dead_and_keeps_its_errors() {
    let dead = ping_log(
        "198.51.100.7",
        &[
            "From 192.0.2.254 icmp_seq=1 Destination Host Unreachable",
            "no answer yet for icmp_seq=2",
            "From 192.0.2.254 icmp_seq=3 Destination Host Unreachable",
        ],
    );
    let logs = LogDir::new()
        .log("192.0.2.1", &ping_log("192.0.2.1", &[&reply("192.0.2.1", 1, 0.4)]))
        .log("198.51.100.7", &dead);

    let batch = Batch::ingest(&PingClassifier, &logs.sources(), &Config::default(), None);
    let table = ping_table(&batch, &PingColumns::default()).unwrap();

    let row = &table.rows[1];
    assert_eq!(row.get("alive"), Some(&Cell::Bool(false)));
    assert_eq!(row.get("rtt01"), Some(&Cell::Null));
    assert_eq!(
        row.get("err"),
        Some(&Cell::from("Destination Host Unreachable,no answer yet"))
    );
    assert_eq!(table.rows[0].get("err"), Some(&Cell::Null));
    assert_eq!(table.rows[0].get("rtt03"), Some(&Cell::Null));
}

#[test]
fn duplicated_sequence_is_rejected() {
    let lines = [
        reply("192.0.2.1", 1, 1.0),
        reply("192.0.2.1", 2, 2.0),
        reply("192.0.2.1", 2, 9.0),
        reply("192.0.2.1", 3, 3.0),
    ];
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    let logs = LogDir::new().log("192.0.2.1", &ping_log("192.0.2.1", &refs));

    let batch = Batch::ingest(&PingClassifier, &logs.sources(), &Config::default(), None);
    let host = batch.host("192.0.2.1").unwrap();

    assert_eq!(host.rejected(), 1);
    assert_eq!(host.rtts(), vec![Some(1.0), Some(2.0), Some(3.0)]);
}

#[test]
fn statistics_and_histogram_share_the_slot_series() {
    let lines = [
        reply("192.0.2.1", 1, 1.0),
        reply("192.0.2.1", 2, 2.0),
        reply("192.0.2.1", 4, 4.0),
    ];
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    let logs = LogDir::new().log("192.0.2.1", &ping_log("192.0.2.1", &refs));

    let batch = Batch::ingest(&PingClassifier, &logs.sources(), &Config::default(), None);
    let host = batch.host("192.0.2.1").unwrap();

    let summary = stats::statistics(host).unwrap();
    assert_eq!(summary.total, 4);
    assert_eq!(summary.nulls, 1);
    assert_eq!(summary.median, 2.0);

    let params = HistogramParams {
        bin_width: Some(1.0),
        ..HistogramParams::default()
    };
    let hist = stats::histogram(host, params).unwrap().unwrap();
    assert_eq!(hist.edges, vec![1.0, 2.0, 3.0, 4.0]);
    assert_eq!(hist.counts, vec![1, 1, 1]);
    assert_eq!(hist.nulls, 1);
}
