use netlog_common::cell::Cell;
use netlog_common::config::Config;
use netlog_common::record::TracerouteRecord;
use netlog_core::batch::Batch;
use netlog_core::classify::TracerouteClassifier;
use netlog_core::table::{TracerouteColumns, traceroute_table};
use pretty_assertions::assert_eq;

use crate::util::LogDir;

const SHORT: &str = "\
traceroute to 192.0.2.1 (192.0.2.1), 30 hops max, 60 byte packets
 1  10.0.0.1  0.412 ms  0.388 ms  0.371 ms
 2  192.0.2.1  1.903 ms  1.877 ms  1.851 ms
";

const LONG: &str = "\
traceroute to 198.51.100.9 (198.51.100.9), 30 hops max, 60 byte packets
 1  10.0.0.1  0.401 ms  0.377 ms  0.360 ms
 2  * * *
 3  * 203.0.113.5  7.126 ms  7.031 ms
 4  198.51.100.9  9.842 ms  9.810 ms  9.774 ms
";

fn batch() -> Batch<TracerouteRecord> {
    let logs = LogDir::new().log("192.0.2.1", SHORT).log("198.51.100.9", LONG);
    Batch::ingest(&TracerouteClassifier, &logs.sources(), &Config::default(), None)
}

#[test]
fn hops_line_up_and_silent_hops_are_unspecified() {
    let table = traceroute_table(&batch(), &TracerouteColumns::default()).unwrap();

    assert_eq!(table.columns, vec!["dest", "hop01", "hop02", "hop03", "hop04"]);
    assert_eq!(table.rows[0].get("hop02"), Some(&Cell::from("192.0.2.1")));
    assert_eq!(table.rows[0].get("hop03"), Some(&Cell::Null));
    assert_eq!(table.rows[1].get("hop02"), Some(&Cell::from("0.0.0.0")));
    assert_eq!(table.rows[1].get("hop03"), Some(&Cell::from("203.0.113.5")));
}

#[test]
fn source_address_becomes_hop_zero() {
    let columns = TracerouteColumns {
        source: Some("10.0.0.50".into()),
        ..TracerouteColumns::default()
    };
    let table = traceroute_table(&batch(), &columns).unwrap();

    assert_eq!(table.columns, vec!["dest", "hop00", "hop01", "hop02", "hop03", "hop04"]);
    for row in &table.rows {
        assert_eq!(row.get("hop00"), Some(&Cell::from("10.0.0.50")));
    }
}
