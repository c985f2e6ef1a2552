use netlog_common::cell::Cell;
use netlog_common::config::Config;
use netlog_core::batch::Batch;
use netlog_core::classify::PingClassifier;
use netlog_core::table::{PingColumns, ping_table};
use pretty_assertions::assert_eq;

use crate::util::{LogDir, ping_log, reply};

fn three_hosts() -> LogDir {
    let full = |dest: &str| {
        let lines: Vec<String> = (1..=5).map(|seq| reply(dest, seq, 10.0 + seq as f64)).collect();
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        ping_log(dest, &refs)
    };
    let gap: Vec<String> = [1, 2, 4, 5]
        .iter()
        .map(|&seq| reply("192.0.2.2", seq, 20.0))
        .collect();
    let gap_refs: Vec<&str> = gap.iter().map(String::as_str).collect();

    LogDir::new()
        .log("192.0.2.1", &full("192.0.2.1"))
        .log("192.0.2.2", &ping_log("192.0.2.2", &gap_refs))
        .log("192.0.2.3", &full("192.0.2.3"))
}

#[test]
fn missing_sequence_leaves_a_null_slot() {
    let logs = three_hosts();
    let batch = Batch::ingest(&PingClassifier, &logs.sources(), &Config::default(), None);
    let table = ping_table(&batch, &PingColumns::default()).unwrap();

    assert_eq!(
        table.columns,
        vec!["dest", "alive", "rtt01", "rtt02", "rtt03", "rtt04", "rtt05", "err"]
    );
    assert_eq!(table.rows.len(), 3);

    for row in &table.rows {
        assert_eq!(row.get("alive"), Some(&Cell::Bool(true)));
    }
    assert_eq!(table.rows[1].get("dest"), Some(&Cell::from("192.0.2.2")));
    assert_eq!(table.rows[1].get("rtt03"), Some(&Cell::Null));
    assert_eq!(table.rows[1].get("rtt04"), Some(&Cell::Float(20.0)));
    assert_eq!(table.rows[0].get("rtt03"), Some(&Cell::Float(13.0)));
}

#[test]
fn parallel_ingest_matches_sequential() {
    let logs = three_hosts();
    let sources = logs.sources();
    let parallel = Config {
        parallel: true,
        ..Config::default()
    };

    let seq = ping_table(
        &Batch::ingest(&PingClassifier, &sources, &Config::default(), None),
        &PingColumns::default(),
    )
    .unwrap();
    let par = ping_table(
        &Batch::ingest(&PingClassifier, &sources, &parallel, None),
        &PingColumns::default(),
    )
    .unwrap();

    assert_eq!(seq, par);
}

#[test]
fn unreadable_and_empty_logs_are_skipped() {
    let logs = LogDir::new()
        .log("192.0.2.1", &ping_log("192.0.2.1", &[&reply("192.0.2.1", 1, 3.0)]))
        .missing("192.0.2.9")
        .log("192.0.2.4", "");

    let batch = Batch::ingest(&PingClassifier, &logs.sources(), &Config::default(), None);

    assert_eq!(batch.failures(), 1);
    assert_eq!(batch.hosts().keys().collect::<Vec<_>>(), vec!["192.0.2.1"]);
}

#[test]
fn progress_reaches_the_number_of_logs() {
    use std::sync::atomic::{AtomicUsize, Ordering};

    let logs = three_hosts();
    let highest = AtomicUsize::new(0);
    let report = |done: usize| {
        highest.fetch_max(done, Ordering::Relaxed);
    };

    Batch::ingest(&PingClassifier, &logs.sources(), &Config::default(), Some(&report));

    assert_eq!(highest.load(Ordering::Relaxed), 3);
}
