use netlog_common::cell::Cell;
use netlog_common::config::Config;
use netlog_core::batch::Batch;
use netlog_core::classify::DigClassifier;
use netlog_core::table::{DigColumns, dig_table};
use pretty_assertions::assert_eq;

use crate::util::LogDir;

const WWW: &str = "\
; <<>> DiG 9.18.18 <<>> www.example.org
;; global options: +cmd
;; Got answer:
;; ->>HEADER<<- opcode: QUERY, status: NOERROR, id: 4242

;; QUESTION SECTION:
;www.example.org.\t\tIN\tA

;; ANSWER SECTION:
www.example.org.\t300\tIN\tCNAME\tedge.example.net.
edge.example.net.\t60\tIN\tA\t192.0.2.7
edge.example.net.\t60\tIN\tA\t192.0.2.8

;; Query time: 12 msec
";

const MAIL: &str = "\
;; ANSWER SECTION:
mail.example.org.\t300\tIN\tA\t192.0.2.25

;; Query time: 4 msec
";

const NXDOMAIN: &str = "\
;; ->>HEADER<<- opcode: QUERY, status: NXDOMAIN, id: 77
;; Query time: 3 msec
";

#[test]
fn answers_are_counted_and_padded_per_type() {
    let logs = LogDir::new()
        .log("www.example.org", WWW)
        .log("mail.example.org", MAIL)
        .log("missing.example.org", NXDOMAIN);

    let batch = Batch::ingest(&DigClassifier, &logs.sources(), &Config::default(), None);
    let table = dig_table(&batch, &DigColumns::default()).unwrap();

    assert_eq!(
        table.columns,
        vec!["target", "num_ip", "num_cname", "num_name", "ip_01", "ip_02", "cname_01"]
    );

    let www: Vec<Cell> = table.rows[0].values().cloned().collect();
    assert_eq!(
        www,
        vec![
            Cell::from("www.example.org"),
            Cell::Int(2),
            Cell::Int(1),
            Cell::Int(0),
            Cell::from("192.0.2.7"),
            Cell::from("192.0.2.8"),
            Cell::from("edge.example.net"),
        ]
    );
    assert_eq!(table.rows[1].get("ip_02"), Some(&Cell::Null));
    assert_eq!(table.rows[2].get("num_ip"), Some(&Cell::Int(0)));
}
