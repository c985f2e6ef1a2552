use tracing::warn;

use netlog_common::cell::Cell;
use netlog_common::record::PingRecord;

use super::{Dataset, TableError, label_width, numbered_columns, pad, zip_row};
use crate::batch::Batch;

/// Column naming for the ping table.
#[derive(Debug, Clone)]
pub struct PingColumns {
    pub dest: String,
    pub alive: String,
    /// Prefix of the numbered RTT columns.
    pub prefix: String,
    /// Name of the trailing error column, or `None` to leave it out.
    pub errors: Option<String>,
}

impl Default for PingColumns {
    fn default() -> Self {
        Self {
            dest: "dest".into(),
            alive: "alive".into(),
            prefix: "rtt".into(),
            errors: Some("err".into()),
        }
    }
}

/// Builds `dest, alive, rtt01..rttNN[, err]` with one row per host.
///
/// RTT column `k` holds the reply to `icmp_seq=k`; lost, failed and missing
/// sequences are null. An empty batch yields an empty dataset.
pub fn ping_table(batch: &Batch<PingRecord>, columns: &PingColumns) -> Result<Dataset, TableError> {
    let count: u64 = batch.maxima().index;
    if batch.is_empty() || count == 0 {
        warn!("no ping records found");
        return Ok(Dataset::default());
    }

    let mut keys: Vec<String> = vec![columns.dest.clone(), columns.alive.clone()];
    keys.extend(numbered_columns(&columns.prefix, 1..=count, label_width(count)));
    if let Some(ref err) = columns.errors {
        keys.push(err.clone());
    }

    let mut rows = Vec::with_capacity(batch.hosts().len());
    for (dest, host) in batch.hosts() {
        let mut values: Vec<Cell> = vec![Cell::from(dest.as_str()), Cell::from(host.is_alive())];

        let mut rtts: Vec<Cell> = host.rtts().into_iter().map(Cell::from).collect();
        pad(&mut rtts, count as usize);
        values.extend(rtts);

        if columns.errors.is_some() {
            let errors: Vec<&str> = host.errors();
            values.push(if errors.is_empty() {
                Cell::Null
            } else {
                Cell::from(errors.join(","))
            });
        }

        rows.push(zip_row(&keys, values)?);
    }

    Ok(Dataset { columns: keys, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use netlog_common::host::HostState;
    use pretty_assertions::assert_eq;

    fn host(dest: &str, records: Vec<PingRecord>) -> HostState<PingRecord> {
        let mut host = HostState::new(dest, format!("logs/{dest}"));
        for r in records {
            host.append(r).unwrap();
        }
        host
    }

    #[test]
    fn rows_are_padded_to_the_widest_host() {
        let mut batch = Batch::new();
        batch.register(host("192.0.2.1", vec![PingRecord::reply(1, 1.5), PingRecord::reply(2, 1.7)]));
        batch.register(host(
            "192.0.2.2",
            vec![
                PingRecord::reply(1, 9.0),
                PingRecord::failure(2, "no answer yet", None),
                PingRecord::reply(3, 9.5),
            ],
        ));

        let table = ping_table(&batch, &PingColumns::default()).unwrap();
        assert_eq!(table.columns, vec!["dest", "alive", "rtt01", "rtt02", "rtt03", "err"]);

        let first: Vec<Cell> = table.rows[0].values().cloned().collect();
        assert_eq!(
            first,
            vec![
                Cell::from("192.0.2.1"),
                Cell::from(true),
                Cell::from(1.5),
                Cell::from(1.7),
                Cell::Null,
                Cell::Null,
            ]
        );
        assert_eq!(table.rows[1].get("rtt02"), Some(&Cell::Null));
        assert_eq!(table.rows[1].get("err"), Some(&Cell::from("no answer yet")));
    }

    #[test]
    fn custom_names_and_no_error_column() {
        let mut batch = Batch::new();
        batch.register(host("h", vec![PingRecord::reply(1, 2.0)]));
        let columns = PingColumns {
            dest: "ip".into(),
            alive: "up".into(),
            prefix: "ms_".into(),
            errors: None,
        };
        let table = ping_table(&batch, &columns).unwrap();
        assert_eq!(table.columns, vec!["ip", "up", "ms_01"]);
    }

    #[test]
    fn dead_host_is_not_alive() {
        let mut batch = Batch::new();
        batch.register(host(
            "192.0.2.9",
            vec![PingRecord::failure(1, "Destination Host Unreachable", Some("192.0.2.254".into()))],
        ));
        let table = ping_table(&batch, &PingColumns::default()).unwrap();
        assert_eq!(table.rows[0].get("alive"), Some(&Cell::from(false)));
        assert_eq!(table.rows[0].get("rtt01"), Some(&Cell::Null));
    }

    #[test]
    fn empty_batch_gives_empty_dataset() {
        let table = ping_table(&Batch::new(), &PingColumns::default()).unwrap();
        assert!(table.is_empty());
        assert!(table.columns.is_empty());
    }
}
