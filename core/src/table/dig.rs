use tracing::warn;

use netlog_common::cell::Cell;
use netlog_common::record::DigRecord;

use super::{Dataset, TableError, label_width, numbered_columns, pad, zip_row};
use crate::batch::Batch;

/// Which record types become columns, and what the columns are called.
#[derive(Debug, Clone)]
pub struct DigColumns {
    pub target: String,
    /// `(record type, column alias)` in output order.
    pub fields: Vec<(String, String)>,
}

impl Default for DigColumns {
    fn default() -> Self {
        Self {
            target: "target".into(),
            fields: vec![
                ("A".into(), "ip".into()),
                ("CNAME".into(), "cname".into()),
                ("PTR".into(), "name".into()),
            ],
        }
    }
}

impl DigColumns {
    /// Columns for reverse lookups, where only PTR answers matter.
    pub fn reverse() -> Self {
        Self {
            target: "target".into(),
            fields: vec![("PTR".into(), "name".into())],
        }
    }
}

/// Builds `target, num_<alias>.., <alias>_01..` with one row per queried name.
///
/// The count columns hold how many answers of each type the host got; the
/// value columns hold those answers in order, padded to the largest count of
/// that type in the batch.
pub fn dig_table(batch: &Batch<DigRecord>, columns: &DigColumns) -> Result<Dataset, TableError> {
    let maxima = batch.maxima();
    if batch.is_empty() || maxima.is_empty() {
        warn!("no dig records found");
        return Ok(Dataset::default());
    }

    let mut keys: Vec<String> = vec![columns.target.clone()];
    keys.extend(columns.fields.iter().map(|(_, alias)| format!("num_{alias}")));
    for (record_type, alias) in &columns.fields {
        let count: u64 = maxima.bucket(record_type) as u64;
        keys.extend(numbered_columns(&format!("{alias}_"), 1..=count, label_width(count)));
    }

    let mut rows = Vec::with_capacity(batch.hosts().len());
    for (target, host) in batch.hosts() {
        let mut values: Vec<Cell> = vec![Cell::from(target.as_str())];
        values.extend(
            columns
                .fields
                .iter()
                .map(|(record_type, _)| Cell::from(host.bucket_len(record_type))),
        );

        for (record_type, _) in &columns.fields {
            let mut answers: Vec<Cell> = host
                .bucket(record_type)
                .map(|record| Cell::from(record.value.as_str()))
                .collect();
            pad(&mut answers, maxima.bucket(record_type));
            values.extend(answers);
        }

        rows.push(zip_row(&keys, values)?);
    }

    Ok(Dataset { columns: keys, rows })
}
