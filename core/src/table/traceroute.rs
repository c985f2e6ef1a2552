use tracing::warn;

use netlog_common::cell::Cell;
use netlog_common::record::TracerouteRecord;

use super::{Dataset, TableError, label_width, numbered_columns, pad, zip_row};
use crate::batch::Batch;

#[derive(Debug, Clone)]
pub struct TracerouteColumns {
    pub dest: String,
    /// Prefix of the numbered hop columns.
    pub prefix: String,
    /// Address of the sending node. When set, numbering starts at hop 0 and
    /// that column holds this address on every row.
    pub source: Option<String>,
}

impl Default for TracerouteColumns {
    fn default() -> Self {
        Self {
            dest: "dest".into(),
            prefix: "hop".into(),
            source: None,
        }
    }
}

/// Builds `dest[, hop00], hop01..hopNN` with one row per traced destination.
///
/// Hop column `k` holds the router that answered at hop `k`; a hop where
/// every probe timed out holds `0.0.0.0`, a hop absent from the log is null.
pub fn traceroute_table(
    batch: &Batch<TracerouteRecord>,
    columns: &TracerouteColumns,
) -> Result<Dataset, TableError> {
    let count: u64 = batch.maxima().index;
    if batch.is_empty() || count == 0 {
        warn!("no traceroute records found");
        return Ok(Dataset::default());
    }

    let (first, width) = match columns.source {
        Some(_) => (0, label_width(count + 1)),
        None => (1, label_width(count)),
    };

    let mut keys: Vec<String> = vec![columns.dest.clone()];
    keys.extend(numbered_columns(&columns.prefix, first..=count, width));
    let slots: usize = (count + 1 - first) as usize;

    let mut rows = Vec::with_capacity(batch.hosts().len());
    for (dest, host) in batch.hosts() {
        let mut hops: Vec<Cell> = Vec::with_capacity(slots);
        if let Some(ref src) = columns.source {
            hops.push(Cell::from(src.as_str()));
        }
        hops.extend(
            host.addresses()
                .into_iter()
                .map(|addr| Cell::from(addr.map(|a| a.to_string()))),
        );
        pad(&mut hops, slots);

        let mut values: Vec<Cell> = vec![Cell::from(dest.as_str())];
        values.extend(hops);
        rows.push(zip_row(&keys, values)?);
    }

    Ok(Dataset { columns: keys, rows })
}
