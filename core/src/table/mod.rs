//! Wide-table assembly.
//!
//! Every destination becomes one row. A fixed set of prefix columns is
//! followed by numbered value columns, as many as the widest host of the
//! batch needs; shorter hosts are padded with [`Cell::Null`] so all rows have
//! the same keys in the same order.

use thiserror::Error;

use netlog_common::cell::Cell;
use netlog_common::ordered::OrderedMap;

pub mod dig;
pub mod ping;
pub mod traceroute;

pub use dig::{DigColumns, dig_table};
pub use ping::{PingColumns, ping_table};
pub use traceroute::{TracerouteColumns, traceroute_table};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("num of keys and vals is mismatched for {row}: {keys} keys, {values} values")]
    ShapeMismatch {
        row: String,
        keys: usize,
        values: usize,
    },
}

pub type Row = OrderedMap<Cell>;

/// The assembled table: column names plus one row per destination.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl Dataset {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Digits needed for numbered columns when the highest label is `highest`
/// and labels start at 1: the width of `highest - 1`, never less than two.
pub fn label_width(highest: u64) -> usize {
    highest.saturating_sub(1).to_string().len().max(2)
}

/// `prefix` followed by each label in `labels`, zero padded to `width`.
pub fn numbered_columns(
    prefix: &str,
    labels: impl Iterator<Item = u64>,
    width: usize,
) -> impl Iterator<Item = String> {
    labels.map(move |n| format!("{prefix}{n:0width$}"))
}

/// Pads `values` on the right with nulls up to `width` entries.
pub fn pad(values: &mut Vec<Cell>, width: usize) {
    if values.len() < width {
        values.resize(width, Cell::Null);
    }
}

/// Pairs keys with values, refusing to build a row of the wrong shape.
pub fn zip_row(keys: &[String], values: Vec<Cell>) -> Result<Row, TableError> {
    if keys.len() != values.len() {
        return Err(TableError::ShapeMismatch {
            row: values.first().map(ToString::to_string).unwrap_or_default(),
            keys: keys.len(),
            values: values.len(),
        });
    }
    Ok(keys.iter().cloned().zip(values).collect())
}
