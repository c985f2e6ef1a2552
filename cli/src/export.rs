use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;

use netlog_core::table::Dataset;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    #[default]
    Csv,
    Json,
}

/// Writes the dataset to `output`, or stdout when no path is given.
pub fn write_dataset(dataset: &Dataset, output: Option<&Path>, format: Format) -> Result<()> {
    let writer: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    match format {
        Format::Csv => export_csv(dataset, writer),
        Format::Json => export_json(dataset, writer),
    }
}

/// Header line plus one line per row; nulls are empty fields.
pub fn export_csv<W: Write>(dataset: &Dataset, mut writer: W) -> Result<()> {
    if dataset.columns.is_empty() {
        return Ok(());
    }

    let header: Vec<String> = dataset.columns.iter().map(|c| escape_csv(c)).collect();
    writeln!(writer, "{}", header.join(","))?;

    for row in &dataset.rows {
        let fields: Vec<String> = row.values().map(|cell| escape_csv(&cell.to_string())).collect();
        writeln!(writer, "{}", fields.join(","))?;
    }

    writer.flush()?;
    Ok(())
}

/// Array of objects, keys in column order.
pub fn export_json<W: Write>(dataset: &Dataset, mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, &dataset.rows)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Escape a string for CSV (quote if it contains a comma, quote or line break)
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
