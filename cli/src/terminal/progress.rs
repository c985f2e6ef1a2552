use std::io::Write;
use std::sync::OnceLock;

use indicatif::{ProgressBar, ProgressStyle};

static PROGRESS: OnceLock<ProgressBar> = OnceLock::new();

const TEMPLATE: &str = "{spinner:.blue} [{bar:32.green/bright_black}] {pos}/{len} {msg}";

/// Shows a bar over `total` log files. Only the first call takes effect.
pub fn start(total: usize, quiet: u8) -> &'static ProgressBar {
    PROGRESS.get_or_init(|| {
        if quiet > 0 {
            return ProgressBar::hidden();
        }
        let pb: ProgressBar = ProgressBar::new(total as u64);
        let style: ProgressStyle = ProgressStyle::with_template(TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .tick_strings(&[
                "▁▁▁▁▁",
                "▁▂▂▂▁",
                "▁▄▂▄▁",
                "▂▄▆▄▂",
                "▄▆█▆▄",
                "▂▄▆▄▂",
                "▁▄▂▄▁",
                "▁▂▂▂▁",
            ]);
        pb.set_style(style);
        pb.set_message("parsing logs");
        pb
    })
}

pub fn report(done: usize) {
    if let Some(pb) = PROGRESS.get() {
        pb.set_position(done as u64);
    }
}

pub fn finish() {
    if let Some(pb) = PROGRESS.get() {
        pb.finish_and_clear();
    }
}

/// Log sink that keeps tracing output from tearing through the progress bar.
pub struct ProgressWriter;

impl Write for ProgressWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match PROGRESS.get() {
            Some(pb) => pb.suspend(|| std::io::stderr().write_all(buf))?,
            None => std::io::stderr().write_all(buf)?,
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        std::io::stderr().flush()
    }
}
