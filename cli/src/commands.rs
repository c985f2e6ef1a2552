pub mod dig;
pub mod lookup;
pub mod ping;
pub mod traceroute;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{ArgAction, Args, Parser, Subcommand};
use colored::*;

use netlog_common::config::Config;
use netlog_common::source::{self, LogSource};
use netlog_core::batch::Batch;
use netlog_core::classify::LineClassifier;
use netlog_core::table::Dataset;

use crate::export::{self, Format};
use crate::terminal::{colors, print, progress};

#[derive(Parser)]
#[command(name = "netlog")]
#[command(version, about = "Turns ping, traceroute and dig logs into one wide table.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Trace every classified line
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print the data and warnings
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Parse log files in parallel
    #[arg(long, global = true)]
    pub parallel: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Tabulate ping logs (taken with `LANG=C ping -O -c N <dest>`)
    #[command(alias = "p")]
    Ping(ping::PingArgs),
    /// Tabulate numeric traceroute logs (taken with `LANG=C traceroute -n <dest>`)
    #[command(alias = "t")]
    Traceroute(traceroute::TracerouteArgs),
    /// Tabulate dig logs (taken with `LANG=C dig <name>`)
    #[command(alias = "d")]
    Dig(dig::DigArgs),
    /// Run dig now, reverse-resolving every A answer
    #[command(alias = "l")]
    Lookup(lookup::LookupArgs),
}

/// Input and output shared by the tabulating subcommands.
#[derive(Args, Debug, Clone)]
pub struct IoArgs {
    /// File listing one log path per line; the file name is the destination
    #[arg(short, long, default_value = "/dev/stdin")]
    pub input: PathBuf,

    /// Where to write the table (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Csv)]
    pub format: Format,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            verbose: self.verbose,
            quiet: self.quiet,
            parallel: self.parallel,
        }
    }
}

/// Reads the log list and parses every log with `classifier`.
pub fn ingest<C>(classifier: &C, io: &IoArgs, cfg: &Config) -> anyhow::Result<Batch<C::Record>>
where
    C: LineClassifier,
{
    let sources: Vec<LogSource> = source::read_log_list(&io.input)
        .with_context(|| format!("Failed to load {} log list", classifier.tool()))?;

    progress::start(sources.len(), cfg.quiet);
    let report = |done: usize| progress::report(done);
    let batch = Batch::ingest(classifier, &sources, cfg, Some(&report));
    progress::finish();

    Ok(batch)
}

/// Writes the table and closes the run with a one-line summary.
pub fn finish(dataset: &Dataset, io: &IoArgs, failures: usize, started: Instant, cfg: &Config) -> anyhow::Result<()> {
    export::write_dataset(dataset, io.output.as_deref(), io.format)?;

    if cfg.quiet > 0 {
        return Ok(());
    }

    let rows: ColoredString = format!("{} destinations", dataset.rows.len()).bold().green();
    let columns: ColoredString = format!("{} columns", dataset.columns.len()).bold().green();
    let total_time: ColoredString = format!("{:.2}s", started.elapsed().as_secs_f64()).bold().yellow();
    let output: String = format!("Tabulated {rows} x {columns} in {total_time}")
        .color(colors::TEXT_DEFAULT)
        .to_string();

    print::fat_separator();
    print::centerln(&output);
    if failures > 0 {
        print::print_status(format!("{} log file(s) could not be read", failures.to_string().red().bold()));
    }
    Ok(())
}
