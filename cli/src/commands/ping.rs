use std::time::Instant;

use clap::Args;

use netlog_common::config::Config;
use netlog_core::classify::PingClassifier;
use netlog_core::stats::HistogramParams;
use netlog_core::table::{PingColumns, ping_table};

use crate::commands::{self, IoArgs};
use crate::terminal::{histogram, print};

#[derive(Args, Debug, Clone)]
pub struct PingArgs {
    #[command(flatten)]
    pub io: IoArgs,

    /// Column name of the destination
    #[arg(short = 'd', long = "dest-col", default_value = "dest")]
    pub dest_col: String,

    /// Column name of the alive flag
    #[arg(short = 'a', long = "alive-col", default_value = "alive")]
    pub alive_col: String,

    /// Prefix of the numbered RTT columns
    #[arg(short = 'p', long = "prefix", default_value = "rtt")]
    pub prefix: String,

    /// Leave out the column of collected error messages
    #[arg(long = "no-errors")]
    pub no_errors: bool,

    /// Print an RTT histogram per destination
    #[arg(short = 'H', long = "histogram")]
    pub histogram: bool,

    /// Lower edge of the histogram (default: smallest RTT of the host)
    #[arg(long = "hist-min", requires = "histogram")]
    pub hist_min: Option<f64>,

    /// Upper edge of the histogram (default: largest RTT of the host)
    #[arg(long = "hist-max", requires = "histogram")]
    pub hist_max: Option<f64>,

    /// Histogram bin width (default: a seventh of the range)
    #[arg(long = "bin-width", requires = "histogram")]
    pub bin_width: Option<f64>,
}

impl PingArgs {
    fn columns(&self) -> PingColumns {
        PingColumns {
            dest: self.dest_col.clone(),
            alive: self.alive_col.clone(),
            prefix: self.prefix.clone(),
            errors: if self.no_errors { None } else { Some("err".into()) },
        }
    }

    fn histogram_params(&self) -> HistogramParams {
        HistogramParams {
            min: self.hist_min,
            max: self.hist_max,
            bin_width: self.bin_width,
        }
    }
}

pub fn ping(args: PingArgs, cfg: &Config) -> anyhow::Result<()> {
    let started: Instant = Instant::now();
    let batch = commands::ingest(&PingClassifier, &args.io, cfg)?;
    let dataset = ping_table(&batch, &args.columns())?;

    commands::finish(&dataset, &args.io, batch.failures(), started, cfg)?;

    if args.histogram {
        print::header("rtt histograms", cfg.quiet);
        histogram::display_all(&batch, args.histogram_params());
    }
    Ok(())
}
