use std::time::Instant;

use clap::Args;

use netlog_common::config::Config;
use netlog_core::classify::TracerouteClassifier;
use netlog_core::table::{TracerouteColumns, traceroute_table};

use crate::commands::{self, IoArgs};

#[derive(Args, Debug, Clone)]
pub struct TracerouteArgs {
    #[command(flatten)]
    pub io: IoArgs,

    /// Column name of the destination
    #[arg(short = 'd', long = "dest-col", default_value = "dest")]
    pub dest_col: String,

    /// Prefix of the numbered hop columns
    #[arg(short = 'p', long = "prefix", default_value = "hop")]
    pub prefix: String,

    /// Sender address, recorded as hop 0
    #[arg(short = 's', long = "src")]
    pub src: Option<String>,
}

pub fn traceroute(args: TracerouteArgs, cfg: &Config) -> anyhow::Result<()> {
    let started: Instant = Instant::now();
    let batch = commands::ingest(&TracerouteClassifier, &args.io, cfg)?;

    let columns = TracerouteColumns {
        dest: args.dest_col.clone(),
        prefix: args.prefix.clone(),
        source: args.src.clone(),
    };
    let dataset = traceroute_table(&batch, &columns)?;

    commands::finish(&dataset, &args.io, batch.failures(), started, cfg)
}
