use std::time::Instant;

use clap::Args;

use netlog_common::config::Config;
use netlog_core::classify::DigClassifier;
use netlog_core::table::{DigColumns, dig_table};

use crate::commands::{self, IoArgs};

#[derive(Args, Debug, Clone)]
pub struct DigArgs {
    #[command(flatten)]
    pub io: IoArgs,

    /// Logs are reverse lookups (`dig -x`); tabulate PTR answers only
    #[arg(short = 'r', long = "rev")]
    pub rev: bool,
}

pub fn dig(args: DigArgs, cfg: &Config) -> anyhow::Result<()> {
    let started: Instant = Instant::now();
    let batch = commands::ingest(&DigClassifier, &args.io, cfg)?;

    let columns: DigColumns = if args.rev {
        DigColumns::reverse()
    } else {
        DigColumns::default()
    };
    let dataset = dig_table(&batch, &columns)?;

    commands::finish(&dataset, &args.io, batch.failures(), started, cfg)
}
