mod commands;
mod export;
mod terminal;

use commands::{CommandLine, Commands, dig, lookup, ping, traceroute};
use netlog_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg: Config = commands.config();

    logging::init(&cfg);

    match commands.command {
        Commands::Ping(args) => {
            print::header("tabulating ping logs", cfg.quiet);
            ping::ping(args, &cfg)
        }
        Commands::Traceroute(args) => {
            print::header("tabulating traceroute logs", cfg.quiet);
            traceroute::traceroute(args, &cfg)
        }
        Commands::Dig(args) => {
            print::header("tabulating dig logs", cfg.quiet);
            dig::dig(args, &cfg)
        }
        Commands::Lookup(args) => {
            print::header("running dig", cfg.quiet);
            lookup::lookup(args)
        }
    }
}
