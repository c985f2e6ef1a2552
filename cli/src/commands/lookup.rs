use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, bail};
use clap::Args;
use tracing::debug;

use netlog_core::classify::DigClassifier;
use netlog_core::runner;

#[derive(Args, Debug, Clone)]
pub struct LookupArgs {
    /// Name to resolve
    pub dest: String,

    /// Skip the `dig -x` pass over the A answers
    #[arg(long = "no-revresolve")]
    pub no_revresolve: bool,

    /// Where to write the raw dig output (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn lookup(args: LookupArgs) -> anyhow::Result<()> {
    let forward: String = run_dig(&[args.dest.as_str()])?;
    let mut transcript: String = forward.clone();

    if !args.no_revresolve {
        for ip in a_answers(&args.dest, &forward) {
            debug!("reverse resolving {ip}");
            transcript.push_str(&run_dig(&["-x", ip.as_str()])?);
        }
    }

    match &args.output {
        Some(path) => write_to(path, &transcript),
        None => {
            io::stdout().lock().write_all(transcript.as_bytes())?;
            Ok(())
        }
    }
}

/// Values of the A records in the answer section of `text`.
pub fn a_answers(dest: &str, text: &str) -> Vec<String> {
    let host = runner::run_text(&DigClassifier, dest, Path::new(dest), text);
    host.bucket("A").map(|record| record.value.clone()).collect()
}

fn run_dig(args: &[&str]) -> anyhow::Result<String> {
    let output = Command::new("dig")
        .args(args)
        .env("LANG", "C")
        .output()
        .context("Failed to run dig")?;

    if !output.status.success() {
        bail!("dig {} exited with {}", args.join(" "), output.status);
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

fn write_to(path: &Path, text: &str) -> anyhow::Result<()> {
    let mut file: File = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    file.write_all(text.as_bytes())?;
    Ok(())
}
