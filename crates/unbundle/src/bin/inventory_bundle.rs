use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use unbundle::app::inventory;
use unbundle::cli::CommonArgs;
use unbundle::infra::fs;

/// Report files listed in the bundle index that have no content section.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let session = cli.common.start()?;

    let text = fs::read_bundle(&session.bundle_path)?;
    let report = inventory::check(&text)?;

    if cli.json {
        let rendered =
            serde_json::to_string_pretty(&report).context("failed to serialize inventory report")?;
        println!("{rendered}");
    } else {
        println!("{}", report.render());
    }
    Ok(())
}
