use std::error::Error as _;
use std::process::ExitCode;

use anyhow::{Result, bail};
use clap::Parser;

use unbundle::app::extract::{ExtractOptions, Extractor};
use unbundle::cli::CommonArgs;
use unbundle::infra::fs;

/// Extract every file in the bundle to its path under the project root.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Continue past files that cannot be written and report them at the end
    #[arg(long)]
    keep_going: bool,

    /// List what would be written without touching the filesystem
    #[arg(long)]
    dry_run: bool,
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

    let mut options = ExtractOptions::from_config(&session.config);
    options.keep_going |= cli.keep_going;
    options.dry_run = cli.dry_run;
    let verb = if options.dry_run { "Would write" } else { "Wrote" };

    let extractor = Extractor::new(&session.root, options);
    let report = extractor.extract(&text, |file| {
        println!("[OK] {verb} {} ({} bytes)", file.path, file.bytes);
    })?;

    println!("Extracted {} files from bundle.", report.files.len());

    if !report.is_success() {
        for failure in &report.failures {
            match failure.error.source() {
                Some(cause) => eprintln!("[FAILED] {}: {}: {cause}", failure.path, failure.error),
                None => eprintln!("[FAILED] {}: {}", failure.path, failure.error),
            }
        }
        bail!(
            "failed to extract {} of {} files",
            report.failures.len(),
            report.failures.len() + report.files.len()
        );
    }
    Ok(())
}
