//! Command-line arguments shared by both binaries.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::infra::config::{self, Config};
use crate::infra::logging;

#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root that bundle paths are relative to [default: nearest
    /// ancestor with a .git directory, else the current directory]
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Bundle file, relative to the root unless absolute [default:
    /// full_app_code.txt]
    #[arg(long, value_name = "FILE")]
    pub bundle: Option<PathBuf>,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Decrease log verbosity (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub quiet: u8,
}

/// Root, bundle location, and merged configuration for one invocation.
#[derive(Debug, Clone)]
pub struct Session {
    pub root: PathBuf,
    pub bundle_path: PathBuf,
    pub config: Config,
}

impl CommonArgs {
    /// Resolve the root, load configuration, and install logging.
    pub fn start(&self) -> Result<Session> {
        let root = match &self.root {
            Some(root) => root.clone(),
            None => {
                let cwd = std::env::current_dir().context("failed to read current directory")?;
                config::find_project_root(&cwd)
            }
        };

        let config = Config::load(&root)?;
        let level = logging::adjust_level(
            logging::parse_level(&config.logging.level),
            self.verbose,
            self.quiet,
        );
        logging::init(level);

        let bundle_name = self
            .bundle
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.bundle.file_name));
        let bundle_path = root.join(bundle_name);
        tracing::debug!(root = %root.display(), bundle = %bundle_path.display(), "resolved bundle location");

        Ok(Session {
            root,
            bundle_path,
            config,
        })
    }
}
