//! Command-line interface for pathsift
//!
//! Parses arguments with clap, installs the log subscriber, folds explicit
//! flags into the layered configuration and dispatches to a command handler.

use anyhow::{Context as _, Result};
use clap::{CommandFactory, Parser, Subcommand};
use serde_json::{Value, json};

pub mod commands;
mod output;

pub use output::Output;

use crate::config::SiftConfig;
use commands::{class, config, dupes, find, index, sample, search};

/// pathsift - index directory trees and filter paths by literal terms
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<String>,

    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress status output and logging
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable progress bars
    #[arg(long, global = true)]
    pub no_progress: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Walk directory trees and record every entry beneath them
    Index(index::IndexArgs),
    /// Filter an index with search, include and exclude terms
    Search(search::SearchArgs),
    /// Keep or drop index entries by file, folder or symlink class
    Class(class::ClassArgs),
    /// Locate entries by glob pattern
    Find(find::FindArgs),
    /// Report file names that appear in more than one directory
    Dupes(dupes::DupesArgs),
    /// Copy a random sample of a tree into a mirror location
    Sample(sample::SampleArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        setup_logging(self.verbose, self.quiet);

        let Some(command) = self.command.as_ref() else {
            let mut cmd = Cli::command();
            cmd.print_help()?;
            return Ok(());
        };

        let overrides = self.cli_overrides()?;
        let config = SiftConfig::load_with_overrides(self.config.as_deref(), Some(overrides))
            .context("Failed to load configuration")?;
        let settings = config.settings().context("Invalid configuration")?;
        let ctx = commands::Context {
            output: Output::new(self.verbose > 0, self.quiet),
            settings,
            config,
        };

        match command {
            Commands::Index(args) => index::execute(args, &ctx),
            Commands::Search(args) => search::execute(args, &ctx),
            Commands::Class(args) => class::execute(args, &ctx),
            Commands::Find(args) => find::execute(args, &ctx),
            Commands::Dupes(args) => dupes::execute(args, &ctx),
            Commands::Sample(args) => sample::execute(args, &ctx),
            Commands::Config(args) => config::execute(args, &ctx),
        }
    }

    /// Configuration values set explicitly on the command line.
    ///
    /// Only flags that were actually given appear here, so unset flags never
    /// mask file or environment settings.
    fn cli_overrides(&self) -> Result<Value> {
        let mut overrides = json!({});

        if self.no_progress {
            overrides["general"]["progress"] = json!(false);
        }

        match &self.command {
            Some(Commands::Index(args)) if args.overwrite => {
                overrides["index"]["overwrite"] = json!(true);
            }
            Some(Commands::Search(args)) => {
                if args.case_sensitive {
                    overrides["search"]["case_sensitive"] = json!(true);
                }
                if let Some(anchoring) = args.anchoring {
                    overrides["search"]["anchoring"] = serde_json::to_value(anchoring)?;
                }
            }
            Some(Commands::Sample(args)) => {
                if let Some(count) = args.count {
                    overrides["sample"]["count"] = json!(count);
                }
                if args.apply {
                    overrides["sample"]["dry_run"] = json!(false);
                }
            }
            _ => {}
        }

        Ok(overrides)
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info,globset=warn"),
            2 => tracing_subscriber::EnvFilter::new("debug,globset=warn"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
