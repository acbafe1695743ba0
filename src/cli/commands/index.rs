use super::Context;
use crate::index::{IndexOutcome, IndexRequest, build_index};
use anyhow::{Context as _, Result};
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct IndexArgs {
    /// Directories to walk
    #[arg(required = true, value_name = "ROOT")]
    pub roots: Vec<PathBuf>,

    /// Write the index to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Rebuild FILE even if it already exists
    #[arg(long)]
    pub overwrite: bool,
}

pub fn execute(args: &IndexArgs, ctx: &Context) -> Result<()> {
    let mut request = IndexRequest::new(args.roots.clone());
    if let Some(output) = &args.output {
        request = request.with_output(output, ctx.settings.index.overwrite);
    }

    let progress = ctx.progress("Indexing");
    let outcome = build_index(&request, progress.as_ref()).context("Failed to build index")?;

    match outcome {
        IndexOutcome::InMemory(entries) => {
            for entry in &entries {
                println!("{entry}");
            }
            ctx.output.count("📁", "Indexed entries", entries.len());
        }
        IndexOutcome::Written { path, entries } => {
            ctx.output
                .success(&format!("Indexed {} entries into {}", entries, path.display()));
        }
        IndexOutcome::Reused(path) => {
            ctx.output.info(&format!(
                "Index {} already exists, pass --overwrite to rebuild it",
                path.display()
            ));
        }
    }

    Ok(())
}
