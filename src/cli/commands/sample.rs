use super::Context;
use crate::shared::{SampleRequest, sample_and_copy};
use anyhow::{Context as _, Result};
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct SampleArgs {
    /// Tree to sample from
    pub source: PathBuf,

    /// Where sampled files are mirrored
    pub dest: PathBuf,

    /// Maximum number of entries to sample
    #[arg(short = 'n', long, value_name = "COUNT")]
    pub count: Option<usize>,

    /// Seed for a reproducible sample
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Copy files instead of only listing the plan
    #[arg(long)]
    pub apply: bool,
}

pub fn execute(args: &SampleArgs, ctx: &Context) -> Result<()> {
    let request = SampleRequest {
        source: args.source.clone(),
        destination: args.dest.clone(),
        count: ctx.settings.sample.count,
        dry_run: ctx.settings.sample.dry_run,
        seed: args.seed,
    };

    let progress = ctx.progress("Sampling");
    let report = sample_and_copy(&request, progress.as_ref())
        .with_context(|| format!("Failed to sample {}", args.source.display()))?;

    for copy in &report.planned {
        println!("{} -> {}", copy.from.display(), copy.to.display());
    }

    ctx.output.key_value("Planned:", &report.planned.len().to_string(), false);
    ctx.output.key_value("Skipped (not files):", &report.skipped.len().to_string(), false);
    if !report.failed.is_empty() {
        ctx.output
            .warning(&format!("{} copies failed, see log for details", report.failed.len()));
    }

    if request.dry_run {
        ctx.output.info("Dry run, pass --apply to copy files");
    } else {
        ctx.output.success(&format!("Copied {} files", report.copied));
    }
    Ok(())
}
