use super::{Context, emit_paths, load_paths};
use crate::filter::filter_by_class;
use anyhow::{Context as _, Result};
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct ClassArgs {
    /// Index file to filter
    #[arg(value_name = "DB")]
    pub db: PathBuf,

    /// Entry class: file, folder (or directory) or symlink
    #[arg(value_name = "KIND")]
    pub kind: String,

    /// Keep entries of KIND instead of dropping them
    #[arg(long)]
    pub inclusive: bool,

    /// Write results to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

pub fn execute(args: &ClassArgs, ctx: &Context) -> Result<()> {
    let paths = load_paths(Some(args.db.clone()), Vec::new(), ctx)?;

    let progress = ctx.progress("Classifying");
    let survivors = filter_by_class(&paths, &args.kind, args.inclusive, progress.as_ref())
        .context("Class filter failed")?;

    emit_paths(&survivors, args.output.as_ref(), ctx)
}
