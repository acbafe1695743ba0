use super::Context;
use crate::shared::find_files;
use anyhow::{Context as _, Result};
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct FindArgs {
    /// Glob pattern (`*` stays in one component, `**` crosses directories) or literal path
    pub pattern: String,

    /// Directory to search under
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub base: PathBuf,
}

pub fn execute(args: &FindArgs, ctx: &Context) -> Result<()> {
    let found = find_files(&args.pattern, &args.base)
        .with_context(|| format!("Failed to search for '{}'", args.pattern))?;

    for path in &found {
        println!("{}", path.display());
    }
    ctx.output.count("🔎", "Matching entries", found.len());
    Ok(())
}
