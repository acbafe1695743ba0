use super::{Context, load_paths};
use crate::shared::find_duplicate_names;
use anyhow::Result;
use clap::{ArgGroup, Args};
use console::style;
use std::path::PathBuf;

#[derive(Args)]
#[command(group(ArgGroup::new("source").required(true).args(["db", "root"])))]
pub struct DupesArgs {
    /// Read paths from an index file
    #[arg(long, value_name = "FILE")]
    pub db: Option<PathBuf>,

    /// Index these directories in memory instead
    #[arg(long, value_name = "DIR", num_args = 1..)]
    pub root: Vec<PathBuf>,
}

pub fn execute(args: &DupesArgs, ctx: &Context) -> Result<()> {
    let paths = load_paths(args.db.clone(), args.root.clone(), ctx)?;
    let duplicates = find_duplicate_names(&paths);

    for (name, directories) in &duplicates {
        println!("{}", style(name).bold());
        for directory in directories {
            println!("  {directory}");
        }
    }

    if duplicates.is_empty() {
        ctx.output.success("No duplicate file names");
    } else {
        ctx.output
            .count("⚠", "Names found in several directories", duplicates.len());
    }
    Ok(())
}
