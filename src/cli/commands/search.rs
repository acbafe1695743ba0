use super::{Context, emit_paths, load_paths};
use crate::filter::{FilterRequest, IndexSource, filter, filter_by_class, filter_to_file};
use crate::matcher::{Anchoring, TermSet};
use anyhow::{Context as _, Result};
use clap::{ArgGroup, Args};
use std::path::PathBuf;

#[derive(Args)]
#[command(group(ArgGroup::new("source").required(true).args(["db", "root"])))]
pub struct SearchArgs {
    /// Read paths from an index file
    #[arg(long, value_name = "FILE")]
    pub db: Option<PathBuf>,

    /// Index these directories in memory instead
    #[arg(long, value_name = "DIR", num_args = 1..)]
    pub root: Vec<PathBuf>,

    /// Term every surviving path must contain (repeatable)
    #[arg(short = 's', long = "search", value_name = "TERM")]
    pub search: Vec<String>,

    /// Keep paths containing at least one of these terms (repeatable)
    #[arg(short = 'i', long = "include", value_name = "TERM")]
    pub include: Vec<String>,

    /// Drop paths containing any of these terms (repeatable)
    #[arg(short = 'e', long = "exclude", value_name = "TERM")]
    pub exclude: Vec<String>,

    /// Match terms case-sensitively
    #[arg(long)]
    pub case_sensitive: bool,

    /// Whether paths are framed with ^ and $ markers before matching
    #[arg(long, value_enum)]
    pub anchoring: Option<Anchoring>,

    /// Afterwards keep only entries of this class (file, folder, symlink)
    #[arg(long, value_name = "KIND", conflicts_with = "drop_class")]
    pub keep_class: Option<String>,

    /// Afterwards drop entries of this class (file, folder, symlink)
    #[arg(long, value_name = "KIND")]
    pub drop_class: Option<String>,

    /// Write results to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

pub fn execute(args: &SearchArgs, ctx: &Context) -> Result<()> {
    let request = FilterRequest::new()
        .with_search(TermSet::new(args.search.iter().cloned()))
        .with_include(TermSet::new(args.include.iter().cloned()))
        .with_exclude(TermSet::new(args.exclude.iter().cloned()))
        .case_sensitive(ctx.settings.search.case_sensitive)
        .anchoring(ctx.settings.search.anchoring);

    if request.is_identity() {
        ctx.output
            .warning("No terms given, every indexed path will be returned");
    }

    let source = match &args.db {
        Some(db) => IndexSource::File(db.clone()),
        None => IndexSource::Memory(load_paths(None, args.root.clone(), ctx)?),
    };

    let class = match (&args.keep_class, &args.drop_class) {
        (Some(kind), _) => Some((kind, true)),
        (None, Some(kind)) => Some((kind, false)),
        (None, None) => None,
    };

    let progress = ctx.progress("Filtering");
    let Some((kind, inclusive)) = class else {
        if let Some(output) = &args.output {
            let (path, written) = filter_to_file(source, &request, output, progress.as_ref())
                .context("Search failed")?;
            ctx.output
                .success(&format!("Wrote {} paths to {}", written, path.display()));
            return Ok(());
        }
        let paths = filter(source, &request, progress.as_ref()).context("Search failed")?;
        return emit_paths(&paths, None, ctx);
    };

    let paths = filter(source, &request, progress.as_ref()).context("Search failed")?;
    let class_progress = ctx.progress("Classifying");
    let paths = filter_by_class(&paths, kind, inclusive, class_progress.as_ref())
        .context("Class filter failed")?;

    emit_paths(&paths, args.output.as_ref(), ctx)
}
