use anyhow::Result;
use clap::Parser;
use pathsift::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
