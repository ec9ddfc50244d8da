use beans_analytics::cli::{run, Cli};
use beans_analytics::error::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}
