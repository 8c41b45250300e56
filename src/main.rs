use clap::Parser;
use listing_eda::cli::{run, Cli};
use listing_eda::error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}
