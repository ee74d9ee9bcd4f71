//! CLI entry point for deterministic avatar generation

use clap::Parser;
use robohash::io::cli::{Cli, init_tracing, run};

fn main() -> robohash::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);
    run(&cli).map(|_| ())
}
