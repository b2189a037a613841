//! CLI entry point for compiling tile catalogs into LP models

use clap::Parser;
use tileilp::io::cli::{Cli, FileProcessor};

fn main() -> tileilp::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
