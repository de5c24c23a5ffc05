//! CLI entry point for overlapping wave function collapse synthesis

use clap::Parser;
use wavetile::io::cli::{Cli, Synthesizer};
use wavetile::io::logging;

fn main() -> wavetile::Result<()> {
    let cli = Cli::parse();
    let logger = logging::init(cli.log_level());
    let mut synthesizer = Synthesizer::new(cli)?.with_logger(logger);
    synthesizer.run()?;
    Ok(())
}
