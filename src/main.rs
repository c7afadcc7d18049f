//! CLI entry point for socket-matched wave function collapse

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use wavetile::io::cli::{Cli, Generator};

fn main() -> wavetile::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::new(&cli.log_level))
        .init();

    Generator::new(cli).process()
}
