use clap::Parser;
use tracing_subscriber::EnvFilter;

use maf_splice_types::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("maf_splice_types=debug,info")
    } else {
        EnvFilter::new("maf_splice_types=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    cli::classify::run(cli)
}
