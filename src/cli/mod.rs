mod handlers;
pub mod parse;

use clap::Parser;
pub use parse::Cli;
use tracing_subscriber::EnvFilter;

use crate::core::{config::HeatmapConfig, error::BucketError};

/// Logs go to stderr; `--debug` forces debug level, otherwise `RUST_LOG`
/// decides with `warn` as the fallback.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    // a second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn run() -> Result<(), BucketError> {
    let cli = parse::Cli::parse();
    init_tracing(cli.debug);

    let cfg = match &cli.config {
        Some(path) => HeatmapConfig::load(path)?,
        None => HeatmapConfig::default(),
    };

    match cli.cmd {
        parse::Command::Time(a) => handlers::time(&a, &cfg),
        parse::Command::Value(a) => handlers::value(&a, &cfg),
        parse::Command::Heatmap(a) => handlers::heatmap(&a, &cfg),
        parse::Command::Examples => {
            handlers::examples();
            Ok(())
        }
    }
}
