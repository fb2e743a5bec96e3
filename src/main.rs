use std::fs::File;
use std::io::{self, BufReader, BufWriter};

use anyhow::{Context, Result};
use clap::Parser;
use keygram::{cli::Cli, config::Settings, pipeline};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber; warnings always reach stderr
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Cli::parse();

    init_tracing(args.debug);

    let settings = Settings::load(&args)?;
    tracing::debug!(?settings, "settings resolved");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match args.input_path() {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            pipeline::run(BufReader::new(file), &settings, &mut out)
        }
        None => pipeline::run(io::stdin().lock(), &settings, &mut out),
    }
}
