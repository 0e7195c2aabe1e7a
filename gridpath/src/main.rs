use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gridpath_lib::{Args, run};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let stdout = std::io::stdout();
    run(&args, &mut stdout.lock())
}
