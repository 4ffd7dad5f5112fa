mod driver;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use driver::Config;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    driver::run(&config, stdin.lock(), &mut stdout.lock())
}
