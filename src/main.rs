use clap::Parser;
use tracing::Level;

use verbindex::build::run_build;

mod cli;
use cli::Cli;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run_build(&cli.config()) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}
