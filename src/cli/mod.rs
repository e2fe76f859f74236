mod args;
mod handlers;

use args::{Cli, Commands};
use base_n::CodecRegistry;
use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Load codecs configuration with user overrides
    let mut registry = CodecRegistry::load_with_overrides()?;
    if let Some(path) = &cli.config {
        let expanded = shellexpand::tilde(path);
        registry.merge(CodecRegistry::load_from_file(Path::new(expanded.as_ref()))?);
    }

    match cli.command {
        Commands::Encode(args) => handlers::encode::handle(args, &registry),
        Commands::Decode(args) => handlers::decode::handle(args, &registry),
        Commands::List => handlers::list::handle(&registry),
    }
}
