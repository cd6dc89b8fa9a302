//! treefs CLI Binary
//!
//! Command-line interface for the in-memory namespace.

use clap::Parser;
use std::process;
use treefs::config::ConfigLoader;
use treefs::logging::init_logging;
use treefs::tooling::{Cli, CliContext};

fn main() {
    let cli = Cli::parse();

    let mut config = match ConfigLoader::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            process::exit(1);
        }
    };
    cli.apply_overrides(&mut config);

    if let Err(e) = init_logging(Some(&config.logging)) {
        eprintln!("Error initializing logging: {}", e);
        process::exit(1);
    }

    let mut context = match CliContext::new(&config) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error creating namespace: {}", e);
            process::exit(1);
        }
    };

    match context.execute(&cli.command) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
