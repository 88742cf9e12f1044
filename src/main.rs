//
//  shopsavvy
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use shopsavvy::cli::{Cli, Commands};
use shopsavvy::exit_codes;
use shopsavvy::output::{OutputFormat, OutputWriter};

#[tokio::main]
async fn main() {
    // Initialize logging
    init_logging();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Execute command
    let result = run(cli).await;

    // Handle result and exit
    match result {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            if let Some(clap_err) = e.downcast_ref::<clap::Error>() {
                let _ = clap_err.print();
            } else {
                OutputWriter::new(OutputFormat::Table).write_error(&format!("{e:#}"));
            }
            std::process::exit(exit_codes::for_error(&e));
        }
    }
}

/// Initialize logging based on environment
fn init_logging() {
    let filter = EnvFilter::try_from_env("SHOPSAVVY_DEBUG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Main command dispatcher
async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Search(cmd) => cmd.run(&cli.global).await,
        Commands::Product(cmd) => cmd.run(&cli.global).await,
        Commands::Offers(cmd) => cmd.run(&cli.global).await,
        Commands::History(cmd) => cmd.run(&cli.global).await,
        Commands::Schedule(cmd) => cmd.run(&cli.global).await,
        Commands::Usage(cmd) => cmd.run(&cli.global).await,
        Commands::Config(cmd) => cmd.run(&cli.global).await,
        Commands::Completion(cmd) => cmd.run(&cli.global).await,
        Commands::Version => {
            println!("shopsavvy version {}", shopsavvy::VERSION);
            Ok(())
        }
    }
}
