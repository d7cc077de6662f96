// CLI binary entry point for podfeed
//
// This is the main entry point for the podfeed command-line tool.

mod cli;

use clap::Parser;
use cli::{commands, Commands, Config, OutputFormatter};
use std::process;
use tracing_subscriber::filter::LevelFilter;

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .try_init();

    let config = Config::parse();
    let formatter = OutputFormatter::new(config.format, config.quiet);

    let result = match config.command {
        Commands::Build(args) => commands::command_build(args, &formatter),
        Commands::Tags { files } => commands::command_tags(files, &formatter),
    };

    if let Err(e) = result {
        formatter.print_error(&format!("{:#}", e));
        process::exit(1);
    }
}
