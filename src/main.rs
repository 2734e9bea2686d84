//! # text-analyzer
//!
//! Terminal front end for a text analysis backend: paste or type text, pick a
//! model, and get a summary, a sentiment and word/character counts.
//!
//! ## Modes
//! - Interactive analysis page (default)
//! - Single text mode with `-t` / `--text`
//! - `models`, `health`, `config` and `completions` subcommands

mod cli;
mod core;
mod run;
mod tui;

use clap::{CommandFactory, Parser};
use dotenv::dotenv;

use cli::{Args, Commands};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    let args = Args::parse();
    run::init_logger(&args);

    if let Some(Commands::Completions { shell }) = args.command {
        let mut cmd = Args::command();
        cli::generate(shell, &mut cmd, core::app::NAME, &mut std::io::stdout());
        return Ok(());
    }

    // Exit uses Display not Debug for a user-friendly message
    let config = core::config::load().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    match args.command {
        Some(Commands::Models) => return run::print_models(&config).await,
        Some(Commands::Health) => return run::print_health(&config).await,
        Some(Commands::Config) => {
            run::show_config(&config);
            return Ok(());
        }
        Some(Commands::Completions { .. }) | None => {}
    }

    if let Some(ref text) = args.text {
        return run::run_single_text(&args, &config, text).await;
    }

    run::launch_tui(config).await
}
