//! CLI definitions: argument parsing, subcommands, and help text.

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

pub use clap_complete::generate;

const AFTER_HELP: &str = "\
EXAMPLES:
  text-analyzer                        Launch the interactive analysis page
  text-analyzer -t \"Great product!\"    Analyze once and print the results
  text-analyzer -t - < review.txt      Read the text from stdin
  text-analyzer -t \"...\" -m llama3.2   Analyze with a specific model
  text-analyzer models                 List models offered by the backend
  text-analyzer health                 Check that the backend is reachable
  text-analyzer config                 Show effective configuration
  text-analyzer completions bash       Generate bash completions

ENVIRONMENT:
  API_BASE_URL          Analysis backend (default http://localhost:8000)
  TEXT_ANALYZER_MODEL   Model used when none is selected (default qwen2.5-coder:0.5b)
  RUST_LOG              Log filter, overrides -v/-q
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Summarize text and classify its sentiment with a text analysis backend",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Analyze a single text then exit (without opening the page)
    #[arg(
        short = 't',
        long,
        help = "Text to analyze immediately (use '-' to read from stdin)"
    )]
    pub text: Option<String>,

    /// Override model for single text mode
    #[arg(short = 'm', long, help = "Model name (e.g. llama3.2)")]
    pub model: Option<String>,

    /// Print the raw JSON result instead of the formatted report
    #[arg(long, requires = "text")]
    pub json: bool,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List models offered by the backend
    Models,
    /// Check backend health
    Health,
    /// Show effective configuration and log file location
    Config,
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }

    /// True when the terminal page will own the screen.
    pub fn is_interactive(&self) -> bool {
        self.text.is_none() && self.command.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_from_flags() {
        let args = Args::parse_from(["text-analyzer"]);
        assert_eq!(args.log_level(), "warn");
        let args = Args::parse_from(["text-analyzer", "-vv"]);
        assert_eq!(args.log_level(), "debug");
        let args = Args::parse_from(["text-analyzer", "-q", "-v"]);
        assert_eq!(args.log_level(), "error");
    }

    #[test]
    fn text_mode_is_not_interactive() {
        let args = Args::parse_from(["text-analyzer", "-t", "hello", "-m", "llama3.2"]);
        assert!(!args.is_interactive());
        assert_eq!(args.model.as_deref(), Some("llama3.2"));
        assert!(Args::parse_from(["text-analyzer"]).is_interactive());
    }

    #[test]
    fn json_requires_text() {
        assert!(Args::try_parse_from(["text-analyzer", "--json"]).is_err());
    }
}
