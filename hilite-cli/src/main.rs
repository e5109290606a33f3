//! Hilite CLI - syntax highlighting for documentation code blocks.
//!
//! This is the main entry point for the hilite CLI application.
//! It uses clap for argument parsing and dispatches to the command
//! handlers in [`commands`].

mod commands;
mod config;
mod error;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    common::VocabularyOverrides, run_highlight, run_init, run_presets, run_tokens, HighlightArgs,
    InitArgs, PresetsArgs, TokenFormat, TokensArgs,
};
use commands::{
    highlight::HighlightCommand as HighlightHandler, init::InitCommand as InitHandler,
    presets::PresetsCommand as PresetsHandler, tokens::TokensCommand as TokensHandler,
    traits::CommandDescription,
};
use config::Config;
use error::{HiliteError, Result};

/// Hilite - a syntax highlighter for documentation code blocks
///
/// Hilite splits C-family source into comments, preprocessor directives,
/// strings, numbers, words and operators, and renders each token as a
/// class-tagged HTML span.
#[derive(Parser, Debug)]
#[command(name = "hilite")]
#[command(author = "Hilite Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Syntax highlighting for documentation code blocks", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "HILITE_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "HILITE_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "HILITE_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the hilite CLI.
///
/// Help text comes from each handler's [`CommandDescription`] impl.
#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = HighlightHandler::description(),
        long_about = HighlightHandler::help()
    )]
    Highlight(HighlightCommand),

    #[command(about = TokensHandler::description(), long_about = TokensHandler::help())]
    Tokens(TokensCommand),

    #[command(about = InitHandler::description(), long_about = InitHandler::help())]
    Init(InitCommand),

    #[command(about = PresetsHandler::description(), long_about = PresetsHandler::help())]
    Presets,
}

/// Vocabulary flags shared by highlight and tokens.
#[derive(clap::Args, Debug)]
struct VocabularyFlags {
    /// Vocabulary preset (cpp, crt, cpp+crt, default, none)
    #[arg(long)]
    preset: Option<String>,

    /// Extra keywords, comma separated
    #[arg(long, value_delimiter = ',')]
    keywords: Vec<String>,

    /// Extra type names, comma separated
    #[arg(long = "types", value_delimiter = ',')]
    type_names: Vec<String>,
}

impl From<VocabularyFlags> for VocabularyOverrides {
    fn from(flags: VocabularyFlags) -> Self {
        Self {
            preset: flags.preset,
            keywords: flags.keywords,
            type_names: flags.type_names,
        }
    }
}

/// Arguments for the highlight subcommand.
#[derive(Parser, Debug)]
struct HighlightCommand {
    /// Input files (`-` reads stdin)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output directory (default: from config)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print markup to stdout instead of writing files
    #[arg(long)]
    stdout: bool,

    /// Do not normalize line endings and indentation
    #[arg(long)]
    raw: bool,

    #[command(flatten)]
    vocabulary: VocabularyFlags,

    /// Emit bare spans without the <pre><code> wrapper
    #[arg(long)]
    no_wrap: bool,

    /// Number of parallel jobs
    #[arg(short, long)]
    jobs: Option<usize>,

    /// Overwrite existing output files
    #[arg(short, long)]
    force: bool,
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Input file (`-` reads stdin)
    input: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = TokenFormat::Text)]
    format: TokenFormat,

    /// Do not normalize line endings and indentation
    #[arg(long)]
    raw: bool,

    #[command(flatten)]
    vocabulary: VocabularyFlags,
}

/// Arguments for the init subcommand.
#[derive(Parser, Debug)]
struct InitCommand {
    /// Directory to initialize (default: current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Overwrite an existing hilite.toml
    #[arg(short, long)]
    force: bool,
}

/// Main entry point for the hilite CLI.
///
/// Parses command-line arguments, initializes logging, loads configuration,
/// and dispatches to the appropriate command handler.
fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref())?;

    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over `--verbose`. Logs go to stderr so that
/// `--stdout` and token dumps stay clean.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| HiliteError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Highlight(args) => run_highlight(highlight_args(args), config),
        Commands::Tokens(args) => run_tokens(tokens_args(args), config),
        Commands::Init(args) => run_init(
            InitArgs {
                force: args.force,
                path: args.path,
            },
            config,
        ),
        Commands::Presets => run_presets(PresetsArgs, config),
    }
}

fn highlight_args(args: HighlightCommand) -> HighlightArgs {
    HighlightArgs {
        files: args.files,
        output: args.output,
        stdout: args.stdout,
        raw: args.raw,
        vocabulary: args.vocabulary.into(),
        no_wrap: args.no_wrap,
        jobs: args.jobs,
        force: args.force,
    }
}

fn tokens_args(args: TokensCommand) -> TokensArgs {
    TokensArgs {
        input: args.input,
        format: args.format,
        raw: args.raw,
        vocabulary: args.vocabulary.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_highlight() {
        let cli = Cli::parse_from(["hilite", "highlight", "a.cpp", "b.h"]);
        if let Commands::Highlight(args) = cli.command {
            assert_eq!(args.files, vec![PathBuf::from("a.cpp"), PathBuf::from("b.h")]);
            assert!(!args.stdout);
        } else {
            panic!("Expected Highlight command");
        }
    }

    #[test]
    fn test_cli_highlight_requires_files() {
        assert!(Cli::try_parse_from(["hilite", "highlight"]).is_err());
    }

    #[test]
    fn test_cli_parse_highlight_options() {
        let cli = Cli::parse_from([
            "hilite", "highlight", "a.cpp", "-o", "out", "--no-wrap", "-j", "3", "--force",
        ]);
        if let Commands::Highlight(args) = cli.command {
            assert_eq!(args.output, Some(PathBuf::from("out")));
            assert!(args.no_wrap);
            assert_eq!(args.jobs, Some(3));
            assert!(args.force);
        } else {
            panic!("Expected Highlight command");
        }
    }

    #[test]
    fn test_cli_parse_vocabulary_flags() {
        let cli = Cli::parse_from([
            "hilite",
            "highlight",
            "a.cpp",
            "--preset",
            "none",
            "--keywords",
            "int,return",
            "--types",
            "Vec2",
        ]);
        if let Commands::Highlight(args) = cli.command {
            let overrides: VocabularyOverrides = args.vocabulary.into();
            assert_eq!(overrides.preset.as_deref(), Some("none"));
            assert_eq!(overrides.keywords, vec!["int", "return"]);
            assert_eq!(overrides.type_names, vec!["Vec2"]);
        } else {
            panic!("Expected Highlight command");
        }
    }

    #[test]
    fn test_cli_parse_tokens_format() {
        let cli = Cli::parse_from(["hilite", "tokens", "-", "--format", "json"]);
        if let Commands::Tokens(args) = cli.command {
            assert_eq!(args.input, PathBuf::from("-"));
            assert_eq!(args.format, TokenFormat::Json);
        } else {
            panic!("Expected Tokens command");
        }
    }

    #[test]
    fn test_cli_tokens_default_format() {
        let cli = Cli::parse_from(["hilite", "tokens", "a.cpp"]);
        if let Commands::Tokens(args) = cli.command {
            assert_eq!(args.format, TokenFormat::Text);
        } else {
            panic!("Expected Tokens command");
        }
    }

    #[test]
    fn test_cli_parse_init_with_path() {
        let cli = Cli::parse_from(["hilite", "init", "--path", "/tmp/docs"]);
        if let Commands::Init(args) = cli.command {
            assert_eq!(args.path, Some(PathBuf::from("/tmp/docs")));
            assert!(!args.force);
        } else {
            panic!("Expected Init command");
        }
    }

    #[test]
    fn test_cli_parse_presets() {
        let cli = Cli::parse_from(["hilite", "presets"]);
        assert!(matches!(cli.command, Commands::Presets));
    }

    #[test]
    fn test_subcommand_help_from_descriptions() {
        use clap::CommandFactory;

        let cli = Cli::command();
        let about = |name: &str| {
            cli.find_subcommand(name)
                .and_then(|sub| sub.get_about())
                .map(|about| about.to_string())
        };
        assert_eq!(
            about("highlight").as_deref(),
            Some(HighlightHandler::description())
        );
        assert_eq!(about("tokens").as_deref(), Some(TokensHandler::description()));
        assert_eq!(about("init").as_deref(), Some(InitHandler::description()));
        assert_eq!(about("presets").as_deref(), Some(PresetsHandler::description()));

        let long_about = cli
            .find_subcommand("init")
            .and_then(|sub| sub.get_long_about())
            .map(|about| about.to_string());
        assert_eq!(long_about.as_deref(), Some(InitHandler::help()));
    }

    #[test]
    fn test_cli_parse_global_flags() {
        let cli = Cli::parse_from([
            "hilite",
            "presets",
            "--verbose",
            "--no-color",
            "--config",
            "/etc/hilite.toml",
        ]);
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert_eq!(cli.config, Some(PathBuf::from("/etc/hilite.toml")));
    }
}
