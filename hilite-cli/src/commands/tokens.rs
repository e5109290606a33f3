//! Tokens command implementation.
//!
//! Dumps the classified token stream of one input, either as tab-separated
//! lines or as JSON. Useful for checking how a snippet will be styled.

use std::io::Write;
use std::path::PathBuf;

use clap::ValueEnum;
use hilite_html::normalize;
use hilite_lex::{tokenize, Token};

use crate::commands::common::{read_source, VocabularyOverrides};
use crate::commands::traits::{Command, CommandDescription};
use crate::config::Config;
use crate::error::Result;

/// Output format for the token dump.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum TokenFormat {
    /// `tag<TAB>"text"` per line.
    #[default]
    Text,
    /// A JSON array of `{text, category, span}` objects.
    Json,
}

/// Arguments for the tokens command.
#[derive(Debug, Clone)]
pub struct TokensArgs {
    /// Input file, or `-` for stdin.
    pub input: PathBuf,
    /// Output format.
    pub format: TokenFormat,
    /// Skip normalization.
    pub raw: bool,
    /// Vocabulary adjustments.
    pub vocabulary: VocabularyOverrides,
}

/// Tokens command handler.
pub struct TokensCommand {
    args: TokensArgs,
    config: Config,
}

impl TokensCommand {
    /// Execute the command, writing to stdout.
    pub fn run(&self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.run_to(&mut out)?;
        out.flush()?;
        Ok(())
    }

    /// Execute the command, writing to `out`.
    pub fn run_to(&self, out: &mut impl Write) -> Result<()> {
        let vocabulary = self.args.vocabulary.resolve(&self.config)?;
        let source = read_source(&self.args.input)?;
        let source = if self.args.raw {
            source
        } else {
            normalize(&source)
        };

        let tokens = tokenize(&source, &vocabulary);
        tracing::debug!(tokens = tokens.len(), "tokenized");

        match self.args.format {
            TokenFormat::Text => write_text(out, &tokens)?,
            TokenFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, &tokens)?;
                writeln!(out)?;
            },
        }
        Ok(())
    }
}

fn write_text(out: &mut impl Write, tokens: &[Token<'_>]) -> std::io::Result<()> {
    for token in tokens {
        writeln!(out, "{}\t{:?}", token.category, token.text)?;
    }
    Ok(())
}

impl Command for TokensCommand {
    type Args = TokensArgs;
    type Output = ();

    fn new(args: Self::Args, config: Config) -> Self {
        Self { args, config }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "tokens"
    }
}

impl CommandDescription for TokensCommand {
    fn description() -> &'static str {
        "Print the classified token stream of a file"
    }

    fn help() -> &'static str {
        "Tokenizes one file (or stdin with `-`) and prints each token with its \
         category tag, as text lines or JSON."
    }
}

/// Run the tokens command.
pub fn run_tokens(args: TokensArgs, config: Config) -> Result<()> {
    crate::commands::traits::run_command::<TokensCommand>(args, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn dump(source: &str, format: TokenFormat, raw: bool) -> String {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("snippet.cpp");
        std::fs::write(&input, source).unwrap();

        let args = TokensArgs {
            input,
            format,
            raw,
            vocabulary: VocabularyOverrides {
                preset: Some("none".to_string()),
                keywords: vec!["int".to_string()],
                type_names: vec!["Vec2".to_string()],
            },
        };
        let mut out = Vec::new();
        TokensCommand::new(args, Config::default())
            .run_to(&mut out)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_format() {
        let text = dump("int x = 5;", TokenFormat::Text, true);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "keyword\t\"int\"");
        assert_eq!(lines[1], "whitespace\t\" \"");
        assert_eq!(lines[6], "number\t\"5\"");
        assert_eq!(lines.len(), 8);
    }

    #[test]
    fn test_json_format() {
        let json = dump("Vec2 v", TokenFormat::Json, true);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let tokens = value.as_array().unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0]["text"], "Vec2");
        assert_eq!(tokens[0]["category"], "cr-type");
        assert_eq!(tokens[2]["span"]["start"], 5);
    }

    #[test]
    fn test_normalizes_unless_raw() {
        let normalized = dump("   x\n", TokenFormat::Text, false);
        assert_eq!(normalized, "identifier\t\"x\"\n");

        let raw = dump("   x\n", TokenFormat::Text, true);
        assert!(raw.starts_with("whitespace\t\"   \"\n"));
    }

    #[test]
    fn test_tokens_command_name() {
        assert_eq!(<TokensCommand as Command>::name(), "tokens");
    }
}
