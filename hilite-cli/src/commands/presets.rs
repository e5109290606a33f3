//! Presets command implementation.

use std::io::Write;

use hilite_lex::presets::{preset, PRESET_NAMES};

use crate::commands::traits::{Command, CommandDescription};
use crate::config::{Config, NO_PRESET};
use crate::error::Result;

/// Arguments for the presets command.
#[derive(Debug, Clone, Default)]
pub struct PresetsArgs;

/// Presets command handler.
pub struct PresetsCommand {
    config: Config,
}

impl PresetsCommand {
    /// Lists preset names with their word counts, marking the configured one.
    pub fn run_to(&self, out: &mut impl Write) -> Result<()> {
        let names = PRESET_NAMES.iter().copied().chain(std::iter::once(NO_PRESET));
        for name in names {
            let (keywords, type_names) = preset(name)
                .map(|v| (v.keyword_count(), v.type_name_count()))
                .unwrap_or((0, 0));
            let marker = if name == self.config.vocabulary.preset { "*" } else { " " };
            writeln!(
                out,
                "{} {:<8} {:>4} keywords {:>4} type names",
                marker, name, keywords, type_names
            )?;
        }
        Ok(())
    }
}

impl Command for PresetsCommand {
    type Args = PresetsArgs;
    type Output = ();

    fn new(_args: Self::Args, config: Config) -> Self {
        Self { config }
    }

    fn execute(&self) -> Result<Self::Output> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.run_to(&mut out)?;
        out.flush()?;
        Ok(())
    }

    fn name() -> &'static str {
        "presets"
    }
}

impl CommandDescription for PresetsCommand {
    fn description() -> &'static str {
        "List built-in vocabulary presets"
    }

    fn help() -> &'static str {
        "Prints every preset name accepted by --preset and the vocabulary \
         config, with the number of keywords and type names it contains."
    }
}

/// Run the presets command.
pub fn run_presets(args: PresetsArgs, config: Config) -> Result<()> {
    crate::commands::traits::run_command::<PresetsCommand>(args, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_every_preset() {
        let mut out = Vec::new();
        PresetsCommand::new(PresetsArgs, Config::default())
            .run_to(&mut out)
            .unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text.lines().count(), PRESET_NAMES.len() + 1);
        assert!(text.lines().any(|l| l.starts_with("* default")));
        assert!(text.lines().any(|l| l.starts_with("  none")));
    }
}
