//! Init command implementation.
//!
//! Writes a default `hilite.toml` so a documentation tree can pin its
//! vocabulary and render options.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::commands::common::{check_output_writable, error_messages};
use crate::commands::traits::{Command, CommandDescription};
use crate::config::{Config, CONFIG_FILE_NAME};
use crate::error::{HiliteError, Result};

/// Arguments for the init command.
#[derive(Debug, Clone, Default)]
pub struct InitArgs {
    /// Overwrite an existing configuration file.
    pub force: bool,
    /// Directory to initialize (default: current directory).
    pub path: Option<PathBuf>,
}

/// Init command handler.
pub struct InitCommand {
    args: InitArgs,
}

impl InitCommand {
    /// Execute the command. Returns the path of the written file.
    pub fn run(&self) -> Result<PathBuf> {
        let target = self
            .args
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        self.prepare_directory(&target)?;

        let config_path = target.join(CONFIG_FILE_NAME);
        check_output_writable(&config_path, self.args.force)?;
        Config::default().save_to_path(&config_path)?;

        info!("created {}", config_path.display());
        Ok(config_path)
    }

    fn prepare_directory(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::create_dir_all(path)?;
            return Ok(());
        }

        if !path.is_dir() {
            return Err(HiliteError::Validation(format!(
                "{}: {}",
                error_messages::TARGET_NOT_DIR,
                path.display()
            )));
        }
        Ok(())
    }
}

impl Command for InitCommand {
    type Args = InitArgs;
    type Output = PathBuf;

    fn new(args: Self::Args, _config: Config) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "init"
    }
}

impl CommandDescription for InitCommand {
    fn description() -> &'static str {
        "Write a default hilite.toml"
    }

    fn help() -> &'static str {
        "Creates hilite.toml with the default vocabulary preset and render \
         options in the specified or current directory."
    }
}

/// Run the init command.
pub fn run_init(args: InitArgs, config: Config) -> Result<()> {
    crate::commands::traits::run_command::<InitCommand>(args, config).map(|_| ())
}
