//! Common types and utilities for hilite commands.

use std::io::Read;
use std::path::{Path, PathBuf};

use hilite_lex::Vocabulary;

use crate::config::{Config, VocabularyConfig};
use crate::error::{HiliteError, Result};

/// Path argument meaning "read standard input".
pub const STDIN_PATH: &str = "-";

/// Extension appended to highlighted output files.
pub const OUTPUT_EXTENSION: &str = "html";

// ============================================================================
// Vocabulary Overrides
// ============================================================================

/// Command-line adjustments to the configured vocabulary.
#[derive(Debug, Clone, Default)]
pub struct VocabularyOverrides {
    /// Replaces the configured preset.
    pub preset: Option<String>,
    /// Keywords added on top of the configuration.
    pub keywords: Vec<String>,
    /// Type names added on top of the configuration.
    pub type_names: Vec<String>,
}

impl VocabularyOverrides {
    /// Applies the overrides to the configured vocabulary settings.
    pub fn apply(&self, base: &VocabularyConfig) -> VocabularyConfig {
        let mut merged = base.clone();
        if let Some(preset) = &self.preset {
            merged.preset = preset.clone();
        }
        merged.keywords.extend(self.keywords.iter().cloned());
        merged.type_names.extend(self.type_names.iter().cloned());
        merged
    }

    /// Resolves the effective vocabulary.
    pub fn resolve(&self, config: &Config) -> Result<Vocabulary> {
        let effective = Config {
            vocabulary: self.apply(&config.vocabulary),
            ..config.clone()
        };
        effective.vocabulary()
    }
}

// ============================================================================
// Input and Output Paths
// ============================================================================

/// Reads a source file, or standard input for `-`.
pub fn read_source(path: &Path) -> Result<String> {
    if path == Path::new(STDIN_PATH) {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        return Ok(source);
    }

    if !path.is_file() {
        return Err(HiliteError::Validation(format!(
            "{}: {}",
            error_messages::INPUT_NOT_FILE,
            path.display()
        )));
    }

    std::fs::read_to_string(path).map_err(|e| {
        HiliteError::FileOperation(format!("{}: {}", path.display(), e))
    })
}

/// Computes `<output_dir>/<file name>.html` for an input file.
pub fn output_path_for(input: &Path, output_dir: &Path) -> Result<PathBuf> {
    let file_name = input.file_name().ok_or_else(|| {
        HiliteError::Validation(format!(
            "{}: {}",
            error_messages::INVALID_FILE_PATH,
            input.display()
        ))
    })?;

    let mut name = file_name.to_os_string();
    name.push(".");
    name.push(OUTPUT_EXTENSION);
    Ok(output_dir.join(name))
}

/// Refuses to overwrite an existing file unless `force` is set.
pub fn check_output_writable(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(HiliteError::FileOperation(format!(
            "{}: {} (use --force to overwrite)",
            error_messages::OUTPUT_FILE_EXISTS,
            path.display()
        )));
    }
    Ok(())
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message prefixes.
pub mod error_messages {
    /// No input files were given.
    pub const NO_INPUT_FILES: &str = "No input files specified";

    /// Input path is missing or not a regular file.
    pub const INPUT_NOT_FILE: &str = "Input path is not a file";

    /// Input path has no file name component.
    pub const INVALID_FILE_PATH: &str = "Invalid file path";

    /// Output already exists.
    pub const OUTPUT_FILE_EXISTS: &str = "Output file already exists";

    /// Two inputs would be written to the same output file.
    pub const DUPLICATE_OUTPUT_NAME: &str = "Duplicate output file name";

    /// Standard input was named more than once.
    pub const STDIN_MORE_THAN_ONCE: &str = "Standard input (-) can only be read once";

    /// Output path exists but is not a directory.
    pub const OUTPUT_NOT_DIR: &str = "Output path is not a directory";

    /// Target path exists but is not a directory.
    pub const TARGET_NOT_DIR: &str = "Target path is not a directory";

    /// Some files failed.
    pub const FILES_FAILED: &str = "file(s) failed to highlight";
}
