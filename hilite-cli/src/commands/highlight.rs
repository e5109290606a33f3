//! Highlight command implementation.
//!
//! Renders each input file to HTML. Files are independent, so they are
//! processed in parallel on a dedicated rayon pool sharing one
//! [`Highlighter`].

use std::collections::HashSet;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use hilite_html::{Highlighter, RenderOptions};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use tracing::{debug, error, info};

use crate::commands::common::{
    check_output_writable, error_messages, output_path_for, read_source, VocabularyOverrides,
    STDIN_PATH,
};
use crate::commands::traits::{Command, CommandDescription};
use crate::config::Config;
use crate::error::{HiliteError, Result};

/// Arguments for the highlight command.
#[derive(Debug, Clone, Default)]
pub struct HighlightArgs {
    /// Input files.
    pub files: Vec<PathBuf>,
    /// Output directory (default: from config).
    pub output: Option<PathBuf>,
    /// Print to stdout instead of writing files.
    pub stdout: bool,
    /// Skip normalization.
    pub raw: bool,
    /// Vocabulary adjustments.
    pub vocabulary: VocabularyOverrides,
    /// Emit bare spans without `<pre><code>`.
    pub no_wrap: bool,
    /// Parallel jobs (default: from config).
    pub jobs: Option<usize>,
    /// Overwrite existing outputs.
    pub force: bool,
}

/// What happened to one input file.
#[derive(Debug)]
enum Outcome {
    Written(PathBuf),
    Rendered(String),
}

/// Highlight command handler.
pub struct HighlightCommand {
    args: HighlightArgs,
    config: Config,
}

impl HighlightCommand {
    /// Execute the command.
    pub fn run(&self) -> Result<()> {
        let start_time = Instant::now();
        self.validate_input_files()?;

        let highlighter = self.build_highlighter()?;
        let output_dir = self.prepare_output_dir()?;
        let results = self.process_all_files(&highlighter, output_dir.as_deref())?;

        let failed = self.report(&results)?;
        info!(
            files = results.len(),
            failed,
            elapsed_s = start_time.elapsed().as_secs_f64(),
            "highlighting finished"
        );

        if failed > 0 {
            return Err(HiliteError::CommandExecution(format!(
                "{} {}",
                failed,
                error_messages::FILES_FAILED
            )));
        }
        Ok(())
    }

    fn validate_input_files(&self) -> Result<()> {
        if self.args.files.is_empty() {
            return Err(HiliteError::Validation(
                error_messages::NO_INPUT_FILES.to_string(),
            ));
        }
        let stdin_inputs = self
            .args
            .files
            .iter()
            .filter(|path| path.as_path() == Path::new(STDIN_PATH))
            .count();
        if stdin_inputs > 1 {
            return Err(HiliteError::Validation(
                error_messages::STDIN_MORE_THAN_ONCE.to_string(),
            ));
        }
        if self.args.stdout {
            return Ok(());
        }

        let mut seen = HashSet::new();
        for path in &self.args.files {
            if let Some(name) = path.file_name() {
                if !seen.insert(name) {
                    return Err(HiliteError::Validation(format!(
                        "{}: {}",
                        error_messages::DUPLICATE_OUTPUT_NAME,
                        path.display()
                    )));
                }
            }
        }
        Ok(())
    }

    /// Get the effective render options.
    pub fn render_options(&self) -> RenderOptions {
        let mut options = self.config.render.clone();
        if self.args.no_wrap {
            options.wrap = false;
        }
        options
    }

    fn build_highlighter(&self) -> Result<Highlighter> {
        let vocabulary = self.args.vocabulary.resolve(&self.config)?;
        debug!(
            keywords = vocabulary.keyword_count(),
            type_names = vocabulary.type_name_count(),
            "vocabulary resolved"
        );
        Ok(Highlighter::new(vocabulary, self.render_options()))
    }

    /// Get the output directory, creating it if needed. `None` with `--stdout`.
    fn prepare_output_dir(&self) -> Result<Option<PathBuf>> {
        if self.args.stdout {
            return Ok(None);
        }

        let dir = self
            .args
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(&self.config.output_dir));

        if dir.exists() && !dir.is_dir() {
            return Err(HiliteError::Validation(format!(
                "{}: {}",
                error_messages::OUTPUT_NOT_DIR,
                dir.display()
            )));
        }
        std::fs::create_dir_all(&dir)?;
        Ok(Some(dir))
    }

    fn jobs(&self) -> usize {
        self.args.jobs.unwrap_or(self.config.jobs).max(1)
    }

    fn process_all_files(
        &self,
        highlighter: &Highlighter,
        output_dir: Option<&Path>,
    ) -> Result<Vec<(PathBuf, Result<Outcome>)>> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(self.jobs())
            .build()
            .map_err(|e| HiliteError::CommandExecution(format!("thread pool: {}", e)))?;

        // collect keeps input order, which --stdout relies on
        Ok(pool.install(|| {
            self.args
                .files
                .par_iter()
                .map(|path| (path.clone(), self.highlight_file(highlighter, path, output_dir)))
                .collect()
        }))
    }

    fn highlight_file(
        &self,
        highlighter: &Highlighter,
        input: &Path,
        output_dir: Option<&Path>,
    ) -> Result<Outcome> {
        let source = read_source(input)?;
        let html = if self.args.raw {
            highlighter.highlight_raw(&source)
        } else {
            highlighter.highlight(&source)
        };

        // stdin has no file name to derive an output path from
        let output_dir = output_dir.filter(|_| input != Path::new(STDIN_PATH));
        let Some(dir) = output_dir else {
            return Ok(Outcome::Rendered(html));
        };

        let output_path = output_path_for(input, dir)?;
        check_output_writable(&output_path, self.args.force)?;
        std::fs::write(&output_path, html)?;
        debug!(input = %input.display(), output = %output_path.display(), "wrote");
        Ok(Outcome::Written(output_path))
    }

    /// Prints rendered output and logs failures. Returns the failure count.
    fn report(&self, results: &[(PathBuf, Result<Outcome>)]) -> Result<usize> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        let mut failed = 0;

        for (input, result) in results {
            match result {
                Ok(Outcome::Rendered(html)) => writeln!(out, "{}", html)?,
                Ok(Outcome::Written(path)) => {
                    info!("{} -> {}", input.display(), path.display())
                },
                Err(e) => {
                    failed += 1;
                    error!("failed to highlight {}: {}", input.display(), e);
                },
            }
        }

        out.flush()?;
        Ok(failed)
    }
}

impl Command for HighlightCommand {
    type Args = HighlightArgs;
    type Output = ();

    fn new(args: Self::Args, config: Config) -> Self {
        Self { args, config }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "highlight"
    }
}

impl CommandDescription for HighlightCommand {
    fn description() -> &'static str {
        "Render source files as syntax-highlighted HTML"
    }

    fn help() -> &'static str {
        "Normalizes each input file, classifies its tokens and writes \
         <file>.html to the output directory, one span per token."
    }
}

/// Run the highlight command.
pub fn run_highlight(args: HighlightArgs, config: Config) -> Result<()> {
    crate::commands::traits::run_command::<HighlightCommand>(args, config)
}
