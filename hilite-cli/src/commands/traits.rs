//! Command traits for the hilite CLI.
//!
//! Every subcommand implements [`Command`] so that dispatch, logging and
//! timing are handled in one place.

use std::time::Instant;

use tracing::{debug, info_span};

use crate::config::Config;
use crate::error::Result;

/// Standard command trait that all hilite commands implement.
pub trait Command: Sized {
    /// The arguments type for this command.
    type Args;

    /// The output type returned by this command.
    type Output;

    /// Create a new command instance from its arguments and the loaded
    /// configuration.
    fn new(args: Self::Args, config: Config) -> Self;

    /// Execute the command.
    fn execute(&self) -> Result<Self::Output>;

    /// Get the command name.
    fn name() -> &'static str;
}

/// Trait for providing command descriptions and help text.
pub trait CommandDescription {
    /// A brief one-line description.
    fn description() -> &'static str;

    /// Multi-line help text explaining usage.
    fn help() -> &'static str;
}

/// Builds and executes a command inside a tracing span named after it.
pub fn run_command<C: Command>(args: C::Args, config: Config) -> Result<C::Output> {
    let span = info_span!("command", name = C::name());
    let _guard = span.enter();

    let start = Instant::now();
    let output = C::new(args, config).execute();
    debug!(elapsed_ms = start.elapsed().as_millis() as u64, ok = output.is_ok(), "command finished");
    output
}
