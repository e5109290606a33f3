//! Command modules for the hilite CLI.
//!
//! Each subcommand is implemented in its own file following the same
//! pattern: an `*Args` struct filled from the command line, a command type
//! implementing [`traits::Command`], and a `run_*` entry point.

pub mod common;
pub mod traits;

pub mod highlight;
pub mod init;
pub mod presets;
pub mod tokens;

// Re-export command types and functions
pub use highlight::{run_highlight, HighlightArgs};
pub use init::{run_init, InitArgs};
pub use presets::{run_presets, PresetsArgs};
pub use tokens::{run_tokens, TokenFormat, TokensArgs};
