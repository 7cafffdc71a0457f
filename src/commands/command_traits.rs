//! Command pattern interfaces
//!
//! This module defines the core Command pattern interfaces
//! for the CLI application.

use chrono::NaiveDateTime;

use crate::utils::logger::Logger;
use crate::fgdc::errors::FgdcResult;

/// Represents an executable command in the application
pub trait Command {
    /// Execute the command
    ///
    /// # Returns
    /// Result indicating success or an error
    fn execute(&self) -> FgdcResult<()>;
}

/// Factory for creating commands from CLI arguments
pub trait CommandFactory<'a> {
    /// Create a new Command instance based on CLI arguments
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Processing log of this run
    /// * `started` - Timestamp captured when the run began
    ///
    /// # Returns
    /// A command that implements the Command trait, or an error
    fn create_command(
        &self,
        args: &clap::ArgMatches,
        logger: &'a Logger,
        started: NaiveDateTime,
    ) -> FgdcResult<Box<dyn Command + 'a>>;
}
