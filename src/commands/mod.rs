//! CLI command implementations
//!
//! This module contains implementations of the commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod organize_command;
pub mod inspect_command;

pub use command_traits::{Command, CommandFactory};
pub use organize_command::OrganizeCommand;
pub use inspect_command::InspectCommand;

use chrono::NaiveDateTime;
use clap::ArgMatches;
use crate::utils::logger::Logger;
use crate::fgdc::errors::FgdcResult;

/// Factory for creating command instances based on CLI arguments
pub struct SedacCommandFactory;

impl SedacCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        SedacCommandFactory
    }
}

impl Default for SedacCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for SedacCommandFactory {
    fn create_command(
        &self,
        args: &ArgMatches,
        logger: &'a Logger,
        started: NaiveDateTime,
    ) -> FgdcResult<Box<dyn Command + 'a>> {
        if args.get_flag("inspect") {
            Ok(Box::new(InspectCommand::new(args, logger, started)?))
        } else {
            // Default to organizing
            Ok(Box::new(OrganizeCommand::new(args, logger, started)?))
        }
    }
}
