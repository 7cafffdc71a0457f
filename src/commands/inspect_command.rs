//! Record inspection command
//!
//! Reports the identifiers and sidecars of each FGDC record in the
//! current working directory without writing any output.

use std::env;
use std::path::PathBuf;

use chrono::NaiveDateTime;
use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::commands::organize_command::executable_name;
use crate::fgdc::errors::FgdcResult;
use crate::organizer::Organizer;
use crate::utils::logger::Logger;

/// Command for inspecting FGDC records
pub struct InspectCommand<'a> {
    /// Directory being inspected
    root: PathBuf,
    /// Run timestamp
    started: NaiveDateTime,
    /// Processing log
    logger: &'a Logger,
}

impl<'a> InspectCommand<'a> {
    pub fn new(_args: &ArgMatches, logger: &'a Logger, started: NaiveDateTime) -> FgdcResult<Self> {
        Ok(InspectCommand {
            root: env::current_dir()?,
            started,
            logger,
        })
    }
}

impl<'a> Command for InspectCommand<'a> {
    fn execute(&self) -> FgdcResult<()> {
        info!("Inspecting FGDC records in {}", self.root.display());

        let mut organizer = Organizer::new(&self.root, self.started, self.logger);
        if let Some(name) = executable_name() {
            organizer = organizer.exclude(&name);
        }

        for report in organizer.inspect()? {
            for line in report.lines() {
                info!("{}", line);
            }
        }
        Ok(())
    }
}
