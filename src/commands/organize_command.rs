//! Directory organizing command
//!
//! Reorganizes the FGDC records of the current working directory.

use std::env;
use std::path::PathBuf;

use chrono::NaiveDateTime;
use clap::ArgMatches;
use log::{debug, info};

use crate::commands::command_traits::Command;
use crate::fgdc::errors::FgdcResult;
use crate::organizer::Organizer;
use crate::utils::logger::Logger;

/// Command for organizing the working directory
pub struct OrganizeCommand<'a> {
    /// Directory being organized
    root: PathBuf,
    /// Run timestamp
    started: NaiveDateTime,
    /// Whether to enable verbose output
    verbose: bool,
    /// Processing log
    logger: &'a Logger,
}

impl<'a> OrganizeCommand<'a> {
    /// Create a new organize command for the current directory
    pub fn new(args: &ArgMatches, logger: &'a Logger, started: NaiveDateTime) -> FgdcResult<Self> {
        Ok(OrganizeCommand {
            root: env::current_dir()?,
            started,
            verbose: args.get_flag("verbose"),
            logger,
        })
    }
}

/// File name of the running executable, left out of the scan
pub(crate) fn executable_name() -> Option<String> {
    env::current_exe()
        .ok()
        .and_then(|path| path.file_name().map(|name| name.to_string_lossy().into_owned()))
}

impl<'a> Command for OrganizeCommand<'a> {
    fn execute(&self) -> FgdcResult<()> {
        info!("Organizing FGDC records in {}", self.root.display());
        if self.verbose {
            debug!("Verbose mode enabled");
        }

        let mut organizer = Organizer::new(&self.root, self.started, self.logger);
        if let Some(name) = executable_name() {
            organizer = organizer.exclude(&name);
        }

        let summary = organizer.run()?;
        debug!(
            "{} record(s), {} skipped, {} archive(s)",
            summary.records.len(),
            summary.skipped.len(),
            summary.archives.len()
        );
        Ok(())
    }
}
