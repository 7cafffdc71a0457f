//! Per-run state threaded through every organizing step

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use log::{debug, info};

use crate::fgdc::errors::{FgdcError, FgdcResult};
use crate::fgdc::layout::{layout, LayoutDefinitions};
use crate::utils::logger::Logger;

/// Name of the processing log for a run started at `started`
pub fn log_file_name(started: NaiveDateTime) -> String {
    format!("{}{}.txt", layout().log_prefix, started.format("%Y%m%d-%H%M%S"))
}

/// State of a single organizing run
///
/// Holds the run timestamp, the processing log and the collection
/// directories created so far, in creation order.
pub struct RunContext<'a> {
    root: PathBuf,
    started: NaiveDateTime,
    logger: &'a Logger,
    layout: &'static LayoutDefinitions,
    collections: Vec<PathBuf>,
}

impl<'a> RunContext<'a> {
    pub fn new(root: &Path, started: NaiveDateTime, logger: &'a Logger) -> Self {
        RunContext {
            root: root.to_path_buf(),
            started,
            logger,
            layout: layout(),
            collections: Vec::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn layout(&self) -> &'static LayoutDefinitions {
        self.layout
    }

    /// Collection directories created during this run
    pub fn collections(&self) -> &[PathBuf] {
        &self.collections
    }

    /// Append a line to the processing log
    pub fn note(&self, message: &str) -> FgdcResult<()> {
        self.logger.log(message)?;
        debug!("{}", message.trim_start());
        Ok(())
    }

    fn date_stamp(&self) -> String {
        self.started.format("%Y%m%d").to_string()
    }

    fn time_stamp(&self) -> String {
        self.started.format("%Y%m%d_%H%M").to_string()
    }

    fn is_known(&self, dir: &Path) -> bool {
        self.collections.iter().any(|known| known == dir)
    }

    /// Resolve, and create on first use, the directory for a collection
    ///
    /// `<date>_<id>` is used unless it already exists from an earlier run,
    /// in which case `<date>_<time>_<id>` is used instead. Later records of
    /// the same run reuse whichever directory was created.
    pub fn resolve_collection(&mut self, collection_id: &str) -> FgdcResult<PathBuf> {
        let dated = self.root.join(format!("{}_{}", self.date_stamp(), collection_id));
        let dir = if dated.exists() && !self.is_known(&dated) {
            self.root.join(format!("{}_{}", self.time_stamp(), collection_id))
        } else {
            dated
        };

        if self.is_known(&dir) {
            debug!("Reusing collection directory {}", dir.display());
            return Ok(dir);
        }

        fs::create_dir(&dir).map_err(|source| FgdcError::DirectoryCreation {
            path: dir.clone(),
            source,
        })?;
        info!("Created collection directory {}", dir.display());
        self.collections.push(dir.clone());
        Ok(dir)
    }
}
