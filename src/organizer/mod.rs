//! Batch organizer for FGDC metadata directories
//!
//! Scans the top level of a directory, organizes every FGDC record into
//! `<date>_<collection>/<dataset>/`, then archives each collection's
//! user-defined records.

pub mod archive;
pub mod context;
pub mod inspect;
pub mod record_processor;
#[cfg(test)]
mod tests;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use log::{debug, info};

use crate::fgdc::errors::FgdcResult;
use crate::fgdc::layout::layout;
use crate::fgdc::record::{classify, EntryKind};
use crate::utils::logger::Logger;
use crate::utils::progress::ProgressTracker;

pub use archive::{archive_name, archive_user_defined};
pub use context::{log_file_name, RunContext};
pub use inspect::{inspect_record, RecordReport};
pub use record_processor::{process_record, ProcessedRecord};

/// Outcome of a completed run
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Every record processed, in processing order
    pub records: Vec<ProcessedRecord>,
    /// Names logged as skipped
    pub skipped: Vec<String>,
    /// Archives written, one per collection directory
    pub archives: Vec<PathBuf>,
}

/// Organizes the FGDC records found in one directory
pub struct Organizer<'a> {
    /// Directory to scan; outputs are created inside it
    root: PathBuf,
    /// Timestamp used for every name derived during the run
    started: NaiveDateTime,
    /// Processing log
    logger: &'a Logger,
    /// File names ignored during the scan
    excluded: Vec<String>,
}

impl<'a> Organizer<'a> {
    /// Create an organizer for `root`
    ///
    /// The logger's own file is excluded from the scan.
    pub fn new(root: &Path, started: NaiveDateTime, logger: &'a Logger) -> Self {
        let excluded = logger
            .path()
            .and_then(|p| p.file_name())
            .map(|name| vec![name.to_string_lossy().into_owned()])
            .unwrap_or_default();

        Organizer {
            root: root.to_path_buf(),
            started,
            logger,
            excluded,
        }
    }

    /// Ignore a file name during the scan
    pub fn exclude(mut self, file_name: &str) -> Self {
        self.excluded.push(file_name.to_string());
        self
    }

    /// Top-level files of the directory, sorted by name, with their classification
    ///
    /// Subdirectories and excluded names are left out.
    pub fn scan(&self) -> FgdcResult<Vec<(String, EntryKind)>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if entry.path().is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if self.excluded.contains(&name) {
                debug!("Ignoring {}", name);
                continue;
            }
            names.push(name);
        }
        names.sort();

        Ok(names
            .into_iter()
            .map(|name| {
                let kind = classify(&self.root, &name);
                (name, kind)
            })
            .collect())
    }

    /// Organize every record, then archive each collection created
    ///
    /// Any failure other than a missing sidecar aborts the run; output
    /// already written stays on disk.
    pub fn run(&self) -> FgdcResult<RunSummary> {
        let entries = self.scan()?;
        let mut ctx = RunContext::new(&self.root, self.started, self.logger);
        let mut summary = RunSummary::default();

        let progress = ProgressTracker::new(entries.len() as u64, "Organizing FGDC records");
        for (name, kind) in &entries {
            progress.set_message(name);
            match kind {
                EntryKind::Record(record) => summary.records.push(process_record(&mut ctx, record)?),
                EntryKind::NotARecord | EntryKind::Unsupported => {
                    ctx.note(&format!("SKIPPING: {}", name))?;
                    summary.skipped.push(name.clone());
                }
            }
            progress.increment(1);
        }
        progress.finish();

        for collection_dir in ctx.collections() {
            let archive = archive_user_defined(collection_dir, ctx.layout())?;
            ctx.note(&format!(
                "ZIPPING: {} to: {}",
                collection_dir.join(&ctx.layout().user_defined_dir).display(),
                archive_name(collection_dir, ctx.layout())?
            ))?;
            summary.archives.push(archive);
        }

        info!(
            "Organized {} record(s) into {} collection(s)",
            summary.records.len(),
            summary.archives.len()
        );
        Ok(summary)
    }

    /// Report what each record carries without writing any output
    pub fn inspect(&self) -> FgdcResult<Vec<RecordReport>> {
        let mut reports = Vec::new();
        for (_, kind) in self.scan()? {
            if let EntryKind::Record(record) = kind {
                let report = inspect_record(&self.root, &record, layout())?;
                for line in report.lines() {
                    self.logger.log(&line)?;
                }
                reports.push(report);
            }
        }
        Ok(reports)
    }
}
