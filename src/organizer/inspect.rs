//! Read-only inspection of FGDC records

use std::path::Path;

use crate::fgdc::errors::FgdcResult;
use crate::fgdc::extension::Extension;
use crate::fgdc::identifiers::{extract_fields, pair_fields};
use crate::fgdc::layout::LayoutDefinitions;
use crate::fgdc::record::SourceRecord;
use crate::organizer::record_processor::load_document;

/// What organizing a record would use
#[derive(Debug, Clone, PartialEq)]
pub struct RecordReport {
    pub file_name: String,
    /// `(collection, dataset)` identifier pairs in document order
    pub identifiers: Vec<(String, String)>,
    /// Whether the root carries the user-defined section
    pub has_user_defined: bool,
    /// Sidecar file names and whether each exists
    pub sidecars: Vec<(String, bool)>,
}

impl RecordReport {
    /// Human-readable lines for the processing log
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![format!("inspecting: {}", self.file_name)];
        if self.identifiers.is_empty() {
            lines.push("  no dataset identifier".to_string());
        }
        for (collection, dataset) in &self.identifiers {
            lines.push(format!("  collection: {} dataset: {}", collection, dataset));
        }
        if !self.has_user_defined {
            lines.push("  WARN: no user-defined section".to_string());
        }
        for (name, present) in &self.sidecars {
            let state = if *present { "found" } else { "missing" };
            lines.push(format!("  sidecar {}: {}", name, state));
        }
        lines
    }
}

/// Inspect a record without writing anything
pub fn inspect_record(root: &Path, record: &SourceRecord, layout: &LayoutDefinitions) -> FgdcResult<RecordReport> {
    let document = load_document(&record.path)?;
    let identifiers = pair_fields(&record.file_name, &extract_fields(&document, layout)?)?;
    let has_user_defined = document.root.child(&layout.user_defined_element).is_some();

    let sidecars = Extension::ALL
        .iter()
        .map(|ext| {
            let name = record.sidecar_name(*ext);
            let present = root.join(&name).is_file();
            (name, present)
        })
        .collect();

    Ok(RecordReport {
        file_name: record.file_name.clone(),
        identifiers,
        has_user_defined,
        sidecars,
    })
}
