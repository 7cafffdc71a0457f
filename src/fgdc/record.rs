//! Classification of working-directory entries

use std::path::{Path, PathBuf};

use crate::fgdc::extension::Extension;
use crate::fgdc::layout::layout;

/// An FGDC source record found in the working directory
#[derive(Debug, Clone, PartialEq)]
pub struct SourceRecord {
    /// Full file name, e.g. `FGDC_sample.xml`
    pub file_name: String,
    /// Name with prefix and extension removed, shared by the sidecars
    pub stem: String,
    /// Extension of the record itself
    pub extension: Extension,
    /// Location of the record on disk
    pub path: PathBuf,
}

impl SourceRecord {
    /// File name of the sidecar carrying the given extension
    pub fn sidecar_name(&self, ext: Extension) -> String {
        format!("{}{}", self.stem, ext.as_str())
    }
}

/// What the organizer should do with a top-level file
#[derive(Debug, Clone, PartialEq)]
pub enum EntryKind {
    /// An FGDC record to process
    Record(SourceRecord),
    /// Accepted extension but not an FGDC record (usually a sidecar)
    NotARecord,
    /// Extension outside the accepted set
    Unsupported,
}

/// Classify a file in `dir` by its name
pub fn classify(dir: &Path, file_name: &str) -> EntryKind {
    let as_path = Path::new(file_name);
    let extension = match as_path.extension().and_then(|e| e.to_str()).and_then(Extension::parse) {
        Some(ext) => ext,
        None => return EntryKind::Unsupported,
    };

    let base = match as_path.file_stem().and_then(|s| s.to_str()) {
        Some(base) => base,
        None => return EntryKind::NotARecord,
    };

    match base.strip_prefix(layout().record_prefix.as_str()) {
        Some(stem) if extension == Extension::Xml && !stem.is_empty() => EntryKind::Record(SourceRecord {
            file_name: file_name.to_string(),
            stem: stem.to_string(),
            extension,
            path: dir.join(file_name),
        }),
        _ => EntryKind::NotARecord,
    }
}
