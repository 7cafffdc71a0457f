//! Processing of a single FGDC source record
//!
//! Creates the dataset directory, fans the sidecar files out into it and
//! writes the full and stripped renderings of the record.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::fgdc::errors::{FgdcError, FgdcResult};
use crate::fgdc::extension::Extension;
use crate::fgdc::identifiers::{extract_fields, pair_fields};
use crate::fgdc::record::SourceRecord;
use crate::organizer::context::RunContext;
use crate::xml::{write_document, Document, Stripped};

/// Where a processed record ended up
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedRecord {
    pub collection_dir: PathBuf,
    pub dataset_dir: PathBuf,
    pub dataset_id: String,
    /// Sidecar file names that were not found
    pub missing_sidecars: Vec<String>,
}

/// Parse a record from disk
pub fn load_document(path: &Path) -> FgdcResult<Document> {
    let bytes = fs::read(path)?;
    Document::from_bytes(&bytes)
}

/// Organize one source record into its collection and dataset directories
pub fn process_record(ctx: &mut RunContext, record: &SourceRecord) -> FgdcResult<ProcessedRecord> {
    ctx.note(&format!("processing: {}", record.file_name))?;
    info!("Processing {}", record.file_name);

    let layout = ctx.layout();
    let document = load_document(&record.path)?;
    let pairs = pair_fields(&record.file_name, &extract_fields(&document, layout)?)?;
    let stripped = strip_user_defined(&document, &layout.user_defined_element)?;

    let (collection_id, dataset_id) = match pairs.as_slice() {
        [pair] => pair.clone(),
        [] => return Err(FgdcError::MissingDataset(record.file_name.clone())),
        _ => {
            return Err(FgdcError::MultipleDatasets {
                record: record.file_name.clone(),
                count: pairs.len(),
            })
        }
    };
    let collection_dir = ctx.resolve_collection(&collection_id)?;
    let dataset_dir = create_dataset_dir(&collection_dir, &dataset_id)?;

    let missing_sidecars = copy_sidecars(ctx, record, &dataset_dir, &dataset_id)?;

    // Full record, user-defined section included
    let usrdef_dir = collection_dir.join(&layout.user_defined_dir);
    if !usrdef_dir.is_dir() {
        fs::create_dir(&usrdef_dir).map_err(|source| FgdcError::DirectoryCreation {
            path: usrdef_dir.clone(),
            source,
        })?;
    }
    fs::copy(&record.path, usrdef_dir.join(format!("{}{}", dataset_id, record.extension)))?;
    fs::copy(
        &record.path,
        dataset_dir.join(format!("{}_{}{}", dataset_id, layout.user_defined_dir, record.extension)),
    )?;

    write_document(
        &stripped.document,
        &dataset_dir.join(format!("{}{}", dataset_id, record.extension)),
    )?;

    Ok(ProcessedRecord {
        collection_dir,
        dataset_dir,
        dataset_id,
        missing_sidecars,
    })
}

/// Copy of the record without its user-defined section
pub fn strip_user_defined(document: &Document, element: &str) -> FgdcResult<Stripped> {
    document
        .strip_child(element)
        .ok_or_else(|| FgdcError::MissingElement(format!("{}/{}", document.root.name, element)))
}

fn create_dataset_dir(collection_dir: &Path, dataset_id: &str) -> FgdcResult<PathBuf> {
    let dir = collection_dir.join(dataset_id);
    match fs::create_dir(&dir) {
        Ok(()) => Ok(dir),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Err(FgdcError::DuplicateDataset(dir)),
        Err(source) => Err(FgdcError::DirectoryCreation { path: dir, source }),
    }
}

fn copy_sidecars(
    ctx: &RunContext,
    record: &SourceRecord,
    dataset_dir: &Path,
    dataset_id: &str,
) -> FgdcResult<Vec<String>> {
    let mut missing = Vec::new();

    for ext in Extension::ALL {
        let name = record.sidecar_name(ext);
        ctx.note(&format!("  processing: {}", name))?;

        let destination = dataset_dir.join(ext.sidecar_destination(dataset_id));
        match fs::copy(ctx.root().join(&name), &destination) {
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                ctx.note(&format!("  WARN: Could not locate: {}", name))?;
                warn!("Could not locate {}", name);
                missing.push(name);
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(missing)
}
