//! Per-collection zip archives of the user-defined records

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use log::info;
use zip::write::FileOptions;
use zip::ZipWriter;

use crate::fgdc::errors::{FgdcError, FgdcResult};
use crate::fgdc::layout::LayoutDefinitions;

/// Archive file name for a collection directory, e.g. `20240115_C1_fgdc-usrdef.zip`
pub fn archive_name(collection_dir: &Path, layout: &LayoutDefinitions) -> FgdcResult<String> {
    let base = collection_dir
        .file_name()
        .ok_or_else(|| FgdcError::ArchiveError(format!("No directory name in {}", collection_dir.display())))?;
    Ok(format!("{}_{}.zip", base.to_string_lossy(), layout.user_defined_dir))
}

/// Zip the contents of the collection's user-defined directory
///
/// Entries are stored by file name only, sorted, with no parent path.
/// The archive is written next to the user-defined directory.
pub fn archive_user_defined(collection_dir: &Path, layout: &LayoutDefinitions) -> FgdcResult<PathBuf> {
    let source_dir = collection_dir.join(&layout.user_defined_dir);
    let destination = collection_dir.join(archive_name(collection_dir, layout)?);

    let mut files = Vec::new();
    let entries = fs::read_dir(&source_dir)
        .map_err(|e| FgdcError::ArchiveError(format!("Cannot read {}: {}", source_dir.display(), e)))?;
    for entry in entries {
        let path = entry?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    let file = File::create(&destination)?;
    let mut zip = ZipWriter::new(file);
    let options = FileOptions::default();
    for path in &files {
        let name = match path.file_name() {
            Some(name) => name.to_string_lossy(),
            None => continue,
        };
        zip.start_file(name, options)?;
        let mut source = File::open(path)?;
        io::copy(&mut source, &mut zip)?;
    }
    zip.finish()?;

    info!("Archived {} file(s) into {}", files.len(), destination.display());
    Ok(destination)
}
