//! Tests for user-defined archives

extern crate std;

use std::fs::{self, File};
use std::io::Read;

use crate::fgdc::errors::FgdcError;
use crate::fgdc::layout::layout;
use crate::organizer::archive::{archive_name, archive_user_defined};

#[test]
fn test_archive_name() {
    let name = archive_name(std::path::Path::new("/out/20240115_C1"), layout()).unwrap();
    std::assert_eq!(name, "20240115_C1_fgdc-usrdef.zip");
}

#[test]
fn test_archive_contains_flat_user_defined_files() {
    let dir = tempfile::tempdir().unwrap();
    let collection = dir.path().join("20240115_C1");
    let usrdef = collection.join("fgdc-usrdef");
    fs::create_dir_all(&usrdef).unwrap();
    fs::write(usrdef.join("S2.xml"), "<b/>").unwrap();
    fs::write(usrdef.join("S1.xml"), "<a/>").unwrap();

    let archive = archive_user_defined(&collection, layout()).unwrap();
    std::assert_eq!(archive, collection.join("20240115_C1_fgdc-usrdef.zip"));

    let mut zip = zip::ZipArchive::new(File::open(&archive).unwrap()).unwrap();
    let names: Vec<String> = zip.file_names().map(|n| n.to_string()).collect::<Vec<_>>();
    let mut sorted = names.clone();
    sorted.sort();
    std::assert_eq!(sorted, vec!["S1.xml".to_string(), "S2.xml".to_string()]);

    let mut content = String::new();
    zip.by_name("S1.xml").unwrap().read_to_string(&mut content).unwrap();
    std::assert_eq!(content, "<a/>");
}

#[test]
fn test_missing_user_defined_dir_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let collection = dir.path().join("20240115_C1");
    fs::create_dir(&collection).unwrap();

    match archive_user_defined(&collection, layout()) {
        Err(FgdcError::ArchiveError(msg)) => std::assert!(msg.contains("fgdc-usrdef")),
        other => std::panic!("unexpected result: {:?}", other),
    }
    std::assert!(!collection.join("20240115_C1_fgdc-usrdef.zip").exists());
}
