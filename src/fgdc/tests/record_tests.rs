//! Tests for working-directory entry classification

extern crate std;

use std::path::Path;

use crate::fgdc::extension::Extension;
use crate::fgdc::record::{classify, EntryKind};

#[test]
fn test_fgdc_xml_is_a_record() {
    let dir = Path::new("/data");
    match classify(dir, "FGDC_sample.xml") {
        EntryKind::Record(record) => {
            std::assert_eq!(record.stem, "sample");
            std::assert_eq!(record.extension, Extension::Xml);
            std::assert_eq!(record.path, dir.join("FGDC_sample.xml"));
            std::assert_eq!(record.sidecar_name(Extension::Gce), "sample.gce");
        }
        other => std::panic!("expected a record, got {:?}", other),
    }
}

#[test]
fn test_sidecars_are_not_records() {
    let dir = Path::new("/data");
    std::assert_eq!(classify(dir, "sample.xml"), EntryKind::NotARecord);
    std::assert_eq!(classify(dir, "sample.txt"), EntryKind::NotARecord);
    std::assert_eq!(classify(dir, "FGDC_sample.txt"), EntryKind::NotARecord);
    std::assert_eq!(classify(dir, "FGDC_.xml"), EntryKind::NotARecord);
}

#[test]
fn test_other_extensions_are_unsupported() {
    let dir = Path::new("/data");
    std::assert_eq!(classify(dir, "FGDC_sample.pdf"), EntryKind::Unsupported);
    std::assert_eq!(classify(dir, "README"), EntryKind::Unsupported);
    std::assert_eq!(classify(dir, "script.py"), EntryKind::Unsupported);
}
