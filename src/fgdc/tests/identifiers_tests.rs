//! Tests for identifier extraction

extern crate std;

use crate::fgdc::errors::FgdcError;
use crate::fgdc::identifiers::{extract_fields, pair_fields, validate_identifier, HuidField};
use crate::fgdc::layout::layout;
use crate::xml::Document;

fn record(fields: &str) -> Document {
    let xml = format!(
        "<metadata><idinfo/><smusrdef>{}</smusrdef></metadata>",
        fields
    );
    Document::parse(&xml).unwrap()
}

fn field(label: &str, value: &str) -> String {
    format!("<smusrtxt><smusrlbl>{}</smusrlbl><smusrval>{}</smusrval></smusrtxt>", label, value)
}

#[test]
fn test_extracts_both_identifiers_in_order() {
    let doc = record(&format!(
        "{}{}{}",
        field("collection-huid", "C1"),
        field("theme", "population"),
        field("data-set-huid", "S1")
    ));
    let fields = extract_fields(&doc, layout()).unwrap();
    std::assert_eq!(fields, vec![HuidField::collection("C1"), HuidField::dataset("S1")]);
}

#[test]
fn test_values_are_trimmed() {
    let doc = record(&field("collection-huid", "\n   gpw-v4  \n"));
    let fields = extract_fields(&doc, layout()).unwrap();
    std::assert_eq!(fields, vec![HuidField::collection("gpw-v4")]);
}

#[test]
fn test_field_without_label_is_an_error() {
    let doc = record("<smusrtxt><smusrval>C1</smusrval></smusrtxt>");
    std::assert!(std::matches!(extract_fields(&doc, layout()), Err(FgdcError::MissingElement(_))));
}

#[test]
fn test_identifier_without_value_is_an_error() {
    let doc = record("<smusrtxt><smusrlbl>data-set-huid</smusrlbl></smusrtxt>");
    std::assert!(std::matches!(extract_fields(&doc, layout()), Err(FgdcError::MissingElement(_))));
}

#[test]
fn test_path_like_identifier_is_rejected() {
    let doc = record(&field("data-set-huid", "../escape"));
    std::assert!(std::matches!(extract_fields(&doc, layout()), Err(FgdcError::InvalidIdentifier(_))));
}

#[test]
fn test_validate_identifier() {
    std::assert!(validate_identifier("gpw-v4-population-count-rev11").is_ok());
    std::assert!(validate_identifier("sdei.1.0").is_ok());
    std::assert!(validate_identifier("").is_err());
    std::assert!(validate_identifier("..").is_err());
    std::assert!(validate_identifier("a\\b").is_err());
    std::assert!(validate_identifier("a\tb").is_err());
}

#[test]
fn test_pairs_follow_latest_collection() {
    let fields = vec![
        HuidField::collection("C1"),
        HuidField::dataset("S1"),
        HuidField::collection("C2"),
        HuidField::dataset("S2"),
    ];
    let pairs = pair_fields("FGDC_x.xml", &fields).unwrap();
    std::assert_eq!(
        pairs,
        vec![
            ("C1".to_string(), "S1".to_string()),
            ("C2".to_string(), "S2".to_string())
        ]
    );
}

#[test]
fn test_dataset_before_collection_is_rejected() {
    let fields = vec![HuidField::dataset("S1"), HuidField::collection("C1")];
    match pair_fields("FGDC_x.xml", &fields) {
        Err(FgdcError::DatasetWithoutCollection { record, dataset }) => {
            std::assert_eq!(record, "FGDC_x.xml");
            std::assert_eq!(dataset, "S1");
        }
        other => std::panic!("unexpected result: {:?}", other),
    }
}
