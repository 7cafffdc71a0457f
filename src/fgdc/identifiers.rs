//! Collection and dataset identifiers carried by an FGDC record
//!
//! Identifiers live in repeated label/value fields of the user-defined
//! section, e.g.
//!
//! ```xml
//! <smusrtxt>
//!   <smusrlbl>collection-huid</smusrlbl>
//!   <smusrval>gpw-v4</smusrval>
//! </smusrtxt>
//! ```

use lazy_static::lazy_static;
use regex::Regex;

use crate::fgdc::errors::{FgdcError, FgdcResult};
use crate::fgdc::layout::LayoutDefinitions;
use crate::xml::{Document, Element};

lazy_static! {
    // A single path component: no separators or control characters
    static ref PATH_COMPONENT: Regex = Regex::new(r"^[^/\\\x00-\x1f\x7f]+$")
        .expect("identifier pattern compiles");
}

/// Kind of identifier a field carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HuidKind {
    Collection,
    Dataset,
}

/// One identifier field, in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuidField {
    pub kind: HuidKind,
    pub value: String,
}

impl HuidField {
    pub fn collection(value: &str) -> Self {
        HuidField { kind: HuidKind::Collection, value: value.to_string() }
    }

    pub fn dataset(value: &str) -> Self {
        HuidField { kind: HuidKind::Dataset, value: value.to_string() }
    }
}

/// Extract identifier fields from a parsed record
///
/// Fields with other labels are ignored. A field without a label, or an
/// identifier field without a usable value, is an error.
pub fn extract_fields(document: &Document, layout: &LayoutDefinitions) -> FgdcResult<Vec<HuidField>> {
    let mut fields = Vec::new();

    for field in document.root.descendants(&layout.field_element) {
        let label = field
            .child(&layout.label_element)
            .ok_or_else(|| FgdcError::MissingElement(format!("{}/{}", layout.field_element, layout.label_element)))?
            .text();

        let kind = if label.trim() == layout.collection_label {
            HuidKind::Collection
        } else if label.trim() == layout.dataset_label {
            HuidKind::Dataset
        } else {
            continue;
        };

        let value = field_value(field, layout)?;
        fields.push(HuidField { kind, value });
    }

    Ok(fields)
}

fn field_value(field: &Element, layout: &LayoutDefinitions) -> FgdcResult<String> {
    let value = field
        .child(&layout.value_element)
        .ok_or_else(|| FgdcError::MissingElement(format!("{}/{}", layout.field_element, layout.value_element)))?
        .text();
    validate_identifier(value.trim())
}

/// Check that an identifier can serve as a single directory name
pub fn validate_identifier(value: &str) -> FgdcResult<String> {
    if value == "." || value == ".." || !PATH_COMPONENT.is_match(value) {
        return Err(FgdcError::InvalidIdentifier(value.to_string()));
    }
    Ok(value.to_string())
}

/// Pair every dataset identifier with the collection identifier preceding it
///
/// Returns `(collection, dataset)` pairs in document order. A dataset with
/// no earlier collection in the same record is rejected rather than borrowing
/// one from another record.
pub fn pair_fields(record: &str, fields: &[HuidField]) -> FgdcResult<Vec<(String, String)>> {
    let mut current: Option<&str> = None;
    let mut pairs = Vec::new();

    for field in fields {
        match field.kind {
            HuidKind::Collection => current = Some(&field.value),
            HuidKind::Dataset => match current {
                Some(collection) => pairs.push((collection.to_string(), field.value.clone())),
                None => {
                    return Err(FgdcError::DatasetWithoutCollection {
                        record: record.to_string(),
                        dataset: field.value.clone(),
                    })
                }
            },
        }
    }

    Ok(pairs)
}
