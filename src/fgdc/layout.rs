//! FGDC layout definitions
//!
//! Element names, identifier labels and output names used while
//! reorganizing FGDC records. The table is embedded from
//! `fgdc_layout.toml` and parsed once on first use.

use lazy_static::lazy_static;
use crate::fgdc::errors::{FgdcError, FgdcResult};

lazy_static! {
    // Parse the embedded TOML file at startup
    static ref FGDC_LAYOUT: LayoutDefinitions = {
        let content = include_str!("../../fgdc_layout.toml");
        LayoutDefinitions::from_str(content).unwrap_or_else(|e| {
                eprintln!("Warning: Failed to parse FGDC layout definitions: {}", e);
                LayoutDefinitions::default()
            })
    };
}

/// Names that locate identifiers and the user-defined section in a record
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutDefinitions {
    /// File name prefix marking a source record
    pub record_prefix: String,
    /// Repeated element holding one label/value pair
    pub field_element: String,
    /// Label child of a field element
    pub label_element: String,
    /// Value child of a field element
    pub value_element: String,
    /// Direct child of the root holding the user-defined section
    pub user_defined_element: String,
    /// Label text of the collection identifier
    pub collection_label: String,
    /// Label text of the dataset identifier
    pub dataset_label: String,
    /// Per-collection directory receiving full records
    pub user_defined_dir: String,
    /// Prefix of the processing log file name
    pub log_prefix: String,
}

impl Default for LayoutDefinitions {
    fn default() -> Self {
        LayoutDefinitions {
            record_prefix: "FGDC_".to_string(),
            field_element: "smusrtxt".to_string(),
            label_element: "smusrlbl".to_string(),
            value_element: "smusrval".to_string(),
            user_defined_element: "smusrdef".to_string(),
            collection_label: "collection-huid".to_string(),
            dataset_label: "data-set-huid".to_string(),
            user_defined_dir: "fgdc-usrdef".to_string(),
            log_prefix: "processing_output_".to_string(),
        }
    }
}

impl LayoutDefinitions {
    /// Parse layout definitions from a TOML string
    ///
    /// Keys missing from the table keep their built-in values.
    pub fn from_str(content: &str) -> FgdcResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(FgdcError::GenericError(format!("Failed to parse TOML: {}", e))),
        };

        let mut defs = LayoutDefinitions::default();

        Self::read_key(&toml_value, "record", "prefix", &mut defs.record_prefix);
        Self::read_key(&toml_value, "elements", "field", &mut defs.field_element);
        Self::read_key(&toml_value, "elements", "label", &mut defs.label_element);
        Self::read_key(&toml_value, "elements", "value", &mut defs.value_element);
        Self::read_key(&toml_value, "elements", "user_defined", &mut defs.user_defined_element);
        Self::read_key(&toml_value, "labels", "collection", &mut defs.collection_label);
        Self::read_key(&toml_value, "labels", "dataset", &mut defs.dataset_label);
        Self::read_key(&toml_value, "output", "user_defined_dir", &mut defs.user_defined_dir);
        Self::read_key(&toml_value, "output", "log_prefix", &mut defs.log_prefix);

        Ok(defs)
    }

    fn read_key(toml_value: &toml::Value, table_name: &str, key: &str, target: &mut String) {
        if let Some(value) = toml_value
            .get(table_name)
            .and_then(|table| table.get(key))
            .and_then(|v| v.as_str())
        {
            *target = value.to_string();
        }
    }
}

/// Get the layout shared by the whole process
pub fn layout() -> &'static LayoutDefinitions {
    &FGDC_LAYOUT
}
