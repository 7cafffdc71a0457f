//! FGDC record vocabulary
//!
//! This module provides the error type, layout definitions, file
//! classification and identifier extraction for FGDC metadata records.

pub mod errors;
pub mod extension;
pub mod identifiers;
pub mod layout;
pub mod record;
#[cfg(test)]
mod tests;

pub use errors::{FgdcError, FgdcResult};
pub use extension::Extension;
pub use identifiers::{extract_fields, pair_fields, validate_identifier, HuidField, HuidKind};
pub use layout::{layout, LayoutDefinitions};
pub use record::{classify, EntryKind, SourceRecord};
