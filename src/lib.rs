pub mod fgdc;
pub mod xml;
pub mod organizer;
pub mod commands;
pub mod utils;

pub use fgdc::{FgdcError, FgdcResult, Extension, SourceRecord};
pub use organizer::{Organizer, RunContext, RunSummary};
pub use xml::Document;
