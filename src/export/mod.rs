pub mod csv;
pub mod json;

pub use crate::error::ExportError;
pub use csv::{export_csv, SUMMARY_LABEL};
pub use json::export_json;
