pub mod apartments;
pub mod project;

pub use crate::error::ParseError;
pub use apartments::{convert_to_sections, import_apartments, read_apartments, ImportedBuilding};
pub use project::{load_project, parse_project};
