mod path;
mod walker;

pub use path::clean;
pub use walker::{scan_projects, ProjectScanner, Visit};
