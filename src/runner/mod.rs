//! Tool selection and installation orchestration.

pub mod orchestrator;
pub mod selection;

pub use orchestrator::ToolInstaller;
pub use selection::{dependency_union, parse_selection, Selection};
