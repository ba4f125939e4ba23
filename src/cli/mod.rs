//! Command-line interface.
//!
//! - [`args`] - Flag definitions using clap's derive macros
//! - [`session`] - The interactive installer session

pub mod args;
pub mod session;

pub use args::Cli;
pub use session::run;
