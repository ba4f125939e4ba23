//! Process execution and host environment probing.

pub mod command;
pub mod host;
pub mod mock;
pub mod platform;

pub use command::{run, shell_join, CommandResult, RunOptions};
pub use host::{Host, SystemHost};
pub use mock::{Invocation, MockHost};
pub use platform::{command_exists, current_os, is_elevated, OsFamily};
