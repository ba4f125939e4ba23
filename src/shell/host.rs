//! Host capability: the process and environment operations the installer
//! needs, behind a trait so the orchestration can run against a fake.

use super::command::{self, CommandResult, RunOptions};
use super::platform::{self, OsFamily};

/// Operations the installer performs against the host machine.
pub trait Host {
    /// The host OS family.
    fn os(&self) -> &OsFamily;

    /// Check whether a command is present on the search path.
    fn command_exists(&self, name: &str) -> bool;

    /// Check whether the process already has administrator rights.
    fn is_elevated(&self) -> bool;

    /// Run a command to completion.
    fn run(&self, argv: &[&str], options: RunOptions) -> CommandResult;
}

/// The real machine.
#[derive(Debug, Clone)]
pub struct SystemHost {
    os: OsFamily,
}

impl SystemHost {
    /// Create a host for the current machine.
    pub fn detect() -> Self {
        Self {
            os: platform::current_os().clone(),
        }
    }
}

impl Default for SystemHost {
    fn default() -> Self {
        Self::detect()
    }
}

impl Host for SystemHost {
    fn os(&self) -> &OsFamily {
        &self.os
    }

    fn command_exists(&self, name: &str) -> bool {
        let found = platform::command_exists(&self.os, name);
        tracing::debug!(command = name, found, "Checked command presence");
        found
    }

    fn is_elevated(&self) -> bool {
        platform::is_elevated()
    }

    fn run(&self, argv: &[&str], options: RunOptions) -> CommandResult {
        command::run(argv, options)
    }
}
