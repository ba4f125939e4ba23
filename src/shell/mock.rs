//! In-memory host for testing.
//!
//! `MockHost` implements the [`Host`] trait without touching the machine.
//! Commands "exist" only when registered, every invocation is recorded, and
//! selected commands can be configured to fail.
//!
//! # Example
//!
//! ```
//! use ai_coding_kit::shell::{Host, MockHost, OsFamily, RunOptions};
//!
//! let host = MockHost::new(OsFamily::Darwin).with_commands(&["brew"]);
//! assert!(host.command_exists("brew"));
//!
//! let result = host.run(&["brew", "install", "node"], RunOptions::default());
//! assert!(result.success);
//! assert_eq!(host.invocations(), vec!["brew install node".to_string()]);
//! ```

use std::cell::RefCell;
use std::collections::HashSet;
use std::time::Duration;

use super::command::{shell_join, CommandResult, RunOptions};
use super::host::Host;
use super::platform::OsFamily;

/// A recorded command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// The joined command line.
    pub command: String,
    /// Options it was run with.
    pub options: RunOptions,
}

/// Fake host that records everything it is asked to do.
#[derive(Debug)]
pub struct MockHost {
    os: OsFamily,
    elevated: bool,
    present: HashSet<String>,
    failing: HashSet<String>,
    stdout: String,
    invocations: RefCell<Vec<Invocation>>,
    lookups: RefCell<Vec<String>>,
}

impl MockHost {
    /// Create a host for the given OS with no commands installed.
    pub fn new(os: OsFamily) -> Self {
        Self {
            os,
            elevated: false,
            present: HashSet::new(),
            failing: HashSet::new(),
            stdout: String::new(),
            invocations: RefCell::new(Vec::new()),
            lookups: RefCell::new(Vec::new()),
        }
    }

    /// Mark commands as present on the search path.
    pub fn with_commands(mut self, names: &[&str]) -> Self {
        self.present.extend(names.iter().map(|s| s.to_string()));
        self
    }

    /// Make commands fail.
    ///
    /// A pattern matches either the program name or the full joined
    /// command line of an invocation.
    pub fn with_failing(mut self, patterns: &[&str]) -> Self {
        self.failing.extend(patterns.iter().map(|s| s.to_string()));
        self
    }

    /// Pretend to run with administrator rights.
    pub fn elevated(mut self) -> Self {
        self.elevated = true;
        self
    }

    /// Stdout returned by every invocation.
    pub fn with_stdout(mut self, stdout: &str) -> Self {
        self.stdout = stdout.to_string();
        self
    }

    /// Joined command lines of every invocation, in order.
    pub fn invocations(&self) -> Vec<String> {
        self.invocations
            .borrow()
            .iter()
            .map(|i| i.command.clone())
            .collect()
    }

    /// Every invocation with its options.
    pub fn detailed_invocations(&self) -> Vec<Invocation> {
        self.invocations.borrow().clone()
    }

    /// Names passed to `command_exists`, in order.
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.borrow().clone()
    }

    /// Check whether any invocation contained `needle`.
    pub fn ran(&self, needle: &str) -> bool {
        self.invocations
            .borrow()
            .iter()
            .any(|i| i.command.contains(needle))
    }
}

impl Host for MockHost {
    fn os(&self) -> &OsFamily {
        &self.os
    }

    fn command_exists(&self, name: &str) -> bool {
        self.lookups.borrow_mut().push(name.to_string());
        self.present.contains(name)
    }

    fn is_elevated(&self) -> bool {
        self.elevated
    }

    fn run(&self, argv: &[&str], options: RunOptions) -> CommandResult {
        let command = shell_join(argv);
        self.invocations.borrow_mut().push(Invocation {
            command: command.clone(),
            options,
        });

        let program = argv.first().copied().unwrap_or_default();
        let fails = self.failing.contains(program) || self.failing.contains(&command);

        if fails && options.check {
            CommandResult::failure(
                Some(1),
                self.stdout.clone(),
                format!("{}: simulated failure", program),
                Duration::ZERO,
            )
        } else {
            CommandResult::success(self.stdout.clone(), String::new(), Duration::ZERO)
        }
    }
}
