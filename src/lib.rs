//! AI Coding Kit - Interactive installer for AI-assisted development tools.
//!
//! Presents a catalog of tools, lets the user pick any number of them,
//! installs their missing prerequisites (npm, uv, git) with a strategy
//! suited to the host OS, then runs each tool's own install command.
//!
//! # Modules
//!
//! - [`cli`] - Command-line flags and the top-level session
//! - [`error`] - Error types and result aliases
//! - [`registry`] - The catalog of installable tools
//! - [`requirements`] - Prerequisite dependencies and their installers
//! - [`runner`] - Selection parsing and installation orchestration
//! - [`shell`] - Process execution and host probing
//! - [`ui`] - Interactive prompts, spinners, and terminal output
//!
//! # Example
//!
//! ```
//! use ai_coding_kit::registry::ToolRegistry;
//! use ai_coding_kit::runner::ToolInstaller;
//! use ai_coding_kit::shell::{MockHost, OsFamily};
//! use ai_coding_kit::ui::MockUI;
//!
//! let registry = ToolRegistry::builtin();
//! let host = MockHost::new(OsFamily::Linux).with_commands(&["npm"]);
//! let mut ui = MockUI::new();
//! ui.set_prompt_response("tool_selection", "1");
//!
//! let installed = ToolInstaller::new(&registry, &host)
//!     .choose_and_install(&mut ui)
//!     .unwrap();
//! assert!(installed);
//! assert!(host.ran("npm install -g @fission-ai/openspec@latest"));
//! ```

pub mod cli;
pub mod error;
pub mod registry;
pub mod requirements;
pub mod runner;
pub mod shell;
pub mod ui;

pub use error::{KitError, Result};
