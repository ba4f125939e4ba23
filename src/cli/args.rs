//! CLI argument definitions.
//!
//! The installer takes no positional arguments; everything else happens
//! through interactive prompts. The flags below only tune output.

use clap::Parser;

use crate::ui::OutputMode;

/// AI Coding Kit - Install AI-assisted development tools and their prerequisites.
#[derive(Debug, Parser)]
#[command(name = "ai-coding-kit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Show output of install commands
    #[arg(short, long)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Output mode selected by the flags; `--quiet` wins over `--verbose`.
    pub fn output_mode(&self) -> OutputMode {
        OutputMode::from_flags(self.verbose, self.quiet)
    }
}
