//! Line-based UI for piped stdin.
//!
//! Each prompt consumes one line of input. An empty line takes the
//! prompt's default; end of input is an error since no answer can ever
//! arrive.

use std::io::{BufRead, Write};

use anyhow::Context;

use crate::error::{KitError, Result};

use super::{parse_yes_no, OutputMode, Prompt, PromptResult, PromptType, SpinnerHandle, UserInterface};

/// UI implementation for non-terminal sessions.
pub struct NonInteractiveUI {
    mode: OutputMode,
    input: Box<dyn BufRead>,
}

impl NonInteractiveUI {
    /// Create a UI that reads answers from stdin.
    pub fn new(mode: OutputMode) -> Self {
        Self::with_input(mode, Box::new(std::io::BufReader::new(std::io::stdin())))
    }

    /// Create a UI that reads answers from the given reader.
    pub fn with_input(mode: OutputMode, input: Box<dyn BufRead>) -> Self {
        Self { mode, input }
    }

    fn read_answer(&mut self, key: &str) -> Result<String> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .with_context(|| format!("failed to read answer for '{}'", key))?;
        if read == 0 {
            return Err(KitError::PromptClosed {
                key: key.to_string(),
            });
        }
        Ok(line.trim().to_string())
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("⚠ {}", msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        let hint = match (&prompt.prompt_type, prompt.default.as_deref()) {
            (PromptType::Confirm, Some(d)) if parse_yes_no(d) == Some(true) => " [Y/n]".to_string(),
            (PromptType::Confirm, _) => " [y/N]".to_string(),
            (PromptType::Input, Some(d)) => format!(" ({})", d),
            (PromptType::Input, None) => String::new(),
        };
        print!("{}{}: ", prompt.question, hint);
        std::io::stdout().flush().ok();

        let answer = self.read_answer(&prompt.key)?;
        let answer = if answer.is_empty() {
            prompt.default.clone().unwrap_or_default()
        } else {
            answer
        };

        Ok(match prompt.prompt_type {
            PromptType::Confirm => PromptResult::Bool(parse_yes_no(&answer).unwrap_or(false)),
            PromptType::Input => PromptResult::String(answer),
        })
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_status() {
            println!("  {}", message);
        }
        Box::new(LineSpinner { mode: self.mode })
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n=== {} ===\n", title);
        }
    }

    fn show_progress(&mut self, current: usize, total: usize) {
        if self.mode.shows_status() {
            println!("[{}/{}]", current, total);
        }
    }

    fn show_error_block(&mut self, command: &str, output: &str) {
        eprintln!("    ┌─ Command ──────────────────────────");
        eprintln!("    │ {}", command);
        if !output.is_empty() {
            eprintln!("    ├─ Output ───────────────────────────");
            for line in output.lines() {
                eprintln!("    │ {}", line);
            }
        }
        eprintln!("    └────────────────────────────────────");
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner stand-in that prints only the final outcome.
struct LineSpinner {
    mode: OutputMode,
}

impl SpinnerHandle for LineSpinner {
    fn finish_success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn finish_error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }
}
