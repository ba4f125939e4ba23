//! Process execution.

use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Result of executing an external command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal or never spawned).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error, or the spawn error when the process never started.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the command counts as succeeded.
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }

    /// Create the result for a process that could not be started at all.
    pub fn spawn_failure(error: &std::io::Error) -> Self {
        Self::failure(None, String::new(), error.to_string(), Duration::ZERO)
    }
}

/// Options for command execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// Join the tokens into one command line and run it through the shell.
    pub use_shell: bool,

    /// Treat a non-zero exit status as failure.
    pub check: bool,

    /// Let the child read this process's stdin; otherwise it gets null.
    pub inherit_stdin: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            use_shell: false,
            check: true,
            inherit_stdin: true,
        }
    }
}

impl RunOptions {
    /// Options for running a pipeline through the platform shell.
    pub fn shell() -> Self {
        Self {
            use_shell: true,
            ..Self::default()
        }
    }

    /// Set whether the child may read stdin.
    pub fn with_stdin(mut self, inherit: bool) -> Self {
        self.inherit_stdin = inherit;
        self
    }
}

/// Run a command, capturing stdout and stderr, and block until it exits.
///
/// Never returns an error: spawn failures and non-zero exits are folded
/// into a [`CommandResult`] with `success == false`. With
/// [`RunOptions::check`] set, the captured stderr of a failed command is
/// logged at error level.
pub fn run(argv: &[&str], options: RunOptions) -> CommandResult {
    let Some((program, args)) = argv.split_first() else {
        let err = std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty command");
        return CommandResult::spawn_failure(&err);
    };

    let command_line = shell_join(argv);
    let mut cmd = if options.use_shell {
        shell_command(&command_line)
    } else {
        let mut cmd = Command::new(program);
        cmd.args(args);
        cmd
    };

    // a detached child cannot swallow answers queued on piped stdin
    let stdin = if options.inherit_stdin {
        Stdio::inherit()
    } else {
        Stdio::null()
    };
    cmd.stdin(stdin)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    tracing::debug!(command = %command_line, shell = options.use_shell, "Running command");

    let start = Instant::now();
    let output = match cmd.output() {
        Ok(output) => output,
        Err(e) => {
            tracing::error!("Command failed to start: {}: {}", command_line, e);
            return CommandResult::spawn_failure(&e);
        }
    };
    let duration = start.elapsed();

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    if output.status.success() || !options.check {
        let mut result = CommandResult::success(stdout, stderr, duration);
        result.exit_code = output.status.code();
        return result;
    }

    tracing::error!("Command failed: {}: {}", command_line, stderr.trim());
    CommandResult::failure(output.status.code(), stdout, stderr, duration)
}

/// Join tokens into a single command line for display or shell execution.
///
/// Tokens containing whitespace are wrapped in double quotes; operators
/// such as `|` pass through untouched so pipelines survive the join.
pub fn shell_join(argv: &[&str]) -> String {
    argv.iter()
        .map(|token| {
            if token.chars().any(char::is_whitespace) {
                format!("\"{}\"", token)
            } else {
                (*token).to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(windows)]
fn shell_command(command_line: &str) -> Command {
    use std::os::windows::process::CommandExt;

    // cmd.exe does its own quote parsing; pass the line through verbatim
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").raw_arg(command_line);
    cmd
}

#[cfg(not(windows))]
fn shell_command(command_line: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command_line);
    cmd
}
