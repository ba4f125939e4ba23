//! Host platform detection.

use std::fmt;
use std::process::{Command, Stdio};
use std::sync::OnceLock;

/// Coarse host classification used to pick an installation strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OsFamily {
    Linux,
    Darwin,
    Windows,
    /// Unrecognized platform; holds the raw lowercase name.
    Other(String),
}

impl OsFamily {
    /// Classify an OS name as reported by `std::env::consts::OS`.
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "linux" => OsFamily::Linux,
            "macos" | "darwin" => OsFamily::Darwin,
            "windows" => OsFamily::Windows,
            other => OsFamily::Other(other.to_string()),
        }
    }

    /// Lowercase name of the family.
    pub fn name(&self) -> &str {
        match self {
            OsFamily::Linux => "linux",
            OsFamily::Darwin => "darwin",
            OsFamily::Windows => "windows",
            OsFamily::Other(name) => name,
        }
    }

    pub fn is_windows(&self) -> bool {
        matches!(self, OsFamily::Windows)
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Detect the host OS family.
///
/// Computed once per process. An unrecognized platform is logged as a
/// warning and returned as [`OsFamily::Other`] so callers fall through to
/// their manual-install path.
pub fn current_os() -> &'static OsFamily {
    static OS: OnceLock<OsFamily> = OnceLock::new();
    OS.get_or_init(|| {
        let os = OsFamily::from_name(std::env::consts::OS);
        if let OsFamily::Other(name) = &os {
            tracing::warn!("Unrecognized operating system '{}'; installs may not work", name);
        }
        os
    })
}

/// Name of the command used to locate executables on the search path.
pub fn lookup_command(os: &OsFamily) -> &'static str {
    if os.is_windows() {
        "where"
    } else {
        "which"
    }
}

/// Check whether `name` resolves on the command search path.
///
/// Runs `where` on Windows and `which` elsewhere. Returns `false` when the
/// lookup exits non-zero or cannot be spawned at all.
pub fn command_exists(os: &OsFamily, name: &str) -> bool {
    Command::new(lookup_command(os))
        .arg(name)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok_and(|status| status.success())
}

/// Check if running as root/admin.
pub fn is_elevated() -> bool {
    #[cfg(unix)]
    {
        // SAFETY: geteuid() is a simple syscall that returns the effective user ID
        unsafe { libc::geteuid() == 0 }
    }

    #[cfg(not(unix))]
    {
        false
    }
}
