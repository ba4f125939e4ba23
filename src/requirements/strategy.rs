//! Dependency installation strategies.
//!
//! Every known dependency has one [`InstallMethod`] per OS family. The
//! matrix lives in [`KNOWN_DEPENDENCIES`] so adding a dependency or an OS
//! means adding a row or a column, not another branch.

use crate::shell::OsFamily;

const HOMEBREW_HINT: &str = "Or install Homebrew first: https://brew.sh/";

/// Instructions for installing a dependency by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManualStep {
    /// Where the user can download the dependency.
    pub url: &'static str,
    /// Extra guidance shown under the URL.
    pub note: Option<&'static str>,
}

/// How a dependency gets installed on one OS family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallMethod {
    /// Print instructions and wait for the user to confirm.
    Manual(ManualStep),
    /// `brew install <formula>` when Homebrew is present.
    Homebrew {
        formula: &'static str,
        fallback: ManualStep,
    },
    /// `apt-get` (after an index refresh) or `yum`, whichever exists first.
    LinuxPackages {
        packages: &'static [&'static str],
        fallback: ManualStep,
    },
    /// A remote install script; its exit status is the outcome.
    Script {
        argv: &'static [&'static str],
        use_shell: bool,
    },
}

/// A dependency with an installation method for every OS family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DependencyStrategy {
    /// Command name, also used for the presence check (e.g., "npm").
    pub name: &'static str,
    /// Name shown to the user (e.g., "Node.js (npm)").
    pub display_name: &'static str,
    pub windows: InstallMethod,
    pub darwin: InstallMethod,
    pub linux: InstallMethod,
    /// Used for any unrecognized OS.
    pub other: InstallMethod,
}

impl DependencyStrategy {
    /// Pick the method for an OS family.
    pub fn method_for(&self, os: &OsFamily) -> &InstallMethod {
        match os {
            OsFamily::Windows => &self.windows,
            OsFamily::Darwin => &self.darwin,
            OsFamily::Linux => &self.linux,
            OsFamily::Other(_) => &self.other,
        }
    }
}

const NODE_MANUAL: ManualStep = ManualStep {
    url: "https://nodejs.org/",
    note: None,
};

const GIT_MANUAL: ManualStep = ManualStep {
    url: "https://git-scm.com/",
    note: None,
};

const UV_UNIX_SCRIPT: InstallMethod = InstallMethod::Script {
    argv: &["curl", "-LsSf", "https://astral.sh/uv/install.sh", "|", "sh"],
    use_shell: true,
};

/// All dependencies that can be installed automatically or with guidance.
pub const KNOWN_DEPENDENCIES: &[DependencyStrategy] = &[
    DependencyStrategy {
        name: "npm",
        display_name: "Node.js (npm)",
        windows: InstallMethod::Manual(NODE_MANUAL),
        darwin: InstallMethod::Homebrew {
            formula: "node",
            fallback: ManualStep {
                url: "https://nodejs.org/",
                note: Some(HOMEBREW_HINT),
            },
        },
        linux: InstallMethod::LinuxPackages {
            packages: &["nodejs", "npm"],
            fallback: NODE_MANUAL,
        },
        other: InstallMethod::Manual(NODE_MANUAL),
    },
    DependencyStrategy {
        name: "uv",
        display_name: "uv",
        windows: InstallMethod::Script {
            argv: &[
                "powershell",
                "-ExecutionPolicy",
                "ByPass",
                "-Command",
                "irm https://astral.sh/uv/install.ps1 | iex",
            ],
            use_shell: true,
        },
        darwin: UV_UNIX_SCRIPT,
        linux: UV_UNIX_SCRIPT,
        other: UV_UNIX_SCRIPT,
    },
    DependencyStrategy {
        name: "git",
        display_name: "Git",
        windows: InstallMethod::Manual(ManualStep {
            url: "https://git-scm.com/download/win",
            note: None,
        }),
        darwin: InstallMethod::Homebrew {
            formula: "git",
            fallback: ManualStep {
                url: "https://git-scm.com/",
                note: Some(
                    "Git usually ships with the Xcode Command Line Tools (xcode-select --install). Or install Homebrew first: https://brew.sh/",
                ),
            },
        },
        linux: InstallMethod::LinuxPackages {
            packages: &["git"],
            fallback: GIT_MANUAL,
        },
        other: InstallMethod::Manual(GIT_MANUAL),
    },
];

/// Look up the strategy for a dependency name.
pub fn find_strategy(name: &str) -> Option<&'static DependencyStrategy> {
    KNOWN_DEPENDENCIES.iter().find(|d| d.name == name)
}

/// Check whether a dependency has an installation strategy.
pub fn is_known_dependency(name: &str) -> bool {
    find_strategy(name).is_some()
}
