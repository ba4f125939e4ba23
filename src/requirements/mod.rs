//! Prerequisite dependencies and how to install them.
//!
//! # Modules
//!
//! - [`strategy`] - Per-dependency, per-OS installation methods
//! - [`installer`] - Fail-fast batch installation of missing dependencies

pub mod installer;
pub mod strategy;

pub use installer::{DependencyInstaller, DependencyOutcome};
pub use strategy::{
    find_strategy, is_known_dependency, DependencyStrategy, InstallMethod, ManualStep,
    KNOWN_DEPENDENCIES,
};
