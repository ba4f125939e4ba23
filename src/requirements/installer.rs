//! Dependency installation.
//!
//! Installs a batch of missing dependencies one at a time, fail-fast: the
//! first dependency that cannot be installed stops the batch. Each
//! dependency ends in exactly one [`DependencyOutcome`]; there is no retry.

use crate::error::{KitError, Result};
use crate::shell::{shell_join, Host, RunOptions};
use crate::ui::{confirm, format_duration, UserInterface};

use super::strategy::{find_strategy, DependencyStrategy, InstallMethod, ManualStep};

/// Terminal state of one dependency installation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyOutcome {
    /// An install command ran and exited successfully.
    Installed,
    /// The user confirmed a manual installation.
    ConfirmedManual,
    /// Installation failed, was refused, or is unsupported.
    Failed,
}

impl DependencyOutcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, DependencyOutcome::Failed)
    }
}

/// Installs dependencies using the strategy for the host's OS.
pub struct DependencyInstaller<'a> {
    host: &'a dyn Host,
}

impl<'a> DependencyInstaller<'a> {
    pub fn new(host: &'a dyn Host) -> Self {
        Self { host }
    }

    /// Install dependencies in order, stopping at the first failure.
    ///
    /// Returns `Ok(false)` as soon as one dependency fails; the remaining
    /// ones are not attempted. `Err` only carries prompt I/O failures.
    pub fn install_dependencies(&self, names: &[&str], ui: &mut dyn UserInterface) -> Result<bool> {
        let total = names.len();
        for (i, name) in names.iter().enumerate() {
            ui.show_progress(i + 1, total);

            let outcome = self.install_one(name, ui)?;
            tracing::debug!(dependency = *name, ?outcome, "Dependency resolved");

            if !outcome.is_success() {
                ui.error(&format!("Dependency {} could not be installed", name));
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Install a single dependency.
    pub fn install_one(&self, name: &str, ui: &mut dyn UserInterface) -> Result<DependencyOutcome> {
        let Some(strategy) = find_strategy(name) else {
            let err = KitError::UnknownDependency {
                name: name.to_string(),
            };
            tracing::error!("{}", err);
            ui.error(&err.to_string());
            return Ok(DependencyOutcome::Failed);
        };

        ui.message(&format!("Installing {}", strategy.display_name));

        match strategy.method_for(self.host.os()) {
            InstallMethod::Manual(step) => self.manual(strategy, step, ui),
            InstallMethod::Homebrew { formula, fallback } => {
                self.homebrew(strategy, formula, fallback, ui)
            }
            InstallMethod::LinuxPackages { packages, fallback } => {
                self.linux_packages(strategy, packages, fallback, ui)
            }
            InstallMethod::Script { argv, use_shell } => {
                let options = RunOptions {
                    use_shell: *use_shell,
                    ..RunOptions::default()
                };
                Ok(self.run_step(argv, options, strategy.display_name, ui))
            }
        }
    }

    fn manual(
        &self,
        strategy: &DependencyStrategy,
        step: &ManualStep,
        ui: &mut dyn UserInterface,
    ) -> Result<DependencyOutcome> {
        ui.message(&format!(
            "Please install {} manually: {}",
            strategy.display_name, step.url
        ));
        if let Some(note) = step.note {
            ui.message(note);
        }

        let key = format!("confirm_manual_{}", strategy.name);
        let question = format!(
            "Have you finished installing {}?",
            strategy.display_name
        );
        if confirm(ui, &key, &question, false)? {
            Ok(DependencyOutcome::ConfirmedManual)
        } else {
            ui.warning(&format!(
                "Manual installation of {} was not confirmed",
                strategy.display_name
            ));
            Ok(DependencyOutcome::Failed)
        }
    }

    fn homebrew(
        &self,
        strategy: &DependencyStrategy,
        formula: &str,
        fallback: &ManualStep,
        ui: &mut dyn UserInterface,
    ) -> Result<DependencyOutcome> {
        if !self.host.command_exists("brew") {
            return self.manual(strategy, fallback, ui);
        }
        Ok(self.run_step(
            &["brew", "install", formula],
            RunOptions::default(),
            strategy.display_name,
            ui,
        ))
    }

    fn linux_packages(
        &self,
        strategy: &DependencyStrategy,
        packages: &[&str],
        fallback: &ManualStep,
        ui: &mut dyn UserInterface,
    ) -> Result<DependencyOutcome> {
        if self.host.command_exists("apt-get") {
            let update = self.privileged(&["apt-get", "update"]);
            let refreshed = self.run_step(&update, RunOptions::default(), "package index", ui);
            if !refreshed.is_success() {
                return Ok(DependencyOutcome::Failed);
            }

            let mut install = self.privileged(&["apt-get", "install", "-y"]);
            install.extend_from_slice(packages);
            return Ok(self.run_step(&install, RunOptions::default(), strategy.display_name, ui));
        }

        if self.host.command_exists("yum") {
            let mut install = self.privileged(&["yum", "install", "-y"]);
            install.extend_from_slice(packages);
            return Ok(self.run_step(&install, RunOptions::default(), strategy.display_name, ui));
        }

        self.manual(strategy, fallback, ui)
    }

    /// Prefix with `sudo` unless already running as root.
    fn privileged<'b>(&self, argv: &[&'b str]) -> Vec<&'b str> {
        let mut command = Vec::with_capacity(argv.len() + 1);
        if !self.host.is_elevated() {
            command.push("sudo");
        }
        command.extend_from_slice(argv);
        command
    }

    fn run_step(
        &self,
        argv: &[&str],
        options: RunOptions,
        subject: &str,
        ui: &mut dyn UserInterface,
    ) -> DependencyOutcome {
        let command_line = shell_join(argv);
        let mut spinner = ui.start_spinner(&format!("Running {}", command_line));
        let result = self.host.run(argv, options.with_stdin(ui.is_interactive()));

        if result.success {
            spinner.finish_success(&format!(
                "{} ({})",
                subject,
                format_duration(result.duration)
            ));
            DependencyOutcome::Installed
        } else {
            // stderr is already in the runner's error log
            spinner.finish_error(&format!("{} failed", subject));
            ui.show_error_block(&command_line, result.stdout.trim());
            DependencyOutcome::Failed
        }
    }
}
