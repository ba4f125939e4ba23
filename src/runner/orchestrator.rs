//! Tool installation orchestration.
//!
//! [`ToolInstaller`] drives the interactive flow: list the catalog, read a
//! selection, resolve missing dependencies as one batch, then install each
//! selected tool. Dependency installation stops at the first failure, while
//! tool installations are independent of one another.

use crate::error::{KitError, Result};
use crate::registry::{ToolDefinition, ToolRegistry};
use crate::requirements::DependencyInstaller;
use crate::shell::{Host, RunOptions};
use crate::ui::{confirm, format_duration, Prompt, UserInterface};

use super::selection::{dependency_union, parse_selection};

const SELECTION_QUESTION: &str =
    "Select the tools to install (comma-separated numbers, e.g. 1,2)";

/// Installs tools from a registry on a host.
pub struct ToolInstaller<'a> {
    registry: &'a ToolRegistry,
    host: &'a dyn Host,
}

impl<'a> ToolInstaller<'a> {
    pub fn new(registry: &'a ToolRegistry, host: &'a dyn Host) -> Self {
        Self { registry, host }
    }

    /// Make sure every dependency of `tool` is present, offering to install
    /// the missing ones.
    ///
    /// Returns `Ok(true)` without prompting when nothing is missing.
    pub fn check_dependencies(&self, tool: &str, ui: &mut dyn UserInterface) -> Result<bool> {
        let Some(definition) = self.lookup(tool, ui) else {
            return Ok(false);
        };
        self.resolve_missing(definition.dependencies, ui)
    }

    /// Install one tool by name, resolving its dependencies first.
    pub fn install_tool(&self, tool: &str, ui: &mut dyn UserInterface) -> Result<bool> {
        let Some(definition) = self.lookup(tool, ui) else {
            return Ok(false);
        };
        if !self.resolve_missing(definition.dependencies, ui)? {
            return Ok(false);
        }
        Ok(self.install_single(definition, ui))
    }

    /// Run the full interactive selection and installation flow.
    ///
    /// Returns `Ok(true)` only if every selected tool installed.
    pub fn choose_and_install(&self, ui: &mut dyn UserInterface) -> Result<bool> {
        ui.message("Available tools:");
        for (i, tool) in self.registry.tools().iter().enumerate() {
            ui.message(&format!("  {}. {}: {}", i + 1, tool.name, tool.description));
        }

        let answer = ui.prompt(&Prompt::input("tool_selection", SELECTION_QUESTION, Some("1")))?;
        let selection = parse_selection(&answer.as_string(), self.registry.len());

        for token in &selection.rejected {
            ui.warning(&format!("Invalid selection '{}', ignoring it", token));
        }
        if selection.is_empty() {
            ui.error("No valid selection, nothing to install");
            return Ok(false);
        }

        let selected: Vec<&ToolDefinition> = selection
            .indices
            .iter()
            .filter_map(|&i| self.registry.by_index(i))
            .collect();
        let names: Vec<&str> = selected.iter().map(|t| t.name).collect();
        ui.message(&format!("Tools to install: {}", names.join(", ")));

        let dependencies = dependency_union(&selected);
        if !dependencies.is_empty() {
            ui.message(&format!("Required dependencies: {}", dependencies.join(", ")));
        }

        if !self.resolve_missing(&dependencies, ui)? {
            return Ok(false);
        }

        let total = selected.len();
        let mut all_succeeded = true;
        for (i, tool) in selected.iter().enumerate() {
            ui.show_progress(i + 1, total);
            if !self.install_single(tool, ui) {
                all_succeeded = false;
            }
        }

        if all_succeeded {
            ui.success("All selected tools installed successfully");
        } else {
            ui.warning("Some tools failed to install, see the output above for details");
        }
        Ok(all_succeeded)
    }

    fn lookup(&self, tool: &str, ui: &mut dyn UserInterface) -> Option<&'a ToolDefinition> {
        let definition = self.registry.get(tool);
        if definition.is_none() {
            let err = KitError::UnknownTool {
                name: tool.to_string(),
            };
            tracing::error!("{}", err);
            ui.error(&err.to_string());
        }
        definition
    }

    /// Ask once to install whatever in `dependencies` is missing.
    fn resolve_missing(&self, dependencies: &[&str], ui: &mut dyn UserInterface) -> Result<bool> {
        let missing: Vec<&str> = dependencies
            .iter()
            .copied()
            .filter(|dep| !self.host.command_exists(dep))
            .collect();
        if missing.is_empty() {
            return Ok(true);
        }

        ui.warning(&format!("Missing dependencies: {}", missing.join(", ")));
        if !confirm(ui, "install_dependencies", "Install these dependencies?", true)? {
            ui.error("Required dependencies are missing, cannot install tools");
            return Ok(false);
        }

        if !DependencyInstaller::new(self.host).install_dependencies(&missing, ui)? {
            ui.error("Dependency installation failed, cannot continue");
            return Ok(false);
        }
        Ok(true)
    }

    /// Run a tool's install command. Dependencies are assumed present.
    fn install_single(&self, tool: &ToolDefinition, ui: &mut dyn UserInterface) -> bool {
        tracing::debug!(tool = tool.name, "Installing tool");
        let mut spinner = ui.start_spinner(&format!("Installing {}...", tool.name));
        let options = RunOptions::default().with_stdin(ui.is_interactive());
        let result = self.host.run(tool.install_command, options);

        if !result.success {
            // stderr is already in the runner's error log
            spinner.finish_error(&format!("{} failed to install", tool.name));
            ui.show_error_block(&tool.command_line(), result.stdout.trim());
            return false;
        }

        spinner.finish_success(&format!(
            "{} installed ({})",
            tool.name,
            format_duration(result.duration)
        ));
        let stdout = result.stdout.trim();
        if ui.output_mode().shows_command_output() && !stdout.is_empty() {
            for line in stdout.lines() {
                ui.message(&format!("    {}", line));
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::{MockHost, OsFamily};
    use crate::ui::{MockUI, OutputMode, SpinnerStatus};

    const OPENSPEC_CMD: &str = "npm install -g @fission-ai/openspec@latest";
    const SPEC_KIT_CMD: &str =
        "uv tool install specify-cli --from git+https://github.com/github/spec-kit.git";

    fn registry() -> ToolRegistry {
        ToolRegistry::builtin()
    }

    #[test]
    fn check_dependencies_present_does_not_prompt() {
        let registry = registry();
        let host = MockHost::new(OsFamily::Linux).with_commands(&["npm", "uv", "git"]);
        let installer = ToolInstaller::new(&registry, &host);

        for tool in ["openspec", "spec-kit"] {
            let mut ui = MockUI::new();
            assert!(installer.check_dependencies(tool, &mut ui).unwrap());
            assert!(ui.prompts_shown().is_empty());
        }
        assert!(host.invocations().is_empty());
    }

    #[test]
    fn check_dependencies_declined() {
        let registry = registry();
        let host = MockHost::new(OsFamily::Linux).with_commands(&["apt-get"]);
        let installer = ToolInstaller::new(&registry, &host);
        let mut ui = MockUI::new();
        ui.set_prompt_response("install_dependencies", "n");

        assert!(!installer.check_dependencies("openspec", &mut ui).unwrap());
        assert!(host.invocations().is_empty());
        assert!(ui.has_warning("Missing dependencies: npm"));
        assert!(ui.has_error("cannot install tools"));
    }

    #[test]
    fn check_dependencies_accepts_default_and_installs() {
        let registry = registry();
        let host = MockHost::new(OsFamily::Darwin).with_commands(&["brew", "uv"]);
        let installer = ToolInstaller::new(&registry, &host);
        let mut ui = MockUI::new();

        assert!(installer.check_dependencies("spec-kit", &mut ui).unwrap());
        assert_eq!(host.invocations(), vec!["brew install git".to_string()]);
    }

    #[test]
    fn unknown_tool_fails() {
        let registry = registry();
        let host = MockHost::new(OsFamily::Linux);
        let installer = ToolInstaller::new(&registry, &host);
        let mut ui = MockUI::new();

        assert!(!installer.install_tool("vim", &mut ui).unwrap());
        assert!(!installer.check_dependencies("vim", &mut ui).unwrap());
        assert!(ui.has_error("Unsupported tool: vim"));
        assert!(host.invocations().is_empty());
        assert!(host.lookups().is_empty());
    }

    #[test]
    fn install_tool_runs_registry_command() {
        let registry = registry();
        let host = MockHost::new(OsFamily::Linux).with_commands(&["npm"]);
        let installer = ToolInstaller::new(&registry, &host);
        let mut ui = MockUI::new();

        assert!(installer.install_tool("openspec", &mut ui).unwrap());
        assert_eq!(host.invocations(), vec![OPENSPEC_CMD.to_string()]);
        assert_eq!(ui.spinner_results()[0].0, SpinnerStatus::Success);
    }

    #[test]
    fn install_tool_failure_shows_error_block() {
        let registry = registry();
        let host = MockHost::new(OsFamily::Linux)
            .with_commands(&["npm"])
            .with_failing(&["npm"]);
        let installer = ToolInstaller::new(&registry, &host);
        let mut ui = MockUI::new();

        assert!(!installer.install_tool("openspec", &mut ui).unwrap());
        assert_eq!(ui.spinner_results()[0].0, SpinnerStatus::Error);
        let (command, output) = &ui.error_blocks()[0];
        assert_eq!(command, OPENSPEC_CMD);
        assert!(output.is_empty());
    }

    #[test]
    fn install_tool_detaches_stdin_unless_interactive() {
        let registry = registry();
        let host = MockHost::new(OsFamily::Linux).with_commands(&["npm"]);
        let installer = ToolInstaller::new(&registry, &host);

        let mut ui = MockUI::new();
        assert!(installer.install_tool("openspec", &mut ui).unwrap());
        ui.set_interactive(true);
        assert!(installer.install_tool("openspec", &mut ui).unwrap());

        let stdin: Vec<bool> = host
            .detailed_invocations()
            .iter()
            .map(|i| i.options.inherit_stdin)
            .collect();
        assert_eq!(stdin, vec![false, true]);
    }

    #[test]
    fn choose_lists_tools_with_indices() {
        let registry = registry();
        let host = MockHost::new(OsFamily::Linux).with_commands(&["npm"]);
        let installer = ToolInstaller::new(&registry, &host);
        let mut ui = MockUI::new();

        installer.choose_and_install(&mut ui).unwrap();
        assert!(ui.has_message("1. openspec"));
        assert!(ui.has_message("2. spec-kit"));
    }

    #[test]
    fn choose_defaults_to_first_tool() {
        let registry = registry();
        let host = MockHost::new(OsFamily::Linux).with_commands(&["npm"]);
        let installer = ToolInstaller::new(&registry, &host);
        let mut ui = MockUI::new();

        assert!(installer.choose_and_install(&mut ui).unwrap());
        assert_eq!(host.invocations(), vec![OPENSPEC_CMD.to_string()]);
        assert!(ui.has_success("All selected tools installed successfully"));
    }

    #[test]
    fn choose_warns_on_invalid_tokens_and_continues() {
        let registry = registry();
        let host = MockHost::new(OsFamily::Linux).with_commands(&["npm"]);
        let installer = ToolInstaller::new(&registry, &host);
        let mut ui = MockUI::new();
        ui.set_prompt_response("tool_selection", "1,9,abc");

        assert!(installer.choose_and_install(&mut ui).unwrap());
        assert_eq!(ui.warnings().len(), 2);
        assert!(ui.has_warning("'9'"));
        assert!(ui.has_warning("'abc'"));
        assert_eq!(host.invocations(), vec![OPENSPEC_CMD.to_string()]);
    }

    #[test]
    fn choose_warns_on_padded_and_blank_tokens() {
        for (input, warnings, installs) in [("1,", 1, 1), ("1,,2", 1, 2), ("+1", 1, 0), ("01", 1, 0)] {
            let registry = registry();
            let host = MockHost::new(OsFamily::Linux).with_commands(&["npm", "uv", "git"]);
            let installer = ToolInstaller::new(&registry, &host);
            let mut ui = MockUI::new();
            ui.set_prompt_response("tool_selection", input);

            let ok = installer.choose_and_install(&mut ui).unwrap();
            assert_eq!(ok, installs > 0, "{}", input);
            assert_eq!(ui.warnings().len(), warnings, "{}", input);
            assert_eq!(host.invocations().len(), installs, "{}", input);
        }
    }

    #[test]
    fn choose_without_valid_selection_installs_nothing() {
        for input in ["", "abc", "0,3"] {
            let registry = registry();
            let host = MockHost::new(OsFamily::Linux);
            let installer = ToolInstaller::new(&registry, &host);
            let mut ui = MockUI::new();
            ui.set_prompt_response("tool_selection", input);

            assert!(!installer.choose_and_install(&mut ui).unwrap());
            assert!(ui.has_error("No valid selection"));
            assert!(host.invocations().is_empty());
            assert!(host.lookups().is_empty());
        }
    }

    #[test]
    fn choose_resolves_dependency_union_once() {
        let registry = registry();
        let host = MockHost::new(OsFamily::Linux).with_commands(&["uv"]);
        let installer = ToolInstaller::new(&registry, &host);
        let mut ui = MockUI::new();
        ui.set_prompt_response("tool_selection", "2,1,2");
        ui.set_prompt_response("install_dependencies", "n");

        assert!(!installer.choose_and_install(&mut ui).unwrap());
        assert_eq!(host.lookups(), vec!["uv", "git", "npm"]);
        assert_eq!(ui.prompts_shown(), &["tool_selection", "install_dependencies"]);
        assert!(ui.has_warning("Missing dependencies: git, npm"));
        assert!(host.invocations().is_empty());
    }

    #[test]
    fn choose_installs_missing_dependencies_as_one_batch() {
        let registry = registry();
        let host = MockHost::new(OsFamily::Darwin).with_commands(&["brew"]);
        let installer = ToolInstaller::new(&registry, &host);
        let mut ui = MockUI::new();
        ui.set_prompt_response("tool_selection", "1,2");

        assert!(installer.choose_and_install(&mut ui).unwrap());
        assert_eq!(
            host.invocations(),
            vec![
                "brew install node".to_string(),
                "curl -LsSf https://astral.sh/uv/install.sh | sh".to_string(),
                "brew install git".to_string(),
                OPENSPEC_CMD.to_string(),
                SPEC_KIT_CMD.to_string(),
            ]
        );
        assert_eq!(
            ui.prompts_shown()
                .iter()
                .filter(|k| *k == "install_dependencies")
                .count(),
            1
        );
    }

    #[test]
    fn choose_aborts_when_dependency_batch_fails() {
        let registry = registry();
        let host = MockHost::new(OsFamily::Linux)
            .with_commands(&["apt-get"])
            .with_failing(&["sudo apt-get update"]);
        let installer = ToolInstaller::new(&registry, &host);
        let mut ui = MockUI::new();
        ui.set_prompt_response("tool_selection", "1");

        assert!(!installer.choose_and_install(&mut ui).unwrap());
        assert!(!host.ran("npm install"));
        assert!(ui.has_error("Dependency installation failed"));
    }

    #[test]
    fn choose_continues_after_tool_failure() {
        let registry = registry();
        let host = MockHost::new(OsFamily::Linux)
            .with_commands(&["npm", "uv", "git"])
            .with_failing(&["npm"]);
        let installer = ToolInstaller::new(&registry, &host);
        let mut ui = MockUI::new();
        ui.set_prompt_response("tool_selection", "1,2");

        assert!(!installer.choose_and_install(&mut ui).unwrap());
        assert_eq!(
            host.invocations(),
            vec![OPENSPEC_CMD.to_string(), SPEC_KIT_CMD.to_string()]
        );
        assert_eq!(ui.progress(), &[(1, 2), (2, 2)]);
        assert!(ui.has_warning("Some tools failed"));
    }

    #[test]
    fn verbose_mode_echoes_install_output() {
        let registry = registry();
        let host = MockHost::new(OsFamily::Linux)
            .with_commands(&["npm"])
            .with_stdout("added 1 package\n");
        let installer = ToolInstaller::new(&registry, &host);

        let mut ui = MockUI::with_mode(OutputMode::Verbose);
        assert!(installer.install_tool("openspec", &mut ui).unwrap());
        assert!(ui.has_message("added 1 package"));

        let mut ui = MockUI::new();
        assert!(installer.install_tool("openspec", &mut ui).unwrap());
        assert!(!ui.has_message("added 1 package"));
    }
}
