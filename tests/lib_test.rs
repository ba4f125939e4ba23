//! Library integration tests.

use ai_coding_kit::registry::ToolRegistry;
use ai_coding_kit::requirements::{DependencyInstaller, KNOWN_DEPENDENCIES};
use ai_coding_kit::runner::{dependency_union, parse_selection, ToolInstaller};
use ai_coding_kit::shell::{Host, MockHost, OsFamily, SystemHost};
use ai_coding_kit::ui::{MockUI, OutputMode};
use ai_coding_kit::KitError;

#[test]
fn error_types_are_public() {
    let err = KitError::UnknownTool {
        name: "test".into(),
    };
    assert!(err.to_string().contains("test"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> ai_coding_kit::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use ai_coding_kit::cli::Cli;
    use clap::Parser;

    let cli = Cli::parse_from(["ai-coding-kit", "--quiet"]);
    assert_eq!(cli.output_mode(), OutputMode::Quiet);
}

#[test]
fn every_catalog_dependency_is_installable() {
    let registry = ToolRegistry::builtin();
    for tool in registry.tools() {
        for dep in tool.dependencies {
            assert!(
                KNOWN_DEPENDENCIES.iter().any(|d| d.name == *dep),
                "no strategy for {}",
                dep
            );
        }
    }
}

#[test]
fn selection_union_for_both_tools() {
    let registry = ToolRegistry::builtin();
    for input in ["1,2", "2,1", "2, 1, 2"] {
        let selection = parse_selection(input, registry.len());
        let tools: Vec<_> = selection
            .indices
            .iter()
            .filter_map(|&i| registry.by_index(i))
            .collect();
        let mut union = dependency_union(&tools);
        union.sort_unstable();
        assert_eq!(union, vec!["git", "npm", "uv"]);
    }
}

#[test]
fn missing_command_is_never_found() {
    let host = SystemHost::detect();
    assert!(!host.command_exists("ai-coding-kit-no-such-command"));
}

#[test]
fn unsupported_dependency_spawns_nothing_on_any_os() {
    for os in [
        OsFamily::Linux,
        OsFamily::Darwin,
        OsFamily::Windows,
        OsFamily::Other("plan9".to_string()),
    ] {
        let host = MockHost::new(os).with_commands(&["brew", "apt-get", "yum"]);
        let mut ui = MockUI::new();
        let ok = DependencyInstaller::new(&host)
            .install_dependencies(&["cargo", "npm"], &mut ui)
            .unwrap();
        assert!(!ok);
        assert!(host.invocations().is_empty());
    }
}

#[test]
fn full_flow_on_linux_with_apt() {
    let registry = ToolRegistry::builtin();
    let host = MockHost::new(OsFamily::Linux).with_commands(&["apt-get", "uv"]);
    let mut ui = MockUI::new();
    ui.set_prompt_response("tool_selection", "2");

    let ok = ToolInstaller::new(&registry, &host)
        .choose_and_install(&mut ui)
        .unwrap();
    assert!(ok);
    assert_eq!(
        host.invocations(),
        vec![
            "sudo apt-get update",
            "sudo apt-get install -y git",
            "uv tool install specify-cli --from git+https://github.com/github/spec-kit.git",
        ]
    );
}
