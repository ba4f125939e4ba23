//! The built-in tool catalog.

use super::ToolDefinition;

/// Tools this installer knows about, in display order.
pub const BUILTIN_TOOLS: &[ToolDefinition] = &[
    ToolDefinition {
        name: "openspec",
        description: "Open specification tool from Fission AI",
        dependencies: &["npm"],
        install_command: &["npm", "install", "-g", "@fission-ai/openspec@latest"],
    },
    ToolDefinition {
        name: "spec-kit",
        description: "Specification kit from GitHub",
        dependencies: &["uv", "git"],
        install_command: &[
            "uv",
            "tool",
            "install",
            "specify-cli",
            "--from",
            "git+https://github.com/github/spec-kit.git",
        ],
    },
];
