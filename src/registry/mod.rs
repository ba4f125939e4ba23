//! Tool registry.
//!
//! The registry is the fixed catalog of installable tools. Each entry
//! names the prerequisite commands the tool needs and the exact command
//! line that installs it. Insertion order is display order.
//!
//! # Example
//!
//! ```
//! use ai_coding_kit::registry::ToolRegistry;
//!
//! let registry = ToolRegistry::builtin();
//! let openspec = registry.get("openspec").unwrap();
//! assert_eq!(openspec.dependencies, &["npm"]);
//! ```

pub mod builtin;

pub use builtin::BUILTIN_TOOLS;

/// An installable tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolDefinition {
    /// Unique identifier (e.g., "openspec").
    pub name: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// Commands that must be on PATH before installing, in order.
    pub dependencies: &'static [&'static str],
    /// Argument vector that installs the tool.
    pub install_command: &'static [&'static str],
}

impl ToolDefinition {
    /// The install command as a single display string.
    pub fn command_line(&self) -> String {
        crate::shell::shell_join(self.install_command)
    }
}

/// Ordered, immutable catalog of tools.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    tools: Vec<ToolDefinition>,
}

impl ToolRegistry {
    /// The built-in catalog.
    pub fn builtin() -> Self {
        Self::from_tools(BUILTIN_TOOLS.to_vec())
    }

    /// Build a registry from explicit definitions.
    ///
    /// Later duplicates of a name are dropped so lookups stay unambiguous.
    pub fn from_tools(tools: Vec<ToolDefinition>) -> Self {
        let mut unique: Vec<ToolDefinition> = Vec::with_capacity(tools.len());
        for tool in tools {
            if unique.iter().any(|t| t.name == tool.name) {
                tracing::warn!("Duplicate tool definition '{}' ignored", tool.name);
                continue;
            }
            unique.push(tool);
        }
        Self { tools: unique }
    }

    /// Look up a tool by name.
    pub fn get(&self, name: &str) -> Option<&ToolDefinition> {
        self.tools.iter().find(|t| t.name == name)
    }

    /// All tools in display order.
    pub fn tools(&self) -> &[ToolDefinition] {
        &self.tools
    }

    /// Look up a tool by its 1-based display index.
    pub fn by_index(&self, index: usize) -> Option<&ToolDefinition> {
        index.checked_sub(1).and_then(|i| self.tools.get(i))
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
