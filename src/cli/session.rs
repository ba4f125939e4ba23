//! The interactive installer session.

use crate::error::Result;
use crate::registry::ToolRegistry;
use crate::runner::ToolInstaller;
use crate::shell::Host;
use crate::ui::UserInterface;

/// Run one installer session: banner, selection flow, closing line.
///
/// Returns whether every selected tool installed. Partial failure is not an
/// error; `Err` means the session itself broke (e.g., stdin closed).
pub fn run(ui: &mut dyn UserInterface, host: &dyn Host, registry: &ToolRegistry) -> Result<bool> {
    ui.show_header("AI Coding Kit");
    ui.message("Welcome! This installer sets up AI development tools and their prerequisites.");
    tracing::debug!(os = %host.os(), tools = registry.len(), "Starting session");

    let installed = ToolInstaller::new(registry, host).choose_and_install(ui)?;

    ui.success("Done.");
    Ok(installed)
}
