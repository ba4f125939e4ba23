//! AI Coding Kit CLI entry point.

use std::process::ExitCode;

use ai_coding_kit::cli::{self, Cli};
use ai_coding_kit::registry::ToolRegistry;
use ai_coding_kit::shell::SystemHost;
use ai_coding_kit::ui::create_ui;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// ANSI styling follows the colour setting of stderr, where logs go.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("ai_coding_kit=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ai_coding_kit=info"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(console::colors_enabled_stderr())
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    init_tracing(cli.debug);
    tracing::debug!("ai-coding-kit starting with args: {:?}", cli);

    let mut ui = create_ui(cli.output_mode());
    let host = SystemHost::detect();
    let registry = ToolRegistry::builtin();

    // Partial tool failures are reported by the session, not the exit code
    match cli::run(ui.as_mut(), &host, &registry) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Installer aborted: {:?}", e);
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
