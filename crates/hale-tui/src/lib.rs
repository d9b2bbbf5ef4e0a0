//! Full-screen TUI for the hale member portal.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, Write, stderr};

use anyhow::Result;
pub use features::router::RedirectTarget;
use hale_core::Config;
pub use runtime::{PortalExit, PortalRuntime};

/// Runs the portal home screen.
///
/// Returns how the screen ended: a plain quit, or a redirect the hosting
/// shell must perform (admin console, landing page).
pub async fn run_portal(config: &Config) -> Result<PortalExit> {
    // The home screen requires a terminal to render the TUI
    if !stderr().is_terminal() {
        anyhow::bail!(
            "The portal home screen requires a terminal.\n\
             Use `hale account ...` for non-interactive operations."
        );
    }

    // Print pre-TUI info to stderr (will be replaced by alternate screen)
    let mut err = stderr();
    writeln!(err, "Hale Portal")?;
    writeln!(err, "Portal: {}", config.base_url)?;
    err.flush()?;

    let mut runtime = PortalRuntime::new(config.clone())?;
    let exit = runtime.run()?;

    // Print goodbye after the TUI exits (terminal restored)
    if matches!(exit, PortalExit::Quit) {
        writeln!(stderr(), "Aloha!")?;
    }

    Ok(exit)
}
