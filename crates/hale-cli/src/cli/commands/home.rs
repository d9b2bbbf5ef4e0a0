//! Home command: runs the portal TUI and performs shell-side navigation.

use anyhow::Result;
use hale_core::Config;
use hale_tui::{PortalExit, RedirectTarget};

pub async fn run(config: &Config) -> Result<()> {
    match hale_tui::run_portal(config).await? {
        PortalExit::Quit => Ok(()),
        PortalExit::Redirect(RedirectTarget::AdminConsole) => {
            let base = config.base_url.trim_end_matches('/');
            println!("This account holds the admin role.");
            println!("Admin console: {base}/admin-home");
            Ok(())
        }
        PortalExit::Redirect(RedirectTarget::Landing) => {
            let base = config.base_url.trim_end_matches('/');
            println!("No member profile for this account.");
            println!("Sign up or sign in at {base}/");
            Ok(())
        }
    }
}
