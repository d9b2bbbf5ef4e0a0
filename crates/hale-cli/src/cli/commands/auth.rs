//! Login/logout command handlers (token storage).

use anyhow::{Context, Result};
use hale_core::config::Config;

pub fn login(token: &str) -> Result<()> {
    let token = token.trim();
    if token.is_empty() {
        anyhow::bail!("Token must not be empty");
    }
    Config::save_token(Some(token)).context("store portal token")?;
    println!("Token stored.");
    Ok(())
}

pub fn logout() -> Result<()> {
    Config::save_token(None).context("clear portal token")?;
    println!("Token cleared.");
    Ok(())
}
