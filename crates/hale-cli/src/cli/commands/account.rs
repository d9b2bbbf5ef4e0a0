//! One-shot account operations.
//!
//! These mirror the verification screen's actions for scripts and non-TTY
//! use, with the same client-side duplicate-email check.

use anyhow::{Context, Result};
use hale_core::{Config, PortalClient};

pub async fn whoami(config: &Config) -> Result<()> {
    let client = PortalClient::from_config(config)?;
    let Some(session) = client.fetch_session().await.context("fetch session")? else {
        anyhow::bail!("Not signed in. Run `hale login <token>` first.");
    };

    println!("{} <{}>", session.username, session.primary_email);
    println!(
        "verified: {}  roles: {}",
        session.email_verified,
        session.roles.join(", ")
    );
    Ok(())
}

pub async fn resend(config: &Config) -> Result<()> {
    let client = PortalClient::from_config(config)?;
    if client.fetch_session().await.context("fetch session")?.is_none() {
        anyhow::bail!("Not signed in. Run `hale login <token>` first.");
    }

    client
        .send_verification_link()
        .await
        .context("Unable to send verification email")?;
    println!("Email successfully sent.");
    Ok(())
}

pub async fn change_email(config: &Config, email: &str) -> Result<()> {
    let client = PortalClient::from_config(config)?;
    let Some(session) = client.fetch_session().await.context("fetch session")? else {
        anyhow::bail!("Not signed in. Run `hale login <token>` first.");
    };

    // Same client-side check the verification screen performs.
    if email == session.primary_email {
        anyhow::bail!("Email that was entered is already associated with your account.");
    }

    client
        .change_email(email)
        .await
        .context("Unable to change email")?;
    println!("Email successfully changed.");

    // A fresh verification link goes to the new address right away.
    client
        .send_verification_link()
        .await
        .context("Unable to send verification email")?;
    println!("Email successfully sent.");
    Ok(())
}
