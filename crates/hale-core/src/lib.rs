//! Core library for the hale portal client.
//!
//! Holds everything that is not UI: configuration, the session/profile data
//! model, the portal HTTP client, and logging setup. The TUI and CLI crates
//! build on top of this.

pub mod config;
pub mod logging;
pub mod portal;
pub mod profile;
pub mod session;

pub use config::Config;
pub use portal::{PortalClient, PortalSnapshot};
pub use profile::Profile;
pub use session::Session;
