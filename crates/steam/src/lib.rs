//! Steam HTTP integration for steamprobe.
//!
//! Wraps the store, Web API and community endpoints behind
//! [`steamprobe_core::source::SteamSource`].

pub mod client;
pub mod config;
pub mod payloads;

pub use client::{SteamApiError, SteamClient};
pub use config::SteamClientConfig;
