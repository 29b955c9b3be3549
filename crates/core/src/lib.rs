//! Domain logic for steamprobe: store records, the profile resolver and
//! its fallback probes, and catalog search.
//!
//! This crate has no network code. Upstream access goes through the
//! [`source::SteamSource`] trait so every decision here can be exercised
//! with in-memory stand-ins.

pub mod achievements;
pub mod cloud;
pub mod deck;
pub mod error;
pub mod profile;
pub mod resolver;
pub mod search;
pub mod source;
pub mod store;
pub mod tiers;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;
