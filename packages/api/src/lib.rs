//! This crate contains the site configuration and the contact form relay.

pub mod config;
pub mod relay;
pub mod types;

#[cfg(test)]
mod types_tests;

pub use config::{AppMode, SiteConfig};
pub use relay::{relay_from_config, ConsoleFormRelay, Delivery, FormRelay, HttpFormRelay, RelayError};
pub use types::{FormFields, RelayReply};
