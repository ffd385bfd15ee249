//! Wire models exchanged with the backend and loaded from configuration.

pub mod company_settings;
#[cfg(feature = "server")]
pub mod config;
pub mod contact;
pub mod restaurant;
