//! Domain entities shared by the site's services and templates.

pub mod company_settings;
pub mod contact;
pub mod restaurant;
pub mod types;
