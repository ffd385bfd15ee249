use serde::Serialize;

use crate::domain::types::CompanyName;

/// Name shown when the settings row is missing or unreadable.
pub const DEFAULT_COMPANY_NAME: &str = "Click Code";
/// Logo shown when the settings row has no logo.
pub const DEFAULT_LOGO_URL: &str = "/assets/img/logo.svg";

/// Social network links configured for the company.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct SocialMedia {
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub twitter: Option<String>,
    pub website: Option<String>,
}

/// Singleton row describing the site owner.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct CompanySettings {
    pub company_name: CompanyName,
    pub logo_url: Option<String>,
    pub google_form_url: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub social_media: Option<SocialMedia>,
}

impl CompanySettings {
    /// Logo to render, falling back to the bundled one.
    pub fn logo_url(&self) -> &str {
        self.logo_url.as_deref().unwrap_or(DEFAULT_LOGO_URL)
    }
}
