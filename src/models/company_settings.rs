use serde::Deserialize;

use crate::domain::company_settings::{
    CompanySettings as DomainCompanySettings, SocialMedia as DomainSocialMedia,
};
use crate::domain::types::{CompanyName, TypeConstraintError};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SocialMedia {
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub twitter: Option<String>,
    pub website: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
/// PostgREST row of the singleton `company_settings` table.
pub struct CompanySettings {
    pub id: String,
    pub company_name: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub google_form_url: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub social_media: Option<SocialMedia>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

impl From<SocialMedia> for DomainSocialMedia {
    fn from(row: SocialMedia) -> Self {
        Self {
            facebook: non_blank(row.facebook),
            instagram: non_blank(row.instagram),
            twitter: non_blank(row.twitter),
            website: non_blank(row.website),
        }
    }
}

impl TryFrom<CompanySettings> for DomainCompanySettings {
    type Error = TypeConstraintError;

    fn try_from(row: CompanySettings) -> Result<Self, Self::Error> {
        Ok(Self {
            company_name: CompanyName::new(row.company_name)?,
            logo_url: non_blank(row.logo_url),
            google_form_url: non_blank(row.google_form_url),
            contact_email: non_blank(row.contact_email),
            contact_phone: non_blank(row.contact_phone),
            social_media: row.social_media.map(DomainSocialMedia::from),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_optional_columns_become_none() {
        let body = r#"{
            "id": "settings",
            "company_name": "Click Code",
            "logo_url": "",
            "contact_email": "hello@clickcode.example",
            "social_media": {"instagram": "https://instagram.com/clickcode", "twitter": " "}
        }"#;

        let row: CompanySettings = serde_json::from_str(body).unwrap();
        let settings = DomainCompanySettings::try_from(row).unwrap();

        assert_eq!(settings.logo_url, None);
        assert_eq!(settings.logo_url(), crate::domain::company_settings::DEFAULT_LOGO_URL);
        assert_eq!(
            settings.contact_email.as_deref(),
            Some("hello@clickcode.example")
        );
        let social = settings.social_media.unwrap();
        assert_eq!(social.twitter, None);
        assert!(social.instagram.is_some());
    }
}
