//! Contact form state and the outcome of submitting it.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::types::TypeConstraintError;

/// Monthly budget bracket selected by the visitor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BudgetRange {
    Under1000,
    From1000To5000,
    From5000To10000,
    Over10000,
}

impl BudgetRange {
    pub const ALL: [BudgetRange; 4] = [
        BudgetRange::Under1000,
        BudgetRange::From1000To5000,
        BudgetRange::From5000To10000,
        BudgetRange::Over10000,
    ];

    /// Wire value sent to the contact endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetRange::Under1000 => "under-1000",
            BudgetRange::From1000To5000 => "1000-5000",
            BudgetRange::From5000To10000 => "5000-10000",
            BudgetRange::Over10000 => "over-10000",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BudgetRange::Under1000 => "Under $1,000",
            BudgetRange::From1000To5000 => "$1,000 - $5,000",
            BudgetRange::From5000To10000 => "$5,000 - $10,000",
            BudgetRange::Over10000 => "Over $10,000",
        }
    }
}

impl FromStr for BudgetRange {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BudgetRange::ALL
            .into_iter()
            .find(|range| range.as_str() == s.trim())
            .ok_or_else(|| TypeConstraintError::InvalidValue(format!("unknown budget `{s}`")))
    }
}

/// Product feature a visitor can express interest in.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum FeatureTag {
    #[serde(rename = "QR Code Menus")]
    QrCodeMenus,
    #[serde(rename = "Multi-language Support")]
    MultiLanguageSupport,
    #[serde(rename = "Online Ordering")]
    OnlineOrdering,
    #[serde(rename = "Customer Reviews")]
    CustomerReviews,
    #[serde(rename = "Analytics Dashboard")]
    AnalyticsDashboard,
    #[serde(rename = "Social Media Integration")]
    SocialMediaIntegration,
    #[serde(rename = "Custom Branding")]
    CustomBranding,
    #[serde(rename = "Mobile App")]
    MobileApp,
}

impl FeatureTag {
    pub const ALL: [FeatureTag; 8] = [
        FeatureTag::QrCodeMenus,
        FeatureTag::MultiLanguageSupport,
        FeatureTag::OnlineOrdering,
        FeatureTag::CustomerReviews,
        FeatureTag::AnalyticsDashboard,
        FeatureTag::SocialMediaIntegration,
        FeatureTag::CustomBranding,
        FeatureTag::MobileApp,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureTag::QrCodeMenus => "QR Code Menus",
            FeatureTag::MultiLanguageSupport => "Multi-language Support",
            FeatureTag::OnlineOrdering => "Online Ordering",
            FeatureTag::CustomerReviews => "Customer Reviews",
            FeatureTag::AnalyticsDashboard => "Analytics Dashboard",
            FeatureTag::SocialMediaIntegration => "Social Media Integration",
            FeatureTag::CustomBranding => "Custom Branding",
            FeatureTag::MobileApp => "Mobile App",
        }
    }
}

impl FromStr for FeatureTag {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FeatureTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s.trim())
            .ok_or_else(|| TypeConstraintError::InvalidValue(format!("unknown feature `{s}`")))
    }
}

/// Visitor details collected by the contact page.
///
/// Serialized with the camelCase keys the contact endpoint expects; the same
/// shape is kept in the session as a draft after a failed submission.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub restaurant_name: String,
    #[serde(with = "budget_field")]
    pub budget: Option<BudgetRange>,
    pub number_of_tables: String,
    pub current_menu_type: String,
    features: Vec<FeatureTag>,
    pub additional_info: String,
}

impl ContactForm {
    /// Selected features in the order they were first checked.
    pub fn features(&self) -> &[FeatureTag] {
        &self.features
    }

    /// Records the checked state of a feature checkbox.
    pub fn set_feature(&mut self, feature: FeatureTag, checked: bool) {
        if checked {
            if !self.features.contains(&feature) {
                self.features.push(feature);
            }
        } else {
            self.features.retain(|f| *f != feature);
        }
    }

    pub fn has_feature(&self, feature: FeatureTag) -> bool {
        self.features.contains(&feature)
    }
}

/// Budget travels as its wire string, with an unset bracket sent as `""`.
mod budget_field {
    use super::*;

    pub fn serialize<S>(value: &Option<BudgetRange>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(value.map(|v| v.as_str()).unwrap_or(""))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<BudgetRange>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if raw.trim().is_empty() {
            return Ok(None);
        }
        raw.parse().map(Some).map_err(serde::de::Error::custom)
    }
}

/// Validated reply of the contact endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Accepted,
    Rejected { message: String },
}
