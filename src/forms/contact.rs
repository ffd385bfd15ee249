//! Contact form as posted by the browser.

use serde::Deserialize;
use validator::Validate;

use crate::domain::contact::{ContactForm, FeatureTag};
use crate::domain::types::{FormToken, NonEmptyString};
use crate::forms::FormError;

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
/// Raw contact form fields. `features` repeats once per checked box.
pub struct ContactFormInput {
    pub form_token: String,
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(max = 50))]
    pub phone: String,
    #[validate(length(max = 200))]
    pub restaurant_name: String,
    pub budget: String,
    #[validate(length(max = 10))]
    pub number_of_tables: String,
    #[validate(length(max = 100))]
    pub current_menu_type: String,
    pub features: Vec<String>,
    #[validate(length(max = 2000))]
    pub additional_info: String,
}

impl ContactFormInput {
    /// Decodes an `application/x-www-form-urlencoded` body.
    pub fn parse(body: &[u8]) -> Result<Self, FormError> {
        serde_html_form::from_bytes(body).map_err(|e| FormError::Malformed(e.to_string()))
    }

    /// Best-effort copy of what the visitor typed, used to refill the page.
    ///
    /// Unknown budget and feature values are dropped rather than rejected.
    pub fn to_draft(&self) -> ContactForm {
        let mut form = ContactForm::default();
        form.name = self.name.trim().to_string();
        form.email = self.email.trim().to_string();
        form.phone = self.phone.trim().to_string();
        form.restaurant_name = self.restaurant_name.trim().to_string();
        form.budget = self.budget.parse().ok();
        form.number_of_tables = self.number_of_tables.trim().to_string();
        form.current_menu_type = self.current_menu_type.trim().to_string();
        for feature in &self.features {
            if let Ok(tag) = feature.parse::<FeatureTag>() {
                form.set_feature(tag, true);
            }
        }
        form.additional_info = self.additional_info.trim().to_string();
        form
    }
}

/// Validated submission ready to be sent to the contact endpoint.
#[derive(Debug)]
pub struct ContactSubmission {
    pub token: FormToken,
    pub form: ContactForm,
}

impl TryFrom<ContactFormInput> for ContactSubmission {
    type Error = FormError;

    fn try_from(input: ContactFormInput) -> Result<Self, Self::Error> {
        input.validate()?;

        let token = input
            .form_token
            .parse::<FormToken>()
            .map_err(|_| FormError::InvalidToken)?;
        let name = NonEmptyString::new(input.name.as_str()).map_err(|_| FormError::EmptyName)?;

        // Sent as typed; `validate` above already checked the email format.
        let mut form = ContactForm::default();
        form.name = name.into_inner();
        form.email = input.email.trim().to_string();
        form.phone = input.phone.trim().to_string();
        form.restaurant_name = input.restaurant_name.trim().to_string();
        form.budget = if input.budget.trim().is_empty() {
            None
        } else {
            Some(input.budget.parse().map_err(|_| FormError::InvalidBudget)?)
        };
        form.number_of_tables = input.number_of_tables.trim().to_string();
        form.current_menu_type = input.current_menu_type.trim().to_string();
        for feature in &input.features {
            let tag = feature
                .parse::<FeatureTag>()
                .map_err(|_| FormError::InvalidFeature)?;
            form.set_feature(tag, true);
        }
        form.additional_info = input.additional_info.trim().to_string();

        Ok(Self { token, form })
    }
}
