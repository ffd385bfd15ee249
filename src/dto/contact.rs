//! DTOs shaped for the contact page template.

use serde::Serialize;

use crate::domain::contact::ContactForm;
use crate::domain::types::FormToken;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Aggregated data required to render the contact page.
#[derive(Debug)]
pub struct ContactPageData {
    /// Draft kept from a failed submission, or an empty form.
    pub form: ContactForm,
    pub form_token: FormToken,
    pub budget_options: Vec<SelectOption>,
    pub feature_options: Vec<SelectOption>,
}

/// How a submission attempt ended when it did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    /// The endpoint accepted the form.
    Sent,
    /// The same form was already being submitted; nothing was sent.
    AlreadyInFlight,
}
