//! Contact page services: rendering data and the submission flow.

use crate::domain::contact::{BudgetRange, ContactForm, FeatureTag, SubmissionOutcome};
use crate::domain::types::FormToken;
use crate::dto::contact::{ContactPageData, SelectOption, SubmissionStatus};
use crate::forms::contact::ContactSubmission;
use crate::repository::ContactRequestWriter;
use crate::services::{ServiceError, ServiceResult};
use crate::submission::InFlightSubmissions;

/// Builds the contact page, refilled from `draft` when one was kept.
pub fn load_contact_page(draft: Option<ContactForm>) -> ContactPageData {
    let form = draft.unwrap_or_default();

    let budget_options = BudgetRange::ALL
        .iter()
        .map(|range| SelectOption {
            value: range.as_str(),
            label: range.label(),
            selected: form.budget == Some(*range),
        })
        .collect();

    let feature_options = FeatureTag::ALL
        .iter()
        .map(|tag| SelectOption {
            value: tag.as_str(),
            label: tag.as_str(),
            selected: form.has_feature(*tag),
        })
        .collect();

    ContactPageData {
        form,
        form_token: FormToken::new(),
        budget_options,
        feature_options,
    }
}

/// Sends a validated contact form to the endpoint.
///
/// At most one call per form token is outstanding: a repeated attempt while
/// the first is in flight returns [`SubmissionStatus::AlreadyInFlight`]
/// without calling the endpoint. The token is released on every path.
pub async fn submit_contact<W>(
    writer: &W,
    in_flight: &InFlightSubmissions,
    submission: &ContactSubmission,
) -> ServiceResult<SubmissionStatus>
where
    W: ContactRequestWriter,
{
    let Some(permit) = in_flight.try_begin(submission.token) else {
        log::info!(
            "Ignoring contact form {}: already being submitted",
            submission.token
        );
        return Ok(SubmissionStatus::AlreadyInFlight);
    };

    let outcome = writer
        .submit_contact_request(&submission.form)
        .await
        .map_err(|err| {
            log::error!("Form submission error for {}: {err}", permit.token());
            ServiceError::from(err)
        })?;

    match outcome {
        SubmissionOutcome::Accepted => {
            log::info!("Contact form {} accepted", permit.token());
            Ok(SubmissionStatus::Sent)
        }
        SubmissionOutcome::Rejected { message } => {
            log::error!(
                "Form submission error for {}: {message}",
                permit.token()
            );
            Err(ServiceError::Rejected(message))
        }
    }
}
