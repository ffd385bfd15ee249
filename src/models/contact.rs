use serde::Deserialize;

use crate::domain::contact::SubmissionOutcome;

/// Message used when the endpoint rejects a submission without saying why.
pub const DEFAULT_REJECTION_MESSAGE: &str = "Failed to submit form";

/// Reply body of the contact form function.
///
/// `success` must be a JSON boolean; anything else fails to decode rather than
/// being coerced.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

impl From<SubmissionResponse> for SubmissionOutcome {
    fn from(response: SubmissionResponse) -> Self {
        if response.success {
            SubmissionOutcome::Accepted
        } else {
            let message = response
                .error
                .filter(|e| !e.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_REJECTION_MESSAGE.to_string());
            SubmissionOutcome::Rejected { message }
        }
    }
}
