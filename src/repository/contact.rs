use crate::domain::contact::{ContactForm, SubmissionOutcome};
use crate::models::contact::SubmissionResponse;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{ContactRequestWriter, SupabaseRepository};

impl ContactRequestWriter for SupabaseRepository {
    async fn submit_contact_request(
        &self,
        form: &ContactForm,
    ) -> RepositoryResult<SubmissionOutcome> {
        let response = self
            .http
            .post(self.contact_form_url.clone())
            .json(form)
            .send()
            .await?;

        // The function reports failures in the body, whatever the status.
        let status = response.status();
        let body = response.bytes().await?;
        match serde_json::from_slice::<SubmissionResponse>(&body) {
            Ok(reply) => Ok(SubmissionOutcome::from(reply)),
            Err(_) if !status.is_success() => Err(RepositoryError::StatusError {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            }),
            Err(err) => Err(err.into()),
        }
    }
}
