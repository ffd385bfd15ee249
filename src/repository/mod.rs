use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use url::Url;

use crate::domain::company_settings::CompanySettings;
use crate::domain::contact::{ContactForm, SubmissionOutcome};
use crate::domain::restaurant::{ConnectionStatus, Restaurant};
use crate::repository::errors::{RepositoryError, RepositoryResult};

pub mod company_settings;
pub mod contact;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod restaurant;

#[derive(Debug, Clone, Default)]
pub struct RestaurantListQuery {
    pub connection_status: Option<ConnectionStatus>,
    pub newest_first: bool,
}

impl RestaurantListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn connection_status(mut self, status: ConnectionStatus) -> Self {
        self.connection_status = Some(status);
        self
    }

    pub fn newest_first(mut self) -> Self {
        self.newest_first = true;
        self
    }

    /// Connected restaurants, most recently created first.
    pub fn public_directory() -> Self {
        Self::new()
            .connection_status(ConnectionStatus::Connected)
            .newest_first()
    }
}

#[allow(async_fn_in_trait)]
pub trait CompanySettingsReader {
    /// Reads the singleton settings row; a missing row is [`RepositoryError::NotFound`].
    async fn get_company_settings(&self) -> RepositoryResult<CompanySettings>;
}

#[allow(async_fn_in_trait)]
pub trait RestaurantReader {
    async fn list_restaurants(&self, query: RestaurantListQuery)
    -> RepositoryResult<Vec<Restaurant>>;
}

#[allow(async_fn_in_trait)]
pub trait ContactRequestWriter {
    async fn submit_contact_request(
        &self,
        form: &ContactForm,
    ) -> RepositoryResult<SubmissionOutcome>;
}

/// Connection settings for [`SupabaseRepository`].
#[derive(Debug, Clone)]
pub struct SupabaseOptions {
    pub project_url: Url,
    pub anon_key: String,
    pub contact_form_url: Url,
    pub timeout: Duration,
}

/// Gateway to the hosted backend: PostgREST tables plus the contact function.
#[derive(Clone)]
pub struct SupabaseRepository {
    http: Client,
    rest_url: Url,
    anon_key: String,
    contact_form_url: Url,
}

impl SupabaseRepository {
    pub fn new(options: SupabaseOptions) -> RepositoryResult<Self> {
        let http = Client::builder().timeout(options.timeout).build()?;

        let mut project_url = options.project_url;
        if !project_url.path().ends_with('/') {
            let path = format!("{}/", project_url.path());
            project_url.set_path(&path);
        }
        let rest_url = project_url
            .join("rest/v1/")
            .map_err(|e| RepositoryError::Unexpected(format!("Invalid backend url: {e}")))?;

        Ok(Self {
            http,
            rest_url,
            anon_key: options.anon_key,
            contact_form_url: options.contact_form_url,
        })
    }

    fn table_url(&self, table: &str) -> RepositoryResult<Url> {
        self.rest_url
            .join(table)
            .map_err(|e| RepositoryError::Unexpected(format!("Invalid table url: {e}")))
    }

    /// Authenticated GET against a PostgREST table.
    fn table_request(&self, table: &str) -> RepositoryResult<RequestBuilder> {
        let url = self.table_url(table)?;
        Ok(self
            .http
            .get(url)
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key))
    }
}

/// Reads a successful JSON body, turning other statuses into errors.
async fn read_json<T: DeserializeOwned>(response: Response) -> RepositoryResult<T> {
    let status = response.status();
    let body = response.bytes().await?;
    if !status.is_success() {
        return Err(RepositoryError::StatusError {
            status: status.as_u16(),
            body: String::from_utf8_lossy(&body).into_owned(),
        });
    }
    Ok(serde_json::from_slice(&body)?)
}
