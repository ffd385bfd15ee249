use reqwest::StatusCode;
use reqwest::header::ACCEPT;

use crate::domain::company_settings::CompanySettings;
use crate::models::company_settings::CompanySettings as DbCompanySettings;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{CompanySettingsReader, SupabaseRepository, read_json};

/// Asks PostgREST for exactly one row; zero or several rows answer 406.
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

impl CompanySettingsReader for SupabaseRepository {
    async fn get_company_settings(&self) -> RepositoryResult<CompanySettings> {
        let response = self
            .table_request("company_settings")?
            .query(&[("select", "*")])
            .header(ACCEPT, SINGLE_OBJECT)
            .send()
            .await?;

        if response.status() == StatusCode::NOT_ACCEPTABLE {
            return Err(RepositoryError::NotFound);
        }

        let row: DbCompanySettings = read_json(response).await?;
        Ok(CompanySettings::try_from(row)?)
    }
}
