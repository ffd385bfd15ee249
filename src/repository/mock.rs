//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::company_settings::CompanySettings;
use crate::domain::contact::{ContactForm, SubmissionOutcome};
use crate::domain::restaurant::Restaurant;
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    CompanySettingsReader, ContactRequestWriter, RestaurantListQuery, RestaurantReader,
};

mock! {
    pub Repository {}

    impl CompanySettingsReader for Repository {
        async fn get_company_settings(&self) -> RepositoryResult<CompanySettings>;
    }

    impl RestaurantReader for Repository {
        async fn list_restaurants(
            &self,
            query: RestaurantListQuery,
        ) -> RepositoryResult<Vec<Restaurant>>;
    }

    impl ContactRequestWriter for Repository {
        async fn submit_contact_request(
            &self,
            form: &ContactForm,
        ) -> RepositoryResult<SubmissionOutcome>;
    }
}
