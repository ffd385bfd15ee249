//! Form definitions backing the site routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod contact;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("malformed form body: {0}")]
    Malformed(String),

    #[error("name cannot be empty")]
    EmptyName,

    #[error("invalid form token")]
    InvalidToken,

    #[error("invalid budget")]
    InvalidBudget,

    #[error("invalid feature")]
    InvalidFeature,
}
