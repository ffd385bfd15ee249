//! Configuration model loaded from external sources.

use serde::Deserialize;
use url::Url;

fn default_request_timeout_secs() -> u64 {
    10
}

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub domain: String,
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    /// Key material for session and flash cookies, at least 64 bytes.
    pub secret: String,
    /// Project URL of the backend-as-a-service, e.g. `https://<ref>.supabase.co`.
    pub supabase_url: Url,
    pub supabase_anon_key: String,
    /// Serverless function receiving contact form submissions.
    pub contact_form_url: Url,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    pub contact_email: String,
    pub contact_phone: String,
}
