use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{MenuSlug, RestaurantId, RestaurantName};

/// Connection state of a restaurant account.
///
/// Only [`ConnectionStatus::Connected`] restaurants are listed publicly.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionStatus {
    Connected,
    Pending,
    Disconnected,
    #[serde(untagged)]
    Other(String),
}

impl ConnectionStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ConnectionStatus::Connected => "connected",
            ConnectionStatus::Pending => "pending",
            ConnectionStatus::Disconnected => "disconnected",
            ConnectionStatus::Other(value) => value.as_str(),
        }
    }
}

impl From<&str> for ConnectionStatus {
    fn from(value: &str) -> Self {
        match value {
            "connected" => ConnectionStatus::Connected,
            "pending" => ConnectionStatus::Pending,
            "disconnected" => ConnectionStatus::Disconnected,
            other => ConnectionStatus::Other(other.to_string()),
        }
    }
}

/// Read-only projection of a partner restaurant.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: RestaurantName,
    pub owner_full_name: String,
    pub owner_email: Option<String>,
    pub city: String,
    pub country: String,
    pub connection_status: ConnectionStatus,
    pub created_at: DateTime<Utc>,
}

impl Restaurant {
    /// Whether the restaurant qualifies for the public directory.
    pub fn is_listed(&self) -> bool {
        self.connection_status == ConnectionStatus::Connected
    }

    pub fn menu_slug(&self) -> MenuSlug {
        MenuSlug::from_name(self.name.as_str())
    }

    /// Year the restaurant joined, shown as "Since <year>".
    pub fn since_year(&self) -> i32 {
        self.created_at.year()
    }
}
