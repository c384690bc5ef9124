//! Client entity

use crate::core::entity::Entity;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A bar client. Owned by the store; referenced (not owned) by invoices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    /// Canonical URL returned by the media-upload collaborator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

impl Client {
    /// Display name bound into invoice reports
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Entity for Client {
    fn collection() -> &'static str {
        "clients"
    }

    fn kind() -> &'static str {
        "client"
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        let client = Client {
            id: Some("c1".into()),
            first_name: "Ana".into(),
            last_name: "Diaz".into(),
            birth_date: NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
            photo_url: None,
        };
        assert_eq!(client.display_name(), "Ana Diaz");
    }

    #[test]
    fn test_serde_skips_absent_optionals() {
        let client = Client {
            id: None,
            first_name: "Ana".into(),
            last_name: "Diaz".into(),
            birth_date: NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
            photo_url: None,
        };
        let json = serde_json::to_value(&client).unwrap();
        assert!(json.get("id").is_none());
        assert!(json.get("photo_url").is_none());
    }
}
