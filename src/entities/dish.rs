//! Dish (menu entry) entity

use crate::core::entity::Entity;
use serde::{Deserialize, Serialize};

/// A menu entry. Referenced by invoice line items.
///
/// The price bounds (positive, at most 999) are enforced at the HTTP
/// validation boundary, not here: a dish read back from the store is taken
/// as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub price: f64,
    pub active: bool,
}

impl Entity for Dish {
    fn collection() -> &'static str {
        "dishes"
    }

    fn kind() -> &'static str {
        "dish"
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }
}
