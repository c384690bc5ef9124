//! Request payloads with field validation
//!
//! Validation happens here, at the HTTP boundary; entities and repositories
//! accept whatever they are handed.

use crate::core::error::AppError;
use crate::entities::{Client, ClientRef, Dish, DishRef, Invoice, InvoiceItem};
use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

/// Run payload validation, mapping violations onto [`AppError::Validation`].
pub fn validated<T: Validate>(payload: T) -> Result<T, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    Ok(payload)
}

#[derive(Debug, Deserialize, Validate)]
pub struct ClientPayload {
    #[validate(length(min = 3))]
    pub first_name: String,
    #[validate(length(min = 3))]
    pub last_name: String,
    pub birth_date: NaiveDate,
    #[validate(url)]
    pub photo_url: Option<String>,
}

impl ClientPayload {
    pub fn into_entity(self) -> Client {
        Client {
            id: None,
            first_name: self.first_name,
            last_name: self.last_name,
            birth_date: self.birth_date,
            photo_url: self.photo_url,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct DishPayload {
    #[validate(length(min = 2, max = 20))]
    pub name: String,
    #[validate(range(min = 1.0, max = 999.0))]
    pub price: f64,
    pub active: bool,
}

impl DishPayload {
    pub fn into_entity(self) -> Dish {
        Dish {
            id: None,
            name: self.name,
            price: self.price,
            active: self.active,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct InvoiceItemPayload {
    #[validate(length(min = 1))]
    pub dish_id: String,
    #[validate(range(min = 1))]
    pub quantity: u32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct InvoicePayload {
    #[validate(length(min = 1))]
    pub client_id: String,
    #[validate(nested)]
    pub items: Vec<InvoiceItemPayload>,
}

impl InvoicePayload {
    pub fn into_entity(self) -> Invoice {
        Invoice {
            id: None,
            client: ClientRef { id: self.client_id },
            items: self
                .items
                .into_iter()
                .map(|item| InvoiceItem {
                    dish: DishRef { id: item.dish_id },
                    quantity: item.quantity,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct PhotoPayload {
    /// Canonical URL produced by the media-upload collaborator
    #[validate(url)]
    pub url: String,
}

/// Query parameters for `/{resource}/pageable`
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_page_size")]
    pub size: u64,
}

fn default_page_size() -> u64 {
    2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dish_price_bounds() {
        let ok = DishPayload {
            name: "Soup".into(),
            price: 5.0,
            active: true,
        };
        assert!(validated(ok).is_ok());

        let free = DishPayload {
            name: "Soup".into(),
            price: 0.0,
            active: true,
        };
        assert!(matches!(validated(free), Err(AppError::Validation(_))));

        let absurd = DishPayload {
            name: "Soup".into(),
            price: 1000.0,
            active: true,
        };
        assert!(validated(absurd).is_err());
    }

    #[test]
    fn test_invoice_items_are_validated_nested() {
        let payload = InvoicePayload {
            client_id: "c1".into(),
            items: vec![InvoiceItemPayload {
                dish_id: "m1".into(),
                quantity: 0,
            }],
        };
        assert!(validated(payload).is_err());
    }

    #[test]
    fn test_page_query_defaults() {
        let q: PageQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(q.page, 0);
        assert_eq!(q.size, 2);
    }
}
