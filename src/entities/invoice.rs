//! Invoice entity and its transient resolved view

use crate::core::entity::Entity;
use crate::entities::{Client, Dish};
use serde::{Deserialize, Serialize};

/// Reference-only handle to a client: holds the foreign id, not the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientRef {
    pub id: String,
}

/// Reference-only handle to a dish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DishRef {
    pub id: String,
}

/// Embedded line item inside an invoice. Holds a dish reference plus the
/// ordered quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceItem {
    pub dish: DishRef,
    pub quantity: u32,
}

/// An invoice: one client reference and an ordered sequence of line items.
///
/// No referential check happens at write time — an invoice may be persisted
/// with dangling references. Resolution fails lazily when a report is
/// requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub client: ClientRef,
    pub items: Vec<InvoiceItem>,
}

impl Entity for Invoice {
    fn collection() -> &'static str {
        "invoices"
    }

    fn kind() -> &'static str {
        "invoice"
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }
}

/// One resolved line: the full dish record plus the ordered quantity.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedLine {
    pub dish: Dish,
    pub quantity: u32,
}

impl ResolvedLine {
    pub fn line_total(&self) -> f64 {
        self.dish.price * f64::from(self.quantity)
    }
}

/// Transient, never-persisted view of an invoice with every reference
/// replaced by its full fetched record. Exists only inside report
/// generation and is discarded after rendering.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedInvoice {
    pub invoice_id: String,
    pub client: Client,
    pub lines: Vec<ResolvedLine>,
}

impl ResolvedInvoice {
    pub fn grand_total(&self) -> f64 {
        self.lines.iter().map(ResolvedLine::line_total).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_line_and_grand_totals() {
        let soup = Dish {
            id: Some("m1".into()),
            name: "Soup".into(),
            price: 5.0,
            active: true,
        };
        let wine = Dish {
            id: Some("m2".into()),
            name: "Wine".into(),
            price: 12.5,
            active: true,
        };

        let resolved = ResolvedInvoice {
            invoice_id: "i1".into(),
            client: Client {
                id: Some("c1".into()),
                first_name: "Ana".into(),
                last_name: "Diaz".into(),
                birth_date: NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
                photo_url: None,
            },
            lines: vec![
                ResolvedLine {
                    dish: soup,
                    quantity: 2,
                },
                ResolvedLine {
                    dish: wine,
                    quantity: 1,
                },
            ],
        };

        assert_eq!(resolved.lines[0].line_total(), 10.0);
        assert_eq!(resolved.lines[1].line_total(), 12.5);
        assert_eq!(resolved.grand_total(), 22.5);
    }

    #[test]
    fn test_invoice_serde_shape() {
        let invoice = Invoice {
            id: Some("i1".into()),
            client: ClientRef { id: "c1".into() },
            items: vec![InvoiceItem {
                dish: DishRef { id: "m1".into() },
                quantity: 2,
            }],
        };

        let json = serde_json::to_value(&invoice).unwrap();
        assert_eq!(json["client"]["id"], "c1");
        assert_eq!(json["items"][0]["dish"]["id"], "m1");
        assert_eq!(json["items"][0]["quantity"], 2);

        let back: Invoice = serde_json::from_value(json).unwrap();
        assert_eq!(back, invoice);
    }
}
