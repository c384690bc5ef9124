//! Invoice report rendering: a bundled tera template produces the report
//! body, which is then typeset into a PDF.
//!
//! The template artifact is bundled at compile time and compiled freshly on
//! every render call; the renderer holds no mutable state across calls.

mod pdf;

use crate::core::error::AppError;
use crate::entities::ResolvedInvoice;
use serde::Serialize;
use tera::{Context, Tera};

const INVOICE_TEMPLATE_NAME: &str = "invoice_report";
const INVOICE_TEMPLATE: &str = include_str!("../../assets/invoice_report.tera");

/// Renders a fully-resolved invoice into a binary PDF document.
///
/// Any template compile or binding failure surfaces as
/// [`AppError::Render`]; the renderer never emits a partially-populated
/// document.
#[derive(Debug, Clone, Default)]
pub struct ReportRenderer;

/// One row of the report's row source, pre-formatted for binding.
#[derive(Debug, Serialize)]
struct ReportRow {
    dish: String,
    quantity: u32,
    unit_price: String,
    line_total: String,
}

fn format_money(v: f64) -> String {
    format!("{:.2}", v)
}

impl ReportRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Bind the resolved invoice to the report template and produce PDF
    /// bytes.
    pub fn render(&self, invoice: &ResolvedInvoice) -> Result<Vec<u8>, AppError> {
        let body = self.render_body(invoice)?;
        pdf::typeset(&format!("Invoice {}", invoice.invoice_id), &body)
    }

    /// Render the textual report body from the template.
    fn render_body(&self, invoice: &ResolvedInvoice) -> Result<String, AppError> {
        let mut tera = Tera::default();
        tera.add_raw_template(INVOICE_TEMPLATE_NAME, INVOICE_TEMPLATE)
            .map_err(|e| AppError::Render(format!("template compile failed: {}", e)))?;

        let rows: Vec<ReportRow> = invoice
            .lines
            .iter()
            .map(|line| ReportRow {
                dish: line.dish.name.clone(),
                quantity: line.quantity,
                unit_price: format_money(line.dish.price),
                line_total: format_money(line.line_total()),
            })
            .collect();

        let mut ctx = Context::new();
        ctx.insert("invoice_id", &invoice.invoice_id);
        ctx.insert("client_name", &invoice.client.display_name());
        ctx.insert("lines", &rows);
        ctx.insert("total", &format_money(invoice.grand_total()));

        tera.render(INVOICE_TEMPLATE_NAME, &ctx)
            .map_err(|e| AppError::Render(format!("template binding failed: {}", e)))
    }
}
