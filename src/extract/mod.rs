//! Document extraction: turn an uploaded document into invoice fields.
//!
//! Extraction backends implement [`DocumentExtractor`]. The result is an
//! [`ExtractedInvoice`] carrying only the fields the backend found; applying
//! it (via [`InvoiceEdit::ApplyExtraction`](crate::core::InvoiceEdit)) leaves
//! every other field of the invoice as it was.
//!
//! # Example
//!
//! ```
//! use tally::core::*;
//! use tally::extract::*;
//! use chrono::NaiveDate;
//!
//! let blank = InvoiceBuilder::new(NaiveDate::from_ymd_opt(2023, 5, 1).unwrap())
//!     .build_unchecked()
//!     .unwrap();
//! let scanned = SampleExtractor.extract(b"%PDF-1.7 ...").unwrap();
//! let filled = blank.apply(InvoiceEdit::ApplyExtraction(scanned)).unwrap();
//! assert_eq!(filled.client.name, "TechNova Inc.");
//! assert_eq!(filled.items.len(), 3);
//! ```

mod json;
mod sample;

pub use json::JsonExtractor;
pub use sample::SampleExtractor;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::validation::{MAX_LINE_ITEMS, check_line_value, check_tax_rate};
use crate::core::{
    Company, Invoice, InvoiceError, LineItem, LineItemId, resolve_tax, select_country,
};

/// Maximum accepted document size (10 MiB).
pub const MAX_DOCUMENT_SIZE: usize = 10 * 1024 * 1024;

/// Capability: document bytes in, partial invoice fields out.
pub trait DocumentExtractor {
    fn extract(&self, document: &[u8]) -> Result<ExtractedInvoice, InvoiceError>;
}

/// Client fields an extractor may recover. `None` means "not found".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractedClient {
    pub name: Option<String>,
    pub address: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub country_code: Option<String>,
    pub state_code: Option<String>,
}

/// One extracted line; ids are assigned when merged into an invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedItem {
    pub description: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    #[serde(default = "taxable_default")]
    pub taxable: bool,
}

fn taxable_default() -> bool {
    true
}

/// Fields recovered from a document. `None`/empty means "not found".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractedInvoice {
    pub company: Option<Company>,
    pub invoice_number: Option<String>,
    pub client: Option<ExtractedClient>,
    pub items: Vec<ExtractedItem>,
    pub notes: Option<String>,
    pub tax_rate: Option<Decimal>,
    pub tax_type: Option<String>,
}

impl ExtractedInvoice {
    /// Overwrite the fields of `invoice` this extraction carries.
    ///
    /// An extracted location re-derives the tax rate and label the same way
    /// [`InvoiceEdit::Country`](crate::core::InvoiceEdit) and
    /// [`InvoiceEdit::Region`](crate::core::InvoiceEdit) do; an explicit
    /// extracted rate or label is applied afterwards. Extracted items replace
    /// the existing items; an extraction without items keeps them, so an
    /// invoice never loses its last line.
    pub(crate) fn merge_into(self, invoice: &mut Invoice) -> Result<(), InvoiceError> {
        self.check_bounds()?;

        if let Some(company) = self.company {
            invoice.company = company;
        }
        if let Some(number) = self.invoice_number {
            invoice.invoice_number = number;
        }
        if let Some(client) = self.client {
            let target = &mut invoice.client;
            for (field, value) in [
                (&mut target.name, client.name),
                (&mut target.address, client.address),
                (&mut target.email, client.email),
                (&mut target.phone, client.phone),
            ] {
                if let Some(value) = value {
                    *field = value;
                }
            }
            merge_location(invoice, client.country_code, client.state_code)?;
        }
        if !self.items.is_empty() {
            invoice.items = self
                .items
                .into_iter()
                .zip(1u64..)
                .map(|(item, id)| LineItem {
                    id: LineItemId(id),
                    description: item.description,
                    quantity: item.quantity,
                    unit_price: item.unit_price,
                    taxable: item.taxable,
                })
                .collect();
        }
        if let Some(notes) = self.notes {
            invoice.notes = notes;
        }
        if let Some(rate) = self.tax_rate {
            invoice.tax_rate = rate;
        }
        if let Some(label) = self.tax_type {
            invoice.tax_type = label;
        }
        tracing::debug!(items = invoice.items.len(), "extraction applied");
        Ok(())
    }

    /// Refuse extracted values the calculator cannot total safely.
    fn check_bounds(&self) -> Result<(), InvoiceError> {
        if self.items.len() > MAX_LINE_ITEMS {
            return Err(InvoiceError::Extraction(format!(
                "{} line items extracted, limit is {MAX_LINE_ITEMS}",
                self.items.len()
            )));
        }
        let problem = self
            .items
            .iter()
            .enumerate()
            .find_map(|(i, item)| {
                check_line_value(format!("items[{i}].quantity"), item.quantity).or_else(|| {
                    check_line_value(format!("items[{i}].unit_price"), item.unit_price)
                })
            })
            .or_else(|| self.tax_rate.and_then(check_tax_rate));
        match problem {
            Some(error) => {
                tracing::warn!(%error, "rejecting extraction");
                Err(InvoiceError::Extraction(error.to_string()))
            }
            None => Ok(()),
        }
    }
}

fn merge_location(
    invoice: &mut Invoice,
    country: Option<String>,
    state: Option<String>,
) -> Result<(), InvoiceError> {
    match (country, state) {
        (Some(country), state) => {
            let selection = match state.as_deref() {
                Some(region) => resolve_tax(&country, Some(region))?,
                None => select_country(&country)?,
            };
            invoice.client.country_code = country;
            invoice.client.state_code = selection.region;
            invoice.tax_rate = selection.rate;
            invoice.tax_type = selection.label;
        }
        (None, Some(region)) => {
            let selection = resolve_tax(&invoice.client.country_code, Some(region.as_str()))?;
            if selection.region.is_none() {
                return Err(InvoiceError::UnknownRegion {
                    country: invoice.client.country_code.clone(),
                    region,
                });
            }
            invoice.client.state_code = selection.region;
            invoice.tax_rate = selection.rate;
        }
        (None, None) => {}
    }
    Ok(())
}

/// Reject documents no backend should accept.
pub(crate) fn check_document(document: &[u8]) -> Result<(), InvoiceError> {
    if document.is_empty() {
        return Err(InvoiceError::Extraction("document is empty".into()));
    }
    if document.len() > MAX_DOCUMENT_SIZE {
        return Err(InvoiceError::Extraction(format!(
            "document is {} bytes, limit is {MAX_DOCUMENT_SIZE}",
            document.len()
        )));
    }
    Ok(())
}
