//! Field-level edits producing new invoice values.
//!
//! A form never mutates its invoice in place. Each user action becomes an
//! [`InvoiceEdit`] and [`Invoice::apply`] returns the next invoice, leaving
//! the previous one untouched. A rejected edit returns an error and no new
//! value.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::{InvoiceError, ValidationError, validation_failure};
use super::tax::{resolve_tax, select_country};
use super::types::{Company, Invoice, LineItem, LineItemId};
use super::validation::{MAX_LINE_ITEMS, check_line_value, check_tax_rate};

/// Text fields of [`Company`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompanyField {
    Name,
    Address,
    Phone,
    Email,
    Website,
    TaxId,
}

/// Free-text fields of the client. Country and region go through
/// [`InvoiceEdit::Country`] and [`InvoiceEdit::Region`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClientField {
    Name,
    Address,
    Email,
    Phone,
}

/// Change to a single line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ItemChange {
    Description(String),
    Quantity(Decimal),
    UnitPrice(Decimal),
    Taxable(bool),
}

/// One user action on the invoice form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InvoiceEdit {
    Company(CompanyField, String),
    Client(ClientField, String),
    InvoiceNumber(String),
    IssueDate(NaiveDate),
    DueDate(NaiveDate),
    Notes(String),
    /// Switch display currency. Codes without a rule are kept as-is.
    Currency(String),
    /// Select a client country; resets region and re-derives tax.
    Country(String),
    /// Select a region of the current country; re-derives the tax rate.
    Region(String),
    /// Append a blank line item.
    AddItem,
    UpdateItem(LineItemId, ItemChange),
    /// Remove an item. Rejected for the last remaining item.
    RemoveItem(LineItemId),
    /// Discount in percent, 0 to 100.
    Discount(Decimal),
    /// Manually override the tax rate until the next country/region change.
    /// Rates outside 0 to 1 are rejected.
    TaxRate(Decimal),
    TaxType(String),
    /// Merge fields produced by a document extractor.
    #[cfg(feature = "extract")]
    ApplyExtraction(crate::extract::ExtractedInvoice),
}

impl Invoice {
    /// Return the invoice that results from applying `edit` to `self`.
    pub fn apply(&self, edit: InvoiceEdit) -> Result<Invoice, InvoiceError> {
        let mut next = self.clone();
        match edit {
            InvoiceEdit::Company(field, value) => set_company(&mut next.company, field, value),
            InvoiceEdit::Client(field, value) => {
                let client = &mut next.client;
                match field {
                    ClientField::Name => client.name = value,
                    ClientField::Address => client.address = value,
                    ClientField::Email => client.email = value,
                    ClientField::Phone => client.phone = value,
                }
            }
            InvoiceEdit::InvoiceNumber(number) => next.invoice_number = number,
            InvoiceEdit::IssueDate(date) => next.issue_date = date,
            InvoiceEdit::DueDate(date) => next.due_date = date,
            InvoiceEdit::Notes(notes) => next.notes = notes,
            InvoiceEdit::Currency(code) => next.currency_code = code,
            InvoiceEdit::Country(code) => {
                let selection = select_country(&code)?;
                tracing::debug!(
                    country = %code,
                    region = ?selection.region,
                    rate = %selection.rate,
                    "client country changed"
                );
                next.client.country_code = code;
                next.client.state_code = selection.region;
                next.tax_rate = selection.rate;
                next.tax_type = selection.label;
            }
            InvoiceEdit::Region(code) => {
                let selection = resolve_tax(&next.client.country_code, Some(code.as_str()))?;
                if selection.region.is_none() {
                    return Err(InvoiceError::UnknownRegion {
                        country: next.client.country_code.clone(),
                        region: code,
                    });
                }
                tracing::debug!(region = %code, rate = %selection.rate, "client region changed");
                next.client.state_code = selection.region;
                next.tax_rate = selection.rate;
            }
            InvoiceEdit::AddItem => {
                if next.items.len() >= MAX_LINE_ITEMS {
                    return Err(validation_failure(&[ValidationError::new(
                        "items",
                        format!("invoice cannot have more than {MAX_LINE_ITEMS} line items"),
                    )]));
                }
                let id = next.next_item_id();
                next.items.push(LineItem::new(id));
            }
            InvoiceEdit::UpdateItem(id, change) => {
                let item = next
                    .items
                    .iter_mut()
                    .find(|i| i.id == id)
                    .ok_or(InvoiceError::UnknownLineItem(id))?;
                let out_of_range = match &change {
                    ItemChange::Quantity(q) => check_line_value(format!("item {id} quantity"), *q),
                    ItemChange::UnitPrice(p) => check_line_value(format!("item {id} unit price"), *p),
                    _ => None,
                };
                if let Some(error) = out_of_range {
                    return Err(validation_failure(&[error]));
                }
                match change {
                    ItemChange::Description(d) => item.description = d,
                    ItemChange::Quantity(q) => item.quantity = q,
                    ItemChange::UnitPrice(p) => item.unit_price = p,
                    ItemChange::Taxable(t) => item.taxable = t,
                }
            }
            InvoiceEdit::RemoveItem(id) => {
                let pos = next
                    .items
                    .iter()
                    .position(|i| i.id == id)
                    .ok_or(InvoiceError::UnknownLineItem(id))?;
                if next.items.len() == 1 {
                    tracing::warn!(item = %id, "refusing to remove the last line item");
                    return Err(InvoiceError::LastLineItem);
                }
                next.items.remove(pos);
            }
            InvoiceEdit::Discount(percent) => {
                if percent < Decimal::ZERO || percent > Decimal::ONE_HUNDRED {
                    return Err(validation_failure(&[ValidationError::new(
                        "discount_percent",
                        format!("discount {percent}% must be between 0 and 100"),
                    )]));
                }
                next.discount_percent = percent;
            }
            InvoiceEdit::TaxRate(rate) => {
                if let Some(error) = check_tax_rate(rate) {
                    return Err(validation_failure(&[error]));
                }
                next.tax_rate = rate;
            }
            InvoiceEdit::TaxType(label) => next.tax_type = label,
            #[cfg(feature = "extract")]
            InvoiceEdit::ApplyExtraction(extracted) => extracted.merge_into(&mut next)?,
        }
        Ok(next)
    }
}

fn set_company(company: &mut Company, field: CompanyField, value: String) {
    match field {
        CompanyField::Name => company.name = value,
        CompanyField::Address => company.address = value,
        CompanyField::Phone => company.phone = value,
        CompanyField::Email => company.email = value,
        CompanyField::Website => company.website = value,
        CompanyField::TaxId => company.tax_id = value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::InvoiceBuilder;
    use rust_decimal_macros::dec;

    fn blank() -> Invoice {
        InvoiceBuilder::new(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
            .country("DE")
            .build_unchecked()
            .unwrap()
    }

    #[test]
    fn us_selection_uses_first_region_rate() {
        let inv = blank().apply(InvoiceEdit::Country("US".into())).unwrap();
        assert_eq!(inv.client.state_code.as_deref(), Some("AL"));
        assert_eq!(inv.tax_rate, dec!(0.04));
        assert_ne!(inv.tax_rate, resolve_tax("US", None).unwrap().rate);
        assert_eq!(inv.tax_type, "Sales Tax");
    }

    #[test]
    fn tax_rate_outside_unit_range_is_rejected() {
        let inv = blank();
        for rate in [dec!(-0.01), dec!(1.5), dec!(19)] {
            let err = inv.apply(InvoiceEdit::TaxRate(rate)).unwrap_err();
            assert!(matches!(err, InvoiceError::Validation(_)));
        }
        let edge = inv.apply(InvoiceEdit::TaxRate(Decimal::ONE)).unwrap();
        assert_eq!(edge.tax_rate, Decimal::ONE);
    }

    #[test]
    fn oversized_item_values_are_rejected() {
        let inv = blank();
        let id = inv.items[0].id;
        let huge = dec!(100000000000000000);
        for change in [ItemChange::Quantity(huge), ItemChange::UnitPrice(-huge)] {
            let err = inv.apply(InvoiceEdit::UpdateItem(id, change)).unwrap_err();
            assert!(matches!(err, InvoiceError::Validation(_)));
        }
        assert_eq!(inv.items[0].quantity, Decimal::ONE);
    }

    #[test]
    fn item_count_is_capped() {
        let mut inv = blank();
        let template = inv.items[0].clone();
        inv.items = (1..=MAX_LINE_ITEMS as u64)
            .map(|n| LineItem {
                id: LineItemId(n),
                ..template.clone()
            })
            .collect();
        assert!(inv.apply(InvoiceEdit::AddItem).is_err());

        inv.items.pop();
        let grown = inv.apply(InvoiceEdit::AddItem).unwrap();
        assert_eq!(grown.items.len(), MAX_LINE_ITEMS);
    }
}
