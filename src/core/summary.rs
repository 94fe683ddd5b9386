//! Display values for the printable invoice preview.
//!
//! [`InvoiceSummary`] gathers everything a preview shows as ready-to-print
//! strings, substituting placeholders for empty form fields. Amounts are
//! formatted in the invoice currency.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use super::calculate::{Totals, format_amount, line_amount};
use super::currencies::fixed;
use super::types::Invoice;

const COMPANY_NAME_PLACEHOLDER: &str = "Your Company";
const COMPANY_ADDRESS_PLACEHOLDER: &str = "Company Address";
const INVOICE_NUMBER_PLACEHOLDER: &str = "INV-001";
const CLIENT_NAME_PLACEHOLDER: &str = "Client Name";
const CLIENT_ADDRESS_PLACEHOLDER: &str = "Client Address";
const CLOSING_LINE: &str = "Thank you for your business!";

/// One row of the items table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub description: String,
    pub quantity: String,
    pub unit_price: String,
    pub amount: String,
}

/// A labelled amount in the totals block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryLine {
    pub label: String,
    pub amount: String,
}

/// Preview content of one invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceSummary {
    pub company_name: String,
    pub company_address: String,
    /// "Phone: …", "Email: …" etc., only for non-empty fields.
    pub company_contacts: Vec<String>,
    pub invoice_number: String,
    pub issue_date: String,
    pub due_date: String,
    pub client_name: String,
    pub client_address: String,
    pub client_contacts: Vec<String>,
    pub rows: Vec<SummaryRow>,
    pub subtotal: SummaryLine,
    pub tax: SummaryLine,
    /// Present only when the discount is positive. Amount is shown negated.
    pub discount: Option<SummaryLine>,
    pub total: SummaryLine,
    pub notes: Option<String>,
    /// Unformatted amounts behind the lines above.
    pub totals: Totals,
}

impl InvoiceSummary {
    pub fn new(invoice: &Invoice) -> Self {
        let currency = invoice.currency_code.as_str();
        let money = |amount: Decimal| format_amount(amount, currency);
        let totals = Totals::compute(invoice);

        let company = &invoice.company;
        let company_contacts = labelled(&[
            ("Phone", &company.phone),
            ("Email", &company.email),
            ("Website", &company.website),
            ("Tax ID", &company.tax_id),
        ]);

        let client = &invoice.client;
        let client_contacts = labelled(&[("Email", &client.email), ("Phone", &client.phone)]);

        let rows = invoice
            .items
            .iter()
            .map(|item| SummaryRow {
                description: item.description.clone(),
                quantity: item.quantity.normalize().to_string(),
                unit_price: money(item.unit_price),
                amount: money(line_amount(item)),
            })
            .collect();

        let discount = (invoice.discount_percent > Decimal::ZERO).then(|| SummaryLine {
            label: format!("Discount ({}%)", invoice.discount_percent.normalize()),
            amount: format!("-{}", money(totals.discount_amount)),
        });

        Self {
            company_name: or_placeholder(&company.name, COMPANY_NAME_PLACEHOLDER),
            company_address: or_placeholder(&company.address, COMPANY_ADDRESS_PLACEHOLDER),
            company_contacts,
            invoice_number: or_placeholder(&invoice.invoice_number, INVOICE_NUMBER_PLACEHOLDER),
            issue_date: invoice.issue_date.format("%Y-%m-%d").to_string(),
            due_date: invoice.due_date.format("%Y-%m-%d").to_string(),
            client_name: or_placeholder(&client.name, CLIENT_NAME_PLACEHOLDER),
            client_address: or_placeholder(&client.address, CLIENT_ADDRESS_PLACEHOLDER),
            client_contacts,
            rows,
            subtotal: SummaryLine {
                label: "Subtotal".into(),
                amount: money(totals.subtotal),
            },
            tax: SummaryLine {
                label: format!(
                    "{} ({}%)",
                    invoice.tax_type,
                    fixed(invoice.tax_rate * Decimal::ONE_HUNDRED, 2)
                ),
                amount: money(totals.tax_amount),
            },
            discount,
            total: SummaryLine {
                label: "Total".into(),
                amount: money(totals.total),
            },
            notes: (!invoice.notes.trim().is_empty()).then(|| invoice.notes.clone()),
            totals,
        }
    }

    /// Plain-text rendering of the preview; same as `to_string()`.
    pub fn render_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for InvoiceSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.company_name)?;
        writeln!(f, "{}", self.company_address)?;
        for line in &self.company_contacts {
            writeln!(f, "{line}")?;
        }
        writeln!(f)?;
        writeln!(f, "INVOICE")?;
        writeln!(f, "Invoice Number: {}", self.invoice_number)?;
        writeln!(f, "Issue Date: {}", self.issue_date)?;
        writeln!(f, "Due Date: {}", self.due_date)?;
        writeln!(f)?;
        writeln!(f, "Bill To:")?;
        writeln!(f, "{}", self.client_name)?;
        writeln!(f, "{}", self.client_address)?;
        for line in &self.client_contacts {
            writeln!(f, "{line}")?;
        }
        writeln!(f)?;
        writeln!(f, "Description | Quantity | Unit Price | Amount")?;
        for row in &self.rows {
            writeln!(
                f,
                "{} | {} | {} | {}",
                row.description, row.quantity, row.unit_price, row.amount
            )?;
        }
        writeln!(f)?;
        for line in [Some(&self.subtotal), Some(&self.tax), self.discount.as_ref()]
            .into_iter()
            .flatten()
        {
            writeln!(f, "{}: {}", line.label, line.amount)?;
        }
        writeln!(f, "{}: {}", self.total.label, self.total.amount)?;
        if let Some(notes) = &self.notes {
            writeln!(f)?;
            writeln!(f, "Notes:")?;
            writeln!(f, "{notes}")?;
        }
        writeln!(f)?;
        write!(f, "{CLOSING_LINE}")
    }
}


fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.trim().is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

fn labelled(fields: &[(&str, &String)]) -> Vec<String> {
    fields
        .iter()
        .filter(|(_, v)| !v.trim().is_empty())
        .map(|(label, v)| format!("{label}: {v}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::InvoiceBuilder;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn blank() -> Invoice {
        InvoiceBuilder::new(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())
            .build_unchecked()
            .unwrap()
    }

    #[test]
    fn placeholders_for_empty_fields() {
        let s = InvoiceSummary::new(&blank());
        assert_eq!(s.company_name, "Your Company");
        assert_eq!(s.company_address, "Company Address");
        assert_eq!(s.invoice_number, "INV-001");
        assert_eq!(s.client_name, "Client Name");
        assert_eq!(s.client_address, "Client Address");
        assert!(s.company_contacts.is_empty());
        assert!(s.notes.is_none());
    }

    #[test]
    fn tax_label_shows_percentage() {
        let s = InvoiceSummary::new(&blank());
        assert_eq!(s.tax.label, "Sales Tax (4.00%)");
        assert_eq!(s.due_date, "2024-05-31");
    }

    #[test]
    fn discount_line_only_when_positive() {
        let inv = blank();
        assert!(InvoiceSummary::new(&inv).discount.is_none());

        let mut inv = inv;
        inv.items[0].unit_price = dec!(80);
        inv.discount_percent = dec!(12.5);
        let d = InvoiceSummary::new(&inv).discount.unwrap();
        assert_eq!(d.label, "Discount (12.5%)");
        assert_eq!(d.amount, "-$10.00");
    }

    #[test]
    fn contacts_skip_empty_fields() {
        let mut inv = blank();
        inv.company.email = "a@b.c".into();
        inv.company.tax_id = "X-1".into();
        let s = InvoiceSummary::new(&inv);
        assert_eq!(s.company_contacts, vec!["Email: a@b.c", "Tax ID: X-1"]);
    }

    #[test]
    fn display_matches_render_text() {
        let s = InvoiceSummary::new(&blank());
        let text = format!("{s}");
        assert_eq!(text, s.render_text());
        assert!(text.starts_with("Your Company\nCompany Address\n"));
        assert!(text.ends_with("Total: $0.00\n\nThank you for your business!"));
    }
}
