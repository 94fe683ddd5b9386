use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;

use super::error::{InvoiceError, validation_failure};
use super::tax::{resolve_tax, select_country};
use super::types::*;
use super::validation;

/// Days between issue date and the default due date.
pub const DEFAULT_PAYMENT_DAYS: u64 = 30;

/// Builder for constructing invoices.
///
/// Starts from the same defaults a blank form shows: USD, a US client in the
/// first state of the region table with its sales tax, due date thirty days
/// after issue, and one blank line item.
///
/// ```
/// use tally::core::*;
/// use rust_decimal_macros::dec;
/// use chrono::NaiveDate;
///
/// let invoice = InvoiceBuilder::new(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
///     .invoice_number("INV-001")
///     .company(CompanyBuilder::new("CodeCircuit Technologies").email("invoices@codecircuit.com").build())
///     .client_name("TechNova Inc.")
///     .region("MA")
///     .add_item(LineItem::new(LineItemId(1)).with_quantity(dec!(2)).with_unit_price(dec!(100)))
///     .build()
///     .unwrap();
///
/// assert_eq!(Totals::compute(&invoice).total, dec!(212.50));
/// ```
pub struct InvoiceBuilder {
    company: Company,
    invoice_number: String,
    issue_date: NaiveDate,
    due_date: Option<NaiveDate>,
    currency_code: String,
    client: Client,
    items: Vec<LineItem>,
    notes: String,
    tax_override: Option<(Decimal, Option<String>)>,
    discount_percent: Decimal,
}

impl InvoiceBuilder {
    pub fn new(issue_date: NaiveDate) -> Self {
        Self {
            company: Company::default(),
            invoice_number: String::new(),
            issue_date,
            due_date: None,
            currency_code: "USD".to_string(),
            client: Client {
                country_code: "US".to_string(),
                ..Client::default()
            },
            items: Vec::new(),
            notes: String::new(),
            tax_override: None,
            discount_percent: Decimal::ZERO,
        }
    }

    /// Builder dated today (local time).
    pub fn today() -> Self {
        Self::new(chrono::Local::now().date_naive())
    }

    pub fn company(mut self, company: Company) -> Self {
        self.company = company;
        self
    }

    pub fn invoice_number(mut self, number: impl Into<String>) -> Self {
        self.invoice_number = number.into();
        self
    }

    pub fn due_date(mut self, date: NaiveDate) -> Self {
        self.due_date = Some(date);
        self
    }

    pub fn currency(mut self, code: impl Into<String>) -> Self {
        self.currency_code = code.into();
        self
    }

    /// Replace the whole client. Tax is derived from its country and region
    /// at build time.
    pub fn client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    pub fn client_name(mut self, name: impl Into<String>) -> Self {
        self.client.name = name.into();
        self
    }

    /// Select the client country. Clears any previously chosen region.
    pub fn country(mut self, code: impl Into<String>) -> Self {
        self.client.country_code = code.into();
        self.client.state_code = None;
        self
    }

    pub fn region(mut self, code: impl Into<String>) -> Self {
        self.client.state_code = Some(code.into());
        self
    }

    pub fn add_item(mut self, item: LineItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Use this rate (and optionally label) instead of the table lookup.
    pub fn tax_rate(mut self, rate: Decimal, label: Option<String>) -> Self {
        self.tax_override = Some((rate, label));
        self
    }

    pub fn discount_percent(mut self, percent: Decimal) -> Self {
        self.discount_percent = percent;
        self
    }

    /// Build the invoice and run validation.
    /// Returns all validation errors (not just the first).
    pub fn build(self) -> Result<Invoice, InvoiceError> {
        let invoice = self.build_unchecked()?;

        let errors = validation::validate_invoice(&invoice);
        if !errors.is_empty() {
            return Err(validation_failure(&errors));
        }

        Ok(invoice)
    }

    /// Build without validation. Country and region must still resolve.
    pub fn build_unchecked(self) -> Result<Invoice, InvoiceError> {
        let mut client = self.client;
        let selection = match client.state_code.as_deref() {
            Some(region) => resolve_tax(&client.country_code, Some(region))?,
            None => select_country(&client.country_code)?,
        };
        client.state_code = selection.region;

        let (tax_rate, tax_type) = match self.tax_override {
            Some((rate, label)) => (rate, label.unwrap_or(selection.label)),
            None => (selection.rate, selection.label),
        };

        let due_date = match self.due_date {
            Some(date) => date,
            None => self
                .issue_date
                .checked_add_days(Days::new(DEFAULT_PAYMENT_DAYS))
                .ok_or_else(|| InvoiceError::Builder("due date out of range".into()))?,
        };

        let mut items = self.items;
        if items.is_empty() {
            items.push(LineItem::new(LineItemId(1)));
        }

        Ok(Invoice {
            company: self.company,
            invoice_number: self.invoice_number,
            issue_date: self.issue_date,
            due_date,
            currency_code: self.currency_code,
            client,
            items,
            notes: self.notes,
            tax_rate,
            tax_type,
            discount_percent: self.discount_percent,
        })
    }
}

/// Builder for [`Company`].
pub struct CompanyBuilder {
    company: Company,
}

impl CompanyBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            company: Company {
                name: name.into(),
                ..Company::default()
            },
        }
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.company.address = address.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.company.phone = phone.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.company.email = email.into();
        self
    }

    pub fn website(mut self, website: impl Into<String>) -> Self {
        self.company.website = website.into();
        self
    }

    pub fn tax_id(mut self, tax_id: impl Into<String>) -> Self {
        self.company.tax_id = tax_id.into();
        self
    }

    pub fn build(self) -> Company {
        self.company
    }
}
