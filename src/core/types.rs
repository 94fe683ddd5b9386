use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The invoice being edited — the single piece of state a form owns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Issuing company.
    pub company: Company,
    /// Free-form invoice number (e.g. "INV-2023-05001").
    pub invoice_number: String,
    /// Invoice issue date.
    pub issue_date: NaiveDate,
    /// Payment due date.
    pub due_date: NaiveDate,
    /// Display currency (e.g. "USD"). Codes missing from the currency table
    /// are allowed and formatted without a symbol.
    pub currency_code: String,
    /// Billed client.
    pub client: Client,
    /// Line items, in display order. Never empty after a standard edit.
    pub items: Vec<LineItem>,
    /// Free text printed under the totals.
    pub notes: String,
    /// Fractional tax rate (0.0625 = 6.25%), applied to taxable items.
    pub tax_rate: Decimal,
    /// Tax label shown next to the tax amount (e.g. "Sales Tax", "VAT").
    pub tax_type: String,
    /// Discount in percent of the subtotal.
    pub discount_percent: Decimal,
}

/// Issuing company details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    pub tax_id: String,
}

/// Client details, including the location that drives tax resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub name: String,
    pub address: String,
    pub email: String,
    pub phone: String,
    /// Country code from the country tax table (e.g. "US").
    pub country_code: String,
    /// Region code (US state); `None` when the country has no sub-regions.
    pub state_code: Option<String>,
}

/// Identifier of a line item within one invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineItemId(pub u64);

impl std::fmt::Display for LineItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single invoice line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: LineItemId,
    pub description: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    /// Whether this line counts towards the tax base.
    pub taxable: bool,
}

impl LineItem {
    /// A blank row: quantity 1, price 0, taxable.
    pub fn new(id: LineItemId) -> Self {
        Self {
            id,
            description: String::new(),
            quantity: Decimal::ONE,
            unit_price: Decimal::ZERO,
            taxable: true,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_quantity(mut self, quantity: Decimal) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_unit_price(mut self, unit_price: Decimal) -> Self {
        self.unit_price = unit_price;
        self
    }

    pub fn with_taxable(mut self, taxable: bool) -> Self {
        self.taxable = taxable;
        self
    }
}

impl Invoice {
    /// Look up an item by id.
    pub fn item(&self, id: LineItemId) -> Option<&LineItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Id for the next added item: one more than the largest id in use.
    pub fn next_item_id(&self) -> LineItemId {
        let max = self.items.iter().map(|i| i.id.0).max().unwrap_or(0);
        LineItemId(max + 1)
    }
}
