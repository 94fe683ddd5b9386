//! Invoice arithmetic.
//!
//! Every function here is pure: it reads its arguments and returns a value.
//! Nothing is rounded; rounding happens only when an amount is formatted.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use super::currencies::{currency_rule, fixed};
use super::types::{Invoice, LineItem};

/// Quantity times unit price.
pub fn line_amount(item: &LineItem) -> Decimal {
    item.quantity * item.unit_price
}

/// Sum of all line amounts, taxable or not.
pub fn subtotal(items: &[LineItem]) -> Decimal {
    items.iter().map(line_amount).sum()
}

/// Sum of the line amounts of taxable items.
pub fn taxable_amount(items: &[LineItem]) -> Decimal {
    items.iter().filter(|i| i.taxable).map(line_amount).sum()
}

/// Tax on the taxable items at a fractional `tax_rate`.
pub fn tax_amount(items: &[LineItem], tax_rate: Decimal) -> Decimal {
    taxable_amount(items) * tax_rate
}

/// Discount on the pre-tax subtotal. `discount_percent` is applied as given.
pub fn discount_amount(items: &[LineItem], discount_percent: Decimal) -> Decimal {
    subtotal(items) * (discount_percent / dec!(100))
}

/// Subtotal plus tax minus discount.
///
/// Tax is computed on the undiscounted taxable amount; the discount is
/// subtracted afterwards.
pub fn total(items: &[LineItem], tax_rate: Decimal, discount_percent: Decimal) -> Decimal {
    subtotal(items) + tax_amount(items, tax_rate) - discount_amount(items, discount_percent)
}

/// Format `amount` in `currency_code`.
///
/// Unknown codes fall back to a plain two-decimal number.
pub fn format_amount(amount: Decimal, currency_code: &str) -> String {
    match currency_rule(currency_code) {
        Some(rule) => rule.format(amount),
        None => fixed(amount, 2),
    }
}

/// All derived amounts of one invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub subtotal: Decimal,
    pub taxable_amount: Decimal,
    pub tax_amount: Decimal,
    pub discount_amount: Decimal,
    pub total: Decimal,
}

impl Totals {
    /// Compute every amount of `invoice` with the functions above.
    ///
    /// Arithmetic is unchecked. Invoices built from untrusted input should
    /// pass [`validate_invoice`](super::validate_invoice) first, which bounds
    /// quantities, prices and the number of lines.
    pub fn compute(invoice: &Invoice) -> Self {
        let items = &invoice.items;
        Self {
            subtotal: subtotal(items),
            taxable_amount: taxable_amount(items),
            tax_amount: tax_amount(items, invoice.tax_rate),
            discount_amount: discount_amount(items, invoice.discount_percent),
            total: total(items, invoice.tax_rate, invoice.discount_percent),
        }
    }
}
