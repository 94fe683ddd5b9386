//! Currency display rules.
//!
//! Each supported currency is described by plain data — symbol, symbol
//! position and number of decimal digits — and a single function,
//! [`CurrencyRule::format`], interprets it. The table is ordered the way a
//! currency picker lists it.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// Where the currency symbol goes relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPosition {
    /// `$12.30`
    Prefix,
    /// `12.30$`
    Suffix,
}

/// Display convention for one currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CurrencyRule {
    /// ISO 4217 code.
    pub code: &'static str,
    /// English display name.
    pub name: &'static str,
    pub symbol: &'static str,
    pub position: SymbolPosition,
    /// Digits after the decimal point (0 for currencies without cents).
    pub decimals: u32,
}

impl CurrencyRule {
    /// Format `amount` for display under this rule.
    ///
    /// Rounds half away from zero to [`decimals`](Self::decimals) digits.
    /// Negative amounts keep the sign next to the number (`$-5.00`).
    pub fn format(&self, amount: Decimal) -> String {
        let number = fixed(amount, self.decimals);
        match self.position {
            SymbolPosition::Prefix => format!("{}{}", self.symbol, number),
            SymbolPosition::Suffix => format!("{}{}", number, self.symbol),
        }
    }
}

/// Look up the display rule for a currency code.
pub fn currency_rule(code: &str) -> Option<&'static CurrencyRule> {
    CURRENCIES.iter().find(|c| c.code == code)
}

/// All supported currencies, in picker order.
pub fn currencies() -> &'static [CurrencyRule] {
    CURRENCIES
}

/// Check whether `code` has a display rule.
pub fn is_known_currency_code(code: &str) -> bool {
    currency_rule(code).is_some()
}

/// Render `amount` with exactly `dp` decimal digits.
pub(crate) fn fixed(amount: Decimal, dp: u32) -> String {
    let mut rounded = amount.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    // -0.001 rounds to a negative zero; print it as plain zero
    if rounded.is_zero() {
        rounded = Decimal::ZERO;
    }
    format!("{:.*}", dp as usize, rounded)
}

const fn prefix(
    code: &'static str,
    name: &'static str,
    symbol: &'static str,
    decimals: u32,
) -> CurrencyRule {
    CurrencyRule {
        code,
        name,
        symbol,
        position: SymbolPosition::Prefix,
        decimals,
    }
}

static CURRENCIES: &[CurrencyRule] = &[
    prefix("USD", "US Dollar", "$", 2),
    prefix("EUR", "Euro", "€", 2),
    prefix("GBP", "British Pound", "£", 2),
    prefix("JPY", "Japanese Yen", "¥", 0),
    prefix("CAD", "Canadian Dollar", "CA$", 2),
    prefix("AUD", "Australian Dollar", "A$", 2),
    prefix("INR", "Indian Rupee", "₹", 2),
    prefix("CNY", "Chinese Yuan", "¥", 2),
    prefix("BRL", "Brazilian Real", "R$", 2),
    prefix("ZAR", "South African Rand", "R", 2),
];
