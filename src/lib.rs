//! # tally
//!
//! The non-UI core of an invoice form: line-item arithmetic, country and
//! state tax lookup, currency display rules and preview data.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//! Nothing is rounded until an amount is formatted for display.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use tally::core::*;
//! use rust_decimal_macros::dec;
//!
//! let invoice = InvoiceBuilder::new(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
//!     .country("DE")
//!     .currency("EUR")
//!     .add_item(LineItem::new(LineItemId(1))
//!         .with_description("Consulting")
//!         .with_quantity(dec!(10))
//!         .with_unit_price(dec!(150)))
//!     .build()
//!     .unwrap();
//!
//! let totals = Totals::compute(&invoice);
//! assert_eq!(totals.tax_amount, dec!(285));
//! assert_eq!(format_amount(totals.total, &invoice.currency_code), "€1785.00");
//!
//! // Edits return a new invoice; the old one is unchanged.
//! let next = invoice.apply(InvoiceEdit::Discount(dec!(10))).unwrap();
//! assert_eq!(Totals::compute(&next).total, dec!(1635));
//! assert_eq!(invoice.discount_percent, dec!(0));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Invoice types, calculator, tax tables, currency formatting, preview |
//! | `extract` | Document extraction interface with sample and JSON extractors |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "extract")]
pub mod extract;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
