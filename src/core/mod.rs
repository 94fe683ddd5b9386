//! Core invoice types, arithmetic, tax lookup and currency formatting.
//!
//! Everything here is synchronous and side-effect free. Reference tables
//! (currencies, countries, regions) are static data.

mod builder;
mod calculate;
pub mod countries;
pub mod currencies;
mod edit;
mod error;
pub mod regions;
mod summary;
mod tax;
mod types;
pub(crate) mod validation;

pub use builder::*;
pub use calculate::*;
pub use countries::{CountryTaxRule, country_rule, is_known_country_code};
pub use currencies::{CurrencyRule, SymbolPosition, currency_rule, is_known_currency_code};
pub use edit::*;
pub use error::*;
pub use regions::{RegionTaxRule, region_rule};
pub use summary::*;
pub use tax::*;
pub use types::*;
pub use validation::*;
