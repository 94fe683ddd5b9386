//! Country tax defaults.
//!
//! Each client country carries a default tax rate and the label printed next
//! to the tax amount. Countries flagged with `has_sub_regions` take their
//! effective rate from the region table instead (see [`super::regions`]).

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Default tax settings for one country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CountryTaxRule {
    /// ISO 3166-1 alpha-2 code.
    pub code: &'static str,
    pub name: &'static str,
    /// Fractional rate used when no region overrides it.
    pub default_tax_rate: Decimal,
    /// Tax label, e.g. "VAT" or "GST".
    pub tax_label: &'static str,
    /// Whether the region table applies to this country.
    pub has_sub_regions: bool,
}

/// Look up a country by code.
pub fn country_rule(code: &str) -> Option<&'static CountryTaxRule> {
    COUNTRIES.iter().find(|c| c.code == code)
}

/// All supported countries, in picker order.
pub fn countries() -> &'static [CountryTaxRule] {
    COUNTRIES
}

/// Check whether `code` is in the country table.
pub fn is_known_country_code(code: &str) -> bool {
    country_rule(code).is_some()
}

static COUNTRIES: &[CountryTaxRule] = &[
    CountryTaxRule {
        code: "US",
        name: "United States",
        default_tax_rate: dec!(0),
        tax_label: "Sales Tax",
        has_sub_regions: true,
    },
    CountryTaxRule {
        code: "CA",
        name: "Canada",
        default_tax_rate: dec!(0.05),
        tax_label: "GST",
        has_sub_regions: false,
    },
    CountryTaxRule {
        code: "GB",
        name: "United Kingdom",
        default_tax_rate: dec!(0.20),
        tax_label: "VAT",
        has_sub_regions: false,
    },
    CountryTaxRule {
        code: "DE",
        name: "Germany",
        default_tax_rate: dec!(0.19),
        tax_label: "VAT",
        has_sub_regions: false,
    },
    CountryTaxRule {
        code: "FR",
        name: "France",
        default_tax_rate: dec!(0.20),
        tax_label: "VAT",
        has_sub_regions: false,
    },
    CountryTaxRule {
        code: "JP",
        name: "Japan",
        default_tax_rate: dec!(0.10),
        tax_label: "Consumption Tax",
        has_sub_regions: false,
    },
    CountryTaxRule {
        code: "AU",
        name: "Australia",
        default_tax_rate: dec!(0.10),
        tax_label: "GST",
        has_sub_regions: false,
    },
    CountryTaxRule {
        code: "IN",
        name: "India",
        default_tax_rate: dec!(0.18),
        tax_label: "GST",
        has_sub_regions: false,
    },
    CountryTaxRule {
        code: "CN",
        name: "China",
        default_tax_rate: dec!(0.13),
        tax_label: "VAT",
        has_sub_regions: false,
    },
    CountryTaxRule {
        code: "BR",
        name: "Brazil",
        default_tax_rate: dec!(0.17),
        tax_label: "ICMS",
        has_sub_regions: false,
    },
    CountryTaxRule {
        code: "ZA",
        name: "South Africa",
        default_tax_rate: dec!(0.15),
        tax_label: "VAT",
        has_sub_regions: false,
    },
];
