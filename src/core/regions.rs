//! US state sales tax rates (state-level base rate, no local add-ons).

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Sub-national tax override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegionTaxRule {
    /// USPS state code.
    pub code: &'static str,
    pub name: &'static str,
    pub tax_rate: Decimal,
}

/// Regions of `country_code`, or an empty slice if it has none.
pub fn regions_of(country_code: &str) -> &'static [RegionTaxRule] {
    match country_code {
        "US" => US_STATES,
        _ => &[],
    }
}

/// Look up a region of a country.
pub fn region_rule(country_code: &str, region_code: &str) -> Option<&'static RegionTaxRule> {
    regions_of(country_code)
        .iter()
        .find(|r| r.code == region_code)
}

/// The region a country selection starts out with.
pub fn first_region(country_code: &str) -> Option<&'static RegionTaxRule> {
    regions_of(country_code).first()
}

const fn state(code: &'static str, name: &'static str, tax_rate: Decimal) -> RegionTaxRule {
    RegionTaxRule {
        code,
        name,
        tax_rate,
    }
}

static US_STATES: &[RegionTaxRule] = &[
    state("AL", "Alabama", dec!(0.04)),
    state("AK", "Alaska", dec!(0)),
    state("AZ", "Arizona", dec!(0.056)),
    state("AR", "Arkansas", dec!(0.065)),
    state("CA", "California", dec!(0.0725)),
    state("CO", "Colorado", dec!(0.029)),
    state("CT", "Connecticut", dec!(0.0635)),
    state("DE", "Delaware", dec!(0)),
    state("DC", "District of Columbia", dec!(0.06)),
    state("FL", "Florida", dec!(0.06)),
    state("GA", "Georgia", dec!(0.04)),
    state("HI", "Hawaii", dec!(0.04)),
    state("ID", "Idaho", dec!(0.06)),
    state("IL", "Illinois", dec!(0.0625)),
    state("IN", "Indiana", dec!(0.07)),
    state("IA", "Iowa", dec!(0.06)),
    state("KS", "Kansas", dec!(0.065)),
    state("KY", "Kentucky", dec!(0.06)),
    state("LA", "Louisiana", dec!(0.0445)),
    state("ME", "Maine", dec!(0.055)),
    state("MD", "Maryland", dec!(0.06)),
    state("MA", "Massachusetts", dec!(0.0625)),
    state("MI", "Michigan", dec!(0.06)),
    state("MN", "Minnesota", dec!(0.06875)),
    state("MS", "Mississippi", dec!(0.07)),
    state("MO", "Missouri", dec!(0.04225)),
    state("MT", "Montana", dec!(0)),
    state("NE", "Nebraska", dec!(0.055)),
    state("NV", "Nevada", dec!(0.0685)),
    state("NH", "New Hampshire", dec!(0)),
    state("NJ", "New Jersey", dec!(0.06625)),
    state("NM", "New Mexico", dec!(0.04875)),
    state("NY", "New York", dec!(0.04)),
    state("NC", "North Carolina", dec!(0.0475)),
    state("ND", "North Dakota", dec!(0.05)),
    state("OH", "Ohio", dec!(0.0575)),
    state("OK", "Oklahoma", dec!(0.045)),
    state("OR", "Oregon", dec!(0)),
    state("PA", "Pennsylvania", dec!(0.06)),
    state("RI", "Rhode Island", dec!(0.07)),
    state("SC", "South Carolina", dec!(0.06)),
    state("SD", "South Dakota", dec!(0.042)),
    state("TN", "Tennessee", dec!(0.07)),
    state("TX", "Texas", dec!(0.0625)),
    state("UT", "Utah", dec!(0.061)),
    state("VT", "Vermont", dec!(0.06)),
    state("VA", "Virginia", dec!(0.053)),
    state("WA", "Washington", dec!(0.065)),
    state("WV", "West Virginia", dec!(0.06)),
    state("WI", "Wisconsin", dec!(0.05)),
    state("WY", "Wyoming", dec!(0.04)),
];
