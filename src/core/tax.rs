use rust_decimal::Decimal;
use serde::Serialize;

use super::countries::country_rule;
use super::error::InvoiceError;
use super::regions::{first_region, region_rule};

/// Effective tax settings for a country/region selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxSelection {
    /// Region code the selection resolved to, if the country has regions.
    pub region: Option<String>,
    pub rate: Decimal,
    pub label: String,
}

/// Resolve the tax rate and label for `country`, optionally narrowed to `region`.
///
/// For countries with sub-regions a known region overrides the country's
/// default rate. The label always comes from the country. A region passed for
/// a country without sub-regions is ignored.
pub fn resolve_tax(country: &str, region: Option<&str>) -> Result<TaxSelection, InvoiceError> {
    let rule = country_rule(country).ok_or_else(|| InvoiceError::UnknownCountry(country.into()))?;

    if !rule.has_sub_regions {
        return Ok(TaxSelection {
            region: None,
            rate: rule.default_tax_rate,
            label: rule.tax_label.to_string(),
        });
    }

    match region {
        Some(code) => {
            let r = region_rule(country, code).ok_or_else(|| InvoiceError::UnknownRegion {
                country: country.into(),
                region: code.into(),
            })?;
            Ok(TaxSelection {
                region: Some(r.code.to_string()),
                rate: r.tax_rate,
                label: rule.tax_label.to_string(),
            })
        }
        None => Ok(TaxSelection {
            region: None,
            rate: rule.default_tax_rate,
            label: rule.tax_label.to_string(),
        }),
    }
}

/// Tax settings after the user picks a new country.
///
/// Countries with sub-regions start at the first region of their table and
/// take its rate; others clear the region and use the country default.
pub fn select_country(country: &str) -> Result<TaxSelection, InvoiceError> {
    let region = first_region(country).map(|r| r.code);
    resolve_tax(country, region)
}
