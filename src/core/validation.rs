use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::countries::country_rule;
use super::error::ValidationError;
use super::regions::region_rule;
use super::types::*;

/// Largest accepted magnitude of a line quantity or unit price.
///
/// With at most [`MAX_LINE_ITEMS`] lines every total stays inside the
/// `Decimal` range.
pub const MAX_LINE_VALUE: Decimal = dec!(1000000000000);

/// Most line items one invoice may carry.
pub const MAX_LINE_ITEMS: usize = 10_000;

/// Validate an invoice before it is issued.
/// Returns all validation errors found (not just the first).
///
/// The calculator accepts any input; this is where out-of-range values are
/// reported.
pub fn validate_invoice(invoice: &Invoice) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if invoice.items.is_empty() {
        errors.push(ValidationError::new(
            "items",
            "invoice must have at least one line item",
        ));
    }

    if invoice.items.len() > MAX_LINE_ITEMS {
        errors.push(ValidationError::new(
            "items",
            format!("invoice cannot have more than {MAX_LINE_ITEMS} line items"),
        ));
    }

    for (i, item) in invoice.items.iter().enumerate() {
        validate_item(item, i, &mut errors);
    }

    errors.extend(check_tax_rate(invoice.tax_rate));

    if invoice.discount_percent < Decimal::ZERO || invoice.discount_percent > Decimal::ONE_HUNDRED
    {
        errors.push(ValidationError::new(
            "discount_percent",
            format!(
                "discount {}% must be between 0 and 100",
                invoice.discount_percent
            ),
        ));
    }

    if invoice.due_date < invoice.issue_date {
        errors.push(ValidationError::new(
            "due_date",
            format!(
                "due date {} is before issue date {}",
                invoice.due_date, invoice.issue_date
            ),
        ));
    }

    validate_location(&invoice.client, &mut errors);

    errors
}

fn validate_item(item: &LineItem, index: usize, errors: &mut Vec<ValidationError>) {
    if item.quantity < Decimal::ZERO {
        errors.push(ValidationError::new(
            format!("items[{index}].quantity"),
            format!("quantity {} must not be negative", item.quantity),
        ));
    }
    if item.unit_price < Decimal::ZERO {
        errors.push(ValidationError::new(
            format!("items[{index}].unit_price"),
            format!("unit price {} must not be negative", item.unit_price),
        ));
    }
    errors.extend(check_line_value(
        format!("items[{index}].quantity"),
        item.quantity,
    ));
    errors.extend(check_line_value(
        format!("items[{index}].unit_price"),
        item.unit_price,
    ));
}

/// Reject quantities and prices whose magnitude exceeds [`MAX_LINE_VALUE`].
pub(crate) fn check_line_value(field: String, value: Decimal) -> Option<ValidationError> {
    (value.abs() > MAX_LINE_VALUE).then(|| {
        ValidationError::new(field, format!("{value} exceeds the limit of {MAX_LINE_VALUE}"))
    })
}

/// Reject tax rates outside [0, 1].
pub(crate) fn check_tax_rate(rate: Decimal) -> Option<ValidationError> {
    (rate < Decimal::ZERO || rate > Decimal::ONE).then(|| {
        ValidationError::new("tax_rate", format!("tax rate {rate} must be between 0 and 1"))
    })
}

fn validate_location(client: &Client, errors: &mut Vec<ValidationError>) {
    let Some(country) = country_rule(&client.country_code) else {
        errors.push(ValidationError::new(
            "client.country_code",
            format!("unknown country code '{}'", client.country_code),
        ));
        return;
    };

    match (&client.state_code, country.has_sub_regions) {
        (Some(state), true) => {
            if region_rule(country.code, state).is_none() {
                errors.push(ValidationError::new(
                    "client.state_code",
                    format!("'{}' is not a region of {}", state, country.code),
                ));
            }
        }
        (Some(state), false) => {
            errors.push(ValidationError::new(
                "client.state_code",
                format!("{} has no regions, got '{}'", country.code, state),
            ));
        }
        // No region: the country default applies
        (None, _) => {}
    }
}
