use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{DocumentExtractor, ExtractedClient, ExtractedInvoice, ExtractedItem, check_document};
use crate::core::{Company, InvoiceError, region_rule};

/// Placeholder backend that recognizes nothing.
///
/// Any non-empty document yields the same fixed sample invoice, so the scan
/// flow of a front end can be exercised without a real extraction service.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleExtractor;

impl DocumentExtractor for SampleExtractor {
    fn extract(&self, document: &[u8]) -> Result<ExtractedInvoice, InvoiceError> {
        check_document(document)?;
        tracing::debug!(bytes = document.len(), "returning sample extraction");

        let tax_rate = region_rule("US", "MA")
            .map(|r| r.tax_rate)
            .unwrap_or(dec!(0.0625));

        Ok(ExtractedInvoice {
            company: Some(Company {
                name: "CodeCircuit Technologies".into(),
                address: "123 Tech Drive, Silicon Valley, CA 94123".into(),
                phone: "(555) 123-4567".into(),
                email: "invoices@codecircuit.com".into(),
                website: "www.codecircuit.com".into(),
                tax_id: "US-123456789".into(),
            }),
            invoice_number: Some("INV-2023-05001".into()),
            client: Some(ExtractedClient {
                name: Some("TechNova Inc.".into()),
                address: Some("456 Innovation Court, Boston, MA 02108".into()),
                email: Some("accounts@technova.com".into()),
                phone: Some("(555) 987-6543".into()),
                country_code: Some("US".into()),
                state_code: Some("MA".into()),
            }),
            items: vec![
                item("Web Development Services", dec!(80), dec!(125)),
                item("UI/UX Design", dec!(40), dec!(150)),
                item("Server Setup", dec!(1), dec!(750)),
            ],
            notes: Some("Thank you for your business. Payment is due within 30 days.".into()),
            tax_rate: Some(tax_rate),
            tax_type: Some("Sales Tax".into()),
        })
    }
}

fn item(description: &str, quantity: Decimal, unit_price: Decimal) -> ExtractedItem {
    ExtractedItem {
        description: description.into(),
        quantity,
        unit_price,
        taxable: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LineItem, LineItemId, subtotal};

    #[test]
    fn rejects_empty_document() {
        assert!(matches!(
            SampleExtractor.extract(&[]),
            Err(InvoiceError::Extraction(_))
        ));
    }

    #[test]
    fn same_sample_for_any_document() {
        let a = SampleExtractor.extract(b"first").unwrap();
        let b = SampleExtractor.extract(&[0xff; 64]).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.items.len(), 3);
        assert_eq!(a.tax_rate, Some(dec!(0.0625)));
    }

    #[test]
    fn sample_amounts() {
        let ex = SampleExtractor.extract(b"scan").unwrap();
        let items: Vec<_> = ex
            .items
            .iter()
            .map(|i| {
                LineItem::new(LineItemId(1))
                    .with_quantity(i.quantity)
                    .with_unit_price(i.unit_price)
            })
            .collect();
        // 80×125 + 40×150 + 750
        assert_eq!(subtotal(&items), dec!(16750));
    }
}
