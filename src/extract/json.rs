use super::{DocumentExtractor, ExtractedInvoice, check_document};
use crate::core::InvoiceError;

/// Reads extracted fields from a JSON document.
///
/// The JSON has the shape of [`ExtractedInvoice`]; every field is optional.
/// Useful as the receiving end of an external extraction service.
///
/// ```
/// use tally::extract::{DocumentExtractor, JsonExtractor};
///
/// let doc = br#"{"invoice_number": "A-17", "items": [
///     {"description": "Widget", "quantity": "3", "unit_price": "9.99"}
/// ]}"#;
/// let ex = JsonExtractor.extract(doc).unwrap();
/// assert_eq!(ex.invoice_number.as_deref(), Some("A-17"));
/// assert!(ex.items[0].taxable);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExtractor;

impl DocumentExtractor for JsonExtractor {
    fn extract(&self, document: &[u8]) -> Result<ExtractedInvoice, InvoiceError> {
        check_document(document)?;
        serde_json::from_slice(document).map_err(|e| {
            tracing::warn!(error = %e, "JSON extraction failed");
            InvoiceError::Extraction(format!("invalid extraction JSON: {e}"))
        })
    }
}
