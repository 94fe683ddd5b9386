#![cfg(feature = "extract")]

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use tally::core::*;
use tally::extract::*;

fn blank() -> Invoice {
    InvoiceBuilder::new(NaiveDate::from_ymd_opt(2023, 5, 1).unwrap())
        .build()
        .unwrap()
}

#[test]
fn sample_scan_fills_form() {
    let scanned = SampleExtractor.extract(b"%PDF-1.7 fake").unwrap();
    let inv = blank()
        .apply(InvoiceEdit::ApplyExtraction(scanned))
        .unwrap();

    assert_eq!(inv.company.name, "CodeCircuit Technologies");
    assert_eq!(inv.invoice_number, "INV-2023-05001");
    assert_eq!(inv.client.name, "TechNova Inc.");
    assert_eq!(inv.client.state_code.as_deref(), Some("MA"));
    assert_eq!(inv.tax_rate, dec!(0.0625));
    assert_eq!(inv.tax_type, "Sales Tax");

    let ids: Vec<_> = inv.items.iter().map(|i| i.id.0).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    let totals = Totals::compute(&inv);
    assert_eq!(totals.subtotal, dec!(16750));
    assert_eq!(totals.tax_amount, dec!(1046.875));
    assert_eq!(format_amount(totals.total, &inv.currency_code), "$17796.88");

    // Fields the scan does not carry stay as they were.
    assert_eq!(inv.issue_date, blank().issue_date);
    assert_eq!(inv.currency_code, "USD");
    assert!(validate_invoice(&inv).is_empty());
}

#[test]
fn empty_upload_is_rejected() {
    let err = SampleExtractor.extract(b"").unwrap_err();
    assert!(matches!(err, InvoiceError::Extraction(_)));
}

#[test]
fn oversized_upload_is_rejected() {
    let doc = vec![0u8; MAX_DOCUMENT_SIZE + 1];
    assert!(SampleExtractor.extract(&doc).is_err());
    assert!(JsonExtractor.extract(&doc).is_err());
}

#[test]
fn partial_extraction_keeps_other_fields() {
    let before = blank()
        .apply(InvoiceEdit::Company(CompanyField::Name, "Mine".into()))
        .unwrap();
    let ex = JsonExtractor
        .extract(br#"{"invoice_number": "X-1", "notes": "hello"}"#)
        .unwrap();
    let after = before.apply(InvoiceEdit::ApplyExtraction(ex)).unwrap();

    assert_eq!(after.invoice_number, "X-1");
    assert_eq!(after.notes, "hello");
    assert_eq!(after.company.name, "Mine");
    assert_eq!(after.items, before.items);
    assert_eq!(after.tax_rate, before.tax_rate);
}

#[test]
fn extractors_are_interchangeable() {
    let backends: Vec<Box<dyn DocumentExtractor>> =
        vec![Box::new(SampleExtractor), Box::new(JsonExtractor)];
    let doc = serde_json::to_vec(&SampleExtractor.extract(b"x").unwrap()).unwrap();
    let results: Vec<_> = backends
        .iter()
        .map(|b| b.extract(&doc).unwrap())
        .collect();
    assert_eq!(results[0], results[1]);
}

// --- Location and tax from extracted client data ---

#[test]
fn extracted_country_rederives_tax() {
    let before = blank()
        .apply(InvoiceEdit::Client(ClientField::Name, "Keep Me".into()))
        .and_then(|i| i.apply(InvoiceEdit::Region("CA".into())))
        .unwrap();
    let ex = JsonExtractor
        .extract(br#"{"client": {"country_code": "DE"}}"#)
        .unwrap();
    let after = before.apply(InvoiceEdit::ApplyExtraction(ex)).unwrap();

    assert_eq!(after.client.country_code, "DE");
    assert_eq!(after.client.state_code, None);
    assert_eq!(after.tax_rate, dec!(0.19));
    assert_eq!(after.tax_type, "VAT");
    assert_eq!(after.client.name, "Keep Me");
    assert!(validate_invoice(&after).is_empty());
}

#[test]
fn extracted_region_rederives_rate() {
    let ex = JsonExtractor
        .extract(br#"{"client": {"state_code": "TX"}}"#)
        .unwrap();
    let after = blank().apply(InvoiceEdit::ApplyExtraction(ex)).unwrap();
    assert_eq!(after.client.state_code.as_deref(), Some("TX"));
    assert_eq!(after.tax_rate, dec!(0.0625));
}

#[test]
fn explicit_extracted_tax_wins_over_location() {
    let ex = JsonExtractor
        .extract(br#"{"client": {"country_code": "FR"}, "tax_rate": "0.055", "tax_type": "TVA"}"#)
        .unwrap();
    let after = blank().apply(InvoiceEdit::ApplyExtraction(ex)).unwrap();
    assert_eq!(after.client.country_code, "FR");
    assert_eq!(after.tax_rate, dec!(0.055));
    assert_eq!(after.tax_type, "TVA");
}

#[test]
fn unknown_extracted_location_is_rejected() {
    let before = blank();
    let ex = JsonExtractor
        .extract(br#"{"client": {"name": "X", "country_code": "XX"}}"#)
        .unwrap();
    let err = before.apply(InvoiceEdit::ApplyExtraction(ex)).unwrap_err();
    assert!(matches!(err, InvoiceError::UnknownCountry(_)));
    assert_eq!(before, blank());

    let ex = JsonExtractor
        .extract(br#"{"client": {"country_code": "US", "state_code": "ZZ"}}"#)
        .unwrap();
    let err = before.apply(InvoiceEdit::ApplyExtraction(ex)).unwrap_err();
    assert!(matches!(err, InvoiceError::UnknownRegion { .. }));
}

#[test]
fn missing_client_strings_are_kept() {
    let before = blank()
        .apply(InvoiceEdit::Client(ClientField::Name, "Keep Me".into()))
        .and_then(|i| i.apply(InvoiceEdit::Client(ClientField::Email, "keep@me.example".into())))
        .unwrap();
    let ex = JsonExtractor
        .extract(br#"{"client": {"phone": "555-0100"}}"#)
        .unwrap();
    let after = before.apply(InvoiceEdit::ApplyExtraction(ex)).unwrap();
    assert_eq!(after.client.name, "Keep Me");
    assert_eq!(after.client.email, "keep@me.example");
    assert_eq!(after.client.phone, "555-0100");
    assert_eq!(after.client.country_code, before.client.country_code);
    assert_eq!(after.tax_rate, before.tax_rate);
}

// --- Bounds ---

#[test]
fn oversized_extracted_values_are_rejected() {
    let huge = br#"{"items": [{"description": "x", "quantity": "100000000000000000", "unit_price": "100000000000000000"}]}"#;
    let ex = JsonExtractor.extract(huge).unwrap();
    let err = blank().apply(InvoiceEdit::ApplyExtraction(ex)).unwrap_err();
    assert!(matches!(err, InvoiceError::Extraction(_)));

    let ex = JsonExtractor.extract(br#"{"tax_rate": "19"}"#).unwrap();
    let err = blank().apply(InvoiceEdit::ApplyExtraction(ex)).unwrap_err();
    assert!(matches!(err, InvoiceError::Extraction(_)));
}

#[test]
fn too_many_extracted_items_are_rejected() {
    let item = ExtractedItem {
        description: "x".into(),
        quantity: dec!(1),
        unit_price: dec!(1),
        taxable: true,
    };
    let ex = ExtractedInvoice {
        items: vec![item; MAX_LINE_ITEMS + 1],
        ..Default::default()
    };
    let err = blank().apply(InvoiceEdit::ApplyExtraction(ex)).unwrap_err();
    assert!(matches!(err, InvoiceError::Extraction(_)));
}
