use chrono::NaiveDate;
use rust_decimal_macros::dec;
use tally::core::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn studio_invoice() -> Invoice {
    InvoiceBuilder::new(date(2024, 3, 1))
        .invoice_number("INV-2024-0042")
        .company(
            CompanyBuilder::new("Northwind Studio")
                .address("12 Harbor Rd, Portland, OR 97201")
                .email("billing@northwind.example")
                .build(),
        )
        .client_name("Blue Fern LLC")
        .region("NY")
        .add_item(
            LineItem::new(LineItemId(1))
                .with_description("Logo design")
                .with_quantity(dec!(2))
                .with_unit_price(dec!(100)),
        )
        .add_item(
            LineItem::new(LineItemId(2))
                .with_description("Printing")
                .with_unit_price(dec!(50))
                .with_taxable(false),
        )
        .discount_percent(dec!(10))
        .notes("Payment due within 30 days.")
        .build()
        .unwrap()
}

#[test]
fn summary_lines() {
    let s = InvoiceSummary::new(&studio_invoice());

    assert_eq!(s.rows.len(), 2);
    assert_eq!(s.rows[0].quantity, "2");
    assert_eq!(s.rows[0].unit_price, "$100.00");
    assert_eq!(s.rows[0].amount, "$200.00");

    assert_eq!(s.subtotal.amount, "$250.00");
    assert_eq!(s.tax.label, "Sales Tax (4.00%)");
    assert_eq!(s.tax.amount, "$8.00");
    let discount = s.discount.as_ref().unwrap();
    assert_eq!(discount.label, "Discount (10%)");
    assert_eq!(discount.amount, "-$25.00");
    assert_eq!(s.total.amount, "$233.00");
    assert_eq!(s.totals.total, dec!(233));
    assert_eq!(s.client_address, "Client Address");
}

#[test]
fn rendered_preview() {
    let text = InvoiceSummary::new(&studio_invoice()).render_text();
    insta::assert_snapshot!(text, @r"
    Northwind Studio
    12 Harbor Rd, Portland, OR 97201
    Email: billing@northwind.example

    INVOICE
    Invoice Number: INV-2024-0042
    Issue Date: 2024-03-01
    Due Date: 2024-03-31

    Bill To:
    Blue Fern LLC
    Client Address

    Description | Quantity | Unit Price | Amount
    Logo design | 2 | $100.00 | $200.00
    Printing | 1 | $50.00 | $50.00

    Subtotal: $250.00
    Sales Tax (4.00%): $8.00
    Discount (10%): -$25.00
    Total: $233.00

    Notes:
    Payment due within 30 days.

    Thank you for your business!
    ");
}

#[test]
fn japanese_yen_preview_has_no_decimals() {
    let inv = studio_invoice()
        .apply(InvoiceEdit::Currency("JPY".into()))
        .and_then(|i| i.apply(InvoiceEdit::Country("JP".into())))
        .unwrap();
    let s = InvoiceSummary::new(&inv);
    assert_eq!(s.tax.label, "Consumption Tax (10.00%)");
    assert_eq!(s.tax.amount, "¥20");
    assert_eq!(s.total.amount, "¥245");
}
