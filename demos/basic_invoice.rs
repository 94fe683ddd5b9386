use chrono::NaiveDate;
use rust_decimal_macros::dec;
use tally::core::*;

fn main() {
    // Start from a blank form and fill it the way a user would
    let invoice = InvoiceBuilder::new(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
        .build()
        .expect("blank invoice is valid");

    let first = invoice.items[0].id;
    let edits = vec![
        InvoiceEdit::Company(CompanyField::Name, "CodeCircuit Technologies".into()),
        InvoiceEdit::Company(CompanyField::Email, "invoices@codecircuit.com".into()),
        InvoiceEdit::InvoiceNumber("INV-2024-0001".into()),
        InvoiceEdit::Client(ClientField::Name, "TechNova Inc.".into()),
        InvoiceEdit::Region("MA".into()),
        InvoiceEdit::UpdateItem(first, ItemChange::Description("Web Development".into())),
        InvoiceEdit::UpdateItem(first, ItemChange::Quantity(dec!(80))),
        InvoiceEdit::UpdateItem(first, ItemChange::UnitPrice(dec!(125))),
        InvoiceEdit::AddItem,
        InvoiceEdit::UpdateItem(LineItemId(2), ItemChange::Description("Hardware".into())),
        InvoiceEdit::UpdateItem(LineItemId(2), ItemChange::UnitPrice(dec!(499.99))),
        InvoiceEdit::UpdateItem(LineItemId(2), ItemChange::Taxable(false)),
        InvoiceEdit::Discount(dec!(5)),
    ];

    let invoice = edits
        .into_iter()
        .try_fold(invoice, |inv, edit| inv.apply(edit))
        .expect("edits are valid");

    let errors = validate_invoice(&invoice);
    if errors.is_empty() {
        println!("Invoice is valid.");
    } else {
        for e in &errors {
            println!("  - {e}");
        }
    }

    println!();
    println!("{}", InvoiceSummary::new(&invoice).render_text());

    // Removing the only remaining item is refused
    let single = InvoiceBuilder::new(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
        .build()
        .expect("blank invoice is valid");
    match single.apply(InvoiceEdit::RemoveItem(single.items[0].id)) {
        Ok(_) => println!("unexpected: last item removed"),
        Err(e) => println!("\nRemove last item: {e}"),
    }
}
