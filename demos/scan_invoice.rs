use chrono::NaiveDate;
use tally::core::*;
use tally::extract::{DocumentExtractor, SampleExtractor};

fn main() {
    let path = std::env::args().nth(1);
    let document = match &path {
        Some(p) => std::fs::read(p).unwrap_or_else(|e| {
            eprintln!("cannot read {p}: {e}");
            std::process::exit(1);
        }),
        None => b"demo document".to_vec(),
    };

    let blank = InvoiceBuilder::new(NaiveDate::from_ymd_opt(2023, 5, 1).unwrap())
        .build()
        .expect("blank invoice is valid");

    let extracted = match SampleExtractor.extract(&document) {
        Ok(ex) => ex,
        Err(e) => {
            eprintln!("scan failed: {e}");
            std::process::exit(1);
        }
    };

    let invoice = blank
        .apply(InvoiceEdit::ApplyExtraction(extracted))
        .expect("extraction applies");

    println!("{}", InvoiceSummary::new(&invoice).render_text());
}
