//! Randomized sample data for the demo invoice.
//!
//! Everything here takes an explicit RNG and date instead of reading ambient
//! process state, so tests can pin a seed and a day and get the same invoice
//! every time.

use chrono::{Datelike, NaiveDate};
use rand::Rng;
use rust_decimal::Decimal;

use crate::core::{
    AddressBuilder, Invoice, InvoiceBuilder, InvoiceError, LineItem, Party, PartyBuilder,
    PaymentInstructions, random_invoice_number,
};

/// Fixed catalog of service names the generator draws from.
pub const SERVICE_CATALOG: [&str; 10] = [
    "Monthly SaaS Subscription",
    "Cloud Storage Usage",
    "API Requests Package",
    "Data Processing",
    "Priority Support",
    "Analytics Processing",
    "System Integration",
    "Custom Automation",
    "Monitoring Service",
    "Backup Retention",
];

/// Number of line items in the sample invoice; enough to force a multipage
/// document on A4.
pub const SAMPLE_ITEM_COUNT: usize = 50;

/// Draw `count` line items: description uniform over the catalog, quantity
/// in [1,5], unit price in [20,120] whole euros.
pub fn generate_line_items<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<LineItem> {
    (0..count)
        .map(|_| {
            let description = SERVICE_CATALOG[rng.gen_range(0..SERVICE_CATALOG.len())];
            let quantity = rng.gen_range(1..=5u32);
            let unit_price = Decimal::from(rng.gen_range(20..=120u32));
            LineItem::new(description, quantity, unit_price)
        })
        .collect()
}

/// The fixed sample seller.
pub fn sample_seller() -> Party {
    PartyBuilder::new(
        "Atlantic Services Lda",
        AddressBuilder::new("Lisboa", "1200-001", "Portugal")
            .street("Rua Exemplo 123")
            .build(),
    )
    .tax_id("NIF", "509999999")
    .email("billing@atlanticservices.pt")
    .build()
}

/// The fixed sample buyer.
pub fn sample_buyer() -> Party {
    PartyBuilder::new(
        "TechSolutions GmbH",
        AddressBuilder::new("Berlin", "10178", "Germany")
            .street("Alexanderplatz 3")
            .build(),
    )
    .tax_id("VAT", "DE123456789")
    .build()
}

/// The fixed sample bank details.
pub fn sample_payment() -> PaymentInstructions {
    PaymentInstructions {
        iban: "PT50 0000 0000 0000 0000 0000 0".into(),
        bic: "BCOMPTPL".into(),
    }
}

/// Assemble a complete sample invoice issued on `today`, due 14 days later,
/// with [`SAMPLE_ITEM_COUNT`] random items.
pub fn sample_invoice<R: Rng + ?Sized>(
    rng: &mut R,
    today: NaiveDate,
) -> Result<Invoice, InvoiceError> {
    let number = random_invoice_number(rng, today.year());
    InvoiceBuilder::new(number, today)
        .seller(sample_seller())
        .buyer(sample_buyer())
        .items(generate_line_items(rng, SAMPLE_ITEM_COUNT))
        .payment(sample_payment())
        .disclaimer("This invoice was generated electronically and is valid without signature.")
        .build()
}
