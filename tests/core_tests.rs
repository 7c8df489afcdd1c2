use chrono::NaiveDate;
use fatura_pdf::core::*;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn seller() -> Party {
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

fn buyer() -> Party {
    PartyBuilder::new(
        "TechSolutions GmbH",
        AddressBuilder::new("Berlin", "10178", "Germany")
            .street("Alexanderplatz 3")
            .build(),
    )
    .tax_id("VAT", "DE123456789")
    .build()
}

fn payment() -> PaymentInstructions {
    PaymentInstructions {
        iban: "PT50 0000 0000 0000 0000 0000 0".into(),
        bic: "BCOMPTPL".into(),
    }
}

// --- Building ---

#[test]
fn full_invoice_builds_with_totals() {
    let inv = InvoiceBuilder::new("INV-2026-1234", date(2026, 8, 30))
        .seller(seller())
        .buyer(buyer())
        .add_item(LineItem::new("Consulting Services", 2, dec!(100)))
        .add_item(LineItem::new("Cloud Hosting", 1, dec!(19)))
        .payment(payment())
        .build()
        .unwrap();

    let totals = inv.totals.as_ref().unwrap();
    assert_eq!(totals.subtotal, dec!(219));
    assert_eq!(totals.vat_rate, dec!(0.23));
    assert_eq!(totals.vat_amount, dec!(50.37));
    assert_eq!(totals.grand_total, dec!(269.37));
}

#[test]
fn due_date_defaults_to_fourteen_days() {
    let inv = InvoiceBuilder::new("INV-2026-0001", date(2026, 8, 30))
        .seller(seller())
        .buyer(buyer())
        .add_item(LineItem::new("Technical Support", 1, dec!(50)))
        .payment(payment())
        .build()
        .unwrap();
    assert_eq!(inv.due_date, date(2026, 9, 13));
}

#[test]
fn explicit_due_date_wins() {
    let inv = InvoiceBuilder::new("INV-2026-0002", date(2026, 8, 30))
        .due_date(date(2026, 10, 1))
        .seller(seller())
        .buyer(buyer())
        .add_item(LineItem::new("Technical Support", 1, dec!(50)))
        .payment(payment())
        .build()
        .unwrap();
    assert_eq!(inv.due_date, date(2026, 10, 1));
}

#[test]
fn missing_parties_rejected() {
    let err = InvoiceBuilder::new("INV-2026-0003", date(2026, 8, 30))
        .add_item(LineItem::new("Technical Support", 1, dec!(50)))
        .payment(payment())
        .build()
        .unwrap_err();
    assert!(matches!(err, InvoiceError::Builder(_)));
}

#[test]
fn empty_items_rejected() {
    let err = InvoiceBuilder::new("INV-2026-0004", date(2026, 8, 30))
        .seller(seller())
        .buyer(buyer())
        .payment(payment())
        .build()
        .unwrap_err();
    assert!(matches!(err, InvoiceError::Builder(_)));
}

#[test]
fn empty_number_rejected() {
    let err = InvoiceBuilder::new("", date(2026, 8, 30))
        .seller(seller())
        .buyer(buyer())
        .add_item(LineItem::new("Technical Support", 1, dec!(50)))
        .payment(payment())
        .build()
        .unwrap_err();
    assert!(matches!(err, InvoiceError::Builder(_)));
}

// --- Totals arithmetic ---

#[test]
fn vat_rounds_half_up() {
    // 21.50 * 0.23 = 4.945, rounds away from zero to 4.95
    let totals = calculate_totals(&[LineItem::new("Consulting Services", 1, dec!(21.50))]).unwrap();
    assert_eq!(totals.vat_amount, dec!(4.95));
    assert_eq!(totals.grand_total, dec!(26.45));
}

#[test]
fn subtotal_is_exact_sum() {
    let items = vec![
        LineItem::new("Consulting Services", 3, dec!(33.33)),
        LineItem::new("Cloud Hosting", 2, dec!(0.01)),
    ];
    let totals = calculate_totals(&items).unwrap();
    assert_eq!(totals.subtotal, dec!(100.01));
}

#[test]
fn zero_quantity_rejected() {
    let err = calculate_totals(&[LineItem::new("Consulting Services", 0, dec!(50))]).unwrap_err();
    assert!(matches!(err, InvoiceError::Arithmetic(_)));
}

#[test]
fn tampered_totals_detected() {
    let items = vec![LineItem::new("Consulting Services", 2, dec!(100))];
    let mut totals = calculate_totals(&items).unwrap();
    totals.grand_total += dec!(0.01);
    assert!(verify_totals(&items, &totals).is_err());
}

// --- Address formatting ---

#[test]
fn city_line_format() {
    let address = AddressBuilder::new("Lisboa", "1200-001", "Portugal").build();
    assert_eq!(address.city_line(), "1200-001 Lisboa, Portugal");
}
