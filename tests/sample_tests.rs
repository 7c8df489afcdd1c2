use chrono::{Datelike, NaiveDate};
use fatura_pdf::core::*;
use fatura_pdf::sample::{self, SAMPLE_ITEM_COUNT, SERVICE_CATALOG};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 30).unwrap()
}

#[test]
fn sample_invoice_has_fifty_items() {
    let mut rng = StdRng::seed_from_u64(7);
    let inv = sample::sample_invoice(&mut rng, today()).unwrap();
    assert_eq!(inv.items.len(), SAMPLE_ITEM_COUNT);
}

#[test]
fn sample_number_matches_pattern() {
    let mut rng = StdRng::seed_from_u64(7);
    let inv = sample::sample_invoice(&mut rng, today()).unwrap();
    assert!(inv.number.starts_with("INV-2026-"));
    assert!(is_sample_number(&inv.number));
}

#[test]
fn sample_due_fourteen_days_after_issue() {
    let mut rng = StdRng::seed_from_u64(7);
    let inv = sample::sample_invoice(&mut rng, today()).unwrap();
    assert_eq!(inv.issue_date, today());
    assert_eq!(inv.due_date, today() + chrono::Duration::days(14));
}

#[test]
fn sample_items_within_catalog_and_bounds() {
    let mut rng = StdRng::seed_from_u64(42);
    let inv = sample::sample_invoice(&mut rng, today()).unwrap();
    for item in &inv.items {
        assert!(SERVICE_CATALOG.contains(&item.description.as_str()));
        assert!((1..=5).contains(&item.quantity));
        assert!(item.unit_price >= dec!(20) && item.unit_price <= dec!(120));
    }
}

#[test]
fn sample_totals_reconcile() {
    let mut rng = StdRng::seed_from_u64(99);
    let inv = sample::sample_invoice(&mut rng, today()).unwrap();
    let totals = inv.totals.as_ref().unwrap();

    let expected_subtotal: Decimal = inv
        .items
        .iter()
        .map(|i| Decimal::from(i.quantity) * i.unit_price)
        .sum();
    assert_eq!(totals.subtotal, expected_subtotal);
    assert_eq!(totals.grand_total, totals.subtotal + totals.vat_amount);
    assert!(verify_totals(&inv.items, totals).is_ok());
}

#[test]
fn same_seed_same_invoice() {
    let a = sample::sample_invoice(&mut StdRng::seed_from_u64(5), today()).unwrap();
    let b = sample::sample_invoice(&mut StdRng::seed_from_u64(5), today()).unwrap();
    assert_eq!(a.number, b.number);
    assert_eq!(a.items, b.items);
    assert_eq!(a.totals, b.totals);
}

#[test]
fn number_year_tracks_issue_date() {
    let issue = NaiveDate::from_ymd_opt(2031, 1, 2).unwrap();
    let inv = sample::sample_invoice(&mut StdRng::seed_from_u64(3), issue).unwrap();
    assert!(inv.number.starts_with(&format!("INV-{}-", issue.year())));
}
