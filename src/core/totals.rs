use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::error::InvoiceError;
use super::types::{LineItem, Totals};

/// VAT rate applied to every sample invoice.
pub const VAT_RATE: Decimal = dec!(0.23);

/// Calculate totals from the line items.
///
/// Pure summation over `Decimal`s: `subtotal` equals the exact sum of line
/// totals with no rounding drift; only the VAT amount is rounded (half-up,
/// 2 decimal places). Rejects non-positive quantities or prices, and line
/// totals that do not match quantity × unit price.
pub fn calculate_totals(items: &[LineItem]) -> Result<Totals, InvoiceError> {
    for (i, item) in items.iter().enumerate() {
        if item.quantity == 0 {
            return Err(InvoiceError::Arithmetic(format!(
                "item {i} ({}): quantity must be positive",
                item.description
            )));
        }
        if item.unit_price <= Decimal::ZERO {
            return Err(InvoiceError::Arithmetic(format!(
                "item {i} ({}): unit price must be positive",
                item.description
            )));
        }
        let expected = Decimal::from(item.quantity) * item.unit_price;
        if item.line_total != expected {
            return Err(InvoiceError::Arithmetic(format!(
                "item {i} ({}): line total {} does not match {} x {}",
                item.description, item.line_total, item.quantity, item.unit_price
            )));
        }
    }

    let subtotal: Decimal = items.iter().map(|item| item.line_total).sum();
    let vat_amount = round_half_up(subtotal * VAT_RATE, 2);

    Ok(Totals {
        subtotal,
        vat_rate: VAT_RATE,
        vat_amount,
        grand_total: subtotal + vat_amount,
    })
}

/// Re-check a calculated `Totals` against the items it was derived from.
///
/// The renderer runs this before laying anything out, so an invoice with
/// tampered totals fails instead of producing an inconsistent document.
pub fn verify_totals(items: &[LineItem], totals: &Totals) -> Result<(), InvoiceError> {
    let expected_subtotal: Decimal = items.iter().map(|item| item.line_total).sum();
    if totals.subtotal != expected_subtotal {
        return Err(InvoiceError::Arithmetic(format!(
            "subtotal {} does not match sum of line totals {}",
            totals.subtotal, expected_subtotal
        )));
    }

    if totals.vat_rate != VAT_RATE {
        return Err(InvoiceError::Arithmetic(format!(
            "VAT rate {} does not match the fixed rate {}",
            totals.vat_rate, VAT_RATE
        )));
    }

    let expected_vat = round_half_up(totals.subtotal * VAT_RATE, 2);
    if totals.vat_amount != expected_vat {
        return Err(InvoiceError::Arithmetic(format!(
            "VAT amount {} does not match {} x {}",
            totals.vat_amount, totals.subtotal, totals.vat_rate
        )));
    }

    if totals.grand_total != totals.subtotal + totals.vat_amount {
        return Err(InvoiceError::Arithmetic(format!(
            "grand total {} does not match subtotal {} + VAT {}",
            totals.grand_total, totals.subtotal, totals.vat_amount
        )));
    }

    Ok(())
}

fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}
