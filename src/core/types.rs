use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The top-level invoice document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    /// Invoice number, e.g. "INV-2026-4821". Not guaranteed unique; the
    /// sample generator draws a random 4-digit suffix.
    pub number: String,
    /// Issue date.
    pub issue_date: NaiveDate,
    /// Payment due date (issue date + 14 days unless overridden).
    pub due_date: NaiveDate,
    /// Issuing party, shown in the company block and page header.
    pub seller: Party,
    /// Billed party, shown right-aligned in the "Bill To" block.
    pub buyer: Party,
    /// Invoice lines, immutable once created.
    pub items: Vec<LineItem>,
    /// Bank details for the payment section.
    pub payment: PaymentInstructions,
    /// Closing line printed right-aligned after the payment section.
    pub disclaimer: Option<String>,
    /// Calculated totals (set by `InvoiceBuilder::build`).
    pub totals: Option<Totals>,
}

/// Seller or buyer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Party {
    /// Legal name.
    pub name: String,
    /// Postal address.
    pub address: Address,
    /// Tax identifier with its scheme label (e.g. "NIF" / "VAT").
    pub tax_id: Option<TaxId>,
    /// Contact email.
    pub email: Option<String>,
}

/// Postal address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    /// Street + house number.
    pub street: Option<String>,
    /// City.
    pub city: String,
    /// Postal code.
    pub postal_code: String,
    /// Country name as printed on the invoice.
    pub country: String,
}

impl Address {
    /// The "1200-001 Lisboa, Portugal" line.
    pub fn city_line(&self) -> String {
        format!("{} {}, {}", self.postal_code, self.city, self.country)
    }
}

/// Tax identifier with the label it is printed under.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxId {
    /// Scheme label, e.g. "NIF" or "VAT".
    pub scheme: String,
    /// Identifier value.
    pub value: String,
}

/// A single invoice line.
///
/// Created with [`LineItem::new`], which derives `line_total` from quantity
/// and unit price; consumed only for display and summation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Service description.
    pub description: String,
    /// Invoiced quantity (positive).
    pub quantity: u32,
    /// Net price per unit.
    pub unit_price: Decimal,
    /// quantity × unit_price.
    pub line_total: Decimal,
}

impl LineItem {
    pub fn new(description: impl Into<String>, quantity: u32, unit_price: Decimal) -> Self {
        Self {
            description: description.into(),
            quantity,
            unit_price,
            line_total: Decimal::from(quantity) * unit_price,
        }
    }
}

/// Document totals, derived from the line items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of all line totals.
    pub subtotal: Decimal,
    /// VAT rate applied (fixed 0.23 for the sample).
    pub vat_rate: Decimal,
    /// round_half_up(subtotal × vat_rate, 2).
    pub vat_amount: Decimal,
    /// subtotal + vat_amount.
    pub grand_total: Decimal,
}

/// Bank details rendered in the payment-details block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentInstructions {
    /// IBAN.
    pub iban: String,
    /// BIC/SWIFT.
    pub bic: String,
}
