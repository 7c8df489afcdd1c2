use chrono::{Duration, NaiveDate};

use super::error::InvoiceError;
use super::totals;
use super::types::*;

/// Builder for constructing invoices with calculated totals.
///
/// ```
/// use chrono::NaiveDate;
/// use fatura_pdf::core::*;
/// use rust_decimal_macros::dec;
///
/// let invoice = InvoiceBuilder::new("INV-2026-1234", NaiveDate::from_ymd_opt(2026, 8, 30).unwrap())
///     .seller(
///         PartyBuilder::new("Atlantic Services Lda", AddressBuilder::new("Lisboa", "1200-001", "Portugal").build())
///             .tax_id("NIF", "509999999")
///             .build(),
///     )
///     .buyer(
///         PartyBuilder::new("TechSolutions GmbH", AddressBuilder::new("Berlin", "10178", "Germany").build())
///             .build(),
///     )
///     .add_item(LineItem::new("Data Processing", 3, dec!(40)))
///     .payment(PaymentInstructions {
///         iban: "PT50 0000 0000 0000 0000 0000 0".into(),
///         bic: "BCOMPTPL".into(),
///     })
///     .build()
///     .unwrap();
///
/// // Due date defaults to issue date + 14 days.
/// assert_eq!(invoice.due_date, NaiveDate::from_ymd_opt(2026, 9, 13).unwrap());
/// ```
pub struct InvoiceBuilder {
    number: String,
    issue_date: NaiveDate,
    due_date: Option<NaiveDate>,
    seller: Option<Party>,
    buyer: Option<Party>,
    items: Vec<LineItem>,
    payment: Option<PaymentInstructions>,
    disclaimer: Option<String>,
}

impl InvoiceBuilder {
    pub fn new(number: impl Into<String>, issue_date: NaiveDate) -> Self {
        Self {
            number: number.into(),
            issue_date,
            due_date: None,
            seller: None,
            buyer: None,
            items: Vec::new(),
            payment: None,
            disclaimer: None,
        }
    }

    /// Override the due date (default: issue date + 14 days).
    pub fn due_date(mut self, date: NaiveDate) -> Self {
        self.due_date = Some(date);
        self
    }

    pub fn seller(mut self, party: Party) -> Self {
        self.seller = Some(party);
        self
    }

    pub fn buyer(mut self, party: Party) -> Self {
        self.buyer = Some(party);
        self
    }

    pub fn add_item(mut self, item: LineItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn items(mut self, items: impl IntoIterator<Item = LineItem>) -> Self {
        self.items.extend(items);
        self
    }

    pub fn payment(mut self, payment: PaymentInstructions) -> Self {
        self.payment = Some(payment);
        self
    }

    pub fn disclaimer(mut self, text: impl Into<String>) -> Self {
        self.disclaimer = Some(text.into());
        self
    }

    /// Build the invoice, calculating totals.
    pub fn build(self) -> Result<Invoice, InvoiceError> {
        let seller = self
            .seller
            .ok_or_else(|| InvoiceError::Builder("seller is required".into()))?;
        let buyer = self
            .buyer
            .ok_or_else(|| InvoiceError::Builder("buyer is required".into()))?;
        let payment = self
            .payment
            .ok_or_else(|| InvoiceError::Builder("payment instructions are required".into()))?;

        if self.number.trim().is_empty() {
            return Err(InvoiceError::Builder("invoice number must not be empty".into()));
        }
        if self.items.is_empty() {
            return Err(InvoiceError::Builder(
                "at least one line item is required".into(),
            ));
        }

        let totals = totals::calculate_totals(&self.items)?;

        Ok(Invoice {
            number: self.number,
            issue_date: self.issue_date,
            due_date: self
                .due_date
                .unwrap_or(self.issue_date + Duration::days(14)),
            seller,
            buyer,
            items: self.items,
            payment,
            disclaimer: self.disclaimer,
            totals: Some(totals),
        })
    }
}

/// Builder for Party (seller/buyer).
pub struct PartyBuilder {
    name: String,
    address: Address,
    tax_id: Option<TaxId>,
    email: Option<String>,
}

impl PartyBuilder {
    pub fn new(name: impl Into<String>, address: Address) -> Self {
        Self {
            name: name.into(),
            address,
            tax_id: None,
            email: None,
        }
    }

    pub fn tax_id(mut self, scheme: impl Into<String>, value: impl Into<String>) -> Self {
        self.tax_id = Some(TaxId {
            scheme: scheme.into(),
            value: value.into(),
        });
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn build(self) -> Party {
        Party {
            name: self.name,
            address: self.address,
            tax_id: self.tax_id,
            email: self.email,
        }
    }
}

/// Builder for Address.
pub struct AddressBuilder {
    street: Option<String>,
    city: String,
    postal_code: String,
    country: String,
}

impl AddressBuilder {
    pub fn new(
        city: impl Into<String>,
        postal_code: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            street: None,
            city: city.into(),
            postal_code: postal_code.into(),
            country: country.into(),
        }
    }

    pub fn street(mut self, street: impl Into<String>) -> Self {
        self.street = Some(street.into());
        self
    }

    pub fn build(self) -> Address {
        Address {
            street: self.street,
            city: self.city,
            postal_code: self.postal_code,
            country: self.country,
        }
    }
}
