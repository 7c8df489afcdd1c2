//! # fatura-pdf
//!
//! Sample PDF invoice generator: builds an A4 invoice with a company header,
//! client block, itemized table, VAT totals, and payment details, then lays it
//! out over as many pages as needed with a repeating header/footer and
//! "Page X of N" numbering.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//! Randomness and dates are threaded explicitly so generation is
//! deterministic under a seeded RNG.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use fatura_pdf::core::*;
//! use fatura_pdf::pdf::{RenderOptions, render};
//! use rust_decimal_macros::dec;
//!
//! let invoice = InvoiceBuilder::new(
//!     "INV-2026-1234",
//!     NaiveDate::from_ymd_opt(2026, 8, 30).unwrap(),
//! )
//! .seller(
//!     PartyBuilder::new(
//!         "Atlantic Services Lda",
//!         AddressBuilder::new("Lisboa", "1200-001", "Portugal").build(),
//!     )
//!     .tax_id("NIF", "509999999")
//!     .build(),
//! )
//! .buyer(
//!     PartyBuilder::new(
//!         "TechSolutions GmbH",
//!         AddressBuilder::new("Berlin", "10178", "Germany").build(),
//!     )
//!     .build(),
//! )
//! .add_item(LineItem::new("Priority Support", 2, dec!(80)))
//! .payment(PaymentInstructions {
//!     iban: "PT50 0000 0000 0000 0000 0000 0".into(),
//!     bic: "BCOMPTPL".into(),
//! })
//! .build()
//! .unwrap();
//!
//! assert_eq!(invoice.totals.as_ref().unwrap().subtotal, dec!(160));
//! let pdf_bytes = render(&invoice, &RenderOptions::default()).unwrap();
//! assert!(pdf_bytes.starts_with(b"%PDF"));
//! ```
//!
//! The `invoice-sample` binary is the one-shot driver: it seeds an RNG from
//! entropy, generates 50 random line items, and writes `invoice_sample.pdf`
//! to the current directory. When a `logo.jpg` sits next to the output it is
//! embedded above the company block; only JPEG logos are supported, since
//! they pass through to the document without re-encoding.

pub mod core;
pub mod pdf;
pub mod sample;

// Re-export core types at crate root for convenience
pub use crate::core::*;
