//! Core invoice types, totals arithmetic, and numbering.
//!
//! This module provides the data model the PDF renderer consumes: an
//! [`Invoice`] assembled with [`InvoiceBuilder`], with totals calculated on
//! build.

mod builder;
mod error;
mod numbering;
mod totals;
mod types;

pub use builder::*;
pub use error::*;
pub use numbering::*;
pub use totals::*;
pub use types::*;
