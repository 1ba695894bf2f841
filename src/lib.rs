//! Reference-data-driven IBAN codec.
//!
//! A per-country template drives decomposition of an IBAN into country code,
//! check digits, national check, bank, branch and account fields, and the
//! reverse composition. Formal validation covers lengths, the Italian CIN and
//! the ISO 7064 mod-97 checksum.

pub mod checksum;
pub mod cin;
pub mod error;
pub mod generator;
pub mod iban;
pub mod layout;
pub mod models;
pub mod preflight;
pub mod reference;
pub mod registry;
pub mod util;

pub use error::{IbanError, Result};
pub use iban::Iban;
pub use layout::CountryLayout;
pub use models::IbanFields;
pub use registry::CountryRegistry;
pub use util::{from_paper_format, to_paper_format};
