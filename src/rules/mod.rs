//! Format rules and deck validation.

pub mod formats;
pub mod validator;

pub use formats::{DeckFormatRule, FormatCatalog, FREEFORM};
pub use validator::DeckValidator;
