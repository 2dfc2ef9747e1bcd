//! Music collection data model, result rows, and input parsing.
//!
//! This crate defines the persistent data model without any database
//! dependencies. `audiotheca-db` persists these types and `audiotheca-report`
//! renders the row types as text.

pub mod input;
pub mod rows;
pub mod types;

pub use input::{
    format_date, optional_text, parse_date, parse_optional_int, parse_price, required_text,
    InputError, DATE_FORMAT,
};
pub use rows::*;
pub use types::*;
