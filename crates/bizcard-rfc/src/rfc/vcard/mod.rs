//! vCard implementation for business cards (RFC 2426).
//!
//! ## Overview
//!
//! A [`ContactRecord`] is encoded as vCard 3.0 text with a fixed field set
//! and order: FN, ORG, TEL, EMAIL, URL, ADR. The parser reads that text
//! back for verification.
//!
//! ## Usage
//!
//! ```rust
//! use bizcard_rfc::rfc::vcard::{ContactRecord, encode, verify};
//!
//! let record = ContactRecord::new("Jane Doe").with_phone("+15551234567");
//! let text = encode(&record);
//!
//! let card = verify(&text).unwrap();
//! assert_eq!(card.formatted_name(), Some("Jane Doe"));
//! ```
//!
//! ## Submodules
//!
//! - [`core`] - Core types (`VCard`, `VCardProperty`, `ContactRecord`, etc.)
//! - [`parse`] - Parsing functions and error types
//! - [`build`] - Serialization functions

pub mod build;
pub mod core;
pub mod parse;


// Re-export commonly used types
pub use build::{encode, serialize_single};
pub use self::core::{
    Address, ContactRecord, VCard, VCardParameter, VCardProperty, VCardValue, VCardVersion,
};
pub use parse::{ParseError, ParseErrorKind, ParseResult, parse, parse_single, verify};
