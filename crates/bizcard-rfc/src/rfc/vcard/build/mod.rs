//! vCard serialization.
//!
//! ## Usage
//!
//! ```rust
//! use bizcard_rfc::rfc::vcard::{ContactRecord, encode};
//!
//! let record = ContactRecord::new("Jane Doe").with_email("jane@example.com");
//! let text = encode(&record);
//!
//! assert_eq!(
//!     text,
//!     "BEGIN:VCARD\r\nVERSION:3.0\r\nFN:Jane Doe\r\nEMAIL;TYPE=INTERNET:jane@example.com\r\nEND:VCARD"
//! );
//! ```
//!
//! ## Features
//!
//! - Lines joined with CRLF, no trailing line break
//! - Values written as given; embedded line breaks become spaces
//! - Properties written in insertion order
//! - Structured ADR values with trailing empty components dropped

mod escape;
mod serializer;

pub use escape::{escape_param_value, flatten_line_breaks};
pub use serializer::{LINE_ENDING, encode, serialize_lines, serialize_single};
