//! vCard parsing.
//!
//! Reads serialized cards back into the model, checking the content-line
//! grammar `NAME[;PARAM=VALUE]*:VALUE` and the BEGIN/END bracketing.
//!
//! ## Usage
//!
//! ```rust
//! use bizcard_rfc::rfc::vcard::parse_single;
//!
//! let input = "BEGIN:VCARD\r\nVERSION:3.0\r\nFN:John Doe\r\nEND:VCARD";
//!
//! let card = parse_single(input).unwrap();
//! assert_eq!(card.formatted_name(), Some("John Doe"));
//! ```

mod error;
mod lexer;
mod parser;

pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use lexer::{ContentLine, parse_content_line, split_lines, unfold};
pub use parser::{parse, parse_single, verify};
