//! vCard model, encoder and parser, plus contact deep links.

pub mod error;
pub mod rfc;
