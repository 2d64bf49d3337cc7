//! Download filename generation for contact files.
//!
//! ## Summary
//! Builds the suggested filename offered when a contact card is downloaded.
//! The person's name is kept as written, with whitespace runs collapsed to
//! a single underscore.

use crate::constants::VCARD_EXTENSION;

/// Stem used when the name yields nothing usable.
const FALLBACK_STEM: &str = "contact";

/// Generate the filename stem from a person's name.
///
/// Collapses every whitespace run to `_`, drops leading and trailing
/// whitespace, and replaces characters that cannot appear in a quoted
/// `Content-Disposition` filename (`"`, `\`, `/`) with `_`.
///
/// Examples:
/// - "Jane Doe" -> "`Jane_Doe`"
/// - "  Ada   King  " -> "`Ada_King`"
/// - "" -> "contact"
#[must_use]
pub fn filename_stem(name: &str) -> String {
    let stem = name
        .split_whitespace()
        .map(|word| {
            word.chars()
                .map(|c| if matches!(c, '"' | '\\' | '/') { '_' } else { c })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("_");

    if stem.is_empty() {
        FALLBACK_STEM.to_string()
    } else {
        stem
    }
}

/// Generate the full `.vcf` filename for a person's name.
#[must_use]
pub fn vcard_filename(name: &str) -> String {
    format!("{}.{VCARD_EXTENSION}", filename_stem(name))
}
