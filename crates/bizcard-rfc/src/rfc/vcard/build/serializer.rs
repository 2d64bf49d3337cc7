//! vCard serialization.

use super::escape::{escape_param_value, flatten_line_breaks};
use crate::rfc::vcard::core::{
    Address, ContactRecord, VCard, VCardParameter, VCardProperty, VCardValue, names,
};

/// Line terminator between content lines.
pub const LINE_ENDING: &str = "\r\n";

/// Encodes a contact record as vCard 3.0 text.
///
/// ## Summary
/// Pure and deterministic. The record's absent fields produce no line; an
/// empty full name still yields an `FN:` line.
#[must_use]
#[tracing::instrument(skip(record), fields(name = %record.full_name))]
pub fn encode(record: &ContactRecord) -> String {
    let text = serialize_single(&record.to_vcard());
    tracing::trace!(bytes = text.len(), "Encoded contact record");
    text
}

/// Serializes a vCard to a string.
///
/// ## Summary
/// Content lines are joined with CRLF. The output has no trailing line
/// break.
#[must_use]
pub fn serialize_single(card: &VCard) -> String {
    serialize_lines(card).join(LINE_ENDING)
}

/// Serializes a vCard into its content lines, BEGIN and END included.
#[must_use]
pub fn serialize_lines(card: &VCard) -> Vec<String> {
    let mut lines = Vec::with_capacity(card.properties.len() + 3);

    lines.push(format!("{}:{}", names::BEGIN, names::VCARD));
    // VERSION must be first after BEGIN
    lines.push(format!("{}:{}", names::VERSION, card.version.as_str()));

    for prop in &card.properties {
        lines.push(serialize_property(prop));
    }

    lines.push(format!("{}:{}", names::END, names::VCARD));
    lines
}

fn serialize_property(prop: &VCardProperty) -> String {
    let mut line = String::new();

    line.push_str(&prop.name);

    for param in &prop.params {
        serialize_parameter(param, &mut line);
    }

    line.push(':');
    serialize_value(&prop.value, &mut line);

    line
}

fn serialize_parameter(param: &VCardParameter, output: &mut String) {
    output.push(';');
    output.push_str(&param.name);
    output.push('=');

    for (i, value) in param.values.iter().enumerate() {
        if i > 0 {
            output.push(',');
        }

        let (escaped, needs_quotes) = escape_param_value(value);

        if needs_quotes {
            output.push('"');
            output.push_str(&escaped);
            output.push('"');
        } else {
            output.push_str(&escaped);
        }
    }
}

fn serialize_value(value: &VCardValue, output: &mut String) {
    match value {
        VCardValue::Text(s) | VCardValue::Uri(s) => {
            output.push_str(&flatten_line_breaks(s));
        }
        VCardValue::Address(addr) => {
            serialize_address(addr, output);
        }
    }
}

fn serialize_address(addr: &Address, output: &mut String) {
    // pobox;ext;street;locality;region;code;country
    let components = addr.components();
    let used = components
        .iter()
        .rposition(|c| !c.is_empty())
        .map_or(0, |last| last + 1);

    for (i, component) in components.iter().take(used).enumerate() {
        if i > 0 {
            output.push(';');
        }
        output.push_str(&flatten_line_breaks(component));
    }
}
