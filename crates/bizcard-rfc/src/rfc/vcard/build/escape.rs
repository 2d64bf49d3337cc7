//! Value preparation for vCard content lines.

/// Replaces line breaks in a value with spaces so the value stays on one
/// content line.
///
/// A CRLF pair becomes a single space. Everything else passes through.
#[must_use]
pub fn flatten_line_breaks(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                result.push(' ');
            }
            '\n' => result.push(' '),
            _ => result.push(c),
        }
    }

    result
}

/// Prepares a parameter value for serialization.
///
/// Returns `(value, needs_quotes)`. Values containing `:`, `;` or `,` must
/// be quoted; double quotes and control characters are dropped.
#[must_use]
pub fn escape_param_value(s: &str) -> (String, bool) {
    let mut result = String::with_capacity(s.len());
    let mut needs_quotes = false;

    for c in s.chars() {
        match c {
            ':' | ';' | ',' => {
                result.push(c);
                needs_quotes = true;
            }
            '"' => {}
            _ if c.is_control() => {}
            _ => result.push(c),
        }
    }

    (result, needs_quotes)
}
