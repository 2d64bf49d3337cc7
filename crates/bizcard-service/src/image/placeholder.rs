use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Encodes `bytes` as a `data:` URL.
#[must_use]
pub fn data_url(media_type: &str, bytes: &[u8]) -> String {
    format!("data:{media_type};base64,{}", STANDARD.encode(bytes))
}

/// Up to two uppercase initials taken from the words of `name`.
#[must_use]
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().find(|c| c.is_alphanumeric()))
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

/// ## Summary
/// An SVG avatar with the initials of `full_name`, as a `data:` URL.
#[must_use]
pub fn placeholder_src(full_name: &str) -> String {
    let svg = format!(
        concat!(
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="160" height="160" viewBox="0 0 160 160">"##,
            r##"<circle cx="80" cy="80" r="80" fill="#334155"/>"##,
            r##"<text x="80" y="80" dy=".35em" text-anchor="middle" font-family="sans-serif" "##,
            r##"font-size="64" fill="#f8fafc">{}</text></svg>"##
        ),
        initials(full_name)
    );

    data_url("image/svg+xml", svg.as_bytes())
}
