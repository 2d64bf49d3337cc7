//! Contact deep links (`tel:`, `mailto:`, messaging and profile URLs).

use crate::rfc::vcard::ContactRecord;

/// Base of WhatsApp click-to-chat links.
pub const WHATSAPP_BASE: &str = "https://wa.me/";

/// Strips every non-digit character from a phone number.
///
/// `"+1 (234) 567-8901"` becomes `"12345678901"`; empty input stays empty.
#[must_use]
pub fn normalize_phone(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

/// `tel:` link with the number passed through unmodified.
#[must_use]
pub fn tel_uri(phone: &str) -> String {
    format!("tel:{phone}")
}

/// WhatsApp click-to-chat link for a phone number.
#[must_use]
pub fn whatsapp_url(phone: &str) -> String {
    format!("{WHATSAPP_BASE}{}", normalize_phone(phone))
}

/// `mailto:` link for an email address.
#[must_use]
pub fn mailto_uri(email: &str) -> String {
    format!("mailto:{email}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactActionKind {
    Call,
    WhatsApp,
    Email,
    LinkedIn,
}

impl ContactActionKind {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Call => "Call",
            Self::WhatsApp => "WhatsApp",
            Self::Email => "Email",
            Self::LinkedIn => "LinkedIn",
        }
    }
}

/// One button on the card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactAction {
    pub kind: ContactActionKind,
    pub href: String,
    /// Opens in a new browsing context.
    pub external: bool,
}

/// ## Summary
/// Builds the card's action links in display order. Actions whose field is
/// absent are left out; WhatsApp also needs at least one digit.
#[must_use]
pub fn contact_actions(record: &ContactRecord) -> Vec<ContactAction> {
    let mut actions = Vec::with_capacity(4);

    if let Some(phone) = record.phone() {
        actions.push(ContactAction {
            kind: ContactActionKind::Call,
            href: tel_uri(phone),
            external: false,
        });

        if !normalize_phone(phone).is_empty() {
            actions.push(ContactAction {
                kind: ContactActionKind::WhatsApp,
                href: whatsapp_url(phone),
                external: true,
            });
        }
    }

    if let Some(email) = record.email() {
        actions.push(ContactAction {
            kind: ContactActionKind::Email,
            href: mailto_uri(email),
            external: false,
        });
    }

    if let Some(url) = record.linkedin_url() {
        actions.push(ContactAction {
            kind: ContactActionKind::LinkedIn,
            href: url.to_string(),
            external: true,
        });
    }

    actions
}
