//! The contact record a business card is built from.

use bizcard_core::config::CardConfig;

use super::parameter::types;
use super::property::{VCardProperty, names};
use super::structured::Address;
use super::vcard::{VCard, VCardVersion};

/// Contact details for one person.
///
/// Built fresh from configuration whenever a card is rendered or saved.
/// Empty strings are treated the same as absent fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactRecord {
    pub full_name: String,
    pub organization: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub linkedin_url: Option<String>,
    pub address_lines: Vec<String>,
}

fn non_empty(field: Option<&String>) -> Option<&str> {
    field.map(String::as_str).filter(|s| !s.is_empty())
}

impl ContactRecord {
    #[must_use]
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = Some(organization.into());
        self
    }

    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn with_linkedin_url(mut self, url: impl Into<String>) -> Self {
        self.linkedin_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn with_address_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.address_lines = lines.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn organization(&self) -> Option<&str> {
        non_empty(self.organization.as_ref())
    }

    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        non_empty(self.phone.as_ref())
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        non_empty(self.email.as_ref())
    }

    #[must_use]
    pub fn linkedin_url(&self) -> Option<&str> {
        non_empty(self.linkedin_url.as_ref())
    }

    /// Returns the address built from the non-blank address lines, if any.
    #[must_use]
    pub fn address(&self) -> Option<Address> {
        let lines: Vec<String> = self
            .address_lines
            .iter()
            .filter(|l| !l.trim().is_empty())
            .cloned()
            .collect();
        (!lines.is_empty()).then(|| Address::from_lines(&lines))
    }

    /// Number of optional fields that will produce a vCard line.
    #[must_use]
    pub fn present_optional_fields(&self) -> usize {
        [
            self.organization().is_some(),
            self.phone().is_some(),
            self.email().is_some(),
            self.linkedin_url().is_some(),
            self.address().is_some(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }

    /// ## Summary
    /// Maps the record onto a vCard 3.0 in the fixed field order
    /// FN, ORG, TEL, EMAIL, URL, ADR. Absent fields produce no property.
    #[must_use]
    pub fn to_vcard(&self) -> VCard {
        let mut card = VCard::with_version(VCardVersion::V3);

        card.add_property(VCardProperty::text(names::FN, self.full_name.as_str()));

        if let Some(org) = self.organization() {
            card.add_property(VCardProperty::text(names::ORG, org));
        }
        if let Some(phone) = self.phone() {
            card.add_property(VCardProperty::text(names::TEL, phone).typed(types::CELL));
        }
        if let Some(email) = self.email() {
            card.add_property(VCardProperty::text(names::EMAIL, email).typed(types::INTERNET));
        }
        if let Some(url) = self.linkedin_url() {
            card.add_property(VCardProperty::uri(names::URL, url));
        }
        if let Some(address) = self.address() {
            card.add_property(VCardProperty::with_value(names::ADR, address).typed(types::WORK));
        }

        card
    }
}

impl From<&CardConfig> for ContactRecord {
    fn from(config: &CardConfig) -> Self {
        Self {
            full_name: config.full_name.clone(),
            organization: config.organization.clone(),
            phone: config.phone.clone(),
            email: config.email.clone(),
            linkedin_url: config.linkedin_url.clone(),
            address_lines: config.address_lines.clone(),
        }
    }
}
