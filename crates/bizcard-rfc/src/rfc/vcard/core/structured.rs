//! Structured vCard types.

/// Address (ADR property, RFC 2426 §3.2.1).
///
/// Components are written in order separated by `;`. Empty trailing
/// components are dropped on output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    /// Post office box.
    pub po_box: String,
    /// Extended address (e.g., apartment or suite number).
    pub extended: String,
    /// Street address.
    pub street: String,
    /// Locality (city).
    pub locality: String,
    /// Region (state or province).
    pub region: String,
    /// Postal code.
    pub postal_code: String,
    /// Country name.
    pub country: String,
}

impl Address {
    /// Builds an address whose street component holds every line joined
    /// by `", "`.
    #[must_use]
    pub fn from_lines(lines: &[String]) -> Self {
        Self {
            street: lines.join(", "),
            ..Self::default()
        }
    }

    /// Returns the components in ADR order.
    #[must_use]
    pub fn components(&self) -> [&str; 7] {
        [
            &self.po_box,
            &self.extended,
            &self.street,
            &self.locality,
            &self.region,
            &self.postal_code,
            &self.country,
        ]
    }

    /// Builds an address from ADR components; missing ones are empty.
    #[must_use]
    pub fn from_components<'a>(components: impl IntoIterator<Item = &'a str>) -> Self {
        let mut parts = components.into_iter().map(str::to_string);
        Self {
            po_box: parts.next().unwrap_or_default(),
            extended: parts.next().unwrap_or_default(),
            street: parts.next().unwrap_or_default(),
            locality: parts.next().unwrap_or_default(),
            region: parts.next().unwrap_or_default(),
            postal_code: parts.next().unwrap_or_default(),
            country: parts.next().unwrap_or_default(),
        }
    }

    /// Returns whether the address is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components().iter().all(|c| c.is_empty())
    }
}
