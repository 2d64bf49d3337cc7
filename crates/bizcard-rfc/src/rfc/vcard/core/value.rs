//! vCard value types.

use super::structured::Address;

/// A vCard property value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VCardValue {
    /// Text value, written as given.
    Text(String),

    /// URI value.
    Uri(String),

    /// Structured address (ADR property).
    Address(Address),
}

impl VCardValue {
    /// Returns the value as text if applicable.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as a URI if applicable.
    #[must_use]
    pub fn as_uri(&self) -> Option<&str> {
        match self {
            Self::Uri(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as an address if applicable.
    #[must_use]
    pub fn as_address(&self) -> Option<&Address> {
        match self {
            Self::Address(a) => Some(a),
            _ => None,
        }
    }
}

impl From<String> for VCardValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for VCardValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<Address> for VCardValue {
    fn from(a: Address) -> Self {
        Self::Address(a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_from_string() {
        let val: VCardValue = "Hello".into();
        assert_eq!(val.as_text(), Some("Hello"));
        assert_eq!(val.as_uri(), None);
    }

    #[test]
    fn value_from_address() {
        let addr = Address::from_lines(&["1 Main St".to_string()]);
        let val: VCardValue = addr.clone().into();
        assert_eq!(val.as_address(), Some(&addr));
    }
}
