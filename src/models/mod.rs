use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Whether a listing is offered for rent or for sale
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum Purpose {
    #[serde(rename = "for-rent")]
    Rental,
    #[serde(rename = "for-sale")]
    Sale,
}

impl Purpose {
    /// Purposes polled on every run, in order
    pub const ALL: [Purpose; 2] = [Purpose::Rental, Purpose::Sale];

    /// Value the listings provider expects in the `purpose` field
    pub fn as_str(self) -> &'static str {
        match self {
            Purpose::Rental => "for-rent",
            Purpose::Sale => "for-sale",
        }
    }

    /// Label used at the head of a notification
    pub fn label(self) -> &'static str {
        match self {
            Purpose::Rental => "RENT",
            Purpose::Sale => "SALE",
        }
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One property entry from a search response.
///
/// The provider's payload is loosely typed (ids and prices arrive as either
/// strings or numbers, nested objects may be null), so the record keeps the
/// raw JSON and exposes tolerant accessors instead of a strict struct.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Listing(pub Value);

impl Listing {
    /// Stable identifier, or `None` when the record carries no usable id
    pub fn id(&self) -> Option<String> {
        self.text("/id")
    }

    /// Text of the field at `pointer`. Null, empty strings and zero count
    /// as absent, as do objects, arrays and booleans.
    pub fn text(&self, pointer: &str) -> Option<String> {
        match self.0.pointer(pointer)? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
            _ => None,
        }
    }

    /// First present field among `pointers`
    pub fn first_text(&self, pointers: &[&str]) -> Option<String> {
        pointers.iter().find_map(|p| self.text(p))
    }
}

/// Body of a provider search response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Option<Vec<Listing>>,
}

impl SearchResponse {
    pub fn into_listings(self) -> Vec<Listing> {
        self.results.unwrap_or_default()
    }
}
