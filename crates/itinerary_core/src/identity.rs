//! Destination identifier allocation and classification.
//!
//! # Responsibility
//! - Generate fresh destination identifiers.
//! - Classify any raw identifier into exactly one `IdScheme`.
//! - Provide the canonical form used for every identifier comparison.
//!
//! # Invariants
//! - `classify` is total: unmatched input is `IdScheme::Custom`.
//! - Two `DestinationId`s are equal iff their normalized forms are equal.
//! - The raw spelling of an id is preserved on serialization.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use uuid::Uuid;

static UUID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .expect("valid uuid regex")
});
static PLACE_ID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(?:ChIJ|GhIJ)[A-Za-z0-9_-]{16,}|Ei[A-Za-z0-9_-]{38,})$")
        .expect("valid place id regex")
});
static LEGACY_NUMERIC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{1,20}$").expect("valid legacy id regex"));

/// Identifier scheme tag. Every consumer matches over these four cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdScheme {
    /// Random 128-bit identifier in hyphenated form.
    Uuid,
    /// External place-resolution identifier.
    PlaceId,
    /// Digits-only identifier from the first storage generation.
    LegacyNumeric,
    /// Anything else, including blank input.
    Custom,
}

impl IdScheme {
    /// Stable string used in reports and provenance fields.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Uuid => "uuid",
            Self::PlaceId => "place_id",
            Self::LegacyNumeric => "legacy_numeric",
            Self::Custom => "custom",
        }
    }
}

impl Display for IdScheme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generates a new random identifier string.
pub fn generate() -> String {
    Uuid::new_v4().to_string()
}

/// Classifies one raw identifier. Surrounding whitespace is ignored.
pub fn classify(id: &str) -> IdScheme {
    let trimmed = id.trim();
    if UUID_RE.is_match(trimmed) {
        IdScheme::Uuid
    } else if PLACE_ID_RE.is_match(trimmed) {
        IdScheme::PlaceId
    } else if LEGACY_NUMERIC_RE.is_match(trimmed) {
        IdScheme::LegacyNumeric
    } else {
        IdScheme::Custom
    }
}

/// Returns the canonical comparison form of one raw identifier.
///
/// - UUIDs are lowercased.
/// - Legacy numeric ids lose leading zeros (`"007"` and `"7"` are one id).
/// - Place ids and custom ids are case-sensitive and only trimmed.
pub fn normalize(id: &str) -> String {
    let trimmed = id.trim();
    match classify(trimmed) {
        IdScheme::Uuid => trimmed.to_ascii_lowercase(),
        IdScheme::LegacyNumeric => {
            let stripped = trimmed.trim_start_matches('0');
            if stripped.is_empty() {
                "0".to_string()
            } else {
                stripped.to_string()
            }
        }
        IdScheme::PlaceId | IdScheme::Custom => trimmed.to_string(),
    }
}

/// Identifier of one destination.
///
/// Keeps the raw spelling for round-trips and compares by canonical form.
#[derive(Debug, Clone)]
pub struct DestinationId {
    raw: String,
    canonical: String,
    scheme: IdScheme,
}

impl DestinationId {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let canonical = normalize(&raw);
        let scheme = classify(&raw);
        Self {
            raw,
            canonical,
            scheme,
        }
    }

    /// Allocates a fresh UUID-scheme identifier.
    pub fn generate() -> Self {
        Self::new(generate())
    }

    /// Raw spelling as stored in the dataset.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    pub fn scheme(&self) -> IdScheme {
        self.scheme
    }

    /// Blank ids make a destination unreferenceable.
    pub fn is_blank(&self) -> bool {
        self.canonical.is_empty()
    }
}

impl PartialEq for DestinationId {
    fn eq(&self, other: &Self) -> bool {
        self.canonical == other.canonical
    }
}

impl Eq for DestinationId {}

impl Hash for DestinationId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical.hash(state);
    }
}

impl PartialOrd for DestinationId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DestinationId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical.cmp(&other.canonical)
    }
}

impl Display for DestinationId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for DestinationId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for DestinationId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl Serialize for DestinationId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for DestinationId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawId::deserialize(deserializer).map(|raw| Self::new(raw.into_string()))
    }
}

/// Legacy documents store numeric ids as JSON numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Unsigned(u64),
    Signed(i64),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            Self::Text(value) => value,
            Self::Unsigned(value) => value.to_string(),
            Self::Signed(value) => value.to_string(),
        }
    }
}

/// Decodes a nullable id field; blank strings decode as `None`.
pub fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<DestinationId>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<DestinationId>::deserialize(deserializer)?;
    Ok(value.filter(|id| !id.is_blank()))
}

/// Decodes a string-or-number id field into its string form.
pub fn deserialize_string_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<RawId>::deserialize(deserializer)
        .map(|raw| raw.map(RawId::into_string).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::{classify, generate, normalize, DestinationId, IdScheme};

    #[test]
    fn generated_ids_are_uuid_scheme_and_distinct() {
        let first = generate();
        let second = generate();
        assert_ne!(first, second);
        assert_eq!(classify(&first), IdScheme::Uuid);
    }

    #[test]
    fn classify_covers_each_scheme() {
        assert_eq!(
            classify("3F2504E0-4F89-41D3-9A0C-0305E82C3301"),
            IdScheme::Uuid
        );
        assert_eq!(
            classify("ChIJ51cu8IcbXWARiRtXIothAS4"),
            IdScheme::PlaceId
        );
        assert_eq!(classify("1718000000000"), IdScheme::LegacyNumeric);
        assert_eq!(classify(" 42 "), IdScheme::LegacyNumeric);
        assert_eq!(classify("tokyo-stop"), IdScheme::Custom);
        assert_eq!(classify(""), IdScheme::Custom);
        assert_eq!(classify("Eiffel-Tower-visit-2026"), IdScheme::Custom);
    }

    #[test]
    fn normalize_folds_case_and_leading_zeros() {
        assert_eq!(
            normalize("3F2504E0-4F89-41D3-9A0C-0305E82C3301"),
            "3f2504e0-4f89-41d3-9a0c-0305e82c3301"
        );
        assert_eq!(normalize("007"), "7");
        assert_eq!(normalize("000"), "0");
        assert_eq!(normalize("  custom  "), "custom");
        assert_ne!(normalize("ChIJabcdefghijklmnopq"), normalize("chijabcdefghijklmnopq"));
    }

    #[test]
    fn destination_id_equality_uses_canonical_form() {
        let upper = DestinationId::new("3F2504E0-4F89-41D3-9A0C-0305E82C3301");
        let lower = DestinationId::new("3f2504e0-4f89-41d3-9a0c-0305e82c3301");
        assert_eq!(upper, lower);
        assert_eq!(upper.as_str(), "3F2504E0-4F89-41D3-9A0C-0305E82C3301");
        assert_eq!(DestinationId::new("07"), DestinationId::new("7"));
    }

    #[test]
    fn destination_id_decodes_numbers_and_strings() {
        let from_number: DestinationId = serde_json::from_value(serde_json::json!(12)).unwrap();
        let from_text: DestinationId = serde_json::from_value(serde_json::json!("12")).unwrap();
        assert_eq!(from_number, from_text);
        assert_eq!(from_number.scheme(), IdScheme::LegacyNumeric);
        assert_eq!(serde_json::to_value(&from_number).unwrap(), "12");
    }
}
