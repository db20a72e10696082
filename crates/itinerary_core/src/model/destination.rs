//! Destination domain model.
//!
//! # Responsibility
//! - Define one stop of an itinerary with location, dates and duration.
//! - Carry provenance of every identifier the stop has ever held.
//!
//! # Invariants
//! - `id` is unique within a destination collection (checked by the
//!   integrity validator, not by construction).
//! - Provenance fields are append-only: migration fills them, nothing in
//!   this crate clears them.
//! - Unknown document fields survive a decode/encode cycle via `extra`.

use crate::identity::{deserialize_optional_id, DestinationId, IdScheme};
use crate::model::dates::optional_date;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Geographic point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    #[serde(alias = "latitude")]
    pub lat: f64,
    #[serde(alias = "longitude", alias = "lon")]
    pub lng: f64,
}

/// Record of identifiers a destination held before migration.
///
/// Serialized with the leading-underscore names used by stored documents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Provenance {
    /// First non-UUID identifier replaced by migration.
    #[serde(rename = "_legacy_id", default, skip_serializing_if = "Option::is_none")]
    pub legacy_id: Option<String>,
    /// First UUID identifier replaced by migration.
    #[serde(
        rename = "_legacy_uuid",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub legacy_uuid: Option<String>,
    /// Every replaced identifier, oldest first.
    #[serde(
        rename = "_previous_ids",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub previous_ids: Vec<String>,
    #[serde(
        rename = "_migrated_at",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub migrated_at: Option<DateTime<Utc>>,
    /// Scheme transition label, e.g. `legacy_numeric_to_uuid`.
    #[serde(
        rename = "_migration_source",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub migration_source: Option<String>,
    /// Set when migration could not move this id to the target scheme.
    #[serde(rename = "_is_custom", default, skip_serializing_if = "is_false")]
    pub is_custom: bool,
}

impl Provenance {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Records one replaced identifier without discarding earlier ones.
    pub fn record_replaced(&mut self, old: &DestinationId) {
        let raw = old.as_str().to_string();
        match old.scheme() {
            IdScheme::Uuid => {
                if self.legacy_uuid.is_none() {
                    self.legacy_uuid = Some(raw.clone());
                }
            }
            _ => {
                if self.legacy_id.is_none() {
                    self.legacy_id = Some(raw.clone());
                }
            }
        }
        self.previous_ids.push(raw);
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// One stop of an itinerary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    /// `None` when the stored document has no usable id.
    #[serde(
        default,
        deserialize_with = "deserialize_optional_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<DestinationId>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    /// Planned nights/days at this stop. `0` means "derive from dates".
    #[serde(default)]
    pub duration_days: u32,
    #[serde(default, with = "optional_date", skip_serializing_if = "Option::is_none")]
    pub arrival_date: Option<NaiveDate>,
    #[serde(default, with = "optional_date", skip_serializing_if = "Option::is_none")]
    pub departure_date: Option<NaiveDate>,
    /// External place id metadata, independent of the id scheme in use.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
    /// How the traveler arrives here (`flight`, `train`, `bus`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transport_mode: Option<String>,
    /// Dominant activity at this stop (`city`, `beach`, `trekking`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(flatten)]
    pub provenance: Provenance,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Destination {
    /// Creates a destination with a freshly generated id.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(DestinationId::generate(), name)
    }

    /// Creates a destination with a caller-provided id.
    ///
    /// Used by import paths where identity already exists externally.
    pub fn with_id(id: impl Into<DestinationId>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builder-style country setter.
    pub fn in_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Builder-style date setter.
    pub fn between(mut self, arrival: NaiveDate, departure: NaiveDate) -> Self {
        self.arrival_date = Some(arrival);
        self.departure_date = Some(departure);
        self
    }

    /// Builder-style duration setter.
    pub fn for_days(mut self, days: u32) -> Self {
        self.duration_days = days;
        self
    }

    /// Returns whether the id equals `other` under identifier equality.
    pub fn has_id(&self, other: &DestinationId) -> bool {
        self.id.as_ref() == Some(other)
    }

    /// Both arrival and departure are known.
    pub fn is_dated(&self) -> bool {
        self.arrival_date.is_some() && self.departure_date.is_some()
    }

    /// Days attributed to this stop.
    ///
    /// `duration_days` wins when set; otherwise the date span is used.
    pub fn effective_days(&self) -> u32 {
        if self.duration_days > 0 {
            return self.duration_days;
        }
        match (self.arrival_date, self.departure_date) {
            (Some(arrival), Some(departure)) => {
                u32::try_from((departure - arrival).num_days().max(0)).unwrap_or(0)
            }
            _ => 0,
        }
    }

    /// Stored country with surrounding whitespace removed, if non-blank.
    pub fn country_name(&self) -> Option<&str> {
        self.country
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }
}
