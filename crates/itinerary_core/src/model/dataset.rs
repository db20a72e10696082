//! Whole-itinerary snapshot consumed and produced by every operation.
//!
//! # Invariants
//! - Operations never mutate a caller's snapshot; they return a new one.
//! - The wire shape is `{ "locations": [...], "costs": [...], "legs": [...] }`.

use crate::identity::DestinationId;
use crate::model::cost::CostItem;
use crate::model::destination::Destination;
use crate::model::leg::Leg;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// In-memory itinerary snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub locations: Vec<Destination>,
    #[serde(default)]
    pub costs: Vec<CostItem>,
    #[serde(default)]
    pub legs: Vec<Leg>,
}

impl Dataset {
    pub fn new(locations: Vec<Destination>, costs: Vec<CostItem>) -> Self {
        Self {
            locations,
            costs,
            legs: Vec::new(),
        }
    }

    /// Decodes a stored document.
    pub fn from_json_str(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    /// Encodes the snapshot for the persistence collaborator.
    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Set of all present destination ids.
    pub fn destination_ids(&self) -> HashSet<&DestinationId> {
        self.locations
            .iter()
            .filter_map(|destination| destination.id.as_ref())
            .collect()
    }

    pub fn contains_destination(&self, id: &DestinationId) -> bool {
        self.locations
            .iter()
            .any(|destination| destination.has_id(id))
    }

    /// First destination carrying `id`.
    pub fn find_destination(&self, id: &DestinationId) -> Option<&Destination> {
        self.locations
            .iter()
            .find(|destination| destination.has_id(id))
    }

    /// Cost items pointing at `id`.
    pub fn costs_for<'a>(&'a self, id: &'a DestinationId) -> impl Iterator<Item = &'a CostItem> {
        self.costs.iter().filter(move |cost| cost.references(id))
    }
}
