//! Leg / sub-leg groupings used by itinerary filtering views.
//!
//! # Invariants
//! - Every destination reference held by a leg or sub-leg must exist in
//!   the destination collection.

use crate::identity::DestinationId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Continent-level grouping of destinations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continent: Option<String>,
    #[serde(default)]
    pub destination_ids: Vec<DestinationId>,
    #[serde(default)]
    pub sub_legs: Vec<SubLeg>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Country- or region-level grouping nested in one leg.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubLeg {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default)]
    pub destination_ids: Vec<DestinationId>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Leg {
    /// Iterates every reference held by the leg and its sub-legs.
    pub fn references(&self) -> impl Iterator<Item = &DestinationId> {
        self.destination_ids.iter().chain(
            self.sub_legs
                .iter()
                .flat_map(|sub_leg| sub_leg.destination_ids.iter()),
        )
    }

    /// Keeps only references accepted by `keep`; returns how many were dropped.
    pub fn retain_references(&mut self, mut keep: impl FnMut(&DestinationId) -> bool) -> usize {
        let before = self.reference_count();
        self.destination_ids.retain(|id| keep(id));
        for sub_leg in &mut self.sub_legs {
            sub_leg.destination_ids.retain(|id| keep(id));
        }
        before - self.reference_count()
    }

    /// Rewrites references in place; returns how many changed.
    pub fn map_references(
        &mut self,
        mut rewrite: impl FnMut(&DestinationId) -> Option<DestinationId>,
    ) -> usize {
        let mut changed = 0;
        let slots = self.destination_ids.iter_mut().chain(
            self.sub_legs
                .iter_mut()
                .flat_map(|sub_leg| sub_leg.destination_ids.iter_mut()),
        );
        for slot in slots {
            if let Some(next) = rewrite(slot) {
                *slot = next;
                changed += 1;
            }
        }
        changed
    }

    pub fn reference_count(&self) -> usize {
        self.references().count()
    }
}
