//! Leg planning and leg-reference maintenance.
//!
//! # Responsibility
//! - Derive continent legs and region sub-legs from an itinerary.
//! - Keep leg references consistent when destinations are removed,
//!   renamed by migration, or found dangling.
//!
//! # Invariants
//! - Generated legs hold destination ids in itinerary order.
//! - Leg ids are deterministic slugs of their labels.

use crate::geo;
use crate::identity::DestinationId;
use crate::model::destination::Destination;
use crate::model::leg::{Leg, SubLeg};
use std::collections::{HashMap, HashSet};

/// Label used when neither the table nor the record knows a grouping.
pub const UNKNOWN_GROUP: &str = "Unknown";

/// Builds one leg per continent and one sub-leg per region inside it.
///
/// Destinations without an id cannot be referenced and are skipped.
pub fn generate_legs(destinations: &[Destination]) -> Vec<Leg> {
    let mut legs: Vec<Leg> = Vec::new();
    let mut leg_slot: HashMap<String, usize> = HashMap::new();

    for destination in destinations {
        let Some(id) = destination.id.as_ref().filter(|id| !id.is_blank()) else {
            continue;
        };
        let (continent, region) = grouping(destination);

        let slot = *leg_slot.entry(continent.to_lowercase()).or_insert_with(|| {
            legs.push(Leg {
                id: format!("leg-{}", slug(&continent)),
                name: continent.clone(),
                continent: Some(continent.clone()),
                ..Leg::default()
            });
            legs.len() - 1
        });

        let leg = &mut legs[slot];
        leg.destination_ids.push(id.clone());
        let sub_leg_id = format!("{}-{}", leg.id, slug(&region));
        match leg.sub_legs.iter_mut().find(|sub_leg| sub_leg.id == sub_leg_id) {
            Some(sub_leg) => sub_leg.destination_ids.push(id.clone()),
            None => leg.sub_legs.push(SubLeg {
                id: sub_leg_id,
                name: region.clone(),
                region: Some(region),
                destination_ids: vec![id.clone()],
                ..SubLeg::default()
            }),
        }
    }
    legs
}

/// Returns copies of `legs` without any reference to `id`, and how many
/// references were dropped.
pub fn remove_destination(legs: &[Leg], id: &DestinationId) -> (Vec<Leg>, usize) {
    let mut next = legs.to_vec();
    let removed = next
        .iter_mut()
        .map(|leg| leg.retain_references(|reference| reference != id))
        .sum();
    (next, removed)
}

/// Rewrites references found in `map`; returns how many changed.
pub fn rewrite_references(
    legs: &mut [Leg],
    map: &HashMap<DestinationId, DestinationId>,
) -> usize {
    legs.iter_mut()
        .map(|leg| leg.map_references(|reference| map.get(reference).cloned()))
        .sum()
}

/// Drops references not in `known`; returns how many were dropped.
pub fn prune_dangling(legs: &mut [Leg], known: &HashSet<&DestinationId>) -> usize {
    legs.iter_mut()
        .map(|leg| leg.retain_references(|reference| known.contains(reference)))
        .sum()
}

fn grouping(destination: &Destination) -> (String, String) {
    if let Some(resolved) = destination.country_name().and_then(geo::lookup) {
        return (resolved.continent.to_string(), resolved.region.to_string());
    }
    let stored = |value: &Option<String>| {
        value
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(UNKNOWN_GROUP)
            .to_string()
    };
    (stored(&destination.continent), stored(&destination.region))
}

/// Lowercase ASCII slug: alphanumeric runs joined by single hyphens.
fn slug(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    for ch in label.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    if out.is_empty() {
        "unknown".to_string()
    } else {
        out
    }
}

#[cfg(test)]
mod tests {
    use super::{generate_legs, remove_destination, slug};
    use crate::identity::DestinationId;
    use crate::model::destination::Destination;

    #[test]
    fn slug_collapses_separators() {
        assert_eq!(slug("East Asia"), "east-asia");
        assert_eq!(slug("  Australia and New Zealand "), "australia-and-new-zealand");
        assert_eq!(slug("---"), "unknown");
    }

    #[test]
    fn legs_group_by_continent_then_region() {
        let legs = generate_legs(&[
            Destination::with_id("1", "Tokyo").in_country("Japan"),
            Destination::with_id("2", "Paris").in_country("France"),
            Destination::with_id("3", "Bangkok").in_country("Thailand"),
        ]);

        assert_eq!(legs.len(), 2);
        assert_eq!(legs[0].id, "leg-asia");
        assert_eq!(legs[0].reference_count(), 4);
        assert_eq!(legs[0].sub_legs.len(), 2);
        assert_eq!(legs[0].sub_legs[0].id, "leg-asia-east-asia");
        assert_eq!(legs[1].id, "leg-europe");
    }

    #[test]
    fn remove_destination_leaves_input_untouched() {
        let legs = generate_legs(&[
            Destination::with_id("1", "Tokyo").in_country("Japan"),
            Destination::with_id("2", "Kyoto").in_country("Japan"),
        ]);

        let (next, removed) = remove_destination(&legs, &DestinationId::new("1"));
        assert_eq!(removed, 2);
        assert_eq!(next[0].reference_count(), 2);
        assert_eq!(legs[0].reference_count(), 4);
    }
}
