//! Referential-integrity validation over a dataset snapshot.
//!
//! # Responsibility
//! - Detect duplicate and missing destination ids.
//! - Detect orphaned cost items and dangling leg references.
//! - Surface informational drift: mixed id schemes, region mismatches,
//!   unassigned costs.
//!
//! # Invariants
//! - Validation is read-only and deterministic: same snapshot, same report.
//! - Orphans are collected for remediation, never removed here.
//! - A cost with `destination_id = null` is unassigned, never orphaned.

use crate::geo;
use crate::identity::{DestinationId, IdScheme};
use crate::model::dataset::Dataset;
use log::debug;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Severity of one finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// One destination id shared by several destinations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateId {
    pub id: DestinationId,
    /// Positions in `locations`, ascending.
    pub positions: Vec<usize>,
}

/// One destination without a usable id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingId {
    pub position: usize,
}

/// One cost pointing at a destination that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrphanedCost {
    pub cost_id: String,
    pub destination_id: DestinationId,
}

/// Stored region/continent diverging from the static mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionMismatch {
    pub position: usize,
    pub destination_id: Option<DestinationId>,
    pub country: String,
    pub stored_region: Option<String>,
    pub expected_region: &'static str,
    pub stored_continent: Option<String>,
    pub expected_continent: &'static str,
}

/// Leg or sub-leg reference to a destination that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DanglingLegRef {
    pub leg_id: String,
    /// `None` when the reference sits on the leg itself.
    pub sub_leg_id: Option<String>,
    pub destination_id: DestinationId,
}

/// Full validation result with per-check detail lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub total_destinations: usize,
    pub total_costs: usize,
    pub total_legs: usize,
    pub duplicate_ids: Vec<DuplicateId>,
    pub missing_ids: Vec<MissingId>,
    pub orphaned_costs: Vec<OrphanedCost>,
    /// Destination count per id scheme; more than one key means mixed.
    pub scheme_counts: BTreeMap<IdScheme, usize>,
    pub region_mismatches: Vec<RegionMismatch>,
    /// Ids of costs with `destination_id = null`.
    pub unassigned_costs: Vec<String>,
    pub dangling_leg_refs: Vec<DanglingLegRef>,
}

impl ValidationReport {
    /// Duplicate and missing ids.
    pub fn error_count(&self) -> usize {
        self.duplicate_ids.len() + self.missing_ids.len()
    }

    /// Orphaned costs and dangling leg references.
    pub fn warning_count(&self) -> usize {
        self.orphaned_costs.len() + self.dangling_leg_refs.len()
    }

    /// Mixed schemes, region mismatches and unassigned costs.
    pub fn info_count(&self) -> usize {
        usize::from(self.has_mixed_schemes())
            + self.region_mismatches.len()
            + self.unassigned_costs.len()
    }

    pub fn has_mixed_schemes(&self) -> bool {
        self.scheme_counts.len() > 1
    }

    /// No errors. Warnings and info do not invalidate a dataset.
    pub fn is_valid(&self) -> bool {
        self.error_count() == 0
    }

    /// Highest severity present, if anything was found.
    pub fn max_severity(&self) -> Option<Severity> {
        if self.error_count() > 0 {
            Some(Severity::Error)
        } else if self.warning_count() > 0 {
            Some(Severity::Warning)
        } else if self.info_count() > 0 {
            Some(Severity::Info)
        } else {
            None
        }
    }

    /// Returns whether `cost_id` was reported as orphaned.
    pub fn is_orphaned(&self, cost_id: &str) -> bool {
        self.orphaned_costs
            .iter()
            .any(|orphan| orphan.cost_id == cost_id)
    }
}

/// Validates one snapshot. Checks run in a fixed order; see module docs.
pub fn validate(dataset: &Dataset) -> ValidationReport {
    let (duplicate_ids, missing_ids) = check_ids(dataset);
    let orphaned_costs = check_orphaned_costs(dataset);
    let scheme_counts = count_schemes(dataset);
    let region_mismatches = check_regions(dataset);
    let unassigned_costs = dataset
        .costs
        .iter()
        .filter(|cost| cost.is_unassigned())
        .map(|cost| cost.id.clone())
        .collect();
    let dangling_leg_refs = check_leg_refs(dataset);

    let report = ValidationReport {
        total_destinations: dataset.locations.len(),
        total_costs: dataset.costs.len(),
        total_legs: dataset.legs.len(),
        duplicate_ids,
        missing_ids,
        orphaned_costs,
        scheme_counts,
        region_mismatches,
        unassigned_costs,
        dangling_leg_refs,
    };

    debug!(
        "event=validate module=integrity status={} destinations={} costs={} errors={} warnings={} info={}",
        if report.is_valid() { "ok" } else { "error" },
        report.total_destinations,
        report.total_costs,
        report.error_count(),
        report.warning_count(),
        report.info_count()
    );
    report
}

fn check_ids(dataset: &Dataset) -> (Vec<DuplicateId>, Vec<MissingId>) {
    let mut positions_by_id: HashMap<&DestinationId, Vec<usize>> = HashMap::new();
    let mut first_seen: Vec<&DestinationId> = Vec::new();
    let mut missing = Vec::new();

    for (position, destination) in dataset.locations.iter().enumerate() {
        match destination.id.as_ref().filter(|id| !id.is_blank()) {
            Some(id) => {
                let positions = positions_by_id.entry(id).or_default();
                if positions.is_empty() {
                    first_seen.push(id);
                }
                positions.push(position);
            }
            None => missing.push(MissingId { position }),
        }
    }

    let duplicates = first_seen
        .into_iter()
        .filter_map(|id| {
            let positions = positions_by_id.remove(id)?;
            (positions.len() > 1).then(|| DuplicateId {
                id: id.clone(),
                positions,
            })
        })
        .collect();
    (duplicates, missing)
}

fn check_orphaned_costs(dataset: &Dataset) -> Vec<OrphanedCost> {
    let known = dataset.destination_ids();
    dataset
        .costs
        .iter()
        .filter_map(|cost| {
            let destination_id = cost.destination_id.as_ref()?;
            (!known.contains(destination_id)).then(|| OrphanedCost {
                cost_id: cost.id.clone(),
                destination_id: destination_id.clone(),
            })
        })
        .collect()
}

fn count_schemes(dataset: &Dataset) -> BTreeMap<IdScheme, usize> {
    let mut counts = BTreeMap::new();
    for id in dataset.locations.iter().filter_map(|d| d.id.as_ref()) {
        *counts.entry(id.scheme()).or_insert(0) += 1;
    }
    counts
}

fn check_regions(dataset: &Dataset) -> Vec<RegionMismatch> {
    dataset
        .locations
        .iter()
        .enumerate()
        .filter_map(|(position, destination)| {
            let country = destination.country_name()?;
            let expected = geo::lookup(country)?;
            let region_drift = diverges(destination.region.as_deref(), expected.region);
            let continent_drift = diverges(destination.continent.as_deref(), expected.continent);
            (region_drift || continent_drift).then(|| RegionMismatch {
                position,
                destination_id: destination.id.clone(),
                country: country.to_string(),
                stored_region: destination.region.clone(),
                expected_region: expected.region,
                stored_continent: destination.continent.clone(),
                expected_continent: expected.continent,
            })
        })
        .collect()
}

/// Only a stored, non-blank value can diverge; absent values are not drift.
pub(crate) fn diverges(stored: Option<&str>, expected: &str) -> bool {
    match stored.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => !value.eq_ignore_ascii_case(expected),
        None => false,
    }
}

fn check_leg_refs(dataset: &Dataset) -> Vec<DanglingLegRef> {
    let known: HashSet<&DestinationId> = dataset.destination_ids();
    let mut dangling = Vec::new();
    for leg in &dataset.legs {
        for id in &leg.destination_ids {
            if !known.contains(id) {
                dangling.push(DanglingLegRef {
                    leg_id: leg.id.clone(),
                    sub_leg_id: None,
                    destination_id: id.clone(),
                });
            }
        }
        for sub_leg in &leg.sub_legs {
            for id in &sub_leg.destination_ids {
                if !known.contains(id) {
                    dangling.push(DanglingLegRef {
                        leg_id: leg.id.clone(),
                        sub_leg_id: Some(sub_leg.id.clone()),
                        destination_id: id.clone(),
                    });
                }
            }
        }
    }
    dangling
}

#[cfg(test)]
mod tests {
    use super::{diverges, validate, Severity};
    use crate::identity::{DestinationId, IdScheme};
    use crate::model::cost::{CostCategory, CostItem};
    use crate::model::dataset::Dataset;
    use crate::model::destination::Destination;

    #[test]
    fn clean_dataset_has_no_findings() {
        let mut tokyo = Destination::with_id("1", "Tokyo").in_country("Japan");
        tokyo.region = Some("East Asia".to_string());
        tokyo.continent = Some("Asia".to_string());
        let dataset = Dataset::new(
            vec![tokyo],
            vec![CostItem::new("c1", Some("1".into()), CostCategory::Food, 20.0)],
        );

        let report = validate(&dataset);
        assert!(report.is_valid());
        assert_eq!(report.max_severity(), None);
    }

    #[test]
    fn duplicate_ids_compare_by_canonical_form() {
        let dataset = Dataset::new(
            vec![
                Destination::with_id("7", "A"),
                Destination::with_id("b", "B"),
                Destination::with_id("007", "C"),
            ],
            Vec::new(),
        );

        let report = validate(&dataset);
        assert_eq!(report.duplicate_ids.len(), 1);
        assert_eq!(report.duplicate_ids[0].id, DestinationId::new("7"));
        assert_eq!(report.duplicate_ids[0].positions, vec![0, 2]);
        assert_eq!(report.max_severity(), Some(Severity::Error));
    }

    #[test]
    fn mixed_schemes_are_informational() {
        let dataset = Dataset::new(
            vec![
                Destination::with_id("1", "A"),
                Destination::with_id("3f2504e0-4f89-41d3-9a0c-0305e82c3301", "B"),
            ],
            Vec::new(),
        );

        let report = validate(&dataset);
        assert!(report.is_valid());
        assert!(report.has_mixed_schemes());
        assert_eq!(report.scheme_counts.get(&IdScheme::Uuid), Some(&1));
        assert_eq!(report.max_severity(), Some(Severity::Info));
    }

    #[test]
    fn diverges_ignores_absent_and_case() {
        assert!(!diverges(None, "East Asia"));
        assert!(!diverges(Some("  "), "East Asia"));
        assert!(!diverges(Some("east asia"), "East Asia"));
        assert!(diverges(Some("Asia"), "East Asia"));
    }
}
