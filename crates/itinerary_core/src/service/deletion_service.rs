//! Cascade deletion of destinations.
//!
//! # Responsibility
//! - Remove a destination and resolve its dependent costs by strategy.
//! - Drop the destination from every leg and sub-leg.
//! - Optionally hand the remaining itinerary to date recalculation.
//!
//! # Invariants
//! - All-or-nothing: any precondition failure returns an error and the
//!   caller's dataset is never touched.
//! - Every destination carrying the id is removed, so no cost can keep
//!   pointing at a half-deleted identity.
//! - After success no cost and no leg references the removed id.

use crate::collab::date_recalc::{DateRecalculator, SequentialDates};
use crate::error::{DeletionError, InvalidTargetReason};
use crate::identity::DestinationId;
use crate::model::cost::CostCategory;
use crate::model::dataset::Dataset;
use crate::service::cost_service::CostAggregator;
use crate::service::leg_service;
use chrono::NaiveDate;
use log::info;
use serde::Serialize;
use std::collections::BTreeMap;

/// What happens to costs of the removed destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum DeletionStrategy {
    /// Remove the costs too.
    Delete,
    /// Keep the costs with `destination_id = null`.
    Unassign,
    /// Move the costs to another existing destination.
    Reassign { target: DestinationId },
}

impl DeletionStrategy {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Delete => "delete",
            Self::Unassign => "unassign",
            Self::Reassign { .. } => "reassign",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeletionOptions {
    pub recalculate_dates: bool,
    /// Defaults to the earliest arrival in the original itinerary.
    pub trip_start_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeletionOutcome {
    pub dataset: Dataset,
    pub removed_destinations: usize,
    pub deleted_costs: Vec<String>,
    pub unassigned_costs: Vec<String>,
    pub reassigned_costs: Vec<String>,
    pub leg_refs_removed: usize,
    pub dates_recalculated: bool,
}

/// What a deletion would touch, for confirmation prompts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeletionImpact {
    pub destination_id: DestinationId,
    pub destination_count: usize,
    pub cost_count: usize,
    pub cost_total_usd: f64,
    pub costs_by_category: BTreeMap<CostCategory, f64>,
    pub leg_refs: usize,
}

/// Deletion coordinator parameterized by its date recalculator.
#[derive(Debug, Clone, Default)]
pub struct DeletionService<D: DateRecalculator = SequentialDates> {
    recalculator: D,
}

impl DeletionService<SequentialDates> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<D: DateRecalculator> DeletionService<D> {
    pub fn with_recalculator(recalculator: D) -> Self {
        Self { recalculator }
    }

    /// Removes `id` and cascades to costs and legs.
    ///
    /// # Errors
    /// - `NotFound` when no destination carries `id`.
    /// - `InvalidTarget` when a reassignment target is missing or equals `id`.
    pub fn delete_destination(
        &self,
        dataset: &Dataset,
        id: &DestinationId,
        strategy: &DeletionStrategy,
        options: DeletionOptions,
    ) -> Result<DeletionOutcome, DeletionError> {
        check_preconditions(dataset, id, strategy)?;

        let (locations, removed): (Vec<_>, Vec<_>) = dataset
            .locations
            .iter()
            .cloned()
            .partition(|destination| !destination.has_id(id));

        let mut deleted_costs = Vec::new();
        let mut unassigned_costs = Vec::new();
        let mut reassigned_costs = Vec::new();
        let mut costs = Vec::with_capacity(dataset.costs.len());
        for cost in &dataset.costs {
            if !cost.references(id) {
                costs.push(cost.clone());
                continue;
            }
            let mut cost = cost.clone();
            match strategy {
                DeletionStrategy::Delete => {
                    deleted_costs.push(cost.id);
                    continue;
                }
                DeletionStrategy::Unassign => {
                    cost.destination_id = None;
                    unassigned_costs.push(cost.id.clone());
                }
                DeletionStrategy::Reassign { target } => {
                    cost.destination_id = Some(target.clone());
                    reassigned_costs.push(cost.id.clone());
                }
            }
            costs.push(cost);
        }

        let (legs, leg_refs_removed) = leg_service::remove_destination(&dataset.legs, id);

        let trip_start = options.trip_start_date.or_else(|| {
            dataset
                .locations
                .iter()
                .filter_map(|destination| destination.arrival_date)
                .min()
        });
        let (locations, dates_recalculated) = match (options.recalculate_dates, trip_start) {
            (true, Some(start)) => (self.recalculator.recalculate(locations, start), true),
            _ => (locations, false),
        };

        info!(
            "event=delete_destination module=deletion status=ok id={} strategy={} removed={} costs_deleted={} costs_unassigned={} costs_reassigned={} leg_refs_removed={} dates_recalculated={}",
            id.as_str(),
            strategy.as_str(),
            removed.len(),
            deleted_costs.len(),
            unassigned_costs.len(),
            reassigned_costs.len(),
            leg_refs_removed,
            dates_recalculated
        );
        Ok(DeletionOutcome {
            dataset: Dataset {
                locations,
                costs,
                legs,
            },
            removed_destinations: removed.len(),
            deleted_costs,
            unassigned_costs,
            reassigned_costs,
            leg_refs_removed,
            dates_recalculated,
        })
    }

    /// Reports what deleting `id` would affect without changing anything.
    pub fn preview_deletion(
        &self,
        dataset: &Dataset,
        id: &DestinationId,
    ) -> Result<DeletionImpact, DeletionError> {
        if !dataset.contains_destination(id) {
            return Err(DeletionError::NotFound(id.clone()));
        }
        let costs = CostAggregator::default().costs_for_destination(dataset, id);
        let (cost_count, cost_total_usd, costs_by_category) = match costs {
            Some(costs) => (costs.cost_ids.len(), costs.total_costs, costs.costs_by_category),
            None => (0, 0.0, BTreeMap::new()),
        };
        Ok(DeletionImpact {
            destination_id: id.clone(),
            destination_count: dataset
                .locations
                .iter()
                .filter(|destination| destination.has_id(id))
                .count(),
            cost_count,
            cost_total_usd,
            costs_by_category,
            leg_refs: dataset
                .legs
                .iter()
                .flat_map(|leg| leg.references())
                .filter(|reference| *reference == id)
                .count(),
        })
    }
}

/// Deletes with the default sequential date recalculator.
pub fn delete_destination(
    dataset: &Dataset,
    id: &DestinationId,
    strategy: &DeletionStrategy,
    options: DeletionOptions,
) -> Result<DeletionOutcome, DeletionError> {
    DeletionService::new().delete_destination(dataset, id, strategy, options)
}

fn check_preconditions(
    dataset: &Dataset,
    id: &DestinationId,
    strategy: &DeletionStrategy,
) -> Result<(), DeletionError> {
    if !dataset.contains_destination(id) {
        return Err(DeletionError::NotFound(id.clone()));
    }
    if let DeletionStrategy::Reassign { target } = strategy {
        let reason = if target == id {
            Some(InvalidTargetReason::SameAsSource)
        } else if !dataset.contains_destination(target) {
            Some(InvalidTargetReason::Missing)
        } else {
            None
        };
        if let Some(reason) = reason {
            return Err(DeletionError::InvalidTarget {
                target: target.clone(),
                reason,
            });
        }
    }
    Ok(())
}
