//! Fixes applied after reading a validation report.
//!
//! Every function takes a snapshot and returns a new one together with the
//! number of records it changed. Findings are recomputed from the snapshot
//! itself, so a stale report can never cause a wrong edit.

use crate::error::RemediationError;
use crate::geo;
use crate::identity::DestinationId;
use crate::model::dataset::Dataset;
use crate::service::integrity_service::diverges;
use crate::service::leg_service;
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// What to do with costs pointing at a missing destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "target", rename_all = "snake_case")]
pub enum OrphanAction {
    Unassign,
    Delete,
    Reassign(DestinationId),
}

/// A remediated snapshot and how many records changed.
#[derive(Debug, Clone, PartialEq)]
pub struct Remediated {
    pub dataset: Dataset,
    pub changed: usize,
}

/// Applies `action` to every orphaned cost.
///
/// Unassigned costs (`destination_id = null`) are not orphans and stay as
/// they are.
pub fn resolve_orphans(
    dataset: &Dataset,
    action: &OrphanAction,
) -> Result<Remediated, RemediationError> {
    if let OrphanAction::Reassign(target) = action {
        if !dataset.contains_destination(target) {
            return Err(RemediationError::TargetNotFound(target.clone()));
        }
    }

    let known: HashSet<&DestinationId> = dataset.destination_ids();
    let mut next = dataset.clone();
    let mut changed = 0;
    next.costs.retain_mut(|cost| {
        let orphaned = cost
            .destination_id
            .as_ref()
            .map_or(false, |id| !known.contains(id));
        if !orphaned {
            return true;
        }
        changed += 1;
        match action {
            OrphanAction::Delete => return false,
            OrphanAction::Unassign => cost.destination_id = None,
            OrphanAction::Reassign(target) => cost.destination_id = Some(target.clone()),
        }
        true
    });

    log_fix("resolve_orphans", changed);
    Ok(Remediated {
        dataset: next,
        changed,
    })
}

/// Overwrites region and continent from the static mapping wherever they
/// are absent or diverge. Unknown countries are left alone.
pub fn repair_regions(dataset: &Dataset) -> Remediated {
    let mut next = dataset.clone();
    let mut changed = 0;
    for destination in &mut next.locations {
        let Some(expected) = destination.country_name().and_then(geo::lookup) else {
            continue;
        };
        let stale = |stored: &Option<String>, expected: &str| {
            stored.is_none() || diverges(stored.as_deref(), expected)
        };
        if stale(&destination.region, expected.region)
            || stale(&destination.continent, expected.continent)
        {
            destination.region = Some(expected.region.to_string());
            destination.continent = Some(expected.continent.to_string());
            changed += 1;
        }
    }
    log_fix("repair_regions", changed);
    Remediated {
        dataset: next,
        changed,
    }
}

/// Gives every destination without a usable id a fresh uuid.
pub fn assign_missing_ids(dataset: &Dataset) -> Remediated {
    let mut next = dataset.clone();
    let mut changed = 0;
    for destination in &mut next.locations {
        if destination.id.as_ref().map_or(true, DestinationId::is_blank) {
            destination.id = Some(DestinationId::generate());
            changed += 1;
        }
    }
    log_fix("assign_missing_ids", changed);
    Remediated {
        dataset: next,
        changed,
    }
}

/// Drops leg and sub-leg references to destinations that do not exist.
pub fn prune_leg_references(dataset: &Dataset) -> Remediated {
    let known: HashSet<&DestinationId> = dataset.destination_ids();
    let mut legs = dataset.legs.clone();
    let changed = leg_service::prune_dangling(&mut legs, &known);
    log_fix("prune_leg_references", changed);
    Remediated {
        dataset: Dataset {
            locations: dataset.locations.clone(),
            costs: dataset.costs.clone(),
            legs,
        },
        changed,
    }
}

fn log_fix(event: &str, changed: usize) {
    info!(
        "event={} module=remediation status=ok changed={}",
        event, changed
    );
}
