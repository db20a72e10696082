//! Two-phase identifier migration.
//!
//! # Responsibility
//! - Move destination ids to a target scheme, resolving place ids through
//!   an injected resolver.
//! - Rewrite every cost and leg reference with the resulting id map.
//!
//! # Invariants
//! - Phase 1 only reads the input and produces decisions. The full
//!   old-to-new map exists before phase 2 writes anything.
//! - Destination, cost and leg counts never change.
//! - Every replaced id is kept in provenance; nothing is discarded.
//! - Two destinations never end up sharing a migrated id. The later one
//!   fails with `TargetInUse` and keeps its id.

use crate::collab::clock::{Clock, SystemClock};
use crate::collab::place_resolver::{PlaceResolver, ResolvedPlace};
use crate::config::{MigrationConfig, DEFAULT_MIGRATION_CONCURRENCY};
use crate::error::MigrationError;
use crate::identity::{classify, DestinationId, IdScheme};
use crate::model::dataset::Dataset;
use crate::model::destination::Destination;
use crate::service::leg_service;
use chrono::{DateTime, Utc};
use futures_util::stream::{self, StreamExt};
use log::{info, warn};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Why one destination could not be migrated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResolutionFailure {
    #[error("resolver found no match")]
    NoMatch,
    #[error("destination has no name or place id to resolve")]
    MissingQuery,
    #[error("resolver returned `{place_id}`, which is not a place id")]
    InvalidPlaceId { place_id: String },
    #[error("target id `{id}` is already used by another destination")]
    TargetInUse { id: DestinationId },
    #[error("lookup failed: {message}")]
    Lookup { message: String },
}

/// One successful id replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MigratedId {
    pub position: usize,
    pub old_id: DestinationId,
    pub new_id: DestinationId,
}

/// One destination that kept its id because migration failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedMigration {
    pub position: usize,
    pub id: DestinationId,
    pub reason: ResolutionFailure,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MigrationReport {
    pub target: IdScheme,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    /// Destinations already in the target scheme.
    pub kept: usize,
    pub migrated: Vec<MigratedId>,
    pub failed: Vec<FailedMigration>,
    /// Positions of destinations without an id; left untouched.
    pub skipped: Vec<usize>,
    /// Old ids carried by several migrated destinations. References follow
    /// the first one.
    pub ambiguous_ids: Vec<DestinationId>,
    pub costs_rewritten: usize,
    pub leg_refs_rewritten: usize,
    /// Costs pointing at ids that no destination carried.
    pub unmapped_cost_refs: Vec<String>,
}

impl MigrationReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MigrationOutcome {
    pub dataset: Dataset,
    pub report: MigrationReport,
}

enum Decision {
    Skipped,
    Kept,
    Migrated {
        new_id: DestinationId,
        place: Option<ResolvedPlace>,
    },
    Failed(ResolutionFailure),
}

/// Migration driver. Owns its resolver and clock.
pub struct MigrationEngine<R: PlaceResolver, C: Clock = SystemClock> {
    resolver: R,
    clock: C,
    concurrency: usize,
}

impl<R: PlaceResolver> MigrationEngine<R, SystemClock> {
    pub fn new(resolver: R) -> Self {
        Self::with_clock(resolver, SystemClock)
    }
}

impl<R: PlaceResolver, C: Clock> MigrationEngine<R, C> {
    pub fn with_clock(resolver: R, clock: C) -> Self {
        Self {
            resolver,
            clock,
            concurrency: DEFAULT_MIGRATION_CONCURRENCY,
        }
    }

    /// Lookups in flight during phase 1. Results keep input order.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn with_config(self, config: &MigrationConfig) -> Self {
        self.with_concurrency(config.concurrency)
    }

    /// Migrates every destination to `target`.
    ///
    /// Only `uuid` and `place_id` are allocatable targets. Per-destination
    /// failures are reported; the call itself only fails on the target.
    pub async fn migrate(
        &self,
        dataset: &Dataset,
        target: IdScheme,
    ) -> Result<MigrationOutcome, MigrationError> {
        if !matches!(target, IdScheme::Uuid | IdScheme::PlaceId) {
            return Err(MigrationError::UnsupportedTarget(target));
        }
        let started_at = self.clock.now();
        info!(
            "event=migrate_start module=migration status=ok target={} destinations={} concurrency={}",
            target,
            dataset.locations.len(),
            self.concurrency
        );

        let decisions: Vec<Decision> = stream::iter(dataset.locations.iter())
            .map(|destination| self.decide(destination, target))
            .buffered(self.concurrency)
            .collect()
            .await;
        let decisions = claim_targets(&dataset.locations, decisions);

        let mut next = dataset.clone();
        let mut report = MigrationReport {
            target,
            started_at,
            finished_at: started_at,
            kept: 0,
            migrated: Vec::new(),
            failed: Vec::new(),
            skipped: Vec::new(),
            ambiguous_ids: Vec::new(),
            costs_rewritten: 0,
            leg_refs_rewritten: 0,
            unmapped_cost_refs: Vec::new(),
        };
        let mut id_map: HashMap<DestinationId, DestinationId> = HashMap::new();

        for (position, (destination, decision)) in
            next.locations.iter_mut().zip(decisions).enumerate()
        {
            let Some(old_id) = destination.id.clone() else {
                report.skipped.push(position);
                continue;
            };
            match decision {
                Decision::Skipped => report.skipped.push(position),
                Decision::Kept => report.kept += 1,
                Decision::Migrated { new_id, place } => {
                    apply_migration(destination, &old_id, &new_id, target, started_at, place);
                    if id_map.contains_key(&old_id) {
                        if !report.ambiguous_ids.contains(&old_id) {
                            report.ambiguous_ids.push(old_id.clone());
                        }
                    } else {
                        id_map.insert(old_id.clone(), new_id.clone());
                    }
                    report.migrated.push(MigratedId {
                        position,
                        old_id,
                        new_id,
                    });
                }
                Decision::Failed(reason) => {
                    destination.provenance.is_custom = true;
                    warn!(
                        "event=migrate_item module=migration status=warn position={} id={} reason={:?}",
                        position,
                        old_id.as_str(),
                        reason
                    );
                    report.failed.push(FailedMigration {
                        position,
                        id: old_id,
                        reason,
                    });
                }
            }
        }

        let known: HashSet<&DestinationId> = dataset.destination_ids();
        for cost in &mut next.costs {
            let Some(current) = cost.destination_id.as_ref() else {
                continue;
            };
            if let Some(new_id) = id_map.get(current) {
                cost.destination_id = Some(new_id.clone());
                report.costs_rewritten += 1;
            } else if !known.contains(current) {
                report.unmapped_cost_refs.push(cost.id.clone());
            }
        }
        report.leg_refs_rewritten = leg_service::rewrite_references(&mut next.legs, &id_map);
        report.finished_at = self.clock.now();

        info!(
            "event=migrate_finish module=migration status={} target={} kept={} migrated={} failed={} skipped={} costs_rewritten={} leg_refs_rewritten={}",
            if report.is_complete() { "ok" } else { "warn" },
            target,
            report.kept,
            report.migrated.len(),
            report.failed.len(),
            report.skipped.len(),
            report.costs_rewritten,
            report.leg_refs_rewritten
        );
        Ok(MigrationOutcome {
            dataset: next,
            report,
        })
    }

    async fn decide(&self, destination: &Destination, target: IdScheme) -> Decision {
        let Some(id) = destination.id.as_ref().filter(|id| !id.is_blank()) else {
            return Decision::Skipped;
        };
        if id.scheme() == target {
            return Decision::Kept;
        }
        match target {
            IdScheme::PlaceId => self.resolve_place_id(destination).await,
            _ => Decision::Migrated {
                new_id: DestinationId::generate(),
                place: None,
            },
        }
    }

    async fn resolve_place_id(&self, destination: &Destination) -> Decision {
        let known = destination
            .place_id
            .as_deref()
            .map(str::trim)
            .filter(|candidate| classify(candidate) == IdScheme::PlaceId);
        if let Some(place_id) = known {
            return Decision::Migrated {
                new_id: DestinationId::new(place_id),
                place: None,
            };
        }

        let query = destination.name.trim();
        if query.is_empty() {
            return Decision::Failed(ResolutionFailure::MissingQuery);
        }
        match self.resolver.resolve(query).await {
            Ok(Some(place)) if classify(&place.place_id) == IdScheme::PlaceId => {
                Decision::Migrated {
                    new_id: DestinationId::new(place.place_id.trim()),
                    place: Some(place),
                }
            }
            Ok(Some(place)) => Decision::Failed(ResolutionFailure::InvalidPlaceId {
                place_id: place.place_id,
            }),
            Ok(None) => Decision::Failed(ResolutionFailure::NoMatch),
            Err(err) => Decision::Failed(ResolutionFailure::Lookup {
                message: err.to_string(),
            }),
        }
    }
}

/// Demotes migrations whose new id is already taken, in itinerary order.
///
/// Old ids are never in the target scheme, so a demoted destination keeping
/// its old id cannot collide with an id claimed earlier.
fn claim_targets(locations: &[Destination], decisions: Vec<Decision>) -> Vec<Decision> {
    let mut taken: HashSet<DestinationId> = locations
        .iter()
        .zip(&decisions)
        .filter(|(_, decision)| !matches!(decision, Decision::Migrated { .. }))
        .filter_map(|(destination, _)| destination.id.clone())
        .collect();

    decisions
        .into_iter()
        .map(|decision| match decision {
            Decision::Migrated { new_id, .. } if taken.contains(&new_id) => {
                Decision::Failed(ResolutionFailure::TargetInUse { id: new_id })
            }
            Decision::Migrated { new_id, place } => {
                taken.insert(new_id.clone());
                Decision::Migrated { new_id, place }
            }
            other => other,
        })
        .collect()
}

fn apply_migration(
    destination: &mut Destination,
    old_id: &DestinationId,
    new_id: &DestinationId,
    target: IdScheme,
    migrated_at: DateTime<Utc>,
    place: Option<ResolvedPlace>,
) {
    destination.provenance.record_replaced(old_id);
    destination.provenance.migrated_at = Some(migrated_at);
    destination.provenance.migration_source = Some(format!("{}_to_{}", old_id.scheme(), target));
    destination.id = Some(new_id.clone());

    if target == IdScheme::PlaceId {
        destination.place_id = Some(new_id.as_str().to_string());
    }
    let Some(place) = place else {
        return;
    };
    if destination.coordinates.is_none() {
        destination.coordinates = place.coordinates;
    }
    if destination.city.is_none() {
        destination.city = place.city;
    }
    if destination.country_name().is_none() {
        destination.country = place.country;
    }
}

#[cfg(test)]
mod tests {
    use super::{claim_targets, Decision, ResolutionFailure};
    use crate::identity::DestinationId;
    use crate::model::destination::Destination;

    const PLACE: &str = "ChIJ51cu8IcbXWARiRtXIothAS4";

    #[test]
    fn second_claim_on_the_same_target_fails() {
        let locations = vec![
            Destination::with_id("1", "Tokyo"),
            Destination::with_id("2", "Tokyo Station"),
        ];
        let decisions = vec![
            Decision::Migrated {
                new_id: DestinationId::new(PLACE),
                place: None,
            },
            Decision::Migrated {
                new_id: DestinationId::new(PLACE),
                place: None,
            },
        ];

        let claimed = claim_targets(&locations, decisions);
        assert!(matches!(claimed[0], Decision::Migrated { .. }));
        assert!(matches!(
            &claimed[1],
            Decision::Failed(ResolutionFailure::TargetInUse { .. })
        ));
    }

    #[test]
    fn kept_ids_block_migration_onto_them() {
        let locations = vec![
            Destination::with_id(PLACE, "Tokyo"),
            Destination::with_id("2", "Tokyo again"),
        ];
        let decisions = vec![
            Decision::Kept,
            Decision::Migrated {
                new_id: DestinationId::new(PLACE),
                place: None,
            },
        ];

        let claimed = claim_targets(&locations, decisions);
        assert!(matches!(
            &claimed[1],
            Decision::Failed(ResolutionFailure::TargetInUse { .. })
        ));
    }
}
