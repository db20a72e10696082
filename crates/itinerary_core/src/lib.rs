//! Core domain logic for travel itineraries.
//! This crate is the single source of truth for identity and
//! referential-integrity invariants across destinations, costs and legs.

pub mod collab;
pub mod config;
pub mod error;
pub mod geo;
pub mod identity;
pub mod logging;
pub mod model;
pub mod service;

pub use collab::clock::{Clock, SystemClock};
pub use collab::date_recalc::{DateRecalculator, SequentialDates};
pub use collab::place_cache::PlaceCache;
pub use collab::place_resolver::{PlaceResolver, ResolvedPlace};
pub use config::EngineConfig;
pub use error::{
    ConfigError, DeletionError, InvalidTargetReason, LoggingError, MigrationError,
    RemediationError, ResolveError,
};
pub use identity::{classify, normalize, DestinationId, IdScheme};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::cost::{CostCategory, CostItem};
pub use model::dataset::Dataset;
pub use model::destination::{Coordinates, Destination, Provenance};
pub use model::leg::{Leg, SubLeg};
pub use service::cost_service::{CostAggregator, CountryStay, RegionStay, TripStats};
pub use service::deletion_service::{
    delete_destination, DeletionImpact, DeletionOptions, DeletionOutcome, DeletionService,
    DeletionStrategy,
};
pub use service::integrity_service::{validate, Severity, ValidationReport};
pub use service::migration_service::{
    MigrationEngine, MigrationOutcome, MigrationReport, ResolutionFailure,
};
pub use service::remediation_service::OrphanAction;
pub use service::visit_service::{segment, VisitPeriod, VisitSegmenter};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
