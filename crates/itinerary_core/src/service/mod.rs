//! Itinerary use-case services.
//!
//! # Responsibility
//! - Validate, aggregate, migrate and edit dataset snapshots.
//! - Keep every operation a pure snapshot-in, snapshot-out transformation.

pub mod cost_service;
pub mod deletion_service;
pub mod integrity_service;
pub mod leg_service;
pub mod migration_service;
pub mod remediation_service;
pub mod visit_service;
