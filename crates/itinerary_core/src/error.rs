//! Error taxonomy for itinerary operations.
//!
//! # Invariants
//! - Single-item edits (delete, reassign) fail with `NotFound` or
//!   `InvalidTarget` and leave the dataset untouched.
//! - Batch operations (validate, migrate, aggregate) never fail per item;
//!   item-level problems travel inside their reports.

use crate::identity::{DestinationId, IdScheme};

/// Why a reassignment target was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidTargetReason {
    /// Target id does not exist in the dataset.
    Missing,
    /// Target id equals the destination being removed.
    SameAsSource,
}

impl InvalidTargetReason {
    fn describe(self) -> &'static str {
        match self {
            Self::Missing => "target does not exist",
            Self::SameAsSource => "target is the destination being removed",
        }
    }
}

/// Errors from cascade deletion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeletionError {
    #[error("destination not found: {0}")]
    NotFound(DestinationId),
    #[error("invalid reassignment target `{target}`: {}", .reason.describe())]
    InvalidTarget {
        target: DestinationId,
        reason: InvalidTargetReason,
    },
}

/// Errors from report-driven remediation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RemediationError {
    #[error("reassignment target not found: {0}")]
    TargetNotFound(DestinationId),
}

/// Call-level migration errors. Per-destination failures are reported, not raised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MigrationError {
    #[error("cannot migrate to `{0}`: only uuid and place_id are allocatable targets")]
    UnsupportedTarget(IdScheme),
}

/// Errors raised by a place-resolution collaborator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("place lookup unavailable: {0}")]
    Unavailable(String),
    #[error("place lookup rejected query: {0}")]
    Rejected(String),
}

/// Configuration errors name the offending key.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config value for `{key}`: {message}")]
    Invalid { key: &'static str, message: String },
}

/// Logging bootstrap errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoggingError {
    #[error("unsupported log level `{0}`; expected trace|debug|info|warn|error")]
    UnsupportedLevel(String),
    #[error("log_dir must be a non-empty absolute path, got `{0}`")]
    InvalidDirectory(String),
    #[error("failed to create log directory `{path}`: {message}")]
    CreateDirectory { path: String, message: String },
    #[error("failed to start logger: {0}")]
    Backend(String),
    #[error("logging already initialized with {field} `{active}`; refusing to switch to `{requested}`")]
    Conflict {
        field: &'static str,
        active: String,
        requested: String,
    },
}

#[cfg(test)]
mod tests {
    use super::{DeletionError, InvalidTargetReason};
    use crate::identity::DestinationId;

    #[test]
    fn deletion_errors_render_ids() {
        let not_found = DeletionError::NotFound(DestinationId::new("42"));
        assert_eq!(not_found.to_string(), "destination not found: 42");

        let invalid = DeletionError::InvalidTarget {
            target: DestinationId::new("7"),
            reason: InvalidTargetReason::SameAsSource,
        };
        assert!(invalid.to_string().contains("being removed"));
    }
}
