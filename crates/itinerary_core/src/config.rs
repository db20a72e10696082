//! Engine configuration.
//!
//! # Responsibility
//! - Decode tunables from JSON with a default for every key.
//! - Reject out-of-range values before any component is built.
//!
//! # Invariants
//! - `EngineConfig::default()` always validates.
//! - Validation errors name the dotted key that failed.

use crate::error::ConfigError;
use crate::logging::{default_log_level, normalize_level};
use serde::{Deserialize, Serialize};

/// Largest day gap that still counts as one continuous visit.
pub const DEFAULT_MAX_GAP_DAYS: i64 = 1;
/// Sequential place resolution unless the caller opts into batching.
pub const DEFAULT_MIGRATION_CONCURRENCY: usize = 1;
pub const DEFAULT_CACHE_TTL_SECS: u64 = 60 * 60;
pub const DEFAULT_CACHE_MAX_ENTRIES: usize = 512;

/// Top-level configuration for every component in this crate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub segmentation: SegmentationConfig,
    pub migration: MigrationConfig,
    pub cache: CacheConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentationConfig {
    /// A gap strictly greater than this starts a new visit period.
    pub max_gap_days: i64,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            max_gap_days: DEFAULT_MAX_GAP_DAYS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MigrationConfig {
    /// Place lookups in flight at once during phase 1.
    pub concurrency: usize,
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_MIGRATION_CONCURRENCY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub ttl_secs: u64,
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: DEFAULT_CACHE_TTL_SECS,
            max_entries: DEFAULT_CACHE_MAX_ENTRIES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of `trace|debug|info|warn|error`.
    pub level: String,
    /// Absolute directory for rolling log files. `None` disables file logging.
    pub dir: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level().to_string(),
            dir: None,
        }
    }
}

impl EngineConfig {
    /// Parses and validates a JSON config document.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.segmentation.max_gap_days < 0 {
            return Err(invalid(
                "segmentation.max_gap_days",
                format!("must be >= 0, got {}", self.segmentation.max_gap_days),
            ));
        }
        if self.migration.concurrency == 0 {
            return Err(invalid("migration.concurrency", "must be >= 1".to_string()));
        }
        if self.cache.ttl_secs == 0 {
            return Err(invalid("cache.ttl_secs", "must be > 0".to_string()));
        }
        if self.cache.max_entries == 0 {
            return Err(invalid("cache.max_entries", "must be > 0".to_string()));
        }
        normalize_level(&self.logging.level)
            .map_err(|err| invalid("logging.level", err.to_string()))?;
        Ok(())
    }
}

fn invalid(key: &'static str, message: String) -> ConfigError {
    ConfigError::Invalid { key, message }
}

#[cfg(test)]
mod tests {
    use super::{EngineConfig, DEFAULT_MAX_GAP_DAYS};
    use crate::error::ConfigError;

    #[test]
    fn empty_document_uses_defaults() {
        let config = EngineConfig::from_json_str("{}").expect("defaults should validate");
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.segmentation.max_gap_days, DEFAULT_MAX_GAP_DAYS);
    }

    #[test]
    fn partial_document_overrides_only_given_keys() {
        let config = EngineConfig::from_json_str(
            r#"{ "segmentation": { "max_gap_days": 3 }, "logging": { "level": "WARNING" } }"#,
        )
        .expect("partial config should validate");
        assert_eq!(config.segmentation.max_gap_days, 3);
        assert_eq!(config.migration.concurrency, 1);
        assert_eq!(config.logging.level, "WARNING");
    }

    #[test]
    fn invalid_values_name_their_key() {
        let err = EngineConfig::from_json_str(r#"{ "migration": { "concurrency": 0 } }"#)
            .expect_err("zero concurrency must be rejected");
        match err {
            ConfigError::Invalid { key, .. } => assert_eq!(key, "migration.concurrency"),
            other => panic!("unexpected error: {other}"),
        }

        let err = EngineConfig::from_json_str(r#"{ "logging": { "level": "loud" } }"#)
            .expect_err("unknown level must be rejected");
        assert!(err.to_string().contains("logging.level"));
    }
}
