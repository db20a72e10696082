//! Place-resolution port.
//!
//! The only asynchronous boundary of the core. Implementations live with the
//! caller (geocoding service client, fixtures, caches).

use crate::error::ResolveError;
use crate::model::destination::Coordinates;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Result of one successful place lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedPlace {
    pub place_id: String,
    pub name: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
    #[serde(default)]
    pub timezone: Option<String>,
}

/// Resolves a place name or external id.
///
/// `Ok(None)` means "no match"; `Err` means the lookup itself failed. The
/// migration engine records both as per-item failures and keeps going.
#[async_trait::async_trait]
pub trait PlaceResolver: Send + Sync {
    async fn resolve(&self, name_or_id: &str) -> Result<Option<ResolvedPlace>, ResolveError>;
}

#[async_trait::async_trait]
impl<R: PlaceResolver + ?Sized> PlaceResolver for Arc<R> {
    async fn resolve(&self, name_or_id: &str) -> Result<Option<ResolvedPlace>, ResolveError> {
        (**self).resolve(name_or_id).await
    }
}

#[async_trait::async_trait]
impl<R: PlaceResolver + ?Sized> PlaceResolver for &R {
    async fn resolve(&self, name_or_id: &str) -> Result<Option<ResolvedPlace>, ResolveError> {
        (**self).resolve(name_or_id).await
    }
}
