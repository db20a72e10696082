//! Cost item domain model.
//!
//! # Invariants
//! - A non-null `destination_id` must reference an existing destination;
//!   otherwise the item is orphaned.
//! - `destination_id = null` is the explicit "unassigned" state and is
//!   always serialized (never omitted) so it stays distinguishable.

use crate::identity::{deserialize_optional_id, deserialize_string_id, DestinationId};
use crate::model::dates::optional_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// Expense bucket used for per-category totals.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum CostCategory {
    #[serde(alias = "accommodations", alias = "lodging")]
    Accommodation,
    #[serde(alias = "flights")]
    Flight,
    #[serde(alias = "activities")]
    Activity,
    Food,
    Transport,
    /// Also absorbs unrecognized category strings.
    #[default]
    #[serde(other)]
    Other,
}

impl CostCategory {
    pub const ALL: [CostCategory; 6] = [
        Self::Accommodation,
        Self::Flight,
        Self::Activity,
        Self::Food,
        Self::Transport,
        Self::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Accommodation => "accommodation",
            Self::Flight => "flight",
            Self::Activity => "activity",
            Self::Food => "food",
            Self::Transport => "transport",
            Self::Other => "other",
        }
    }
}

impl Display for CostCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One monetary expense, optionally linked to a destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostItem {
    #[serde(default, deserialize_with = "deserialize_string_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub destination_id: Option<DestinationId>,
    #[serde(default)]
    pub category: CostCategory,
    /// Amount in `currency`.
    #[serde(default)]
    pub amount: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Amount converted to USD upstream; all aggregation uses this field.
    #[serde(default)]
    pub amount_usd: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, with = "optional_date", skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

fn default_currency() -> String {
    "USD".to_string()
}

impl CostItem {
    /// Creates a USD cost linked to one destination.
    pub fn new(
        id: impl Into<String>,
        destination_id: Option<DestinationId>,
        category: CostCategory,
        amount_usd: f64,
    ) -> Self {
        Self {
            id: id.into(),
            destination_id,
            category,
            amount: amount_usd,
            currency: default_currency(),
            amount_usd,
            description: None,
            date: None,
            extra: BTreeMap::new(),
        }
    }

    /// Returns whether this item points at `id`.
    pub fn references(&self, id: &DestinationId) -> bool {
        self.destination_id.as_ref() == Some(id)
    }

    pub fn is_unassigned(&self) -> bool {
        self.destination_id.is_none()
    }
}
