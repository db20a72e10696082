//! Cost attribution and trip statistics.
//!
//! # Responsibility
//! - Attribute cost items to destinations, countries and categories.
//! - Roll country stays up into regions and whole-trip statistics.
//!
//! # Invariants
//! - Attribution is by identifier equality only; descriptions and names
//!   never participate.
//! - A cost with a valid `destination_id` lands in exactly one country and
//!   one category bucket. Null or orphaned references land nowhere.
//! - When an id is duplicated, its costs go to the first destination
//!   carrying it.

use crate::geo;
use crate::identity::DestinationId;
use crate::model::cost::CostCategory;
use crate::model::dataset::Dataset;
use crate::model::dates::format_date;
use crate::model::destination::Destination;
use crate::service::visit_service::{country_label, VisitPeriod, VisitSegmenter};
use chrono::{Days, NaiveDate};
use log::debug;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Region label used when neither the table nor the record knows one.
pub const UNKNOWN_REGION: &str = "Unknown";

/// Cost totals attributed to one destination id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DestinationCosts {
    pub destination_id: DestinationId,
    pub total_costs: f64,
    pub costs_by_category: BTreeMap<CostCategory, f64>,
    pub cost_ids: Vec<String>,
}

/// Everything the itinerary spends and does in one country.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryStay {
    pub country: String,
    pub region: Option<String>,
    pub continent: Option<String>,
    /// Member destinations in itinerary order, dated or not.
    pub destinations: Vec<Destination>,
    pub visits: Vec<VisitPeriod>,
    pub total_days: u32,
    pub total_costs: f64,
    pub costs_by_category: BTreeMap<CostCategory, f64>,
    pub cost_count: usize,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl CountryStay {
    pub fn cost_per_day(&self) -> f64 {
        per_day(self.total_costs, self.total_days)
    }

    pub fn visit_count(&self) -> usize {
        self.visits.len()
    }
}

/// Countries sharing one resolved region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionStay {
    pub region: String,
    pub continent: Option<String>,
    pub countries: Vec<String>,
    pub total_days: u32,
    pub total_costs: f64,
    pub costs_by_category: BTreeMap<CostCategory, f64>,
    pub visit_count: usize,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Country named with one measured value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryDays {
    pub country: String,
    pub days: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryCost {
    pub country: String,
    pub total_costs: f64,
}

/// Calendar-month presence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyBreakdown {
    /// `YYYY-MM`.
    pub month: String,
    pub days: u32,
    /// Countries present that month, in first-seen order.
    pub countries: Vec<String>,
}

/// Whole-trip statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripStats {
    pub total_countries: usize,
    pub total_destinations: usize,
    pub total_days: u32,
    pub total_costs: f64,
    pub average_cost_per_day: f64,
    pub costs_by_category: BTreeMap<CostCategory, f64>,
    pub longest_stay: Option<CountryDays>,
    pub shortest_stay: Option<CountryDays>,
    pub most_expensive: Option<CountryCost>,
    /// Cheapest country among those with any cost.
    pub least_expensive: Option<CountryCost>,
    pub transport_modes: BTreeMap<String, usize>,
    pub activity_types: BTreeMap<String, usize>,
    pub monthly: Vec<MonthlyBreakdown>,
}

/// Aggregation entry points. Owns the segmenter used for visits.
#[derive(Debug, Clone, Copy, Default)]
pub struct CostAggregator {
    segmenter: VisitSegmenter,
}

impl CostAggregator {
    pub fn new(segmenter: VisitSegmenter) -> Self {
        Self { segmenter }
    }

    /// Per-destination cost totals, in itinerary order.
    ///
    /// Destinations without costs are included with zero totals.
    pub fn costs_by_destination(&self, dataset: &Dataset) -> Vec<DestinationCosts> {
        let mut totals: Vec<DestinationCosts> = Vec::new();
        let mut slot_by_id: HashMap<&DestinationId, usize> = HashMap::new();
        for id in dataset.locations.iter().filter_map(|d| d.id.as_ref()) {
            if slot_by_id.contains_key(id) {
                continue;
            }
            slot_by_id.insert(id, totals.len());
            totals.push(DestinationCosts {
                destination_id: id.clone(),
                total_costs: 0.0,
                costs_by_category: BTreeMap::new(),
                cost_ids: Vec::new(),
            });
        }

        for cost in &dataset.costs {
            let Some(slot) = cost.destination_id.as_ref().and_then(|id| slot_by_id.get(id)) else {
                continue;
            };
            let entry = &mut totals[*slot];
            entry.total_costs += cost.amount_usd;
            *entry.costs_by_category.entry(cost.category).or_insert(0.0) += cost.amount_usd;
            entry.cost_ids.push(cost.id.clone());
        }
        totals
    }

    /// Totals for one destination id; `None` when the id is absent.
    pub fn costs_for_destination(
        &self,
        dataset: &Dataset,
        id: &DestinationId,
    ) -> Option<DestinationCosts> {
        self.costs_by_destination(dataset)
            .into_iter()
            .find(|entry| &entry.destination_id == id)
    }

    /// Country stays in order of each country's first appearance.
    pub fn aggregate_by_country(&self, dataset: &Dataset) -> Vec<CountryStay> {
        let mut stays: Vec<CountryStay> = Vec::new();
        let mut slot_by_country: HashMap<String, usize> = HashMap::new();
        let mut owner_by_id: HashMap<&DestinationId, usize> = HashMap::new();

        for destination in &dataset.locations {
            let country = country_label(destination);
            let slot = *slot_by_country
                .entry(country.to_lowercase())
                .or_insert_with(|| {
                    stays.push(empty_stay(country.clone(), destination));
                    stays.len() - 1
                });
            if let Some(id) = destination.id.as_ref() {
                owner_by_id.entry(id).or_insert(slot);
            }
            let stay = &mut stays[slot];
            stay.total_days = stay.total_days.saturating_add(destination.effective_days());
            stay.start_date = earliest(stay.start_date, destination.arrival_date);
            stay.end_date = latest(stay.end_date, destination.departure_date);
            stay.destinations.push(destination.clone());
        }

        for cost in &dataset.costs {
            let Some(slot) = cost.destination_id.as_ref().and_then(|id| owner_by_id.get(id)) else {
                continue;
            };
            let stay = &mut stays[*slot];
            stay.total_costs += cost.amount_usd;
            *stay.costs_by_category.entry(cost.category).or_insert(0.0) += cost.amount_usd;
            stay.cost_count += 1;
        }

        for stay in &mut stays {
            stay.visits = self.segmenter.segment(&stay.destinations);
        }

        debug!(
            "event=aggregate_by_country module=cost status=ok countries={} destinations={} costs={}",
            stays.len(),
            dataset.locations.len(),
            dataset.costs.len()
        );
        stays
    }

    /// Groups country stays by resolved region, in first-appearance order.
    pub fn aggregate_by_region(&self, stays: &[CountryStay]) -> Vec<RegionStay> {
        let mut regions: Vec<RegionStay> = Vec::new();
        let mut slot_by_region: HashMap<String, usize> = HashMap::new();

        for stay in stays {
            let region = stay
                .region
                .clone()
                .unwrap_or_else(|| UNKNOWN_REGION.to_string());
            let slot = *slot_by_region
                .entry(region.to_lowercase())
                .or_insert_with(|| {
                    regions.push(RegionStay {
                        region: region.clone(),
                        continent: stay.continent.clone(),
                        countries: Vec::new(),
                        total_days: 0,
                        total_costs: 0.0,
                        costs_by_category: BTreeMap::new(),
                        visit_count: 0,
                        start_date: None,
                        end_date: None,
                    });
                    regions.len() - 1
                });

            let entry = &mut regions[slot];
            entry.countries.push(stay.country.clone());
            entry.total_days = entry.total_days.saturating_add(stay.total_days);
            entry.total_costs += stay.total_costs;
            merge_categories(&mut entry.costs_by_category, &stay.costs_by_category);
            entry.visit_count += stay.visits.len();
            entry.start_date = earliest(entry.start_date, stay.start_date);
            entry.end_date = latest(entry.end_date, stay.end_date);
            if entry.continent.is_none() {
                entry.continent = stay.continent.clone();
            }
        }
        regions
    }

    /// Whole-trip statistics over country stays.
    pub fn compute_stats(&self, stays: &[CountryStay]) -> TripStats {
        let total_days = stays
            .iter()
            .fold(0u32, |total, stay| total.saturating_add(stay.total_days));
        let total_costs: f64 = stays.iter().map(|stay| stay.total_costs).sum();
        let mut costs_by_category = BTreeMap::new();
        for stay in stays {
            merge_categories(&mut costs_by_category, &stay.costs_by_category);
        }

        let mut transport_modes = BTreeMap::new();
        let mut activity_types = BTreeMap::new();
        for destination in stays.iter().flat_map(|stay| stay.destinations.iter()) {
            count_label(&mut transport_modes, destination.transport_mode.as_deref());
            count_label(&mut activity_types, destination.activity_type.as_deref());
        }

        TripStats {
            total_countries: stays.len(),
            total_destinations: stays.iter().map(|stay| stay.destinations.len()).sum(),
            total_days,
            total_costs,
            average_cost_per_day: per_day(total_costs, total_days),
            costs_by_category,
            longest_stay: pick_days(stays, |candidate, best| candidate > best),
            shortest_stay: pick_days(stays, |candidate, best| candidate < best),
            most_expensive: pick_cost(stays.iter(), |candidate, best| candidate > best),
            least_expensive: pick_cost(
                stays.iter().filter(|stay| stay.cost_count > 0),
                |candidate, best| candidate < best,
            ),
            transport_modes,
            activity_types,
            monthly: monthly_breakdown(stays),
        }
    }
}

fn empty_stay(country: String, first: &Destination) -> CountryStay {
    let (region, continent) = match geo::lookup(&country) {
        Some(resolved) => (
            Some(resolved.region.to_string()),
            Some(resolved.continent.to_string()),
        ),
        None => (first.region.clone(), first.continent.clone()),
    };
    CountryStay {
        country,
        region,
        continent,
        destinations: Vec::new(),
        visits: Vec::new(),
        total_days: 0,
        total_costs: 0.0,
        costs_by_category: BTreeMap::new(),
        cost_count: 0,
        start_date: None,
        end_date: None,
    }
}

fn per_day(total: f64, days: u32) -> f64 {
    if days == 0 {
        0.0
    } else {
        total / f64::from(days)
    }
}

fn earliest(current: Option<NaiveDate>, candidate: Option<NaiveDate>) -> Option<NaiveDate> {
    match (current, candidate) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

fn latest(current: Option<NaiveDate>, candidate: Option<NaiveDate>) -> Option<NaiveDate> {
    match (current, candidate) {
        (Some(a), Some(b)) => Some(a.max(b)),
        (a, b) => a.or(b),
    }
}

fn merge_categories(into: &mut BTreeMap<CostCategory, f64>, from: &BTreeMap<CostCategory, f64>) {
    for (category, amount) in from {
        *into.entry(*category).or_insert(0.0) += amount;
    }
}

fn count_label(histogram: &mut BTreeMap<String, usize>, label: Option<&str>) {
    let Some(label) = label.map(str::trim).filter(|value| !value.is_empty()) else {
        return;
    };
    *histogram.entry(label.to_lowercase()).or_insert(0) += 1;
}

/// First stay winning `better` on days; ties keep the earlier stay.
fn pick_days(stays: &[CountryStay], better: impl Fn(u32, u32) -> bool) -> Option<CountryDays> {
    let mut best: Option<&CountryStay> = None;
    for stay in stays {
        if best.map_or(true, |current| better(stay.total_days, current.total_days)) {
            best = Some(stay);
        }
    }
    best.map(|stay| CountryDays {
        country: stay.country.clone(),
        days: stay.total_days,
    })
}

fn pick_cost<'a>(
    stays: impl Iterator<Item = &'a CountryStay>,
    better: impl Fn(f64, f64) -> bool,
) -> Option<CountryCost> {
    let mut best: Option<&CountryStay> = None;
    for stay in stays {
        if best.map_or(true, |current| better(stay.total_costs, current.total_costs)) {
            best = Some(stay);
        }
    }
    best.map(|stay| CountryCost {
        country: stay.country.clone(),
        total_costs: stay.total_costs,
    })
}

/// Counts nights per calendar month: each day in `[arrival, departure)`.
/// A same-day stop counts its arrival day once.
fn monthly_breakdown(stays: &[CountryStay]) -> Vec<MonthlyBreakdown> {
    let mut months: BTreeMap<String, MonthlyBreakdown> = BTreeMap::new();
    for stay in stays {
        for destination in &stay.destinations {
            let (Some(arrival), Some(departure)) =
                (destination.arrival_date, destination.departure_date)
            else {
                continue;
            };
            let last = if departure > arrival {
                departure.pred_opt().unwrap_or(arrival)
            } else {
                arrival
            };
            let mut cursor = arrival;
            while cursor <= last {
                let month = format_date(cursor)[..7].to_string();
                let entry = months.entry(month.clone()).or_insert_with(|| MonthlyBreakdown {
                    month,
                    days: 0,
                    countries: Vec::new(),
                });
                entry.days += 1;
                if !entry.countries.contains(&stay.country) {
                    entry.countries.push(stay.country.clone());
                }
                match cursor.checked_add_days(Days::new(1)) {
                    Some(next) => cursor = next,
                    None => break,
                }
            }
        }
    }
    months.into_values().collect()
}
