//! Visit-period segmentation for one country's destinations.
//!
//! # Responsibility
//! - Split a country's dated destinations into maximal runs whose
//!   inter-stay gaps stay within the threshold.
//!
//! # Invariants
//! - Only destinations with both arrival and departure participate.
//! - Ordering is ascending by arrival; ties keep input order.
//! - A gap strictly greater than `max_gap_days` starts a new period, so a
//!   same-day or next-day connection never splits a visit.

use crate::config::{SegmentationConfig, DEFAULT_MAX_GAP_DAYS};
use crate::geo;
use crate::model::dates::format_date;
use crate::model::destination::Destination;
use chrono::NaiveDate;
use serde::{Serialize, Serializer};

/// Country label used when a destination carries no country.
pub const UNKNOWN_COUNTRY: &str = "Unknown";

/// One continuous presence in a country.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisitPeriod {
    pub country: String,
    #[serde(serialize_with = "serialize_date")]
    pub start_date: NaiveDate,
    #[serde(serialize_with = "serialize_date")]
    pub end_date: NaiveDate,
    /// Member destinations in arrival order.
    pub destinations: Vec<Destination>,
    /// Sum of member durations, saturating at `u32::MAX`.
    pub total_days: u32,
}

impl VisitPeriod {
    fn open(destination: &Destination, arrival: NaiveDate, departure: NaiveDate) -> Self {
        Self {
            country: country_label(destination),
            start_date: arrival,
            end_date: departure.max(arrival),
            destinations: vec![destination.clone()],
            total_days: destination.effective_days(),
        }
    }

    fn extend(&mut self, destination: &Destination, departure: NaiveDate) {
        self.end_date = self.end_date.max(departure);
        self.total_days = self.total_days.saturating_add(destination.effective_days());
        self.destinations.push(destination.clone());
    }

    /// Calendar days between first arrival and last departure.
    pub fn span_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}

fn serialize_date<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_date(*date))
}

/// Gap-threshold segmenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisitSegmenter {
    max_gap_days: i64,
}

impl Default for VisitSegmenter {
    fn default() -> Self {
        Self {
            max_gap_days: DEFAULT_MAX_GAP_DAYS,
        }
    }
}

impl VisitSegmenter {
    pub fn new(config: &SegmentationConfig) -> Self {
        Self {
            max_gap_days: config.max_gap_days.max(0),
        }
    }

    pub fn max_gap_days(&self) -> i64 {
        self.max_gap_days
    }

    /// Segments destinations of one country into ordered visit periods.
    ///
    /// The gap is measured from the running period end (latest departure so
    /// far), so a short stay nested inside a longer one never opens a period.
    pub fn segment<'a, I>(&self, destinations: I) -> Vec<VisitPeriod>
    where
        I: IntoIterator<Item = &'a Destination>,
    {
        let mut dated: Vec<(&Destination, NaiveDate, NaiveDate)> = destinations
            .into_iter()
            .filter_map(|destination| {
                Some((
                    destination,
                    destination.arrival_date?,
                    destination.departure_date?,
                ))
            })
            .collect();
        dated.sort_by_key(|(_, arrival, _)| *arrival);

        let mut periods: Vec<VisitPeriod> = Vec::new();
        let mut current: Option<VisitPeriod> = None;
        for (destination, arrival, departure) in dated {
            current = Some(match current.take() {
                None => VisitPeriod::open(destination, arrival, departure),
                Some(mut period) => {
                    let gap = (arrival - period.end_date).num_days();
                    if gap > self.max_gap_days {
                        periods.push(period);
                        VisitPeriod::open(destination, arrival, departure)
                    } else {
                        period.extend(destination, departure);
                        period
                    }
                }
            });
        }
        periods.extend(current);
        periods
    }
}

/// Segments with the default one-day threshold.
pub fn segment<'a, I>(destinations: I) -> Vec<VisitPeriod>
where
    I: IntoIterator<Item = &'a Destination>,
{
    VisitSegmenter::default().segment(destinations)
}

/// Canonical country name when known, stored spelling otherwise.
pub(crate) fn country_label(destination: &Destination) -> String {
    match destination.country_name() {
        Some(country) => geo::canonical_name(country)
            .map(str::to_string)
            .unwrap_or_else(|| country.to_string()),
        None => UNKNOWN_COUNTRY.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{segment, VisitSegmenter};
    use crate::config::SegmentationConfig;
    use crate::model::destination::Destination;
    use chrono::NaiveDate;

    fn day(month: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, month, d).unwrap()
    }

    fn stop(id: &str, arrival: NaiveDate, departure: NaiveDate) -> Destination {
        Destination::with_id(id, id)
            .in_country("japan")
            .between(arrival, departure)
    }

    #[test]
    fn empty_and_undated_input_yield_no_periods() {
        assert!(segment(Vec::<&Destination>::new()).is_empty());
        let undated = Destination::with_id("1", "Tokyo").in_country("Japan");
        assert!(segment([&undated]).is_empty());
    }

    #[test]
    fn single_destination_yields_one_period_with_canonical_country() {
        let only = stop("1", day(7, 1), day(7, 5));
        let periods = segment([&only]);
        assert_eq!(periods.len(), 1);
        assert_eq!(periods[0].country, "Japan");
        assert_eq!(periods[0].start_date, day(7, 1));
        assert_eq!(periods[0].end_date, day(7, 5));
        assert_eq!(periods[0].total_days, 4);
    }

    #[test]
    fn gap_boundary_is_strictly_greater_than_threshold() {
        let first = stop("1", day(7, 1), day(7, 5));
        let next_day = stop("2", day(7, 6), day(7, 8));
        let three_days = stop("3", day(7, 8), day(7, 10));

        assert_eq!(segment([&first, &next_day]).len(), 1);
        assert_eq!(segment([&first, &three_days]).len(), 2);
    }

    #[test]
    fn unsorted_input_is_ordered_by_arrival() {
        let late = stop("late", day(8, 1), day(8, 3));
        let early = stop("early", day(7, 1), day(7, 3));
        let middle = stop("middle", day(7, 3), day(7, 6));

        let periods = segment([&late, &early, &middle]);
        assert_eq!(periods.len(), 2);
        let ids: Vec<&str> = periods[0]
            .destinations
            .iter()
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(ids, vec!["early", "middle"]);
        assert_eq!(periods[0].end_date, day(7, 6));
        assert_eq!(periods[1].start_date, day(8, 1));
    }

    #[test]
    fn identical_arrivals_share_a_period() {
        let a = stop("a", day(7, 1), day(7, 2));
        let b = stop("b", day(7, 1), day(7, 4));
        let periods = segment([&a, &b]);
        assert_eq!(periods.len(), 1);
        assert_eq!(periods[0].destinations.len(), 2);
        assert_eq!(periods[0].end_date, day(7, 4));
    }

    #[test]
    fn gap_is_measured_from_latest_departure_not_previous_stop() {
        let long_stay = stop("base", day(7, 1), day(7, 20));
        let side_trip = stop("side", day(7, 2), day(7, 3));
        let later = stop("later", day(7, 10), day(7, 12));

        let periods = segment([&long_stay, &side_trip, &later]);
        assert_eq!(periods.len(), 1);
        assert_eq!(periods[0].destinations.len(), 3);
        assert_eq!(periods[0].end_date, day(7, 20));
    }

    #[test]
    fn period_day_totals_saturate() {
        let first = stop("1", day(7, 1), day(7, 2)).for_days(4_000_000_000);
        let second = stop("2", day(7, 2), day(7, 3)).for_days(4_000_000_000);

        let periods = segment([&first, &second]);
        assert_eq!(periods[0].total_days, u32::MAX);
    }

    #[test]
    fn wider_threshold_merges_short_absences() {
        let segmenter = VisitSegmenter::new(&SegmentationConfig { max_gap_days: 3 });
        let first = stop("1", day(7, 1), day(7, 5));
        let second = stop("2", day(7, 8), day(7, 10));
        assert_eq!(segmenter.segment([&first, &second]).len(), 1);
    }
}
