//! Date-recalculation port and its default sequential implementation.

use crate::model::destination::Destination;
use chrono::{Days, NaiveDate};

/// Recomputes consecutive arrival/departure dates for an ordered itinerary.
pub trait DateRecalculator {
    fn recalculate(&self, destinations: Vec<Destination>, trip_start: NaiveDate)
        -> Vec<Destination>;
}

impl<F> DateRecalculator for F
where
    F: Fn(Vec<Destination>, NaiveDate) -> Vec<Destination>,
{
    fn recalculate(
        &self,
        destinations: Vec<Destination>,
        trip_start: NaiveDate,
    ) -> Vec<Destination> {
        self(destinations, trip_start)
    }
}

/// Lays stops end to end from the trip start: each departure is the next
/// arrival.
#[derive(Debug, Default, Clone, Copy)]
pub struct SequentialDates;

impl DateRecalculator for SequentialDates {
    fn recalculate(
        &self,
        mut destinations: Vec<Destination>,
        trip_start: NaiveDate,
    ) -> Vec<Destination> {
        let mut cursor = trip_start;
        for destination in &mut destinations {
            let departure = cursor
                .checked_add_days(Days::new(u64::from(destination.effective_days())))
                .unwrap_or(cursor);
            destination.arrival_date = Some(cursor);
            destination.departure_date = Some(departure);
            cursor = departure;
        }
        destinations
    }
}
