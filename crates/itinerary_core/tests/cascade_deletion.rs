use chrono::NaiveDate;
use itinerary_core::service::leg_service::generate_legs;
use itinerary_core::{
    delete_destination, validate, CostCategory, Dataset, DeletionError, DeletionOptions,
    DeletionService, DeletionStrategy, Destination, DestinationId, InvalidTargetReason,
};
use serde_json::json;

fn trip() -> Dataset {
    let mut data: Dataset = serde_json::from_value(json!({
        "locations": [
            { "id": "1", "name": "Tokyo", "country": "Japan", "duration_days": 4,
              "arrival_date": "2026-07-01", "departure_date": "2026-07-05" },
            { "id": "2", "name": "Kyoto", "country": "Japan", "duration_days": 3,
              "arrival_date": "2026-07-05", "departure_date": "2026-07-08" },
            { "id": "3", "name": "Seoul", "country": "South Korea", "duration_days": 2,
              "arrival_date": "2026-07-08", "departure_date": "2026-07-10" }
        ],
        "costs": [
            { "id": "c1", "destination_id": "1", "amount_usd": 500, "category": "food" },
            { "id": "c2", "destination_id": "1", "amount_usd": 120, "category": "transport" },
            { "id": "c3", "destination_id": "2", "amount_usd": 80, "category": "food" },
            { "id": "c4", "destination_id": null, "amount_usd": 15 }
        ]
    }))
    .unwrap();
    data.legs = generate_legs(&data.locations);
    data
}

fn id(raw: &str) -> DestinationId {
    DestinationId::new(raw)
}

#[test]
fn delete_removes_destination_costs_and_leg_refs() {
    let data = trip();
    let before = validate(&data);

    let outcome = delete_destination(
        &data,
        &id("1"),
        &DeletionStrategy::Delete,
        DeletionOptions::default(),
    )
    .unwrap();

    assert_eq!(outcome.removed_destinations, 1);
    assert_eq!(outcome.deleted_costs, vec!["c1".to_string(), "c2".to_string()]);
    assert!(outcome.dataset.costs.iter().all(|cost| cost.id != "c1"));
    assert!(outcome.dataset.legs.iter().all(|leg| leg.references().all(|r| r != &id("1"))));
    assert_eq!(outcome.leg_refs_removed, 2);

    let after = validate(&outcome.dataset);
    assert_eq!(after.total_costs, before.total_costs - 2);
    assert!(after.orphaned_costs.is_empty());
    assert!(after.dangling_leg_refs.is_empty());
    assert!(after.is_valid());

    assert_eq!(data.locations.len(), 3);
    assert_eq!(data.costs.len(), 4);
}

#[test]
fn deleting_the_only_linked_cost_drops_count_by_one() {
    let data: Dataset = serde_json::from_value(json!({
        "locations": [{ "id": "1", "name": "Tokyo" }, { "id": "2", "name": "Kyoto" }],
        "costs": [
            { "id": "c1", "destination_id": "1", "amount_usd": 500, "category": "food" },
            { "id": "c2", "destination_id": "2", "amount_usd": 50, "category": "food" }
        ]
    }))
    .unwrap();

    let outcome = delete_destination(
        &data,
        &id("1"),
        &DeletionStrategy::Delete,
        DeletionOptions::default(),
    )
    .unwrap();

    let report = validate(&outcome.dataset);
    assert_eq!(report.total_costs, 1);
    assert!(report.orphaned_costs.is_empty());
}

#[test]
fn unassign_keeps_costs_as_unassigned_not_orphaned() {
    let data = trip();

    let outcome = delete_destination(
        &data,
        &id("1"),
        &DeletionStrategy::Unassign,
        DeletionOptions::default(),
    )
    .unwrap();

    assert_eq!(outcome.unassigned_costs, vec!["c1".to_string(), "c2".to_string()]);
    assert_eq!(outcome.dataset.costs.len(), 4);
    let report = validate(&outcome.dataset);
    assert!(report.orphaned_costs.is_empty());
    assert_eq!(report.unassigned_costs, vec!["c1", "c2", "c4"]);

    let encoded = serde_json::to_value(&outcome.dataset.costs[0]).unwrap();
    assert!(encoded["destination_id"].is_null());
}

#[test]
fn reassign_moves_costs_to_target() {
    let data = trip();

    let outcome = delete_destination(
        &data,
        &id("1"),
        &DeletionStrategy::Reassign { target: id("2") },
        DeletionOptions::default(),
    )
    .unwrap();

    assert_eq!(outcome.reassigned_costs.len(), 2);
    let on_target: Vec<&str> = outcome
        .dataset
        .costs
        .iter()
        .filter(|cost| cost.references(&id("2")))
        .map(|cost| cost.id.as_str())
        .collect();
    assert_eq!(on_target, vec!["c1", "c2", "c3"]);
}

#[test]
fn failed_preconditions_leave_dataset_unchanged() {
    let data = trip();
    let snapshot = data.clone();

    let missing = delete_destination(
        &data,
        &id("404"),
        &DeletionStrategy::Delete,
        DeletionOptions::default(),
    );
    assert_eq!(missing.unwrap_err(), DeletionError::NotFound(id("404")));

    let bad_target = delete_destination(
        &data,
        &id("1"),
        &DeletionStrategy::Reassign { target: id("9") },
        DeletionOptions::default(),
    );
    assert_eq!(
        bad_target.unwrap_err(),
        DeletionError::InvalidTarget {
            target: id("9"),
            reason: InvalidTargetReason::Missing,
        }
    );
    assert_eq!(data, snapshot);
}

#[test]
fn recalculation_reflows_remaining_dates_from_trip_start() {
    let data = trip();

    let outcome = delete_destination(
        &data,
        &id("1"),
        &DeletionStrategy::Delete,
        DeletionOptions {
            recalculate_dates: true,
            trip_start_date: None,
        },
    )
    .unwrap();

    assert!(outcome.dates_recalculated);
    let kyoto = &outcome.dataset.locations[0];
    assert_eq!(kyoto.arrival_date, NaiveDate::from_ymd_opt(2026, 7, 1));
    assert_eq!(kyoto.departure_date, NaiveDate::from_ymd_opt(2026, 7, 4));
    let seoul = &outcome.dataset.locations[1];
    assert_eq!(seoul.arrival_date, NaiveDate::from_ymd_opt(2026, 7, 4));
    assert_eq!(seoul.departure_date, NaiveDate::from_ymd_opt(2026, 7, 6));
}

#[test]
fn custom_recalculator_receives_remaining_stops() {
    let service = DeletionService::with_recalculator(
        |stops: Vec<Destination>, start: NaiveDate| -> Vec<Destination> {
            stops
                .into_iter()
                .map(|mut stop| {
                    stop.arrival_date = Some(start);
                    stop.departure_date = Some(start);
                    stop
                })
                .collect()
        },
    );
    let start = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();

    let outcome = service
        .delete_destination(
            &trip(),
            &id("3"),
            &DeletionStrategy::Unassign,
            DeletionOptions {
                recalculate_dates: true,
                trip_start_date: Some(start),
            },
        )
        .unwrap();

    assert_eq!(outcome.dataset.locations.len(), 2);
    assert!(outcome
        .dataset
        .locations
        .iter()
        .all(|stop| stop.arrival_date == Some(start)));
}

#[test]
fn preview_reports_impact_without_editing() {
    let data = trip();
    let impact = DeletionService::new()
        .preview_deletion(&data, &id("1"))
        .unwrap();

    assert_eq!(impact.destination_count, 1);
    assert_eq!(impact.cost_count, 2);
    assert_eq!(impact.cost_total_usd, 620.0);
    assert_eq!(impact.costs_by_category.get(&CostCategory::Food), Some(&500.0));
    assert_eq!(impact.leg_refs, 2);
}
