//! Itinerary domain model.
//!
//! # Responsibility
//! - Define the stored shapes of destinations, cost items and legs.
//! - Keep the document wire format stable across decode/encode.
//!
//! # Invariants
//! - Destinations are referenced by `DestinationId` only; nothing links by
//!   name or description.
//! - A destination's id is assigned at creation and never reused.

pub mod cost;
pub mod dataset;
pub mod dates;
pub mod destination;
pub mod leg;
