//! Collaborator ports injected into the core.
//!
//! # Responsibility
//! - Define the boundary traits for place resolution, date recalculation
//!   and time.
//! - Provide small owned implementations (`PlaceCache`, `SequentialDates`,
//!   `SystemClock`) that callers may use or replace.
//!
//! # Invariants
//! - Nothing in this crate performs network or storage I/O directly.

pub mod clock;
pub mod date_recalc;
pub mod place_cache;
pub mod place_resolver;
