//! # tripslot-engine
//!
//! Opening-hours availability for travel itinerary slots.
//!
//! Given a place's weekly schedule and a local query moment, the engine decides
//! whether the place is open, including schedules that close past midnight,
//! and uses that to annotate, filter and rank candidate places. Everything is
//! synchronous and stateless; callers resolve "now" and pass an explicit
//! [`QueryMoment`].
//!
//! ## Modules
//!
//! - [`schedule`] — `TimeOfDay`, `DayHours`, `WeeklySchedule`, `QueryMoment`
//! - [`place`] — Candidate place records
//! - [`availability`] — `is_open_at` and the annotate/filter/rank operations
//! - [`templates`] — Default schedules per place category
//! - [`slot`] — Annotate → filter → rank pipeline for one itinerary slot
//! - [`error`] — Error types

pub mod availability;
pub mod error;
pub mod place;
pub mod schedule;
pub mod slot;
pub mod templates;

pub use availability::{
    annotate_open_status, filter_open, is_open_at, place_open_at, rank_by_relevance, OpenResult,
};
pub use error::HoursError;
pub use place::Place;
pub use schedule::{DayHours, QueryMoment, TimeOfDay, WeeklySchedule};
pub use slot::{select_for_slot, SlotOptions};
pub use templates::{backfill_opening_hours, default_schedule, Category};
