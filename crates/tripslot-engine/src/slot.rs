//! The candidate pipeline an itinerary slot runs before presenting places.

use crate::availability::{annotate_open_status, filter_open, rank_by_relevance};
use crate::place::Place;
use crate::schedule::QueryMoment;

/// Which optional stages of [`select_for_slot`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SlotOptions {
    /// Drop places confirmed closed at the slot's moment.
    pub open_only: bool,
    /// Order open places first, then by rating.
    pub rank: bool,
}

/// Annotate candidates, then optionally filter and rank them.
///
/// The returned records carry the authoritative `is_open` for the slot.
pub fn select_for_slot(places: &[Place], moment: QueryMoment, options: SlotOptions) -> Vec<Place> {
    let mut selected = annotate_open_status(places, moment);

    if options.open_only {
        selected = filter_open(&selected, moment);
    }
    if options.rank {
        selected = rank_by_relevance(&selected, moment);
    }

    log::trace!(
        "slot {} {}: {} of {} candidates selected",
        moment.date,
        moment.time,
        selected.len(),
        places.len()
    );
    selected
}
