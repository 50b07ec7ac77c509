//! Opening-hours availability checks over candidate places.
//!
//! [`is_open_at`] is the single predicate. [`annotate_open_status`],
//! [`filter_open`] and [`rank_by_relevance`] are built on it and never mutate
//! their input; each returns fresh records.
//!
//! Missing data is never an error. A place without a schedule, or whose entry
//! for the queried day cannot be parsed, evaluates to [`OpenResult::Unknown`].

use std::cmp::Ordering;

use serde::Serialize;

use crate::place::Place;
use crate::schedule::{QueryMoment, WeeklySchedule};

/// Three-valued outcome of an availability check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OpenResult {
    /// Confirmed open at the query moment.
    Open,
    /// Confirmed closed, including days with no schedule entry.
    Closed,
    /// No usable schedule data.
    Unknown,
}

impl OpenResult {
    /// The known status, or `None` for `Unknown`.
    pub fn known(self) -> Option<bool> {
        match self {
            OpenResult::Open => Some(true),
            OpenResult::Closed => Some(false),
            OpenResult::Unknown => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OpenResult::Open => "open",
            OpenResult::Closed => "closed",
            OpenResult::Unknown => "unknown",
        }
    }
}

/// Decide whether a schedule is open at a moment.
///
/// Only the entry for the moment's own weekday is consulted. When `close` is
/// earlier than `open` the window runs past midnight, so an entry
/// `{open: "22:00", close: "05:00"}` matches both `22:00..24:00` and
/// `00:00..05:00` of that weekday. The opening boundary is inclusive and the
/// closing boundary exclusive in both cases.
///
/// # Arguments
///
/// * `schedule` — The place's weekly hours, `None` when unknown.
/// * `moment` — Local date (for the weekday) and wall-clock time.
pub fn is_open_at(schedule: Option<&WeeklySchedule>, moment: QueryMoment) -> OpenResult {
    let Some(schedule) = schedule else {
        return OpenResult::Unknown;
    };

    let Some(hours) = schedule.day(moment.weekday()) else {
        return OpenResult::Closed;
    };

    let (open, close) = match hours.window() {
        Ok(window) => window,
        Err(e) => {
            log::debug!("treating {:?} hours as unknown: {}", moment.weekday(), e);
            return OpenResult::Unknown;
        }
    };

    let query = moment.time.minutes();
    let open = open.minutes();
    let close = close.minutes();

    let is_open = if close >= open {
        open <= query && query < close
    } else {
        // Overnight: from opening to end of day, or from midnight to closing.
        query >= open || query < close
    };

    if is_open {
        OpenResult::Open
    } else {
        OpenResult::Closed
    }
}

/// Evaluate a place against its own schedule.
pub fn place_open_at(place: &Place, moment: QueryMoment) -> OpenResult {
    is_open_at(place.opening_hours.as_ref(), moment)
}

/// Write the computed open status into copies of `places`.
///
/// A known result replaces `is_open`. An unknown result leaves whatever
/// `is_open` the record already carried, so a status obtained elsewhere is
/// never discarded and no default is invented.
pub fn annotate_open_status(places: &[Place], moment: QueryMoment) -> Vec<Place> {
    places
        .iter()
        .map(|place| {
            let mut annotated = place.clone();
            if let Some(status) = place_open_at(place, moment).known() {
                annotated.is_open = Some(status);
            }
            annotated
        })
        .collect()
}

/// Keep every place that is not confirmed closed at `moment`.
///
/// Evaluates the schedule directly instead of trusting `is_open`. Places with
/// unknown hours are kept.
pub fn filter_open(places: &[Place], moment: QueryMoment) -> Vec<Place> {
    places
        .iter()
        .filter(|place| place_open_at(place, moment) != OpenResult::Closed)
        .cloned()
        .collect()
}

/// Annotate, then order open places first and by rating (descending) within
/// each group.
///
/// Only `is_open == Some(true)` counts as open here; unknown places sort with
/// the closed ones even though [`filter_open`] keeps them. Missing and NaN
/// ratings count as zero. The sort is stable, so equal places keep their input order.
pub fn rank_by_relevance(places: &[Place], moment: QueryMoment) -> Vec<Place> {
    let mut ranked = annotate_open_status(places, moment);
    ranked.sort_by(|a, b| {
        let a_open = a.is_open == Some(true);
        let b_open = b.is_open == Some(true);
        b_open
            .cmp(&a_open)
            .then_with(|| {
                b.rating_or_zero()
                    .partial_cmp(&a.rating_or_zero())
                    .unwrap_or(Ordering::Equal)
            })
    });
    ranked
}
