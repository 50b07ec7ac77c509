//! Candidate place records as they flow between the places source, the engine
//! and the JSON response.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::schedule::WeeklySchedule;

/// A candidate place for an itinerary slot.
///
/// Only `opening_hours`, `rating` and `is_open` mean anything to the engine.
/// Every other field of the source record is kept in `extra` and written back
/// unchanged, in its original order and ahead of the engine fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    #[serde(flatten)]
    pub extra: Map<String, Value>,

    /// Category name used to pick a default schedule (e.g. `"museum"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening_hours: Option<WeeklySchedule>,

    /// `None` while the status is unknown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_open: Option<bool>,
}

impl Place {
    /// A bare record carrying only a name.
    pub fn named(name: &str) -> Self {
        let mut extra = Map::new();
        extra.insert("name".to_string(), Value::String(name.to_string()));
        Self {
            extra,
            ..Self::default()
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.extra.get("name").and_then(Value::as_str)
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_hours(mut self, schedule: WeeklySchedule) -> Self {
        self.opening_hours = Some(schedule);
        self
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    pub fn with_open_status(mut self, is_open: Option<bool>) -> Self {
        self.is_open = is_open;
        self
    }

    /// Rating used for ordering; missing or NaN counts as zero.
    pub fn rating_or_zero(&self) -> f64 {
        match self.rating {
            Some(r) if !r.is_nan() => r,
            _ => 0.0,
        }
    }
}
