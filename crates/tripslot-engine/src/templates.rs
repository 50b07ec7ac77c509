//! Default weekly schedules per place category.
//!
//! Used to backfill `opening_hours` when the places source has no real hours
//! for a record. The table is built once per process and shared read-only.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::{HoursError, Result};
use crate::place::Place;
use crate::schedule::WeeklySchedule;

/// Place categories that have a default schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Restaurant,
    Cafe,
    Museum,
    Attraction,
    Park,
    Shopping,
    Nightlife,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Restaurant,
        Category::Cafe,
        Category::Museum,
        Category::Attraction,
        Category::Park,
        Category::Shopping,
        Category::Nightlife,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Restaurant => "restaurant",
            Category::Cafe => "cafe",
            Category::Museum => "museum",
            Category::Attraction => "attraction",
            Category::Park => "park",
            Category::Shopping => "shopping",
            Category::Nightlife => "nightlife",
        }
    }
}

impl FromStr for Category {
    type Err = HoursError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| HoursError::UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

struct Templates {
    restaurant: WeeklySchedule,
    cafe: WeeklySchedule,
    museum: WeeklySchedule,
    attraction: WeeklySchedule,
    park: WeeklySchedule,
    shopping: WeeklySchedule,
    nightlife: WeeklySchedule,
}

static TEMPLATES: LazyLock<Templates> = LazyLock::new(|| Templates {
    // Late service on Friday and Saturday runs past midnight.
    restaurant: WeeklySchedule::every_day("11:00", "22:00")
        .with_day(Weekday::Fri, "11:00", "00:30")
        .with_day(Weekday::Sat, "11:00", "00:30"),
    cafe: WeeklySchedule::every_day("07:00", "19:00")
        .with_day(Weekday::Sun, "08:00", "17:00"),
    museum: WeeklySchedule::every_day("10:00", "18:00")
        .with_day(Weekday::Thu, "10:00", "21:00")
        .without_day(Weekday::Mon),
    // Close "00:00" means open through the end of the day.
    attraction: WeeklySchedule::every_day("09:00", "19:00")
        .with_day(Weekday::Fri, "09:00", "00:00")
        .with_day(Weekday::Sat, "09:00", "00:00"),
    park: WeeklySchedule::every_day("06:00", "22:00"),
    shopping: WeeklySchedule::every_day("10:00", "21:00")
        .with_day(Weekday::Sun, "11:00", "19:00"),
    nightlife: WeeklySchedule::default()
        .with_day(Weekday::Wed, "20:00", "02:00")
        .with_day(Weekday::Thu, "20:00", "02:00")
        .with_day(Weekday::Fri, "21:00", "04:00")
        .with_day(Weekday::Sat, "21:00", "04:00")
        .with_day(Weekday::Sun, "20:00", "01:00"),
});

/// The default schedule for a category.
pub fn default_schedule(category: Category) -> &'static WeeklySchedule {
    let t = &*TEMPLATES;
    match category {
        Category::Restaurant => &t.restaurant,
        Category::Cafe => &t.cafe,
        Category::Museum => &t.museum,
        Category::Attraction => &t.attraction,
        Category::Park => &t.park,
        Category::Shopping => &t.shopping,
        Category::Nightlife => &t.nightlife,
    }
}

/// Fill in category default hours for places that have none.
///
/// Places that already carry `opening_hours`, have no category, or whose
/// category has no template are returned unchanged.
pub fn backfill_opening_hours(places: &[Place]) -> Vec<Place> {
    places
        .iter()
        .map(|place| {
            let mut filled = place.clone();
            if filled.opening_hours.is_none() {
                if let Some(category) = place.category.as_deref() {
                    match category.parse::<Category>() {
                        Ok(category) => {
                            filled.opening_hours = Some(default_schedule(category).clone());
                        }
                        Err(e) => log::debug!("no default hours: {}", e),
                    }
                }
            }
            filled
        })
        .collect()
}
