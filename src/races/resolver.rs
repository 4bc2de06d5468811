//! Date-based lookups over a loaded catalog.
//!
//! Both lookups are first-match scans. The loader sorts the catalog by date,
//! so the first match is also the earliest qualifying race. When a week holds
//! more than one race only the earliest is reported.

use chrono::NaiveDate;

use super::catalog::RaceRecord;
use crate::utils::datetime::week_bounds;

/// The display subset of a [`RaceRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRace {
    pub name: String,
    pub date: NaiveDate,
    pub date_str: String,
    pub time: String,
    pub circuit: String,
    pub location: String,
}

impl From<&RaceRecord> for ResolvedRace {
    fn from(race: &RaceRecord) -> Self {
        Self {
            name: race.name.clone(),
            date: race.date,
            date_str: race.date_str.clone(),
            time: race.time.clone(),
            circuit: race.circuit_name.clone(),
            location: race.location(),
        }
    }
}

/// First race dated on or after `today`. A race held today still counts.
pub fn next_race(catalog: &[RaceRecord], today: NaiveDate) -> Option<ResolvedRace> {
    catalog
        .iter()
        .find(|race| race.date >= today)
        .map(ResolvedRace::from)
}

/// First race dated within the Monday-Sunday week containing `today`.
pub fn race_this_week(catalog: &[RaceRecord], today: NaiveDate) -> Option<&RaceRecord> {
    let (monday, sunday) = week_bounds(today);
    catalog
        .iter()
        .find(|race| (monday..=sunday).contains(&race.date))
}
