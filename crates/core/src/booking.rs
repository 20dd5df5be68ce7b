//! Venue/artist booking helpers: show timing and grouping venues by area.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::types::Timestamp;

/// Where a show sits relative to "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowTiming {
    Past,
    Upcoming,
}

impl ShowTiming {
    /// A show starting exactly now counts as past.
    pub fn classify(start_time: Timestamp, now: Timestamp) -> Self {
        if start_time > now {
            ShowTiming::Upcoming
        } else {
            ShowTiming::Past
        }
    }
}

/// Split shows into `(past, upcoming)`, keeping input order within each half.
pub fn partition_shows<T>(
    shows: Vec<T>,
    now: Timestamp,
    start_time: impl Fn(&T) -> Timestamp,
) -> (Vec<T>, Vec<T>) {
    shows
        .into_iter()
        .partition(|show| ShowTiming::classify(start_time(show), now) == ShowTiming::Past)
}

/// Venues sharing a city and state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Area<T> {
    pub city: Option<String>,
    pub state: Option<String>,
    pub venues: Vec<T>,
}

/// Group `(city, state, item)` triples into areas ordered by state, then city.
pub fn group_by_area<T>(
    items: impl IntoIterator<Item = (Option<String>, Option<String>, T)>,
) -> Vec<Area<T>> {
    let mut groups: BTreeMap<(Option<String>, Option<String>), Vec<T>> = BTreeMap::new();
    for (city, state, item) in items {
        groups.entry((state, city)).or_default().push(item);
    }
    groups
        .into_iter()
        .map(|((state, city), venues)| Area {
            city,
            state,
            venues,
        })
        .collect()
}
