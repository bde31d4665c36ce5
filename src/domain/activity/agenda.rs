//! Activity Agenda - groups a trip's activities by calendar day.
//!
//! Pure and deterministic. Days appear in the order their first activity
//! appears in the input (not sorted chronologically), and activities keep
//! their original relative order inside each day.

use chrono::NaiveDate;
use std::collections::HashMap;

use super::Activity;
use crate::domain::foundation::Timestamp;

/// Activities sharing one UTC calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayActivities {
    pub date: NaiveDate,
    pub activities: Vec<Activity>,
}

impl DayActivities {
    /// Start of the day (00:00:00 UTC), the form presented to clients.
    pub fn starts_at(&self) -> Timestamp {
        Timestamp::start_of(self.date)
    }
}

/// Day-bucketing functions for activities.
pub struct ActivityAgenda;

impl ActivityAgenda {
    /// Groups activities by the UTC date of `occurs_at`.
    ///
    /// # Algorithm
    /// Single pass; a date -> bucket index map keeps the first-seen order of
    /// dates, so the whole grouping is O(n).
    ///
    /// # Edge Cases
    /// - Empty input: returns no buckets
    /// - Activities at 00:00 and 23:59 of one date share a bucket
    pub fn group_by_day(activities: impl IntoIterator<Item = Activity>) -> Vec<DayActivities> {
        let mut days: Vec<DayActivities> = Vec::new();
        let mut index: HashMap<NaiveDate, usize> = HashMap::new();

        for activity in activities {
            let date = activity.occurs_at().date();
            match index.get(&date) {
                Some(&i) => days[i].activities.push(activity),
                None => {
                    index.insert(date, days.len());
                    days.push(DayActivities {
                        date,
                        activities: vec![activity],
                    });
                }
            }
        }

        days
    }
}
