//! The mandatory periodic schedule (spec §4.6), copied verbatim from
//! `original_source/app/tasks/celery_app.py`'s `beat_schedule` into the
//! cadences below.

use chrono::{Datelike, Timelike, Weekday};
use timestamp::Timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cadence {
    /// Every day at the given UTC hour:minute.
    Daily { hour: u32, minute: u32 },
    /// Every week on the given weekday, at the given UTC hour:minute.
    Weekly { weekday: Weekday, hour: u32, minute: u32 },
    /// Every N minutes, irrespective of wall-clock alignment.
    EveryMinutes(u32),
}

#[derive(Debug, Clone, Copy)]
pub struct ScheduleEntry {
    pub task_name: &'static str,
    pub cadence: Cadence,
}

/// The spec §4.6 table, verbatim.
pub const SCHEDULE: &[ScheduleEntry] = &[
    ScheduleEntry { task_name: "warm-popular-regions", cadence: Cadence::Daily { hour: 2, minute: 0 } },
    ScheduleEntry { task_name: "analyze-usage-patterns", cadence: Cadence::Weekly { weekday: Weekday::Mon, hour: 3, minute: 0 } },
    ScheduleEntry { task_name: "cleanup-expired", cadence: Cadence::Daily { hour: 3, minute: 0 } },
    ScheduleEntry { task_name: "cleanup-orphaned", cadence: Cadence::Weekly { weekday: Weekday::Sun, hour: 4, minute: 0 } },
    ScheduleEntry { task_name: "health-check", cadence: Cadence::EveryMinutes(5) },
    ScheduleEntry { task_name: "collect-metrics", cadence: Cadence::EveryMinutes(60) },
];

impl Cadence {
    /// Whether this cadence is due, given the last time it fired (`None` if
    /// it has never fired) and the current time. `Daily`/`Weekly` fire once
    /// the clock crosses their target hour:minute and haven't already fired
    /// since; `EveryMinutes` fires once its interval has elapsed.
    pub fn is_due(&self, last_fired: Option<Timestamp>, now: Timestamp) -> bool {
        match *self {
            Cadence::EveryMinutes(n) => match last_fired {
                None => true,
                Some(last) => now.as_seconds() - last.as_seconds() >= i64::from(n) * 60,
            },
            Cadence::Daily { hour, minute } => {
                let dt = now.as_datetime();
                if dt.hour() != hour || dt.minute() != minute {
                    return false;
                }
                match last_fired {
                    None => true,
                    Some(last) => now.as_seconds() - last.as_seconds() >= 60,
                }
            }
            Cadence::Weekly { weekday, hour, minute } => {
                let dt = now.as_datetime();
                if dt.weekday() != weekday || dt.hour() != hour || dt.minute() != minute {
                    return false;
                }
                match last_fired {
                    None => true,
                    Some(last) => now.as_seconds() - last.as_seconds() >= 60,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn ts_at(secs_since_epoch: u64) -> Timestamp {
        Timestamp::from_datetime(chrono::DateTime::<chrono::Utc>::from(
            UNIX_EPOCH + std::time::Duration::from_secs(secs_since_epoch),
        ))
    }

    #[test]
    fn every_minutes_is_due_on_first_run() {
        let cadence = Cadence::EveryMinutes(5);
        assert!(cadence.is_due(None, Timestamp::now()));
    }

    #[test]
    fn every_minutes_respects_the_interval() {
        let cadence = Cadence::EveryMinutes(5);
        let last = Timestamp::now();
        assert!(!cadence.is_due(Some(last), last));
        let later = ts_at((last.as_seconds() + 301) as u64);
        assert!(cadence.is_due(Some(last), later));
    }

    #[test]
    fn daily_fires_only_at_its_target_minute() {
        // 2024-01-01 is a Monday; 02:00:00 UTC.
        let target = ts_at(1704074400);
        let cadence = Cadence::Daily { hour: 2, minute: 0 };
        assert!(cadence.is_due(None, target));

        let an_hour_later = ts_at(1704074400 + 3600);
        assert!(!cadence.is_due(None, an_hour_later));
    }

    #[test]
    fn weekly_requires_both_weekday_and_time_to_match() {
        // 2024-01-01 00:00:00 UTC is a Monday.
        let monday_3am = ts_at(1704074400 + 3600);
        let cadence = Cadence::Weekly { weekday: Weekday::Mon, hour: 3, minute: 0 };
        assert!(cadence.is_due(None, monday_3am));

        let tuesday_3am = ts_at(1704074400 + 3600 + 24 * 3600);
        assert!(!cadence.is_due(None, tuesday_3am));
    }

    #[test]
    fn schedule_table_matches_the_mandatory_entries() {
        let names: Vec<_> = SCHEDULE.iter().map(|e| e.task_name).collect();
        assert_eq!(
            names,
            vec![
                "warm-popular-regions",
                "analyze-usage-patterns",
                "cleanup-expired",
                "cleanup-orphaned",
                "health-check",
                "collect-metrics",
            ]
        );
    }
}
