use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

pub const UNKNOWN_TIME: &str = "some time ago";

/// Coarse, human-relative label for a Unix timestamp, measured against now.
pub fn format_relative(timestamp: Option<i64>) -> String {
    format_relative_at(timestamp, Local::now())
}

/// [`format_relative`] against an explicit `now`. Older dates are rendered
/// in `now`'s time zone. Never panics; a timestamp in the future counts as
/// just now.
pub fn format_relative_at<Tz>(timestamp: Option<i64>, now: DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    // A zero timestamp means the source left it blank.
    let Some(created) = timestamp
        .filter(|ts| *ts != 0)
        .and_then(|ts| DateTime::from_timestamp(ts, 0))
    else {
        return UNKNOWN_TIME.to_string();
    };

    let delta = now.timestamp().saturating_sub(created.timestamp());
    match delta {
        d if d < MINUTE => "< 1 min ago".to_string(),
        d if d < HOUR => format!("{} min ago", d / MINUTE),
        d if d < DAY => match d / HOUR {
            1 => "1 hr ago".to_string(),
            hours => format!("{} hrs ago", hours),
        },
        d if d < 2 * DAY => "yesterday".to_string(),
        d if d < 3 * DAY => "2 days ago".to_string(),
        _ => created
            .with_timezone(&now.timezone())
            .format("%-m/%-d/%Y")
            .to_string(),
    }
}

/// Long-form date for the masthead, e.g. `Sunday, January 7, 2024`.
pub fn format_masthead_date<Tz>(date: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    date.format("%A, %B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
    }

    fn ago(seconds: i64) -> String {
        format_relative_at(Some(now().timestamp() - seconds), now())
    }

    #[test]
    fn test_unknown_timestamp() {
        assert_eq!(format_relative_at(None, now()), "some time ago");
        assert_eq!(format_relative_at(Some(0), now()), "some time ago");
        assert_eq!(format_relative(None), "some time ago");
    }

    #[test]
    fn test_under_a_minute() {
        assert_eq!(ago(30), "< 1 min ago");
        assert_eq!(ago(0), "< 1 min ago");
    }

    #[test]
    fn test_future_timestamp_is_just_now() {
        assert_eq!(ago(-120), "< 1 min ago");
    }

    #[test]
    fn test_minutes() {
        assert_eq!(ago(60), "1 min ago");
        assert_eq!(ago(59 * 60 + 59), "59 min ago");
    }

    #[test]
    fn test_hours_singular_and_plural() {
        assert_eq!(ago(3600), "1 hr ago");
        assert_eq!(ago(7199), "1 hr ago");
        assert_eq!(ago(7200), "2 hrs ago");
        assert_eq!(ago(23 * 3600), "23 hrs ago");
    }

    #[test]
    fn test_days() {
        assert_eq!(ago(DAY), "yesterday");
        assert_eq!(ago(2 * DAY - 1), "yesterday");
        assert_eq!(ago(2 * DAY), "2 days ago");
        assert_eq!(ago(3 * DAY - 1), "2 days ago");
    }

    #[test]
    fn test_older_dates_are_absolute() {
        assert_eq!(ago(10 * DAY), "3/5/2024");
    }

    #[test]
    fn test_extreme_timestamps_do_not_panic() {
        assert_eq!(format_relative_at(Some(i64::MAX), now()), "some time ago");
        assert_eq!(format_relative_at(Some(i64::MIN), now()), "some time ago");
        assert_eq!(format_relative_at(Some(1), now()), "1/1/1970");
    }

    #[test]
    fn test_masthead_date() {
        let date = Utc.with_ymd_and_hms(2024, 1, 7, 9, 30, 0).unwrap();
        assert_eq!(format_masthead_date(&date), "Sunday, January 7, 2024");
    }
}
