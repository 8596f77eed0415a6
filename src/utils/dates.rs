use chrono::{DateTime, Duration, Utc};

/// "Sep 1, 2023" style, matching what the booking pages display.
pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

pub fn format_date_with_time(date: DateTime<Utc>) -> String {
    date.format("%b %-d, %Y, %-I:%M %p").to_string()
}

/// Number of nights between check-in and check-out: ceiling of the day
/// difference, so any partial day counts as a full night.
pub fn calculate_nights(check_in: DateTime<Utc>, check_out: DateTime<Utc>) -> i64 {
    let seconds = (check_out - check_in).num_seconds();
    (seconds as f64 / 86_400.0).ceil() as i64
}

/// True when the date falls before the start of the current UTC day.
pub fn is_date_in_past(date: DateTime<Utc>) -> bool {
    date.date_naive() < Utc::now().date_naive()
}

pub fn add_days(date: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    date + Duration::days(days)
}

pub fn format_date_range(start: DateTime<Utc>, end: DateTime<Utc>) -> String {
    format!("{} - {}", format_date(start), format_date(end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_calculate_nights_whole_days() {
        assert_eq!(calculate_nights(day(2024, 1, 1), day(2024, 1, 6)), 5);
        assert_eq!(calculate_nights(day(2024, 1, 1), day(2024, 1, 2)), 1);
    }

    #[test]
    fn test_calculate_nights_partial_day_rounds_up() {
        let check_in = Utc.with_ymd_and_hms(2024, 1, 1, 15, 0, 0).unwrap();
        let check_out = Utc.with_ymd_and_hms(2024, 1, 3, 11, 0, 0).unwrap();
        assert_eq!(calculate_nights(check_in, check_out), 2);
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(day(2024, 1, 6)), "Jan 6, 2024");
        assert_eq!(format_date(day(2023, 12, 25)), "Dec 25, 2023");
    }

    #[test]
    fn test_format_date_range() {
        assert_eq!(
            format_date_range(day(2024, 1, 1), day(2024, 1, 6)),
            "Jan 1, 2024 - Jan 6, 2024"
        );
    }

    #[test]
    fn test_add_days() {
        assert_eq!(add_days(day(2024, 1, 30), 3), day(2024, 2, 2));
    }

    #[test]
    fn test_is_date_in_past() {
        assert!(is_date_in_past(day(2020, 1, 1)));
        assert!(!is_date_in_past(Utc::now() + Duration::days(30)));
    }
}
