use jiff::{Timestamp, civil, tz};

/// Format a timestamp as a short date in the browser's timezone.
pub fn format_date(timestamp: Timestamp) -> String {
    timestamp
        .to_zoned(tz::TimeZone::system())
        .strftime("%B %d, %Y")
        .to_string()
}

/// Format a civil date (e.g. an inspection date) for display.
pub fn format_civil_date(date: civil::Date) -> String {
    date.strftime("%B %d, %Y").to_string()
}
