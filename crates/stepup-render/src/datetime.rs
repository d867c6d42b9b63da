use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

const DISPLAY_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second] UTC");

/// Display form of a stored millisecond timestamp string.
///
/// Unparsable values are returned verbatim: corrupted history must stay
/// visible, not disappear behind an error.
pub fn format_ms_string(raw: &str) -> String {
    let Ok(ms) = raw.trim().parse::<i64>() else {
        return raw.to_string();
    };
    let Ok(datetime) = OffsetDateTime::from_unix_timestamp_nanos(i128::from(ms) * 1_000_000)
    else {
        return raw.to_string();
    };
    datetime
        .format(&DISPLAY_FORMAT)
        .unwrap_or_else(|_| raw.to_string())
}
