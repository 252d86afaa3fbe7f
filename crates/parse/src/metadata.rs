use chrono::NaiveDate;

use crate::re;

// Month-first is assumed for all three shapes (US convention).
re!(re_date_slash, r"\b(\d{2})/(\d{2})/(\d{4})\b");
re!(re_date_dash, r"\b(\d{2})-(\d{2})-(\d{4})\b");
re!(re_date_dot, r"\b(\d{2})\.(\d{2})\.(\d{4})\b");

/// First non-empty line of the original-case transcript that contains
/// at least one alphabetic character and no lower-case one.
pub fn store_name(transcript: &str) -> Option<String> {
    transcript
        .lines()
        .map(str::trim)
        .find(|line| {
            !line.is_empty()
                && line.chars().any(|c| c.is_alphabetic())
                && !line.chars().any(|c| c.is_lowercase())
        })
        .map(str::to_string)
}

/// First date that actually parses, scanning lines in order and the
/// slash/dash/dot patterns in priority order within each line. A match
/// that fails calendar validation falls through to the next pattern.
pub fn purchase_date(transcript: &str) -> Option<NaiveDate> {
    for line in transcript.lines() {
        for pattern in [re_date_slash(), re_date_dash(), re_date_dot()] {
            let Some(caps) = pattern.captures(line) else {
                continue;
            };
            let (month, day, year): (u32, u32, i32) = match (
                caps[1].parse(),
                caps[2].parse(),
                caps[3].parse(),
            ) {
                (Ok(m), Ok(d), Ok(y)) => (m, d, y),
                _ => continue,
            };
            if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                return Some(date);
            }
        }
    }
    None
}
