use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, TimeZone};

/// Rendering of every normalized timestamp.
pub const OUTPUT_FORMAT: &str = "%Y.%m.%d %H:%M:%S";

/// `ctime`-style stamp as printed by `qstat -f`, e.g. `Mon Apr 28 08:58:54 2025`.
pub const TEXTUAL_FORMAT: &str = "%a %b %d %H:%M:%S %Y";

/// Normalize a scheduler timestamp to [OUTPUT_FORMAT] in local time.
///
/// Accepted, first match wins:
/// - [TEXTUAL_FORMAT]
/// - Unix epoch seconds (up to 10 digits, except 8)
/// - `[[CC]YY]MMDDhhmm[.ss]`
///
/// Anything else is returned unchanged.
pub fn normalize_time(raw: &str) -> String {
    let token = raw.trim();
    parse_textual(token)
        .or_else(|| parse_epoch(token))
        .or_else(|| parse_compact(token, Local::now().year()))
        .map(|dt| dt.format(OUTPUT_FORMAT).to_string())
        .unwrap_or_else(|| raw.to_string())
}

fn parse_textual(token: &str) -> Option<NaiveDateTime> {
    // single digit days are space padded
    let collapsed = token.split_whitespace().collect::<Vec<_>>().join(" ");
    NaiveDateTime::parse_from_str(&collapsed, TEXTUAL_FORMAT).ok()
}

/// Eight digits belong to the compact `MMDDhhmm` form.
fn parse_epoch(token: &str) -> Option<NaiveDateTime> {
    if token.len() > 10 || token.len() == 8 || !is_digits(token) {
        return None;
    }
    let secs: i64 = token.parse().ok()?;
    Local
        .timestamp_opt(secs, 0)
        .single()
        .map(|dt| dt.naive_local())
}

/// `touch -t` style stamp. Eight digits take the current year, ten digits
/// pivot two-digit years at 69 like POSIX.
pub fn parse_compact(token: &str, current_year: i32) -> Option<NaiveDateTime> {
    let (digits, seconds) = match token.split_once('.') {
        Some((digits, seconds)) => (digits, Some(seconds)),
        None => (token, None),
    };
    if !is_digits(digits) {
        return None;
    }
    let second = match seconds {
        None => 0,
        Some(s) if s.len() == 2 && is_digits(s) => s.parse().ok()?,
        Some(_) => return None,
    };

    let (year, rest) = match digits.len() {
        12 => (digits[..4].parse().ok()?, &digits[4..]),
        10 => {
            let yy: i32 = digits[..2].parse().ok()?;
            let century = if yy >= 69 { 1900 } else { 2000 };
            (century + yy, &digits[2..])
        }
        8 => (current_year, digits),
        _ => return None,
    };

    let pair = |at: usize| rest[at..at + 2].parse::<u32>().ok();
    NaiveDate::from_ymd_opt(year, pair(0)?, pair(2)?)?.and_hms_opt(pair(4)?, pair(6)?, second)
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
