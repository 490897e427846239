/// PBS size suffixes and their size in kilobytes.
const SUFFIXES: &[(&str, f64)] = &[
    ("pb", 1024.0 * 1024.0 * 1024.0 * 1024.0),
    ("tb", 1024.0 * 1024.0 * 1024.0),
    ("gb", 1024.0 * 1024.0),
    ("mb", 1024.0),
    ("kb", 1.0),
    ("b", 1.0 / 1024.0),
];

const KB_PER_GB: f64 = 1024.0 * 1024.0;

/// Read a PBS size such as `4194304kb` or `16gb` as kilobytes. A bare
/// number is already in kilobytes.
pub fn parse_kilobytes(raw: &str) -> Option<f64> {
    let raw = raw.trim().to_ascii_lowercase();
    let (number, factor) = SUFFIXES
        .iter()
        .find_map(|(suffix, factor)| raw.strip_suffix(suffix).map(|n| (n, *factor)))
        .unwrap_or((raw.as_str(), 1.0));
    let number = number.trim_end();
    if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    number.parse::<u64>().ok().map(|n| n as f64 * factor)
}

pub fn format_gigabytes(kb: f64) -> String {
    format!("{:.2} GB", kb / KB_PER_GB)
}

/// `resources_used.mem` as gigabytes with two decimals.
pub fn memory_gb(raw: &str) -> Option<String> {
    parse_kilobytes(raw).map(format_gigabytes)
}
