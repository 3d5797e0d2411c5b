/// Converts a byte-size string such as `"4096"`, `"64k"` or `"2MB"` to a
/// plain byte count.
///
/// Suffixes `k`/`kb`, `m`/`mb` and `g`/`gb` are accepted case-insensitively
/// and use binary multiples. Anything that isn't a non-negative integer with
/// an optional recognized suffix yields `0`.
///
/// # Examples
///
/// ```
/// use multiform::parse_byte_size;
///
/// assert_eq!(parse_byte_size("4096"), 4096);
/// assert_eq!(parse_byte_size("64K"), 64 * 1024);
/// assert_eq!(parse_byte_size("2mb"), 2 * 1024 * 1024);
/// assert_eq!(parse_byte_size("ten"), 0);
/// ```
pub fn parse_byte_size<T: AsRef<str>>(value: T) -> u64 {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * 1024;
    const GIB: u64 = 1024 * 1024 * 1024;

    let lower = value.as_ref().trim().to_ascii_lowercase();

    let (number, multiplier) = if let Some(rest) = lower.strip_suffix("kb") {
        (rest, KIB)
    } else if let Some(rest) = lower.strip_suffix("mb") {
        (rest, MIB)
    } else if let Some(rest) = lower.strip_suffix("gb") {
        (rest, GIB)
    } else if let Some(rest) = lower.strip_suffix('k') {
        (rest, KIB)
    } else if let Some(rest) = lower.strip_suffix('m') {
        (rest, MIB)
    } else if let Some(rest) = lower.strip_suffix('g') {
        (rest, GIB)
    } else {
        (lower.as_str(), 1)
    };

    number
        .trim()
        .parse::<u64>()
        .map_or(0, |n| n.saturating_mul(multiplier))
}
