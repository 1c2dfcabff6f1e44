use crate::character_sets::is_url_slash;

/// Check if a host is written entirely as IPv4 numbers.
///
/// Every dot-separated part must be decimal digits or `0x` followed by hex
/// digits; one trailing dot is allowed. More than four parts means the host is
/// a plain name, as does any part with other characters.
pub fn is_ipv4(input: &str) -> bool {
    let input = input.strip_suffix('.').unwrap_or(input);
    if input.is_empty() {
        return false;
    }

    let mut parts = 0;
    for part in input.split('.') {
        parts += 1;
        if parts > 4 || !is_ipv4_number(part) {
            return false;
        }
    }
    true
}

fn is_ipv4_number(part: &str) -> bool {
    if let Some(hex) = part.strip_prefix("0x").or_else(|| part.strip_prefix("0X")) {
        return hex.bytes().all(|b| b.is_ascii_hexdigit());
    }
    !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a port string to u16.
/// Returns None if empty, contains non-digit characters, or is out of range.
/// Any number of leading zeros is accepted.
pub fn parse_port(port: &str) -> Option<u16> {
    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let significant = port.trim_start_matches('0');
    if significant.is_empty() {
        return Some(0);
    }
    significant.parse::<u16>().ok()
}

/// Number of `/` or `\` at `start`; zero when `start` is past the end.
pub fn count_consecutive_slashes(bytes: &[u8], start: usize) -> usize {
    bytes
        .get(start..)
        .map_or(0, |rest| rest.iter().take_while(|&&b| is_url_slash(b)).count())
}

/// Check if `start` begins a drive spec: an ASCII letter then `:` or `|`.
/// Offsets at or past the end never match.
pub fn does_begin_windows_drive_spec(bytes: &[u8], start: usize) -> bool {
    match bytes.get(start..) {
        Some([letter, separator, ..]) => {
            letter.is_ascii_alphabetic() && matches!(separator, b':' | b'|')
        }
        _ => false,
    }
}

/// Like [`does_begin_windows_drive_spec`] but with a leading slash, `/C:`.
pub fn does_begin_slash_windows_drive_spec(bytes: &[u8], start: usize) -> bool {
    bytes.get(start).is_some_and(|&b| is_url_slash(b))
        && does_begin_windows_drive_spec(bytes, start + 1)
}

/// Check if `start` begins a UNC path (two separators).
/// Offsets at or past the end never match.
pub fn does_begin_unc_path(bytes: &[u8], start: usize) -> bool {
    count_consecutive_slashes(bytes, start) >= 2
}
