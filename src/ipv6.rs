/// IPv6 literal parsing and RFC 5952 serialization
use crate::compat::{String, Vec};
use crate::error::{CanonError, Result};
use core::fmt::Write;

/// Parse the inside of a bracketed IPv6 literal (e.g. "`::1`" or "`2001:db8::1`").
/// Returns the 8 u16 pieces if valid.
pub fn parse_ipv6(input: &str) -> Result<[u16; 8]> {
    // Zone ids have no place in a URL host.
    if input.is_empty() || input.contains('%') {
        return Err(CanonError::MalformedAuthority);
    }

    // A dotted tail after the last colon is an embedded IPv4 address.
    let (hex_part, ipv4_tail) = match input.rfind(':') {
        Some(pos) if input[pos + 1..].contains('.') => {
            let tail = parse_dotted_quad(&input[pos + 1..])?;
            // Keep the colon when it is half of a "::".
            let keep = if input[..pos].ends_with(':') { pos + 1 } else { pos };
            (&input[..keep], Some(tail))
        }
        _ => (input, None),
    };
    let available = if ipv4_tail.is_some() { 6 } else { 8 };

    let mut pieces = [0u16; 8];
    match hex_part.find("::") {
        None => {
            let parsed = parse_pieces(hex_part)?;
            if parsed.len() != available {
                return Err(CanonError::MalformedAuthority);
            }
            pieces[..available].copy_from_slice(&parsed);
        }
        Some(pos) => {
            let before = parse_pieces(&hex_part[..pos])?;
            let after = parse_pieces(&hex_part[pos + 2..])?;
            let total = before.len() + after.len();
            if total >= available {
                return Err(CanonError::MalformedAuthority);
            }
            pieces[..before.len()].copy_from_slice(&before);
            let after_start = available - after.len();
            pieces[after_start..available].copy_from_slice(&after);
        }
    }

    if let Some(ipv4) = ipv4_tail {
        pieces[6] = (ipv4 >> 16) as u16;
        pieces[7] = (ipv4 & 0xFFFF) as u16;
    }
    Ok(pieces)
}

/// Parse a single hex piece (0-ffff).
fn parse_hex_piece(s: &str) -> Result<u16> {
    if s.is_empty() || s.len() > 4 {
        return Err(CanonError::MalformedAuthority);
    }
    u16::from_str_radix(s, 16).map_err(|_| CanonError::MalformedAuthority)
}

/// Parse colon-separated hex pieces from a string.
fn parse_pieces(s: &str) -> Result<Vec<u16>> {
    if s.is_empty() {
        return Ok(Vec::new());
    }
    s.split(':').map(parse_hex_piece).collect()
}

/// Embedded IPv4 must be a plain four-part decimal address.
fn parse_dotted_quad(s: &str) -> Result<u32> {
    let mut count = 0;
    let address = s.split('.').try_fold(0u32, |acc, part| {
        count += 1;
        if part.is_empty() || part.len() > 3 || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CanonError::MalformedAuthority);
        }
        let byte: u8 = part.parse().map_err(|_| CanonError::MalformedAuthority)?;
        Ok((acc << 8) | u32::from(byte))
    })?;
    if count == 4 {
        Ok(address)
    } else {
        Err(CanonError::MalformedAuthority)
    }
}

/// Write `[pieces]` with the longest run of two or more zero pieces compressed.
pub fn serialize_ipv6_into(buffer: &mut String, pieces: &[u16; 8]) {
    let compress = longest_zero_run(pieces).filter(|run| run.len() > 1);

    buffer.push('[');
    let mut i = 0;
    while i < 8 {
        if let Some(ref run) = compress
            && run.start == i
        {
            buffer.push_str("::");
            i = run.end;
            continue;
        }
        if i > 0 && !buffer.ends_with("::") {
            buffer.push(':');
        }
        let _ = write!(buffer, "{:x}", pieces[i]);
        i += 1;
    }
    buffer.push(']');
}

/// Find the first longest run of zero pieces.
fn longest_zero_run(pieces: &[u16; 8]) -> Option<core::ops::Range<usize>> {
    let mut best: Option<core::ops::Range<usize>> = None;
    let mut start = None;

    for i in 0..=8 {
        let is_zero = pieces.get(i).is_some_and(|&p| p == 0);
        match (is_zero, start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                if best.as_ref().is_none_or(|b| i - s > b.len()) {
                    best = Some(s..i);
                }
                start = None;
            }
            _ => {}
        }
    }
    best
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn round_trip(input: &str) -> String {
        let mut out = String::new();
        serialize_ipv6_into(&mut out, &parse_ipv6(input).unwrap());
        out
    }

    #[test]
    fn test_parse_ipv6_loopback() {
        assert_eq!(parse_ipv6("::1").unwrap(), [0, 0, 0, 0, 0, 0, 0, 1]);
        assert_eq!(parse_ipv6("::").unwrap(), [0; 8]);
    }

    #[test]
    fn test_parse_ipv6_full_and_compressed() {
        assert_eq!(
            parse_ipv6("2001:db8:0:0:1:0:0:1").unwrap(),
            [0x2001, 0xdb8, 0, 0, 1, 0, 0, 1]
        );
        assert_eq!(
            parse_ipv6("2001:DB8::1").unwrap(),
            [0x2001, 0xdb8, 0, 0, 0, 0, 0, 1]
        );
    }

    #[test]
    fn test_parse_ipv6_with_ipv4() {
        assert_eq!(
            parse_ipv6("::127.0.0.1").unwrap(),
            [0, 0, 0, 0, 0, 0, 0x7f00, 0x0001]
        );
        assert_eq!(
            parse_ipv6("::ffff:192.168.1.1").unwrap(),
            [0, 0, 0, 0, 0, 0xffff, 0xc0a8, 0x0101]
        );
        assert_eq!(
            parse_ipv6("1:2:3:4:5:6:1.2.3.4").unwrap(),
            [1, 2, 3, 4, 5, 6, 0x0102, 0x0304]
        );
    }

    #[test]
    fn test_parse_ipv6_rejects() {
        for bad in [
            "", ":", ":::", "1::2::3", "1:2:3:4:5:6:7:8:9", "1:2:3", "fe80::1%eth0", "12345::",
            "::1.2.3", "::256.1.1.1", "g::1", "1:2:3:4:5:6:7::8",
        ] {
            assert!(parse_ipv6(bad).is_err(), "{bad}");
        }
    }

    #[test]
    fn test_serialize_ipv6() {
        assert_eq!(round_trip("::1"), "[::1]");
        assert_eq!(round_trip("2001:db8:0:0:0:0:0:1"), "[2001:db8::1]");
        assert_eq!(round_trip("1:0:0:2:0:0:0:3"), "[1:0:0:2::3]");
        assert_eq!(round_trip("1:0:2:3:4:5:6:7"), "[1:0:2:3:4:5:6:7]");
        assert_eq!(round_trip("::"), "[::]");
    }
}
