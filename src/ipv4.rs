/// IPv4 literal parsing: decimal, octal, and hexadecimal parts
use crate::compat::String;
use crate::error::{CanonError, Result};
use core::fmt::Write;

/// Parse an IPv4 literal into a u32.
///
/// Call only on hosts accepted by [`crate::checkers::is_ipv4`]; a host that
/// passes that check but fails here (overflow, bad octal digit) is malformed.
/// Supports:
/// - Decimal: 192.168.1.1
/// - Hex: 0xC0A80101
/// - Octal: 0300.0250.01.01
/// - Short forms: 127.1, 192.0x00A80001
pub fn parse_ipv4(input: &str) -> Result<u32> {
    let input = input.strip_suffix('.').unwrap_or(input);

    let mut numbers = [0u64; 4];
    let mut count = 0;
    for part in input.split('.') {
        let slot = numbers.get_mut(count).ok_or(CanonError::MalformedAuthority)?;
        *slot = parse_ipv4_number(part)?;
        count += 1;
    }
    if count == 0 {
        return Err(CanonError::MalformedAuthority);
    }

    // All parts but the last are single bytes; the last fills what remains.
    let (leading, last) = numbers[..count].split_at(count - 1);
    let last = last[0];
    if last >= 256u64.pow((5 - count) as u32) || leading.iter().any(|&n| n >= 256) {
        return Err(CanonError::MalformedAuthority);
    }

    let mut address = last as u32;
    for (i, &byte) in leading.iter().enumerate() {
        address |= (byte as u32) << ((3 - i) * 8);
    }
    Ok(address)
}

/// Parse a single IPv4 part (decimal, `0x` hex, or `0`-prefixed octal).
fn parse_ipv4_number(input: &str) -> Result<u64> {
    if let Some(hex) = input.strip_prefix("0x").or_else(|| input.strip_prefix("0X")) {
        let hex = hex.trim_start_matches('0');
        if hex.is_empty() {
            return Ok(0);
        }
        return u64::from_str_radix(hex, 16).map_err(|_| CanonError::MalformedAuthority);
    }

    if input.len() >= 2 && input.starts_with('0') {
        let octal = input.trim_start_matches('0');
        if octal.is_empty() {
            return Ok(0);
        }
        return u64::from_str_radix(octal, 8).map_err(|_| CanonError::MalformedAuthority);
    }

    let decimal = input.trim_start_matches('0');
    if decimal.is_empty() && !input.is_empty() {
        return Ok(0);
    }
    decimal
        .parse::<u64>()
        .map_err(|_| CanonError::MalformedAuthority)
}

/// Write an IPv4 address in dotted decimal notation
pub fn serialize_ipv4_into(buffer: &mut String, ipv4: u32) {
    let [a, b, c, d] = ipv4.to_be_bytes();
    let _ = write!(buffer, "{a}.{b}.{c}.{d}");
}
