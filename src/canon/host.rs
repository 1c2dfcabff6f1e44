use crate::character_sets::{HostByte, classify_host_byte};
use crate::checkers::is_ipv4;
use crate::compat::String;
use crate::error::{CanonError, Result};
use crate::ipv4::{parse_ipv4, serialize_ipv4_into};
use crate::ipv6::{parse_ipv6, serialize_ipv6_into};
use crate::unicode::idna::{domain_to_ascii, has_punycode};
use crate::unicode::percent_encode::{USERINFO_SET, percent_decode_host, percent_encode_into};

/// Write the canonical form of a non-empty `host`.
///
/// Bracketed hosts must be IPv6 literals. Other hosts are percent-decoded,
/// run through IDNA when they are not plain ASCII, then rewritten as a
/// dotted quad if every label is numeric. On failure the raw host is written
/// escaped.
pub(super) fn canonicalize_host(spec: &mut String, host: &str) -> Result<()> {
    if host.starts_with('[') {
        return match bracketed(host).map(parse_ipv6) {
            Some(Ok(pieces)) => {
                serialize_ipv6_into(spec, &pieces);
                Ok(())
            }
            _ => write_invalid_host(spec, host, CanonError::MalformedAuthority),
        };
    }

    // Fast path: ASCII without escapes or Punycode needs no decoding or IDNA
    if host.is_ascii() && memchr::memchr(b'%', host.as_bytes()).is_none() && !has_punycode(host) {
        return write_ascii_host(spec, host);
    }

    let decoded = match percent_decode_host(host) {
        Ok(decoded) => decoded,
        Err(error) => return write_invalid_host(spec, host, error),
    };
    match domain_to_ascii(&decoded) {
        Ok(ascii) => write_ascii_host(spec, &ascii),
        Err(error) => write_invalid_host(spec, host, error),
    }
}

/// Check if `host` (as found in a canonical spec) is an IPv4 or IPv6 literal.
pub(crate) fn is_ip_literal(host: &str) -> bool {
    if let Some(inner) = bracketed(host) {
        return parse_ipv6(inner).is_ok();
    }
    is_ipv4(host) && parse_ipv4(host).is_ok()
}

fn bracketed(host: &str) -> Option<&str> {
    host.strip_prefix('[')?.strip_suffix(']')
}

fn write_ascii_host(spec: &mut String, host: &str) -> Result<()> {
    if host.is_empty() {
        return Err(CanonError::EmptyHost);
    }
    if is_ipv4(host) {
        return match parse_ipv4(host) {
            Ok(address) => {
                serialize_ipv4_into(spec, address);
                Ok(())
            }
            Err(error) => write_invalid_host(spec, host, error),
        };
    }

    let begin = spec.len();
    for b in host.bytes() {
        match classify_host_byte(b) {
            HostByte::Passthrough => spec.push(char::from(b)),
            HostByte::Uppercase => spec.push(char::from(b.to_ascii_lowercase())),
            HostByte::Forbidden => {
                spec.truncate(begin);
                return write_invalid_host(spec, host, CanonError::MalformedAuthority);
            }
        }
    }
    Ok(())
}

fn write_invalid_host(spec: &mut String, host: &str, error: CanonError) -> Result<()> {
    let _ = percent_encode_into(spec, host, USERINFO_SET);
    Err(error)
}
