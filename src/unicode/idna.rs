use crate::compat::String;
use crate::error::{CanonError, Result};

/// Check if 4 bytes match "xn--" (case insensitive)
fn is_punycode_prefix(slice: &[u8]) -> bool {
    slice.len() >= 4
        && matches!(slice[0], b'x' | b'X')
        && matches!(slice[1], b'n' | b'N')
        && slice[2] == b'-'
        && slice[3] == b'-'
}

/// Check if any label of the domain starts with the Punycode `xn--` prefix
pub fn has_punycode(domain: &str) -> bool {
    let bytes = domain.as_bytes();
    if bytes.len() < 4 {
        return false;
    }

    if is_punycode_prefix(bytes) {
        return true;
    }

    memchr::memchr_iter(b'.', bytes).any(|pos| is_punycode_prefix(&bytes[pos + 1..]))
}

/// Run a percent-decoded host through IDNA `ToASCII`.
///
/// Plain ASCII names without Punycode labels only need lower-casing; the
/// rest is delegated to the `idna` crate.
pub fn domain_to_ascii(domain: &str) -> Result<String> {
    if domain.is_ascii() && !has_punycode(domain) {
        return Ok(domain.to_ascii_lowercase());
    }

    idna::domain_to_ascii(domain).map_err(|_| CanonError::MalformedAuthority)
}
