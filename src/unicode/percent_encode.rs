use crate::compat::{Cow, String};
use crate::error::{CanonError, Result};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

// Every set leaves `%` alone: existing escapes are validated and copied,
// never re-escaped. Non-ASCII bytes are always escaped as UTF-8.

/// C0 control percent-encode set, used for opaque paths
pub const C0_CONTROL_SET: &AsciiSet = CONTROLS;

/// Fragment percent-encode set
/// C0 control + space, ", <, >, \`
pub const FRAGMENT_SET: &AsciiSet = &C0_CONTROL_SET
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`');

/// Query percent-encode set
/// C0 control + space, ", #, <, >
pub const QUERY_SET: &AsciiSet = &C0_CONTROL_SET
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>');

/// Path percent-encode set
/// Fragment + #, ?, ^, {, }
pub const PATH_SET: &AsciiSet = &FRAGMENT_SET
    .add(b'#')
    .add(b'?')
    .add(b'^')
    .add(b'{')
    .add(b'}');

/// Userinfo percent-encode set
/// Path + /, :, ;, =, @, [, \, ], |
pub const USERINFO_SET: &AsciiSet = &PATH_SET
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'=')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'|');

/// Check for `%` followed by two hex digits at `pos`.
pub fn is_valid_escape(bytes: &[u8], pos: usize) -> bool {
    matches!(
        bytes.get(pos..pos + 3),
        Some([b'%', hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit()
    )
}

fn push_encoded(buffer: &mut String, input: &str, encode_set: &'static AsciiSet) {
    for chunk in utf8_percent_encode(input, encode_set) {
        buffer.push_str(chunk);
    }
}

/// Write `input` to `buffer`, escaping bytes in `encode_set`.
///
/// A `%` that does not start a valid escape is written as `%25` and reported
/// as [`CanonError::MalformedEscape`]; the rest of the input is still copied.
pub fn percent_encode_into(
    buffer: &mut String,
    input: &str,
    encode_set: &'static AsciiSet,
) -> Result<()> {
    buffer.reserve(input.len());

    let bytes = input.as_bytes();
    let mut outcome = Ok(());
    let mut start = 0;
    for pos in memchr::memchr_iter(b'%', bytes) {
        push_encoded(buffer, &input[start..pos], encode_set);
        if is_valid_escape(bytes, pos) {
            buffer.push('%');
        } else {
            buffer.push_str("%25");
            outcome = Err(CanonError::MalformedEscape);
        }
        start = pos + 1;
    }
    push_encoded(buffer, &input[start..], encode_set);
    outcome
}

/// Escape `chars` of a replacement value that would otherwise be read as a
/// delimiter once the value is spliced into a URL string.
pub fn escape_delimiters<'a>(input: &'a str, chars: &[u8]) -> Cow<'a, str> {
    if !input.bytes().any(|b| chars.contains(&b)) {
        return Cow::Borrowed(input);
    }

    let mut escaped = String::with_capacity(input.len() + 8);
    for c in input.chars() {
        match u8::try_from(c) {
            Ok(b) if chars.contains(&b) => {
                escaped.push('%');
                escaped.push(char::from(HEX_UPPER[usize::from(b >> 4)]));
                escaped.push(char::from(HEX_UPPER[usize::from(b & 0xF)]));
            }
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Decode a host for canonicalization.
/// Every `%` must start a valid escape and the decoded bytes must be UTF-8.
pub fn percent_decode_host(input: &str) -> Result<Cow<'_, str>> {
    let bytes = input.as_bytes();
    if memchr::memchr(b'%', bytes).is_none() {
        return Ok(Cow::Borrowed(input));
    }
    if !memchr::memchr_iter(b'%', bytes).all(|pos| is_valid_escape(bytes, pos)) {
        return Err(CanonError::MalformedEscape);
    }

    percent_encoding::percent_decode_str(input)
        .decode_utf8()
        .map(|decoded| Cow::Owned(decoded.into_owned()))
        .map_err(|_| CanonError::MalformedEscape)
}
