use crate::character_sets::is_scheme_char;
use crate::types::SchemeType;

/// Compare `input` against an already lower-case ASCII string, folding only
/// ASCII letters of `input`.
pub fn lower_case_equals_ascii(input: &str, lower_ascii: &str) -> bool {
    input.len() == lower_ascii.len()
        && input
            .bytes()
            .zip(lower_ascii.bytes())
            .all(|(a, b)| a.to_ascii_lowercase() == b)
}

/// Get the scheme type from a scheme string (any ASCII case).
/// Filters by length and first byte before the full comparison.
pub fn get_scheme_type(scheme: &str) -> SchemeType {
    let bytes = scheme.as_bytes();

    match (bytes.len(), bytes.first().map(u8::to_ascii_lowercase)) {
        (2, Some(b'w')) if lower_case_equals_ascii(scheme, "ws") => SchemeType::Ws,
        (3, Some(b'w')) if lower_case_equals_ascii(scheme, "wss") => SchemeType::Wss,
        (3, Some(b'f')) if lower_case_equals_ascii(scheme, "ftp") => SchemeType::Ftp,
        (4, Some(b'h')) if lower_case_equals_ascii(scheme, "http") => SchemeType::Http,
        (4, Some(b'f')) if lower_case_equals_ascii(scheme, "file") => SchemeType::File,
        (5, Some(b'h')) if lower_case_equals_ascii(scheme, "https") => SchemeType::Https,
        (6, Some(b'g')) if lower_case_equals_ascii(scheme, "gopher") => SchemeType::Gopher,
        _ => SchemeType::NotStandard,
    }
}

/// Returns true if `scheme` is in the standard-scheme registry.
///
/// The registry is a compile-time table; nothing mutates it at runtime.
pub fn is_standard_scheme(scheme: &str) -> bool {
    get_scheme_type(scheme).is_standard()
}

/// Check if `scheme` is a whole, well-formed scheme name (no colon).
pub fn is_valid_scheme(scheme: &str) -> bool {
    let bytes = scheme.as_bytes();
    bytes.first().is_some_and(u8::is_ascii_alphabetic) && bytes.iter().all(|&b| is_scheme_char(b))
}

/// Find the scheme at the start of `input`.
///
/// Returns the index of the terminating `:` when `input` begins with an ASCII
/// letter followed by scheme characters and a colon.
pub fn extract_scheme(input: &str) -> Option<usize> {
    let bytes = input.as_bytes();
    if !bytes.first()?.is_ascii_alphabetic() {
        return None;
    }

    bytes
        .iter()
        .position(|&b| b == b':' || !is_scheme_char(b))
        .filter(|&end| bytes[end] == b':')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_type() {
        assert_eq!(get_scheme_type("http"), SchemeType::Http);
        assert_eq!(get_scheme_type("HTTPS"), SchemeType::Https);
        assert_eq!(get_scheme_type("ftp"), SchemeType::Ftp);
        assert_eq!(get_scheme_type("Gopher"), SchemeType::Gopher);
        assert_eq!(get_scheme_type("custom"), SchemeType::NotStandard);
        assert_eq!(get_scheme_type(""), SchemeType::NotStandard);
    }

    #[test]
    fn test_is_standard_scheme() {
        for scheme in ["http", "https", "file", "ftp", "ws", "wss"] {
            assert!(is_standard_scheme(scheme), "{scheme}");
        }
        assert!(!is_standard_scheme("mailto"));
        assert!(!is_standard_scheme("javascript"));
    }

    #[test]
    fn test_extract_scheme() {
        assert_eq!(extract_scheme("http://a"), Some(4));
        assert_eq!(extract_scheme("svn+ssh:x"), Some(7));
        assert_eq!(extract_scheme("c:/foo"), Some(1));
        assert_eq!(extract_scheme(":foo"), None);
        assert_eq!(extract_scheme("/foo:bar"), None);
        assert_eq!(extract_scheme("a b:c"), None);
        assert_eq!(extract_scheme("http"), None);
        assert_eq!(extract_scheme("1http:"), None);
        assert_eq!(extract_scheme(""), None);
    }

    #[test]
    fn test_is_valid_scheme() {
        assert!(is_valid_scheme("http"));
        assert!(is_valid_scheme("Svn+SSH"));
        assert!(!is_valid_scheme(""));
        assert!(!is_valid_scheme("1a"));
        assert!(!is_valid_scheme("http:"));
    }

    #[test]
    fn test_lower_case_equals_ascii() {
        assert!(lower_case_equals_ascii("HtTp", "http"));
        assert!(!lower_case_equals_ascii("http", "https"));
        assert!(!lower_case_equals_ascii("HTTP", "HTTP"));
    }
}
