/// Check if a character is an ASCII tab or newline
pub fn is_ascii_tab_or_newline(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r')
}

/// Both slash directions separate path segments in standard URLs
pub fn is_url_slash(b: u8) -> bool {
    b == b'/' || b == b'\\'
}

/// Characters allowed after the first letter of a scheme
pub fn is_scheme_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.')
}

/// Bytes that end the authority section of a standard URL
pub fn is_authority_terminator(b: u8) -> bool {
    matches!(b, b'/' | b'\\' | b'?' | b'#')
}

/// How a byte of an ASCII hostname is written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum HostByte {
    Forbidden,
    Passthrough,
    Uppercase,
}

const HOST_CHAR_TABLE: [HostByte; 128] = {
    let mut table = [HostByte::Passthrough; 128];

    // C0 controls, space and DEL
    let mut i = 0;
    while i <= 0x20 {
        table[i] = HostByte::Forbidden;
        i += 1;
    }
    table[0x7F] = HostByte::Forbidden;

    let mut i = b'A';
    while i <= b'Z' {
        table[i as usize] = HostByte::Uppercase;
        i += 1;
    }

    let forbidden = b"#%/:<>?@[\\]^|";
    let mut i = 0;
    while i < forbidden.len() {
        table[forbidden[i] as usize] = HostByte::Forbidden;
        i += 1;
    }

    table
};

/// Classify a byte of a decoded, ASCII hostname (branchless via lookup table)
pub fn classify_host_byte(b: u8) -> HostByte {
    if b.is_ascii() {
        HOST_CHAR_TABLE[b as usize]
    } else {
        HostByte::Forbidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_host_byte() {
        assert_eq!(classify_host_byte(b'a'), HostByte::Passthrough);
        assert_eq!(classify_host_byte(b'-'), HostByte::Passthrough);
        assert_eq!(classify_host_byte(b'Q'), HostByte::Uppercase);
        for b in [b' ', b'@', b'%', b'\\', b']', b'|', 0x7F, 0xC3] {
            assert_eq!(classify_host_byte(b), HostByte::Forbidden, "{b:#x}");
        }
    }

    #[test]
    fn test_scheme_chars() {
        assert!(is_scheme_char(b'+'));
        assert!(is_scheme_char(b'9'));
        assert!(!is_scheme_char(b'_'));
        assert!(!is_scheme_char(b':'));
    }
}
