#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Exhaustive sweeps over short adversarial inputs.
///
/// Nothing may panic, and every valid result must canonicalize to itself
/// with identical component offsets.
use urlcanon::{Replacements, Url, canonicalize};

const ALPHABET: &[char] = &[
    'a', 'C', '1', '.', '%', '2', 'e', ':', '/', '\\', '@', '[', ']', '?', '#', ' ', '|', 'é',
];

const PREFIXES: &[&str] = &["", "http:", "http://", "file:", "file://", "x:"];

/// Every string of up to `max_len` characters from `ALPHABET`.
fn strings(max_len: usize) -> Vec<String> {
    let mut all = vec![String::new()];
    let mut previous = vec![String::new()];
    for _ in 0..max_len {
        let mut next = Vec::with_capacity(previous.len() * ALPHABET.len());
        for prefix in &previous {
            for &c in ALPHABET {
                let mut s = prefix.clone();
                s.push(c);
                next.push(s);
            }
        }
        all.extend(next.iter().cloned());
        previous = next;
    }
    all
}

fn assert_stable(url: &Url, context: &str) {
    if !url.is_valid() {
        return;
    }
    let (ok, spec, parsed) = canonicalize(url.spec());
    assert!(ok, "{context}: {:?} does not re-canonicalize", url.spec());
    assert_eq!(spec, url.spec(), "{context}");
    assert_eq!(&parsed, url.parsed(), "{context}");
    assert_eq!(parsed.length(), spec.len(), "{context}");
}

#[test]
fn test_canonicalize_is_idempotent() {
    for tail in strings(3) {
        for prefix in PREFIXES {
            let input = format!("{prefix}{tail}");
            let url = Url::parse(input.as_str());
            assert_stable(&url, &input);
            // Partial output is still a prefix-sane string
            assert!(url.parsed().length() <= url.possibly_invalid_spec().len(), "{input}");
        }
    }
}

#[test]
fn test_resolve_is_stable() {
    let bases = [
        Url::parse("http://a/b/c?q#f"),
        Url::parse("file:///C:/d/e"),
        Url::parse("file://host/d"),
        Url::parse("x:opaque"),
    ];
    for relative in strings(3) {
        for base in &bases {
            let url = base.resolve(relative.as_str());
            assert_stable(&url, &format!("{base} + {relative:?}"));
            if !url.is_valid() {
                assert!(url.is_empty(), "{base} + {relative:?}");
            }
        }
    }
}

#[test]
fn test_replace_is_stable() {
    let base = Url::parse("http://u:p@a:81/b?c#d");
    for value in strings(2) {
        let edits: [fn(&mut Replacements<'_>, String); 6] = [
            |r, v| {
                r.set_host(v);
            },
            |r, v| {
                r.set_path(v);
            },
            |r, v| {
                r.set_query(v);
            },
            |r, v| {
                r.set_fragment(v);
            },
            |r, v| {
                r.set_username(v);
            },
            |r, v| {
                r.set_password(v);
            },
        ];
        for edit in edits {
            let mut replacements = Replacements::new();
            edit(&mut replacements, value.clone());
            let url = base.replace_components(&replacements);
            assert_stable(&url, &value);
            if url.is_valid() {
                assert!(url.parsed().host.is_nonempty(), "{value:?}: {}", url.spec());
            }
        }
    }
}

#[test]
fn test_invalid_urls_never_expose_spec() {
    for tail in strings(2) {
        let url = Url::parse(format!("http://{tail}").as_str());
        if !url.is_valid() {
            assert_eq!(url.spec(), "");
            assert!(url.resolve("x").is_empty());
            assert!(url.replace_components(&Replacements::new()).is_empty());
            assert!(url.get_with_empty_path().is_empty());
        }
    }
}

#[test]
fn test_arbitrary_bytes_and_code_units() {
    for first in 0u8..=255 {
        for second in [0u8, b'%', b'/', 0x80, 0xff] {
            let bytes = [b'h', b't', b't', b'p', b':', b'/', b'/', first, b'/', second];
            assert_stable(&Url::parse(&bytes[..]), &format!("{bytes:?}"));
        }
    }
    for unit in [0u16, 0x20, 0x7f, 0xd800, 0xdfff, 0xfffd, 0xffff] {
        let wide: Vec<u16> = "http://a/".encode_utf16().chain([unit]).collect();
        assert_stable(&Url::parse(&wide), &format!("{unit:#x}"));
    }
}
