use super::Output;
use super::host::canonicalize_host;
use super::path::canonicalize_path;
use crate::character_sets::is_authority_terminator;
use crate::checkers::{count_consecutive_slashes, parse_port};
use crate::error::CanonError;
use crate::helpers::{prune_fragment, prune_query};
use crate::types::SchemeType;
use crate::unicode::percent_encode::{USERINFO_SET, percent_encode_into};
use core::fmt::Write;

/// The pieces of `user:pass@host:port`, still raw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Authority<'a> {
    username: &'a str,
    password: &'a str,
    host: &'a str,
    port: Option<&'a str>,
}

impl<'a> Authority<'a> {
    /// The last `@` ends the userinfo and the first `:` inside it starts the
    /// password. For a bracketed host the port colon is searched after `]`.
    fn split(authority: &'a str) -> Self {
        let (userinfo, server) = match memchr::memrchr(b'@', authority.as_bytes()) {
            Some(at) => (&authority[..at], &authority[at + 1..]),
            None => ("", authority),
        };
        let (username, password) = userinfo.split_once(':').unwrap_or((userinfo, ""));

        let bytes = server.as_bytes();
        let port_search_start = if server.starts_with('[') {
            memchr::memchr(b']', bytes).unwrap_or(bytes.len())
        } else {
            0
        };
        let (host, port) = match memchr::memrchr(b':', &bytes[port_search_start..]) {
            Some(pos) => {
                let colon = port_search_start + pos;
                (&server[..colon], Some(&server[colon + 1..]))
            }
            None => (server, None),
        };

        Self {
            username,
            password,
            host,
            port,
        }
    }
}

/// `scheme:` is written; canonicalize `//authority/path?query#fragment`.
///
/// Any run of `/` or `\` (including none) may follow the colon.
pub(super) fn canonicalize_standard_url(output: &mut Output, rest: &str, scheme_type: SchemeType) {
    let slashes = count_consecutive_slashes(rest.as_bytes(), 0);
    let rest = &rest[slashes..];
    let authority_end = rest
        .bytes()
        .position(is_authority_terminator)
        .unwrap_or(rest.len());
    let (authority, remainder) = rest.split_at(authority_end);
    let (before_fragment, fragment) = prune_fragment(remainder);
    let (path, query) = prune_query(before_fragment);

    output.spec.push_str("//");
    write_authority(output, &Authority::split(authority), scheme_type);
    output.parsed.path = output.component(|spec| canonicalize_path(spec, path));
    output.query_and_fragment(query, fragment);
}

fn write_authority(output: &mut Output, authority: &Authority<'_>, scheme_type: SchemeType) {
    // "user@", ":pass@" and "user:pass@"; nothing at all when both are empty.
    if !authority.username.is_empty() || !authority.password.is_empty() {
        output.parsed.username = output.encoded(authority.username, USERINFO_SET);
        if !authority.password.is_empty() {
            output.spec.push(':');
            output.parsed.password = output.encoded(authority.password, USERINFO_SET);
        }
        output.spec.push('@');
    }

    let host = authority.host;
    output.parsed.host = output.component(|spec| {
        if host.is_empty() {
            Err(CanonError::EmptyHost)
        } else {
            canonicalize_host(spec, host)
        }
    });

    // "host:" with nothing after the colon means the default port.
    if let Some(port) = authority.port.filter(|port| !port.is_empty()) {
        write_port(output, port, scheme_type);
    }
}

fn write_port(output: &mut Output, port: &str, scheme_type: SchemeType) {
    match parse_port(port) {
        Some(number) if scheme_type.default_port() == Some(number) => {}
        Some(number) => {
            output.spec.push(':');
            output.parsed.port = output.component(|spec| {
                let _ = write!(spec, "{number}");
                Ok(())
            });
        }
        None => {
            output.spec.push(':');
            output.parsed.port = output.component(|spec| {
                let _ = percent_encode_into(spec, port, USERINFO_SET);
                Err(CanonError::MalformedAuthority)
            });
        }
    }
}
