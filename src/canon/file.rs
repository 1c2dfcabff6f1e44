use super::Output;
use super::host::canonicalize_host;
use super::path::{canonicalize_path, push_segments};
use crate::character_sets::is_authority_terminator;
use crate::checkers::{
    count_consecutive_slashes, does_begin_slash_windows_drive_spec, does_begin_unc_path,
    does_begin_windows_drive_spec,
};
use crate::component::Component;
use crate::compat::String;
use crate::error::Result;
use crate::helpers::{prune_fragment, prune_query};

/// `file:` is written; canonicalize `//host/path?query#fragment`.
///
/// After the colon:
/// - a drive spec (`c:`, `C|`) after any number of slashes is a local path
/// - two slashes, or four and more, start a (UNC) host
/// - otherwise the host is empty and the path starts at the last slash
///
/// File URLs have no userinfo or port; `@` and `:` in the host are invalid.
pub(super) fn canonicalize_file_url(output: &mut Output, rest: &str) {
    let bytes = rest.as_bytes();
    let slashes = count_consecutive_slashes(bytes, 0);

    let (host, after_host) = if does_begin_windows_drive_spec(bytes, slashes) {
        ("", &rest[slashes..])
    } else if does_begin_unc_path(bytes, 0) && slashes != 3 {
        let server = &rest[slashes..];
        let end = server
            .bytes()
            .position(is_authority_terminator)
            .unwrap_or(server.len());
        server.split_at(end)
    } else {
        ("", &rest[slashes.saturating_sub(1)..])
    };
    let (before_fragment, fragment) = prune_fragment(after_host);
    let (path, query) = prune_query(before_fragment);

    output.spec.push_str("//");
    output.parsed.host = if host.is_empty() {
        let at = output.spec.len();
        Component::from_range(at..at)
    } else {
        output.component(|spec| canonicalize_host(spec, host))
    };
    let empty_host = host.is_empty();
    output.parsed.path = output.component(|spec| canonicalize_file_path(spec, path, empty_host));
    output.query_and_fragment(query, fragment);
}

fn canonicalize_file_path(spec: &mut String, path: &str, empty_host: bool) -> Result<()> {
    let bytes = path.as_bytes();
    if does_begin_windows_drive_spec(bytes, 0) || does_begin_slash_windows_drive_spec(bytes, 0) {
        return write_drive_path(spec, path);
    }

    let begin = spec.len();
    let outcome = canonicalize_path(spec, path);

    // Collapsing dot segments can leave "//x" or "/c:" at the front, which
    // would read back as a host or a drive.
    if empty_host {
        let extra = count_consecutive_slashes(spec.as_bytes(), begin).saturating_sub(1);
        spec.replace_range(begin..begin + extra, "");
    }
    if does_begin_slash_windows_drive_spec(spec.as_bytes(), begin) {
        let written = spec.split_off(begin);
        return outcome.and(write_drive_path(spec, &written));
    }
    outcome
}

/// Write `/X:` with an upper-case drive letter, then the rest of the path.
/// `..` never climbs above the drive.
fn write_drive_path(spec: &mut String, path: &str) -> Result<()> {
    let path = path.strip_prefix(['/', '\\']).unwrap_or(path);
    let [letter, _, ..] = path.as_bytes() else {
        return canonicalize_path(spec, path);
    };

    spec.push('/');
    spec.push(char::from(letter.to_ascii_uppercase()));
    spec.push(':');
    push_segments(spec, &path[2..])
}
