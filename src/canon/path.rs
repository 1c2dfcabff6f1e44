use crate::compat::String;
use crate::error::{Result, Status};
use crate::unicode::percent_encode::{PATH_SET, percent_encode_into};

/// Canonicalize the path of an authority-bearing URL.
/// The result always starts with `/`.
pub(super) fn canonicalize_path(spec: &mut String, path: &str) -> Result<()> {
    if path.is_empty() {
        spec.push('/');
        return Ok(());
    }
    push_segments(spec, path)
}

/// Write `path` one segment at a time, collapsing `.` and `..`.
///
/// Both `/` and `\` separate segments. `..` only removes segments written by
/// this call, so whatever is already in `spec` acts as the root.
pub(super) fn push_segments(spec: &mut String, path: &str) -> Result<()> {
    let floor = spec.len();
    let mut status = Status::new();
    let mut input = path.strip_prefix(['/', '\\']).unwrap_or(path);

    loop {
        let location = memchr::memchr2(b'/', b'\\', input.as_bytes());
        let segment = if let Some(loc) = location {
            let seg = &input[..loc];
            input = &input[loc + 1..];
            seg
        } else {
            input
        };
        let is_last = location.is_none();

        if is_double_dot(segment) {
            if let Some(slash) = spec[floor..].rfind('/') {
                spec.truncate(floor + slash);
            }
            // A trailing ".." leaves a directory, so keep the slash
            if is_last && !spec[floor..].ends_with('/') {
                spec.push('/');
            }
        } else if is_single_dot(segment) {
            if is_last {
                spec.push('/');
            }
        } else {
            spec.push('/');
            status.record(percent_encode_into(spec, segment, PATH_SET));
        }

        if is_last {
            break;
        }
    }

    status.into_result()
}

fn is_single_dot(segment: &str) -> bool {
    segment == "." || segment.eq_ignore_ascii_case("%2e")
}

fn is_double_dot(segment: &str) -> bool {
    segment == ".."
        || segment.eq_ignore_ascii_case(".%2e")
        || segment.eq_ignore_ascii_case("%2e.")
        || segment.eq_ignore_ascii_case("%2e%2e")
}
