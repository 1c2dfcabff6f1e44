use crate::canon::canonicalize_str;
use crate::checkers::{
    does_begin_slash_windows_drive_spec, does_begin_unc_path, does_begin_windows_drive_spec,
};
use crate::compat::String;
use crate::helpers::clean_tabs_and_newlines;
use crate::scheme::extract_scheme;
use crate::url::Url;

/// Resolve `relative` against `base`.
///
/// The result is assembled as a string from the canonical base and the raw
/// reference, then canonicalized as a whole, so dot segments and escapes in
/// the reference get the same treatment as in an absolute URL.
pub(crate) fn resolve_relative(base: &Url, relative: &str) -> Url {
    if !base.is_valid() {
        tracing::debug!("cannot resolve against an invalid base");
        return Url::default();
    }

    let cleaned = clean_tabs_and_newlines(relative);
    let relative = cleaned.as_ref();
    let bytes = relative.as_bytes();
    let is_drive_path = base.scheme_is_file() && does_begin_windows_drive_spec(bytes, 0);

    // Any scheme makes the reference absolute; "c:" against a file base is a
    // drive letter, not a scheme.
    if extract_scheme(relative).is_some() && !is_drive_path {
        return Url::from_derived(canonicalize_str(relative));
    }
    if !base.is_standard_scheme() {
        tracing::debug!(base = %base, "relative reference against a non-hierarchical base");
        return Url::default();
    }

    let spec = base.possibly_invalid_spec();
    let parsed = base.parsed();
    let path_begin = parsed.path.begin as usize;
    let path_end = parsed.path.end() as usize;

    let assembled = match bytes.first() {
        None => return base.clone(),
        // "//host/path": only the scheme is kept
        Some(b'/' | b'\\') if does_begin_unc_path(bytes, 0) => {
            join(&spec[..=parsed.scheme.end() as usize], relative)
        }
        // "/path": scheme and authority are kept, and the drive of a file base
        Some(b'/' | b'\\') => {
            let base_path = &spec[path_begin..path_end];
            let keep_drive = does_begin_slash_windows_drive_spec(base_path.as_bytes(), 0)
                && !does_begin_slash_windows_drive_spec(bytes, 0);
            let prefix_end = if keep_drive { path_begin + 3 } else { path_begin };
            join(&spec[..prefix_end], relative)
        }
        Some(b'?') => join(&spec[..path_end], relative),
        Some(b'#') => join(&spec[..parsed.before_fragment(spec.len())], relative),
        Some(_) if is_drive_path => join("file:///", relative),
        // Relative path: merge with the base's directory
        Some(_) => {
            let directory_end = spec[path_begin..path_end]
                .rfind('/')
                .map_or(path_begin, |slash| path_begin + slash + 1);
            join(&spec[..directory_end], relative)
        }
    };

    Url::from_derived(canonicalize_str(&assembled))
}

fn join(prefix: &str, relative: &str) -> String {
    let mut joined = String::with_capacity(prefix.len() + relative.len());
    joined.push_str(prefix);
    joined.push_str(relative);
    joined
}
