//! Canonicalizer: raw input to canonical spec plus component offsets.
//!
//! Output is written once, front to back, into a single buffer. A component
//! that fails to canonicalize is still written (best effort) so the partial
//! spec can be shown for diagnostics; the first failure decides validity.
mod file;
mod host;
mod opaque;
mod path;
mod standard;

pub(crate) use host::is_ip_literal;

use crate::component::Component;
use crate::compat::String;
use crate::error::{CanonError, Result, Status};
use crate::helpers::clean_tabs_and_newlines;
use crate::input::UrlInput;
use crate::parsed::Parsed;
use crate::scheme::{extract_scheme, get_scheme_type};
use crate::types::SchemeType;
use crate::unicode::percent_encode::{FRAGMENT_SET, QUERY_SET, percent_encode_into};
use percent_encoding::AsciiSet;

/// Result of one canonicalization pass
#[derive(Debug, Clone)]
pub(crate) struct Canonical {
    pub spec: String,
    pub parsed: Parsed,
    pub outcome: Result<()>,
}

impl Canonical {
    fn failed(error: CanonError) -> Self {
        Self {
            spec: String::new(),
            parsed: Parsed::EMPTY,
            outcome: Err(error),
        }
    }
}

/// Output buffer and offsets under construction
struct Output {
    spec: String,
    parsed: Parsed,
    status: Status,
}

impl Output {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            spec: String::with_capacity(capacity),
            parsed: Parsed::EMPTY,
            status: Status::new(),
        }
    }

    /// Run `write` and return the component covering what it wrote.
    fn component(&mut self, write: impl FnOnce(&mut String) -> Result<()>) -> Component {
        let begin = self.spec.len();
        let outcome = write(&mut self.spec);
        self.status.record(outcome);
        Component::from_range(begin..self.spec.len())
    }

    fn encoded(&mut self, input: &str, encode_set: &'static AsciiSet) -> Component {
        self.component(|spec| percent_encode_into(spec, input, encode_set))
    }

    /// Write `?query` and `#fragment`; each is present iff its delimiter was.
    fn query_and_fragment(&mut self, query: Option<&str>, fragment: Option<&str>) {
        if let Some(query) = query {
            self.spec.push('?');
            self.parsed.query = self.encoded(query, QUERY_SET);
        }
        if let Some(fragment) = fragment {
            self.spec.push('#');
            self.parsed.fragment = self.encoded(fragment, FRAGMENT_SET);
        }
    }

    fn finish(self) -> Canonical {
        let outcome = self.status.into_result();
        if let Err(error) = outcome {
            tracing::debug!(%error, partial = %self.spec, "url canonicalization failed");
        }
        Canonical {
            spec: self.spec,
            parsed: self.parsed,
            outcome,
        }
    }
}

/// Canonicalize `input` from any character source.
///
/// Returns `(success, spec, parsed)`. On failure `spec` holds whatever could
/// be canonicalized, for display only; it is empty when no scheme was found.
///
/// # Examples
///
/// ```
/// let (valid, spec, parsed) = urlcanon::canonicalize("HTTP://Example.COM:80/a/../b");
/// assert!(valid);
/// assert_eq!(spec, "http://example.com/b");
/// assert!(!parsed.port.is_present());
/// ```
pub fn canonicalize<S: UrlInput + ?Sized>(input: &S) -> (bool, String, Parsed) {
    let Canonical {
        spec,
        parsed,
        outcome,
    } = canonicalize_str(&input.to_utf8());
    (outcome.is_ok(), spec, parsed)
}

pub(crate) fn canonicalize_str(input: &str) -> Canonical {
    let cleaned = clean_tabs_and_newlines(input);
    let input = cleaned.as_ref();

    let Some(colon) = extract_scheme(input) else {
        tracing::debug!(error = %CanonError::MalformedScheme, "url canonicalization failed");
        return Canonical::failed(CanonError::MalformedScheme);
    };
    let scheme = &input[..colon];
    let rest = &input[colon + 1..];

    let mut output = Output::with_capacity(input.len() + 8);
    output.parsed.scheme = output.component(|spec| {
        spec.extend(scheme.chars().map(|c| c.to_ascii_lowercase()));
        Ok(())
    });
    output.spec.push(':');

    match get_scheme_type(scheme) {
        SchemeType::File => file::canonicalize_file_url(&mut output, rest),
        SchemeType::NotStandard => opaque::canonicalize_path_url(&mut output, rest),
        scheme_type => standard::canonicalize_standard_url(&mut output, rest, scheme_type),
    }
    output.finish()
}
