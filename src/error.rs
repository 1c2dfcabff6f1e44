/// Reasons canonicalization can fail.
///
/// These never cross the public API: a failed canonicalization surfaces only
/// as an invalid [`Url`](crate::Url). The kind is kept for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanonError {
    /// Missing scheme or a scheme with characters outside `[a-zA-Z0-9+-.]`
    MalformedScheme,
    /// A standard scheme with nothing in the host position
    EmptyHost,
    /// Bad port digits, forbidden host characters, unbalanced IPv6 brackets
    MalformedAuthority,
    /// A `%` that is not followed by two hex digits
    MalformedEscape,
}

impl core::fmt::Display for CanonError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::MalformedScheme => "Malformed scheme",
            Self::EmptyHost => "Empty host",
            Self::MalformedAuthority => "Malformed authority",
            Self::MalformedEscape => "Malformed percent escape",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CanonError {}

/// Result type for component canonicalizers
pub type Result<T> = core::result::Result<T, CanonError>;

/// Tracks the first failure while the canonicalizer keeps writing output.
#[derive(Debug, Clone, Copy, Default)]
pub struct Status {
    first_error: Option<CanonError>,
}

impl Status {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of one component; only the first error is kept.
    pub fn record(&mut self, outcome: Result<()>) {
        if let Err(err) = outcome
            && self.first_error.is_none()
        {
            self.first_error = Some(err);
        }
    }

    pub fn into_result(self) -> Result<()> {
        self.first_error.map_or(Ok(()), Err)
    }
}
