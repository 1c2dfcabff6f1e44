use crate::canon::{Canonical, canonicalize_str, is_ip_literal};
use crate::checkers::parse_port;
use crate::component::Component;
use crate::compat::String;
use crate::input::UrlInput;
use crate::parsed::Parsed;
use crate::query::{QueryMap, QueryPairs};
use crate::replace::{Replacements, replace_components};
use crate::resolve::resolve_relative;
use crate::scheme::{get_scheme_type, is_standard_scheme};
use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

/// `int_port()` of a URL without a port
pub const PORT_UNSPECIFIED: i32 = -1;

/// `int_port()` of a URL whose port is not a number in `0..=65535`
pub const PORT_INVALID: i32 = -2;

static EMPTY: Url = Url {
    spec: String::new(),
    parsed: Parsed::EMPTY,
    is_valid: false,
};

/// An immutable, canonical URL.
///
/// The spec is stored in a single buffer and every component is an offset
/// range into it, so all getters are zero-copy. A `Url` is built once (by
/// [`Url::parse`], [`Url::resolve`] or [`Url::replace_components`]) and
/// never changes afterwards.
///
/// Invalid input does not produce an error: the `Url` is marked invalid and
/// keeps whatever could be canonicalized for display through
/// [`Url::possibly_invalid_spec`].
///
/// # Examples
///
/// ```
/// use urlcanon::Url;
///
/// let url = Url::parse("HTTP://www.Example.com:80/a/./b/../c?q#f");
/// assert!(url.is_valid());
/// assert_eq!(url.spec(), "http://www.example.com/a/c?q#f");
/// assert_eq!(url.host(), "www.example.com");
/// assert_eq!(url.int_port(), urlcanon::PORT_UNSPECIFIED);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Url {
    spec: String,
    parsed: Parsed,
    is_valid: bool,
}

impl Url {
    /// Canonicalize `input`, from any character source.
    pub fn parse<S: UrlInput + ?Sized>(input: &S) -> Self {
        Self::from(canonicalize_str(&input.to_utf8()))
    }

    /// The shared null URL: empty and invalid.
    pub fn empty() -> &'static Self {
        &EMPTY
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// True for the null URL (nothing could be canonicalized)
    pub fn is_empty(&self) -> bool {
        self.spec.is_empty()
    }

    /// The canonical spec.
    ///
    /// An invalid URL has no canonical spec: this returns `""` and logs a
    /// warning when the partial output is non-empty. Use
    /// [`Url::possibly_invalid_spec`] to display invalid URLs.
    pub fn spec(&self) -> &str {
        if self.is_valid || self.spec.is_empty() {
            return &self.spec;
        }
        tracing::warn!(spec = %self.spec, "spec() called on an invalid url");
        ""
    }

    /// The canonical spec, or the partial output of a failed
    /// canonicalization. Suitable for logging, not for security decisions.
    pub fn possibly_invalid_spec(&self) -> &str {
        &self.spec
    }

    pub fn parsed(&self) -> &Parsed {
        &self.parsed
    }

    /// Get a component by range (zero-copy)
    fn component(&self, component: Component) -> &str {
        component
            .range()
            .and_then(|range| self.spec.get(range))
            .unwrap_or("")
    }

    /// Scheme without the colon, lower-case (e.g. "http")
    pub fn scheme(&self) -> &str {
        self.component(self.parsed.scheme)
    }

    pub fn username(&self) -> &str {
        self.component(self.parsed.username)
    }

    pub fn password(&self) -> &str {
        self.component(self.parsed.password)
    }

    /// Host; IPv6 literals keep their brackets (e.g. "[::1]")
    pub fn host(&self) -> &str {
        self.component(self.parsed.host)
    }

    /// Port digits (e.g. "8080"), empty when the port is absent or default
    pub fn port(&self) -> &str {
        self.component(self.parsed.port)
    }

    pub fn path(&self) -> &str {
        self.component(self.parsed.path)
    }

    /// Query without the `?`
    pub fn query(&self) -> &str {
        self.component(self.parsed.query)
    }

    /// Fragment without the `#`
    pub fn fragment(&self) -> &str {
        self.component(self.parsed.fragment)
    }

    pub fn has_scheme(&self) -> bool {
        self.parsed.scheme.is_present()
    }

    pub fn has_username(&self) -> bool {
        self.parsed.username.is_present()
    }

    pub fn has_password(&self) -> bool {
        self.parsed.password.is_present()
    }

    pub fn has_host(&self) -> bool {
        self.parsed.host.is_present()
    }

    pub fn has_port(&self) -> bool {
        self.parsed.port.is_present()
    }

    pub fn has_path(&self) -> bool {
        self.parsed.path.is_present()
    }

    /// True for `?` followed by anything, including nothing
    pub fn has_query(&self) -> bool {
        self.parsed.query.is_present()
    }

    /// True for `#` followed by anything, including nothing
    pub fn has_fragment(&self) -> bool {
        self.parsed.fragment.is_present()
    }

    /// ASCII case-insensitive scheme comparison.
    ///
    /// `None` matches only a URL without a scheme.
    ///
    /// ```
    /// use urlcanon::Url;
    ///
    /// assert!(Url::parse("HTTP://a").scheme_is("http"));
    /// assert!(Url::default().scheme_is(None));
    /// ```
    pub fn scheme_is<'a>(&self, scheme: impl Into<Option<&'a str>>) -> bool {
        match scheme.into() {
            Some(expected) => {
                self.parsed.scheme.is_nonempty() && self.scheme().eq_ignore_ascii_case(expected)
            }
            None => !self.parsed.scheme.is_nonempty(),
        }
    }

    pub fn scheme_is_file(&self) -> bool {
        self.scheme_is("file")
    }

    /// Check if the scheme has authority and hierarchical path semantics
    pub fn is_standard_scheme(&self) -> bool {
        self.parsed.scheme.is_nonempty() && is_standard_scheme(self.scheme())
    }

    /// The port as a number, [`PORT_UNSPECIFIED`] when there is none, or
    /// [`PORT_INVALID`] when the port text is not a valid port.
    pub fn int_port(&self) -> i32 {
        if !self.parsed.port.is_nonempty() {
            return PORT_UNSPECIFIED;
        }
        parse_port(self.port()).map_or(PORT_INVALID, i32::from)
    }

    /// Like [`Url::int_port`], falling back to the scheme's default port.
    pub fn effective_int_port(&self) -> i32 {
        match self.int_port() {
            PORT_UNSPECIFIED => get_scheme_type(self.scheme())
                .default_port()
                .map_or(PORT_UNSPECIFIED, i32::from),
            port => port,
        }
    }

    /// The last path segment, without `;parameters`.
    pub fn extract_file_name(&self) -> &str {
        let path = self.path();
        let segment = path.rsplit('/').next().unwrap_or(path);
        segment.split(';').next().unwrap_or(segment)
    }

    /// Flat key/value pairs of the query, not percent-decoded.
    ///
    /// ```
    /// use urlcanon::Url;
    ///
    /// let url = Url::parse("http://a/?a=1&b=&c");
    /// let query = url.extract_query();
    /// assert_eq!(query.get("a"), Some(&"1"));
    /// assert_eq!(query.get("c"), Some(&""));
    /// ```
    pub fn extract_query(&self) -> QueryMap<'_> {
        self.query_pairs().collect()
    }

    pub fn query_pairs(&self) -> QueryPairs<'_> {
        QueryPairs::new(self.query())
    }

    /// Path and `?query` as sent in a request line; the fragment is never
    /// included.
    pub fn path_for_request(&self) -> &str {
        let Some(path) = self.parsed.path.range() else {
            return "";
        };
        let end = self.parsed.before_fragment(self.spec.len());
        self.spec.get(path.start..end).unwrap_or("")
    }

    /// Check if the host is an IPv4 or IPv6 literal.
    pub fn host_is_ip_address(&self) -> bool {
        self.is_valid && self.parsed.host.is_nonempty() && is_ip_literal(self.host())
    }

    /// `scheme://authority/` of a valid standard URL; the null URL otherwise.
    pub fn get_with_empty_path(&self) -> Self {
        if !self.is_valid || !self.is_standard_scheme() {
            return Self::default();
        }

        let path_begin = self.parsed.path.begin;
        let mut spec = String::with_capacity(path_begin as usize + 1);
        spec.push_str(&self.spec[..path_begin as usize]);
        spec.push('/');

        Self {
            spec,
            parsed: Parsed {
                path: Component::new(path_begin, 1),
                query: Component::absent(),
                fragment: Component::absent(),
                ..self.parsed
            },
            is_valid: true,
        }
    }

    /// `scheme://host:port/` of a valid standard URL, without userinfo,
    /// query or fragment; the null URL otherwise.
    pub fn get_origin(&self) -> Self {
        if !self.is_valid || !self.is_standard_scheme() {
            return Self::default();
        }

        let mut replacements = Replacements::new();
        replacements
            .clear_username()
            .clear_password()
            .set_path("/")
            .clear_query()
            .clear_fragment();
        self.replace_components(&replacements)
    }

    /// Resolve `relative` against this URL.
    ///
    /// Returns the null URL when this URL is invalid or the result does not
    /// canonicalize.
    ///
    /// ```
    /// use urlcanon::Url;
    ///
    /// let base = Url::parse("http://a/b/c");
    /// assert_eq!(base.resolve("d").spec(), "http://a/b/d");
    /// assert_eq!(base.resolve("/d").spec(), "http://a/d");
    /// assert_eq!(base.resolve("?q").spec(), "http://a/b/c?q");
    /// ```
    pub fn resolve<S: UrlInput + ?Sized>(&self, relative: &S) -> Self {
        resolve_relative(self, &relative.to_utf8())
    }

    /// Build a new URL from this one with some components replaced.
    ///
    /// Returns the null URL when this URL is invalid or the result does not
    /// canonicalize.
    pub fn replace_components(&self, replacements: &Replacements<'_>) -> Self {
        replace_components(self, replacements)
    }

    /// Wrap a successful canonicalization produced from another URL.
    ///
    /// Debug builds check that the spec canonicalizes to itself.
    pub(crate) fn from_derived(canonical: Canonical) -> Self {
        if let Err(error) = canonical.outcome {
            tracing::debug!(%error, partial = %canonical.spec, "derived url is invalid");
            return Self::default();
        }
        let url = Self::from(canonical);
        #[cfg(debug_assertions)]
        url.check_canonical();
        url
    }

    #[cfg(debug_assertions)]
    fn check_canonical(&self) {
        let again = canonicalize_str(&self.spec);
        if again.outcome.is_err() || again.spec != self.spec || again.parsed != self.parsed {
            tracing::error!(
                spec = %self.spec,
                recanonicalized = %again.spec,
                "canonical url does not canonicalize to itself"
            );
        }
    }
}

impl From<Canonical> for Url {
    fn from(canonical: Canonical) -> Self {
        Self {
            spec: canonical.spec,
            parsed: canonical.parsed,
            is_valid: canonical.outcome.is_ok(),
        }
    }
}

impl From<&str> for Url {
    fn from(input: &str) -> Self {
        Self::parse(input)
    }
}

impl From<String> for Url {
    fn from(input: String) -> Self {
        Self::parse(&input)
    }
}

impl PartialEq for Url {
    fn eq(&self, other: &Self) -> bool {
        self.spec == other.spec
    }
}

impl Eq for Url {}

impl PartialOrd for Url {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Url {
    fn cmp(&self, other: &Self) -> Ordering {
        self.spec.cmp(&other.spec)
    }
}

impl Hash for Url {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.spec.hash(state);
    }
}

impl core::fmt::Display for Url {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.spec)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Url {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.spec)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Url {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let input = <String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::parse(&input))
    }
}
