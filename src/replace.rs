use crate::canon::canonicalize_str;
use crate::compat::{Cow, String};
use crate::scheme::{get_scheme_type, is_valid_scheme};
use crate::types::SchemeType;
use crate::unicode::percent_encode::escape_delimiters;
use crate::url::Url;

/// What to do with one component of the base URL
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Replacement<'a> {
    /// Leave the base's value
    #[default]
    Keep,
    /// Remove the component
    Clear,
    /// Use this value; delimiters of the component are escaped first
    Set(Cow<'a, str>),
}

/// Per-component overrides for [`Url::replace_components`].
///
/// # Examples
///
/// ```
/// use urlcanon::{Replacements, Url};
///
/// let base = Url::parse("http://www.google.com/foo?bar#baz");
/// let mut replacements = Replacements::new();
/// replacements.set_path("/").clear_query().clear_fragment();
/// assert_eq!(base.replace_components(&replacements).spec(), "http://www.google.com/");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Replacements<'a> {
    pub scheme: Replacement<'a>,
    pub username: Replacement<'a>,
    pub password: Replacement<'a>,
    pub host: Replacement<'a>,
    pub port: Replacement<'a>,
    pub path: Replacement<'a>,
    pub query: Replacement<'a>,
    pub fragment: Replacement<'a>,
}

macro_rules! replacement_setters {
    ($($field:ident: $set:ident, $clear:ident;)*) => {
        $(
            pub fn $set(&mut self, value: impl Into<Cow<'a, str>>) -> &mut Self {
                self.$field = Replacement::Set(value.into());
                self
            }

            pub fn $clear(&mut self) -> &mut Self {
                self.$field = Replacement::Clear;
                self
            }
        )*
    };
}

impl<'a> Replacements<'a> {
    /// Keep every component
    pub fn new() -> Self {
        Self::default()
    }

    replacement_setters! {
        scheme: set_scheme, clear_scheme;
        username: set_username, clear_username;
        password: set_password, clear_password;
        host: set_host, clear_host;
        port: set_port, clear_port;
        path: set_path, clear_path;
        query: set_query, clear_query;
        fragment: set_fragment, clear_fragment;
    }
}

fn pick<'a>(replacement: &'a Replacement<'_>, base: Option<&'a str>) -> Option<&'a str> {
    match replacement {
        Replacement::Keep => base,
        Replacement::Clear => None,
        Replacement::Set(value) => Some(value.as_ref()),
    }
}

/// Build a new URL from `base` with `replacements` applied.
///
/// The whole URL is assembled as a string and canonicalized again, so a new
/// scheme brings its own authority rules and a new host gets IP-literal
/// detection.
pub(crate) fn replace_components(base: &Url, replacements: &Replacements<'_>) -> Url {
    if !base.is_valid() {
        tracing::debug!("cannot replace components of an invalid url");
        return Url::default();
    }
    match assemble(base, replacements) {
        Some(assembled) => Url::from_derived(canonicalize_str(&assembled)),
        None => {
            tracing::debug!(base = %base, "rejected component replacement");
            Url::default()
        }
    }
}

fn assemble(base: &Url, replacements: &Replacements<'_>) -> Option<String> {
    let scheme = pick(&replacements.scheme, base.has_scheme().then(|| base.scheme()))?;
    if !is_valid_scheme(scheme) {
        return None;
    }

    let path = pick(&replacements.path, base.has_path().then(|| base.path())).unwrap_or("");
    let query = pick(&replacements.query, base.has_query().then(|| base.query()));
    let fragment = pick(&replacements.fragment, base.has_fragment().then(|| base.fragment()));

    let mut assembled = String::with_capacity(base.possibly_invalid_spec().len() + 16);
    assembled.push_str(scheme);
    assembled.push(':');

    let scheme_type = get_scheme_type(scheme);
    if scheme_type.is_standard() {
        assembled.push_str("//");
        push_authority(&mut assembled, base, replacements, scheme_type)?;
        if !path.is_empty() && !path.starts_with(['/', '\\']) {
            assembled.push('/');
        }
    }
    assembled.push_str(&escape_delimiters(path, b"?#"));

    if let Some(query) = query {
        assembled.push('?');
        assembled.push_str(&escape_delimiters(query, b"#"));
    }
    if let Some(fragment) = fragment {
        assembled.push('#');
        assembled.push_str(fragment);
    }
    Some(assembled)
}

/// Write `user:pass@host:port`. File URLs take only the host.
fn push_authority(
    assembled: &mut String,
    base: &Url,
    replacements: &Replacements<'_>,
    scheme_type: SchemeType,
) -> Option<()> {
    let host = pick(&replacements.host, base.has_host().then(|| base.host())).unwrap_or("");
    // A bracketed IPv6 literal is the only host allowed to contain a colon
    let forbidden: &[u8] = if host.starts_with('[') { b"/\\?#@" } else { b":/\\?#@" };
    if host.bytes().any(|b| forbidden.contains(&b)) {
        return None;
    }

    if scheme_type == SchemeType::File {
        assembled.push_str(host);
        return Some(());
    }
    // "http:///x" would read the first path segment back as the host
    if host.is_empty() {
        return None;
    }

    let username = pick(&replacements.username, base.has_username().then(|| base.username()))
        .unwrap_or("");
    let password = pick(&replacements.password, base.has_password().then(|| base.password()))
        .unwrap_or("");
    if !username.is_empty() || !password.is_empty() {
        assembled.push_str(&escape_delimiters(username, b":@/\\?#"));
        if !password.is_empty() {
            assembled.push(':');
            assembled.push_str(&escape_delimiters(password, b"@/\\?#"));
        }
        assembled.push('@');
    }

    assembled.push_str(host);

    let port = pick(&replacements.port, base.has_port().then(|| base.port())).unwrap_or("");
    if !port.is_empty() {
        if !port.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        assembled.push(':');
        assembled.push_str(port);
    }
    Some(())
}
