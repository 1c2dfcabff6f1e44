use super::Output;
use crate::helpers::{prune_fragment, prune_query};
use crate::unicode::percent_encode::C0_CONTROL_SET;

/// `scheme:` is written; the rest is an opaque path with optional query and
/// fragment. Only controls and non-ASCII bytes are escaped in the path.
pub(super) fn canonicalize_path_url(output: &mut Output, rest: &str) {
    let (before_fragment, fragment) = prune_fragment(rest);
    let (path, query) = prune_query(before_fragment);

    output.parsed.path = output.encoded(path, C0_CONTROL_SET);
    output.query_and_fragment(query, fragment);
}

#[cfg(test)]
mod tests {
    use crate::canon::canonicalize_str;
    use crate::component::Component;

    #[test]
    fn test_path_urls() {
        let result = canonicalize_str("javascript:window.open('foo');");
        assert_eq!(result.outcome, Ok(()));
        assert_eq!(result.spec, "javascript:window.open('foo');");
        assert!(!result.parsed.host.is_present());

        let result = canonicalize_str("mailto:Joe Doe <j@x.org>?subject=Hi there#top");
        assert_eq!(
            result.spec,
            "mailto:Joe Doe <j@x.org>?subject=Hi%20there#top"
        );
        assert_eq!(result.parsed.path, Component::new(7, 17));
    }

    #[test]
    fn test_empty_opaque_path() {
        let result = canonicalize_str("about:");
        assert_eq!(result.outcome, Ok(()));
        assert_eq!(result.spec, "about:");
        assert_eq!(result.parsed.path, Component::new(6, 0));
    }

    #[test]
    fn test_opaque_escapes() {
        let result = canonicalize_str("data:a\u{1}b\u{e9}");
        assert_eq!(result.spec, "data:a%01b%C3%A9");

        let result = canonicalize_str("data:50%");
        assert!(result.outcome.is_err());
        assert_eq!(result.spec, "data:50%25");
    }
}
