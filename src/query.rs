use crate::compat::BTreeMap;

/// Flat key/value view of a query component; later duplicates win.
pub type QueryMap<'a> = BTreeMap<&'a str, &'a str>;

/// Iterator over the `key=value` pairs of a query, without decoding.
///
/// Pairs are split on `&`, then on the first `=`. A pair with no `=` has an
/// empty value; pairs with an empty key (including empty `&&` segments) are
/// skipped.
#[derive(Debug, Clone)]
pub struct QueryPairs<'a> {
    remaining: Option<&'a str>,
}

impl<'a> QueryPairs<'a> {
    /// Iterate over `query` (without the leading `?`)
    pub fn new(query: &'a str) -> Self {
        Self {
            remaining: Some(query),
        }
    }
}

impl<'a> Iterator for QueryPairs<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let input = self.remaining?;
            let pair = match memchr::memchr(b'&', input.as_bytes()) {
                Some(pos) => {
                    self.remaining = Some(&input[pos + 1..]);
                    &input[..pos]
                }
                None => {
                    self.remaining = None;
                    input
                }
            };

            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            if !key.is_empty() {
                return Some((key, value));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compat::Vec;

    #[test]
    fn test_pairs() {
        let pairs: Vec<_> = QueryPairs::new("a=1&b=&c").collect();
        assert_eq!(pairs, [("a", "1"), ("b", ""), ("c", "")]);
    }

    #[test]
    fn test_skips_empty_keys() {
        let pairs: Vec<_> = QueryPairs::new("&&=x&k=v=w&").collect();
        assert_eq!(pairs, [("k", "v=w")]);
        assert_eq!(QueryPairs::new("").count(), 0);
    }

    #[test]
    fn test_map_keeps_last() {
        let map: QueryMap<'_> = QueryPairs::new("k=1&k=2").collect();
        assert_eq!(map.get("k"), Some(&"2"));
    }
}
