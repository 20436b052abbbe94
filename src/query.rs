//! # Query String Codec
//!
//! Parses the query literal embedded in a template and serializes the merged
//! query mapping back into a search string.
//!
//! Serialization is stable: keys are sorted, repeated keys come out in the
//! order they were given, and undefined parameters never appear. Encoding is
//! strict percent-encoding, which leaves only `A-Z a-z 0-9 - _ . ~` untouched.

use crate::params::{ParamValue, Params};
use std::borrow::Cow;

/// Parse a query string into parameters
///
/// A leading `?` is ignored. `+` decodes to a space and percent escapes are
/// decoded. A segment without `=` becomes a [`ParamValue::Flag`]; a repeated
/// key becomes a [`ParamValue::List`].
///
/// ```rust
/// use navlink::params::ParamValue;
/// use navlink::query::parse;
///
/// let params = parse("?a=1&a=2&debug&q=hello+world");
/// assert_eq!(params.get("a"), Some(&ParamValue::from(vec!["1", "2"])));
/// assert_eq!(params.get("debug"), Some(&ParamValue::Flag));
/// assert_eq!(params.get("q"), Some(&ParamValue::from("hello world")));
/// ```
#[must_use]
pub fn parse(query: &str) -> Params {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut params = Params::new();

    for segment in query.split('&').filter(|s| !s.is_empty()) {
        // form_urlencoded handles `+` and percent decoding for one pair at a time,
        // but cannot tell `a` from `a=`.
        let value = if segment.contains('=') {
            url::form_urlencoded::parse(segment.as_bytes())
                .next()
                .map(|(k, v)| (k.into_owned(), ParamValue::Text(v.into_owned())))
        } else {
            url::form_urlencoded::parse(segment.as_bytes())
                .next()
                .map(|(k, _)| (k.into_owned(), ParamValue::Flag))
        };
        if let Some((key, value)) = value {
            params.append(key, value);
        }
    }

    params
}

/// Serialize parameters into a search string (without the leading `?`)
///
/// With `encode` set, keys and values are strictly percent-encoded; otherwise
/// they are written verbatim. A list writes one `key=value` pair per item, so
/// an empty list writes nothing and its key is absent from the result.
///
/// ```rust
/// use navlink::params::Params;
/// use navlink::query::stringify;
///
/// let params = Params::from([("userId", "a/b"), ("keyword", "dan")]);
/// assert_eq!(stringify(&params, true), "keyword=dan&userId=a%2Fb");
/// assert_eq!(stringify(&params, false), "keyword=dan&userId=a/b");
/// ```
#[must_use]
pub fn stringify(params: &Params, encode: bool) -> String {
    let mut entries: Vec<(&str, &ParamValue)> = params.iter().collect();
    // Stable sort keeps insertion order for equal keys.
    entries.sort_by(|(a, _), (b, _)| a.cmp(b));

    let mut pairs: Vec<String> = Vec::with_capacity(entries.len());
    for (key, value) in entries {
        let key = encode_component(key, encode);
        match value {
            ParamValue::Text(text) => {
                pairs.push(format!("{}={}", key, encode_component(text, encode)));
            }
            ParamValue::List(items) => {
                pairs.extend(
                    items
                        .iter()
                        .map(|item| format!("{}={}", key, encode_component(item, encode))),
                );
            }
            ParamValue::Flag => pairs.push(key.into_owned()),
        }
    }

    pairs.join("&")
}

fn encode_component(input: &str, encode: bool) -> Cow<'_, str> {
    if encode {
        urlencoding::encode(input)
    } else {
        Cow::Borrowed(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty() {
        assert!(parse("").is_empty());
        assert!(parse("?").is_empty());
        assert!(parse("&&").is_empty());
    }

    #[test]
    fn test_parse_decodes() {
        let params = parse("name=J%C3%BCrgen&path=a%2Fb&space=a+b");
        assert_eq!(params.get("name"), Some(&ParamValue::from("Jürgen")));
        assert_eq!(params.get("path"), Some(&ParamValue::from("a/b")));
        assert_eq!(params.get("space"), Some(&ParamValue::from("a b")));
    }

    #[test]
    fn test_parse_empty_value_is_text() {
        assert_eq!(parse("a=").get("a"), Some(&ParamValue::from("")));
        assert_eq!(parse("a").get("a"), Some(&ParamValue::Flag));
    }

    #[test]
    fn test_stringify_sorted() {
        let params = Params::from([("z", "1"), ("a", "2"), ("m", "3")]);
        assert_eq!(stringify(&params, true), "a=2&m=3&z=1");
    }

    #[test]
    fn test_stringify_list_and_flag() {
        let params = Params::new()
            .with("tag", vec!["x", "y"])
            .with("debug", ParamValue::Flag);
        assert_eq!(stringify(&params, true), "debug&tag=x&tag=y");
    }

    #[test]
    fn test_stringify_empty_list_is_skipped() {
        let params = Params::new().with("tag", Vec::<String>::new());
        assert_eq!(stringify(&params, true), "");

        let params = Params::new()
            .with("tag", Vec::<String>::new())
            .with("page", "2");
        assert_eq!(stringify(&params, true), "page=2");
    }

    #[test]
    fn test_stringify_strict_encoding() {
        let params = Params::from([("q", "it's (a) b*c!")]);
        assert_eq!(stringify(&params, true), "q=it%27s%20%28a%29%20b%2Ac%21");
    }

    #[test]
    fn test_stringify_encodes_keys() {
        let params = Params::from([("a b", "c")]);
        assert_eq!(stringify(&params, true), "a%20b=c");
        assert_eq!(stringify(&params, false), "a b=c");
    }
}
