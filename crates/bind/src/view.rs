//! Read-only access to the parts of a request that fields are bound from
//!
//! The binder only talks to a [`RequestView`], so it never needs the request body nor mutable
//! access to the request. [`RequestParts`] is the view over an [`http`] request.

use http::request::Parts;
use http::{HeaderMap, Request, Uri};

/// Lookup of header and query values by name.
///
/// A `None` and an empty value are treated the same by the binder.
#[cfg_attr(test, mockall::automock)]
pub trait RequestView {
    /// Header lookup, case-insensitive on `name`; the first value wins.
    fn header(&self, name: &str) -> Option<String>;

    /// Decoded query parameter lookup, exact match on `name`; the first value wins.
    ///
    /// The binder passes query keys already lower-cased, so lookups are case-insensitive for
    /// the conventionally lower-case keys of a query string.
    fn query(&self, name: &str) -> Option<String>;
}

/// A [`RequestView`] borrowing the header map of a request and owning its decoded query pairs.
#[derive(Debug, Clone)]
pub struct RequestParts<'a> {
    headers: &'a HeaderMap,
    query: Vec<(String, String)>,
}

impl<'a> RequestParts<'a> {
    /// Decodes the query string of `uri` once, a query string that can't be decoded
    /// contributes no parameters.
    pub fn new(headers: &'a HeaderMap, uri: &Uri) -> Self {
        let query = uri
            .query()
            .and_then(|query| serde_urlencoded::from_str::<Vec<(String, String)>>(query).ok())
            .unwrap_or_default();
        Self { headers, query }
    }

    #[inline]
    pub fn headers(&self) -> &HeaderMap {
        self.headers
    }

    /// The decoded query pairs in request order.
    #[inline]
    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }
}

impl RequestView for RequestParts<'_> {
    fn header(&self, name: &str) -> Option<String> {
        // values that are not utf-8 have no text form and read as absent
        self.headers.get(name).and_then(|value| std::str::from_utf8(value.as_bytes()).ok()).map(str::to_owned)
    }

    fn query(&self, name: &str) -> Option<String> {
        self.query.iter().find(|(key, _)| key == name).map(|(_, value)| value.clone())
    }
}

impl<'a, B> From<&'a Request<B>> for RequestParts<'a> {
    fn from(request: &'a Request<B>) -> Self {
        Self::new(request.headers(), request.uri())
    }
}

impl<'a> From<&'a Parts> for RequestParts<'a> {
    fn from(parts: &'a Parts) -> Self {
        Self::new(&parts.headers, &parts.uri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    fn request(uri: &str, headers: &[(&'static str, &'static str)]) -> Request<()> {
        let mut builder = Request::builder().uri(uri);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        builder.body(()).unwrap()
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let request = request("http://localhost/", &[("X-User-Email", "a@b.com")]);
        let view = RequestParts::from(&request);

        assert_eq!(view.header("x-user-email").as_deref(), Some("a@b.com"));
        assert_eq!(view.header("X-USER-EMAIL").as_deref(), Some("a@b.com"));
        assert_eq!(view.header("x-user-name"), None);
    }

    #[test]
    fn test_header_first_value_wins() {
        let request = request("http://localhost/", &[("accept", "text/html"), ("accept", "application/json")]);
        let view = RequestParts::from(&request);
        assert_eq!(view.header("accept").as_deref(), Some("text/html"));
    }

    #[test]
    fn test_invalid_header_name_never_matches() {
        let request = request("http://localhost/", &[("name", "value")]);
        let view = RequestParts::from(&request);
        assert_eq!(view.header("not a header"), None);
    }

    #[test]
    fn test_utf8_header_value_is_present() {
        let mut request = request("http://localhost/", &[]);
        request.headers_mut().insert("x-user-name", HeaderValue::from_bytes("José".as_bytes()).unwrap());
        let view = RequestParts::from(&request);
        assert_eq!(view.header("x-user-name").as_deref(), Some("José"));
    }

    #[test]
    fn test_invalid_utf8_header_value_is_absent() {
        let mut request = request("http://localhost/", &[]);
        request.headers_mut().insert("x-opaque", HeaderValue::from_bytes(&[0xfa, 0xfb]).unwrap());
        let view = RequestParts::from(&request);
        assert_eq!(view.header("x-opaque"), None);
    }

    #[test]
    fn test_query_is_decoded() {
        let request = request("http://localhost/search?q=hello+world&tag=a%26b&empty=", &[]);
        let view = RequestParts::from(&request);

        assert_eq!(view.query("q").as_deref(), Some("hello world"));
        assert_eq!(view.query("tag").as_deref(), Some("a&b"));
        assert_eq!(view.query("empty").as_deref(), Some(""));
        assert_eq!(view.query("missing"), None);
        assert_eq!(view.query_pairs().len(), 3);
    }

    #[test]
    fn test_query_match_is_exact() {
        let request = request("http://localhost/?page=2&page=3", &[]);
        let view = RequestParts::from(&request);

        assert_eq!(view.query("page").as_deref(), Some("2"));
        assert_eq!(view.query("Page"), None);
    }

    #[test]
    fn test_without_query() {
        let request = request("http://localhost/path", &[]);
        let view = RequestParts::from(&request);
        assert!(view.query_pairs().is_empty());
    }

    #[test]
    fn test_from_parts() {
        let (parts, ()) = request("http://localhost/?id=7", &[("host", "localhost")]).into_parts();
        let view = RequestParts::from(&parts);

        assert_eq!(view.query("id").as_deref(), Some("7"));
        assert_eq!(view.header("HOST").as_deref(), Some("localhost"));
        assert_eq!(view.headers().len(), 1);
    }
}
