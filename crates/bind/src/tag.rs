//! Field tag grammar
//!
//! Each bindable field may carry a tag of the form `key1=value1,key2=value2,...` over the
//! keys `in`, `label` and `type`:
//!
//! ```text
//! in=header,label=x-user-email
//! label=page,type=int
//! -
//! ```
//!
//! Parsing never fails: segments that are not exactly one `key=value` pair, or whose value
//! is empty, are ignored, as are unknown keys. When no usable `in` segment is present the
//! source defaults to [`QUERY`].
//!
//! A tag that is exactly [`SKIP_SENTINEL`] excludes the field from binding altogether, that
//! check happens in the binder before the tag reaches [`Tag::parse`].

/// The tag value which marks a field as skipped.
pub const SKIP_SENTINEL: &str = "-";

/// `in` value selecting the request headers.
pub const HEADER: &str = "header";

/// `in` value selecting the url query string, also the default.
pub const QUERY: &str = "query";

const IN_KEY: &str = "in";
const LABEL_KEY: &str = "label";
const TYPE_KEY: &str = "type";

/// A parsed field tag.
///
/// `source` is kept verbatim, an unrecognized value such as `in=cookie` is accepted here and
/// only rejected when [`Tag::source`] resolves it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    source: String,
    label: Option<String>,
    type_hint: Option<String>,
}

impl Tag {
    /// Parse a raw tag, falling back to defaults for everything missing or malformed.
    pub fn parse(raw: &str) -> Self {
        let mut source = None;
        let mut label = None;
        let mut type_hint = None;

        for segment in raw.split(',') {
            let mut parts = segment.split('=');
            let (Some(key), Some(value), None) = (parts.next(), parts.next(), parts.next()) else {
                continue;
            };

            if value.is_empty() {
                continue;
            }

            match key {
                IN_KEY => source = Some(value.to_owned()),
                LABEL_KEY => label = Some(value.to_owned()),
                TYPE_KEY => type_hint = Some(value.to_owned()),
                _ => {}
            }
        }

        Self { source: source.unwrap_or_else(|| QUERY.to_owned()), label, type_hint }
    }

    /// The `in` value, `query` when the tag did not name one.
    #[inline]
    pub fn source_kind(&self) -> &str {
        &self.source
    }

    #[inline]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Informational only, values are never coerced.
    #[inline]
    pub fn type_hint(&self) -> Option<&str> {
        self.type_hint.as_deref()
    }

    /// The key used to search the source: the label, or the declared field name without one.
    pub fn lookup_key<'a>(&'a self, field_name: &'a str) -> &'a str {
        self.label().unwrap_or(field_name)
    }

    /// Resolve where the field named `field_name` is read from.
    ///
    /// Returns `None` when `in` names neither [`HEADER`] nor [`QUERY`].
    pub fn source(&self, field_name: &str) -> Option<Source> {
        let key = self.lookup_key(field_name).to_owned();
        match self.source_kind() {
            HEADER => Some(Source::Header(key)),
            QUERY => Some(Source::Query(key)),
            _ => None,
        }
    }
}

impl Default for Tag {
    fn default() -> Self {
        Self::parse("")
    }
}

/// Where a field's value comes from, together with the key to search for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Source {
    Header(String),
    Query(String),
}

impl Source {
    #[inline]
    pub fn key(&self) -> &str {
        match self {
            Source::Header(key) | Source::Query(key) => key,
        }
    }

    #[inline]
    pub fn kind(&self) -> &'static str {
        match self {
            Source::Header(_) => HEADER,
            Source::Query(_) => QUERY,
        }
    }
}
