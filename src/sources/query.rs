//! Request URL construction for the content API.

use url::Url;

/// Reserved parameter naming the URL scheme.
pub const SCHEME: &str = "scheme";
/// Reserved parameter naming the URL authority (host and optional port).
pub const AUTHORITY: &str = "authority";
/// Reserved parameter naming the single path segment.
pub const PATH: &str = "path";
/// Name of the query parameter carrying the API key.
pub const API_KEY_PARAM: &str = "api-key";

/// Ordered query parameters with unique names.
///
/// Inserting an existing name replaces its value without moving it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams {
    /// Parameters in insertion order.
    entries: Vec<(String, String)>,
}

impl QueryParams {
    /// What: Create an empty parameter set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// What: Insert or replace a parameter.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == name) {
            slot.1 = value;
        } else {
            self.entries.push((name, value));
        }
    }

    /// What: Builder-style variant of [`QueryParams::insert`].
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// What: Value for `name`, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Number of parameters, reserved ones included.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when no parameter has been inserted.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Why a parameter set could not be turned into a URL.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// No parameters at all.
    #[error("query has no parameters")]
    Empty,
    /// A parameter with an empty name.
    #[error("query parameter with empty name")]
    EmptyName,
    /// A parameter with an empty value.
    #[error("query parameter '{0}' has an empty value")]
    EmptyValue(String),
    /// One of `scheme`, `authority` or `path` is missing.
    #[error("query is missing reserved parameter '{0}'")]
    MissingReserved(&'static str),
    /// Scheme and authority do not form a URL.
    #[error("'{scheme}://{authority}' is not a valid base URL")]
    InvalidBase {
        /// Offending scheme.
        scheme: String,
        /// Offending authority.
        authority: String,
    },
}

/// What: Build a request URL from parameters and an API key.
///
/// Inputs:
/// - `params`: Reserved `scheme`/`authority`/`path` plus any query parameters
/// - `api_key`: Decoded API key appended as the final `api-key` parameter
///
/// Output:
/// - Fully encoded `Url`, or the `QueryError` describing the rejected input.
///
/// # Errors
/// - `Empty`, `EmptyName`, `EmptyValue` for missing content
/// - `MissingReserved` when a reserved key is absent
/// - `InvalidBase` when scheme and authority do not parse as a URL
///
/// Details:
/// - The path value is pushed as one percent-encoded segment.
/// - Non-reserved parameters keep their insertion order.
/// - A caller-supplied `api-key` is ignored so exactly one key is sent.
pub fn build_url(params: &QueryParams, api_key: &str) -> Result<Url, QueryError> {
    if params.is_empty() {
        return Err(QueryError::Empty);
    }
    for (k, v) in params.iter() {
        if k.is_empty() {
            return Err(QueryError::EmptyName);
        }
        if v.is_empty() {
            return Err(QueryError::EmptyValue(k.to_string()));
        }
    }
    let scheme = params
        .get(SCHEME)
        .ok_or(QueryError::MissingReserved(SCHEME))?;
    let authority = params
        .get(AUTHORITY)
        .ok_or(QueryError::MissingReserved(AUTHORITY))?;
    let path = params.get(PATH).ok_or(QueryError::MissingReserved(PATH))?;

    let invalid = || QueryError::InvalidBase {
        scheme: scheme.to_string(),
        authority: authority.to_string(),
    };
    if authority.contains(['/', '?', '#']) {
        return Err(invalid());
    }
    let mut url = Url::parse(&format!("{scheme}://{authority}/")).map_err(|_| invalid())?;
    if url.host().is_none() {
        return Err(invalid());
    }
    url.path_segments_mut()
        .map_err(|()| invalid())?
        .pop_if_empty()
        .push(path);
    {
        let mut pairs = url.query_pairs_mut();
        for (k, v) in params.iter() {
            if matches!(k, SCHEME | AUTHORITY | PATH | API_KEY_PARAM) {
                continue;
            }
            pairs.append_pair(k, v);
        }
        pairs.append_pair(API_KEY_PARAM, api_key);
    }
    Ok(url)
}

/// What: Build a request URL with the process-wide API key.
///
/// # Errors
/// - Same as [`build_url`].
pub fn api_url(params: &QueryParams) -> Result<Url, QueryError> {
    build_url(params, super::api_key::api_key())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> QueryParams {
        QueryParams::new()
            .with(SCHEME, "https")
            .with(AUTHORITY, "content.guardianapis.com")
            .with(PATH, "world")
    }

    #[test]
    /// What: Scheme, host and path come from reserved keys; extras follow in order.
    ///
    /// Inputs:
    /// - World-style parameters with three extra pairs.
    ///
    /// Output:
    /// - Three query pairs plus exactly one trailing `api-key`.
    fn builds_world_url_with_single_trailing_key() {
        let params = base()
            .with("show-fields", "headline,byline,trailText")
            .with("page-size", "30")
            .with("order-by", "newest");
        let url = build_url(&params, "test").expect("valid url");
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("content.guardianapis.com"));
        assert_eq!(url.path(), "/world");

        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs.len(), 4);
        assert_eq!(pairs[0].0, "show-fields");
        assert_eq!(pairs[0].1, "headline,byline,trailText");
        assert_eq!(pairs[2].0, "order-by");
        assert_eq!(pairs[3], ("api-key".to_string(), "test".to_string()));
        assert_eq!(pairs.iter().filter(|(k, _)| k == "api-key").count(), 1);
    }

    #[test]
    fn search_terms_and_paths_are_encoded() {
        let params = base()
            .with(PATH, "search")
            .with("q", "climate & energy/ü");
        let url = build_url(&params, "k").expect("valid url");
        assert_eq!(url.path(), "/search");
        let q = url
            .query_pairs()
            .find(|(k, _)| k == "q")
            .map(|(_, v)| v.into_owned());
        assert_eq!(q.as_deref(), Some("climate & energy/ü"));
        assert!(!url.as_str().contains(' '));

        let odd = build_url(&base().with(PATH, "a b/c"), "k").expect("valid url");
        assert_eq!(odd.path(), "/a%20b%2Fc");
    }

    #[test]
    fn caller_api_key_is_replaced() {
        let url = build_url(&base().with("api-key", "mine"), "real").expect("valid url");
        let keys: Vec<String> = url
            .query_pairs()
            .filter(|(k, _)| k == "api-key")
            .map(|(_, v)| v.into_owned())
            .collect();
        assert_eq!(keys, vec!["real".to_string()]);
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut p = QueryParams::new().with("a", "1").with("b", "2");
        p.insert("a", "3");
        let items: Vec<(&str, &str)> = p.iter().collect();
        assert_eq!(items, vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    /// What: Rejected inputs map to the matching `QueryError`.
    fn invalid_inputs_are_rejected() {
        assert_eq!(build_url(&QueryParams::new(), "k"), Err(QueryError::Empty));
        assert_eq!(
            build_url(&base().with("q", ""), "k"),
            Err(QueryError::EmptyValue("q".to_string()))
        );
        assert_eq!(
            build_url(&base().with("", "x"), "k"),
            Err(QueryError::EmptyName)
        );
        let no_path = QueryParams::new()
            .with(SCHEME, "https")
            .with(AUTHORITY, "example.com");
        assert_eq!(
            build_url(&no_path, "k"),
            Err(QueryError::MissingReserved(PATH))
        );
        assert!(matches!(
            build_url(&base().with(AUTHORITY, "bad host"), "k"),
            Err(QueryError::InvalidBase { .. })
        ));
        assert!(matches!(
            build_url(&base().with(AUTHORITY, "example.com/evil"), "k"),
            Err(QueryError::InvalidBase { .. })
        ));
        assert!(matches!(
            build_url(&base().with(SCHEME, "ht tp"), "k"),
            Err(QueryError::InvalidBase { .. })
        ));
    }

    #[test]
    fn local_authority_with_port_is_accepted() {
        let url = build_url(
            &base().with(SCHEME, "http").with(AUTHORITY, "127.0.0.1:8080"),
            "k",
        )
        .expect("valid url");
        assert_eq!(url.port(), Some(8080));
    }
}
