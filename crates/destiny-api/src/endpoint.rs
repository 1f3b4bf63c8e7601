//! Endpoint descriptors and request rendering
//!
//! Every remote operation is described by a static [`Endpoint`]: its
//! `Category.Operation` name, HTTP method, path template and the query names
//! it accepts. An [`ApiRequest`] pairs a descriptor with concrete values and
//! renders the final URL.

use serde_json::Value;
use std::fmt;
use url::Url;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
        }
    }
}

/// Static description of one remote operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Endpoint {
    /// `Category.Operation`, unique across all groups
    pub name: &'static str,
    pub method: HttpMethod,
    /// Path relative to the API root, with `{placeholder}` segments
    pub path: &'static str,
    /// Query parameter names the operation accepts
    pub query: &'static [&'static str],
    /// Whether the operation needs an OAuth bearer token
    pub requires_auth: bool,
}

impl Endpoint {
    pub const fn get(name: &'static str, path: &'static str) -> Self {
        Self {
            name,
            method: HttpMethod::Get,
            path,
            query: &[],
            requires_auth: false,
        }
    }

    pub const fn post(name: &'static str, path: &'static str) -> Self {
        Self {
            name,
            method: HttpMethod::Post,
            path,
            query: &[],
            requires_auth: false,
        }
    }

    #[must_use]
    pub const fn with_query(mut self, query: &'static [&'static str]) -> Self {
        self.query = query;
        self
    }

    #[must_use]
    pub const fn authenticated(mut self) -> Self {
        self.requires_auth = true;
        self
    }

    /// Category part of the name (`Destiny2` in `Destiny2.GetProfile`)
    pub fn category(&self) -> &'static str {
        self.name.split_once('.').map_or(self.name, |(c, _)| c)
    }

    /// Operation part of the name (`GetProfile` in `Destiny2.GetProfile`)
    pub fn operation(&self) -> &'static str {
        self.name.split_once('.').map_or(self.name, |(_, op)| op)
    }

    /// Placeholder names in template order
    pub fn placeholders(&self) -> impl Iterator<Item = &'static str> {
        self.path.split('/').filter_map(placeholder_name)
    }

    pub fn accepts_query(&self, name: &str) -> bool {
        self.query.contains(&name)
    }

    /// Render the full URL for this endpoint against `base`.
    ///
    /// `params` substitute the placeholders in template order; each value is
    /// percent-encoded as a single path segment. Only declared query names
    /// are accepted.
    pub fn render(&self, base: &Url, params: &[String], query: &[(String, String)]) -> Result<Url> {
        let mut url = base.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| Error::configuration(format!("cannot use {base} as a base URL")))?;
            segments.pop_if_empty();

            let mut values = params.iter();
            for segment in self.path.trim_start_matches('/').split('/') {
                match placeholder_name(segment) {
                    Some(name) => {
                        let value = values.next().ok_or_else(|| {
                            Error::invalid_request(format!(
                                "{}: missing value for {{{name}}}",
                                self.name
                            ))
                        })?;
                        if value.is_empty() {
                            return Err(Error::invalid_request(format!(
                                "{}: empty value for {{{name}}}",
                                self.name
                            )));
                        }
                        segments.push(value);
                    }
                    None => {
                        segments.push(segment);
                    }
                }
            }

            if values.next().is_some() {
                return Err(Error::invalid_request(format!(
                    "{}: expected {} path parameters, got {}",
                    self.name,
                    self.placeholders().count(),
                    params.len()
                )));
            }
        }

        if let Some((name, _)) = query.iter().find(|(name, _)| !self.accepts_query(name)) {
            return Err(Error::invalid_request(format!(
                "{}: undeclared query parameter {name:?}",
                self.name
            )));
        }
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        Ok(url)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<4} {}", self.method, self.path)?;
        if !self.query.is_empty() {
            write!(f, "?{}", self.query.join("&"))?;
        }
        if self.requires_auth {
            write!(f, " [auth]")?;
        }
        Ok(())
    }
}

fn placeholder_name(segment: &str) -> Option<&str> {
    segment.strip_prefix('{')?.strip_suffix('}')
}

/// A descriptor plus the values for one call.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    endpoint: &'static Endpoint,
    path_params: Vec<String>,
    query: Vec<(String, String)>,
    body: Option<Value>,
}

impl ApiRequest {
    pub fn new(endpoint: &'static Endpoint) -> Self {
        Self {
            endpoint,
            path_params: Vec::new(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Append the next path parameter
    #[must_use]
    pub fn path(mut self, value: impl ToString) -> Self {
        self.path_params.push(value.to_string());
        self
    }

    #[must_use]
    pub fn query(mut self, name: &str, value: impl ToString) -> Self {
        self.query.push((name.to_string(), value.to_string()));
        self
    }

    /// Append a query pair only when a value is present
    #[must_use]
    pub fn query_opt<T: ToString>(self, name: &str, value: Option<T>) -> Self {
        match value {
            Some(v) => self.query(name, v),
            None => self,
        }
    }

    #[must_use]
    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn endpoint(&self) -> &'static Endpoint {
        self.endpoint
    }

    pub fn method(&self) -> HttpMethod {
        self.endpoint.method
    }

    pub fn json_body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    pub fn url(&self, base: &Url) -> Result<Url> {
        self.endpoint.render(base, &self.path_params, &self.query)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    static PROFILE: Endpoint = Endpoint::get(
        "Destiny2.GetProfile",
        "/Destiny2/{membershipType}/Profile/{destinyMembershipId}/",
    )
    .with_query(&["components"]);

    static SEARCH: Endpoint = Endpoint::get(
        "GroupV2.GetGroupByName",
        "/GroupV2/Name/{groupName}/{groupType}/",
    );

    static FRIENDS: Endpoint = Endpoint::get("Social.GetFriendList", "/Social/Friends/").authenticated();

    fn base() -> Url {
        Url::parse("https://www.bungie.net/Platform").expect("Operation should succeed")
    }

    #[test]
    fn test_render_substitutes_in_order() {
        let url = ApiRequest::new(&PROFILE)
            .path(3)
            .path(4611686018467284386_i64)
            .query("components", "100,200")
            .url(&base())
            .expect("Operation should succeed");

        assert_eq!(
            url.as_str(),
            "https://www.bungie.net/Platform/Destiny2/3/Profile/4611686018467284386/?components=100%2C200"
        );
    }

    #[test]
    fn test_render_encodes_path_segments() {
        let url = ApiRequest::new(&SEARCH)
            .path("Clan / Name#1?")
            .path(1)
            .url(&base())
            .expect("Operation should succeed");

        assert_eq!(
            url.path(),
            "/Platform/GroupV2/Name/Clan%20%2F%20Name%231%3F/1/"
        );
    }

    #[test]
    fn test_render_with_trailing_slash_base() {
        let base = Url::parse("http://127.0.0.1:8080/").expect("Operation should succeed");
        let url = ApiRequest::new(&FRIENDS).url(&base).expect("Operation should succeed");
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/Social/Friends/");
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_placeholder_count_mismatch() {
        let err = ApiRequest::new(&PROFILE).path(3).url(&base()).expect_err("missing parameter");
        assert!(matches!(err, Error::InvalidRequest(_)));

        let err = ApiRequest::new(&FRIENDS).path(1).url(&base()).expect_err("extra parameter");
        assert!(matches!(err, Error::InvalidRequest(_)));
    }

    #[test]
    fn test_empty_path_parameter_rejected() {
        let err = ApiRequest::new(&SEARCH)
            .path("")
            .path(1)
            .url(&base())
            .expect_err("empty parameter");
        assert!(matches!(err, Error::InvalidRequest(_)));
    }

    #[test]
    fn test_undeclared_query_rejected() {
        let err = ApiRequest::new(&PROFILE)
            .path(3)
            .path(1)
            .query("page", 2)
            .url(&base())
            .expect_err("undeclared query");
        assert!(matches!(err, Error::InvalidRequest(msg) if msg.contains("page")));
    }

    #[test]
    fn test_query_opt_skips_none() {
        let url = ApiRequest::new(&PROFILE)
            .path(1)
            .path(2)
            .query_opt::<&str>("components", None)
            .url(&base())
            .expect("Operation should succeed");
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_descriptor_accessors() {
        assert_eq!(PROFILE.category(), "Destiny2");
        assert_eq!(PROFILE.operation(), "GetProfile");
        assert_eq!(
            PROFILE.placeholders().collect::<Vec<_>>(),
            vec!["membershipType", "destinyMembershipId"]
        );
        assert!(FRIENDS.requires_auth);
        assert_eq!(FRIENDS.to_string(), "GET  /Social/Friends/ [auth]");
    }

    #[test]
    fn test_method_honours_width() {
        assert_eq!(format!("[{:<4}]", HttpMethod::Get), "[GET ]");
        assert_eq!(format!("[{:>5}]", HttpMethod::Post), "[ POST]");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
    }
}
