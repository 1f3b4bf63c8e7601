//! Typed view of the `GetDestinyManifest` response

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use url::Url;

use crate::error::{Error, Result};
use crate::types::{ContentKind, Locale};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestMetadata {
    #[serde(default)]
    pub version: String,

    /// Locale code to zipped SQLite content path
    #[serde(default)]
    pub mobile_world_content_paths: BTreeMap<String, String>,

    /// Locale code to JSON content path
    #[serde(default)]
    pub json_world_content_paths: BTreeMap<String, String>,

    /// Everything else the API returned
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ManifestMetadata {
    /// Parse the `Response` member of an API envelope.
    pub fn from_envelope(envelope: &Value) -> Result<Self> {
        let response = envelope
            .get("Response")
            .filter(|r| r.is_object())
            .ok_or_else(|| Error::unexpected_response("manifest envelope has no Response object"))?;
        Ok(Self::deserialize(response)?)
    }

    /// Content path for a locale and kind, relative to the content host.
    pub fn content_path(&self, locale: Locale, kind: ContentKind) -> Option<&str> {
        let paths = match kind {
            ContentKind::MobileWorldContent => &self.mobile_world_content_paths,
            ContentKind::JsonWorldContent => &self.json_world_content_paths,
        };
        paths.get(locale.code()).map(String::as_str)
    }

    /// Locales that publish content of this kind.
    pub fn locales(&self, kind: ContentKind) -> Vec<Locale> {
        Locale::ALL
            .into_iter()
            .filter(|l| self.content_path(*l, kind).is_some())
            .collect()
    }
}

/// Last path segment of a content URL, used as the local file name.
pub fn file_name_from_url(url: &Url) -> Result<String> {
    let name = url
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| Error::unexpected_response(format!("no file name in content URL {url}")))?;

    if name == "." || name == ".." || name.contains('%') {
        return Err(Error::unexpected_response(format!(
            "unsafe file name in content URL {url}"
        )));
    }
    Ok(name.to_string())
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn envelope() -> Value {
        json!({
            "Response": {
                "version": "223453.24.06.11.1730-2",
                "mobileAssetContentPath": "/common/destiny2_content/sqlite/asset/asset_sql_content.content",
                "mobileWorldContentPaths": {
                    "en": "/common/destiny2_content/sqlite/en/world_sql_content_abc123.content",
                    "fr": "/common/destiny2_content/sqlite/fr/world_sql_content_def456.content"
                },
                "jsonWorldContentPaths": {
                    "en": "/common/destiny2_content/json/en/aggregate-abc123.json"
                }
            },
            "ErrorCode": 1,
            "ThrottleSeconds": 0,
            "ErrorStatus": "Success",
            "Message": "Ok"
        })
    }

    #[test]
    fn test_parse_envelope() {
        let metadata = ManifestMetadata::from_envelope(&envelope()).expect("Operation should succeed");
        assert_eq!(metadata.version, "223453.24.06.11.1730-2");
        assert_eq!(
            metadata.content_path(Locale::English, ContentKind::MobileWorldContent),
            Some("/common/destiny2_content/sqlite/en/world_sql_content_abc123.content")
        );
        assert_eq!(
            metadata.content_path(Locale::English, ContentKind::JsonWorldContent),
            Some("/common/destiny2_content/json/en/aggregate-abc123.json")
        );
        assert_eq!(metadata.content_path(Locale::German, ContentKind::MobileWorldContent), None);
        assert!(metadata.extra.contains_key("mobileAssetContentPath"));
        assert_eq!(
            metadata.locales(ContentKind::MobileWorldContent),
            vec![Locale::English, Locale::French]
        );
    }

    #[test]
    fn test_missing_response() {
        let err = ManifestMetadata::from_envelope(&json!({"ErrorCode": 1}))
            .expect_err("should fail");
        assert!(matches!(err, Error::UnexpectedResponse(_)));
    }

    #[test]
    fn test_file_name_from_url() {
        let url = Url::parse("https://www.bungie.net/common/destiny2_content/sqlite/en/abc123.content")
            .expect("Operation should succeed");
        assert_eq!(file_name_from_url(&url).expect("Operation should succeed"), "abc123.content");

        let url = Url::parse("https://www.bungie.net/common/").expect("Operation should succeed");
        assert!(file_name_from_url(&url).is_err());

        let url = Url::parse("https://www.bungie.net/a/%2E%2E").expect("Operation should succeed");
        assert!(file_name_from_url(&url).is_err());
    }
}
