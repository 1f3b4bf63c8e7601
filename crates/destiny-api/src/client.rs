//! Client façade: one transport, every endpoint group, and the manifest

use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

use crate::cancel::CancellationToken;
use crate::config::ClientConfig;
use crate::endpoints::{
    App, CommunityContent, Content, Destiny2, Fireteam, Forum, GroupV2, Platform, Social, Tokens,
    Trending, User,
};
use crate::error::{Error, Result};
use crate::manifest::{
    DefinitionKey, FilesystemSink, ManifestDatabase, ManifestOptions, ManifestPipeline,
    ManifestUpdate,
};
use crate::transport::{Credentials, Transport};
use crate::types::Locale;

/// Entry point for the Destiny 2 platform API.
///
/// Cheap to clone; clones share the connection pool and credentials.
#[derive(Debug, Clone)]
pub struct DestinyClient {
    transport: Transport,
    config: Arc<ClientConfig>,
}

impl DestinyClient {
    /// Client with default configuration and no access token.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    pub fn builder() -> DestinyClientBuilder {
        DestinyClientBuilder::default()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Clone of this client whose every request races `token`.
    #[must_use]
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        Self {
            transport: self.transport.with_cancellation(token),
            config: Arc::clone(&self.config),
        }
    }

    pub fn app(&self) -> App<'_> {
        App::new(&self.transport)
    }

    pub fn platform(&self) -> Platform<'_> {
        Platform::new(&self.transport)
    }

    pub fn community_content(&self) -> CommunityContent<'_> {
        CommunityContent::new(&self.transport)
    }

    pub fn content(&self) -> Content<'_> {
        Content::new(&self.transport)
    }

    pub fn destiny2(&self) -> Destiny2<'_> {
        Destiny2::new(&self.transport)
    }

    pub fn fireteam(&self) -> Fireteam<'_> {
        Fireteam::new(&self.transport)
    }

    pub fn forum(&self) -> Forum<'_> {
        Forum::new(&self.transport)
    }

    pub fn group_v2(&self) -> GroupV2<'_> {
        GroupV2::new(&self.transport)
    }

    pub fn social(&self) -> Social<'_> {
        Social::new(&self.transport)
    }

    pub fn tokens(&self) -> Tokens<'_> {
        Tokens::new(&self.transport)
    }

    pub fn trending(&self) -> Trending<'_> {
        Trending::new(&self.transport)
    }

    pub fn user(&self) -> User<'_> {
        User::new(&self.transport)
    }

    /// Manifest pipeline writing into the configured manifest directory.
    ///
    /// Creates the directory if it does not exist.
    pub fn manifest(&self) -> Result<ManifestPipeline<'_>> {
        let sink = FilesystemSink::new(&self.config.manifest_dir)?;
        Ok(ManifestPipeline::new(&self.transport, Arc::new(sink)))
    }

    /// Download the SQLite content for `locale` unless it is already current.
    pub async fn update_manifest(&self, locale: Locale) -> Result<ManifestUpdate> {
        self.manifest()?.run(ManifestOptions::new(locale)).await
    }

    /// Decode a definition hash (or text key) from the local manifest,
    /// updating it first.
    pub async fn decode_hash(
        &self,
        key: impl Into<DefinitionKey>,
        definition: &str,
        locale: Locale,
    ) -> Result<Value> {
        let key = key.into();
        let update = self.update_manifest(locale).await?;
        debug!(
            %key,
            definition,
            database = %update.path.display(),
            "Decoding manifest hash"
        );

        let definition = definition.to_string();
        tokio::task::spawn_blocking(move || {
            ManifestDatabase::open(&update.path)?.decode_hash(key, &definition)
        })
        .await
        .map_err(|e| Error::Io(std::io::Error::other(e)))?
    }
}

/// Builder for [`DestinyClient`].
#[derive(Debug, Default, Clone)]
pub struct DestinyClientBuilder {
    api_key: Option<String>,
    access_token: Option<String>,
    config: Option<ClientConfig>,
}

impl DestinyClientBuilder {
    #[must_use]
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// OAuth bearer token for endpoints that act on the user's behalf.
    #[must_use]
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    #[must_use]
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn build(self) -> Result<DestinyClient> {
        let api_key = self
            .api_key
            .ok_or_else(|| Error::configuration("API key is required"))?;
        let mut credentials = Credentials::new(api_key);
        if let Some(token) = self.access_token {
            credentials = credentials.with_access_token(token);
        }

        let config = self.config.unwrap_or_default();
        let transport = Transport::new(credentials, &config)?;
        Ok(DestinyClient {
            transport,
            config: Arc::new(config),
        })
    }
}
