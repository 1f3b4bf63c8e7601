//! # destiny-api - Async client for the Bungie.net Destiny 2 platform API
//!
//! This crate wraps the Bungie.net platform API and the Destiny 2 manifest
//! (the static content database) behind a single [`DestinyClient`].
//!
//! ## Architecture Overview
//!
//! 1. **Transport** ([`Transport`]): one shared `reqwest` pool, API key and
//!    bearer token headers, Bungie envelope classification into [`Error`]
//! 2. **Endpoint descriptors** ([`Endpoint`]): static method/path/query
//!    templates, rendered with per-segment percent-encoding
//! 3. **Endpoint groups** ([`endpoints`]): one method per remote operation,
//!    returning the response envelope as JSON
//! 4. **Manifest pipeline** ([`ManifestPipeline`]): metadata, download,
//!    decompress and atomic write into a [`ManifestSink`]
//! 5. **Manifest database** ([`ManifestDatabase`]): definition lookups in the
//!    extracted SQLite content
//!
//! Nothing retries automatically. [`Error::should_retry`] and
//! [`Error::retry_after_hint`] tell callers when a retry makes sense.
//!
//! ## Usage Examples
//!
//! ### Profile lookup
//!
//! ```rust,no_run
//! use destiny_api::{BungieMembershipType, DestinyClient, DestinyComponentType};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DestinyClient::new(std::env::var("DESTINY_API_KEY")?)?;
//!
//!     let profile = client
//!         .destiny2()
//!         .get_profile(
//!             BungieMembershipType::TigerSteam,
//!             4611686018467284386,
//!             &[DestinyComponentType::Profiles, DestinyComponentType::Characters],
//!         )
//!         .await?;
//!
//!     println!("{}", profile["Response"]["profile"]["data"]["userInfo"]["displayName"]);
//!     Ok(())
//! }
//! ```
//!
//! ### Manifest download and hash decoding
//!
//! ```rust,no_run
//! use destiny_api::{ClientConfig, DestinyClient, Locale};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DestinyClient::builder()
//!         .api_key(std::env::var("DESTINY_API_KEY")?)
//!         .config(ClientConfig::default().with_manifest_dir("./manifest"))
//!         .build()?;
//!
//!     let update = client.update_manifest(Locale::English).await?;
//!     println!("{} (skipped: {})", update.path.display(), update.skipped);
//!
//!     let item = client
//!         .decode_hash(3628991658, "DestinyInventoryItemDefinition", Locale::English)
//!         .await?;
//!     println!("{}", item["displayProperties"]["name"]);
//!     Ok(())
//! }
//! ```
//!
//! ### Error Handling
//!
//! ```rust,no_run
//! use destiny_api::{DestinyClient, Error};
//!
//! async fn settings(client: &DestinyClient) {
//!     match client.platform().get_common_settings().await {
//!         Ok(settings) => println!("{settings}"),
//!         Err(Error::Api(api)) if api.is_throttled() => {
//!             println!("Throttled for {:?}s", api.throttle_seconds);
//!         }
//!         Err(e) if e.should_retry() => println!("Transient failure: {e}"),
//!         Err(e) => println!("Request failed: {e}"),
//!     }
//! }
//! ```

pub mod cancel;
pub mod client;
pub mod config;
pub mod endpoint;
pub mod endpoints;
pub mod error;
pub mod manifest;
pub mod transport;
pub mod types;

pub use cancel::CancellationToken;
pub use client::{DestinyClient, DestinyClientBuilder};
pub use config::ClientConfig;
pub use endpoint::{ApiRequest, Endpoint, HttpMethod};
pub use error::{ApiError, Error, ManifestStep, Result};
pub use manifest::{
    DefinitionKey, FilesystemSink, ManifestDatabase, ManifestMetadata, ManifestOptions,
    ManifestPipeline, ManifestSink, ManifestUpdate, ManifestWriter,
};
pub use transport::{Credentials, Transport};
pub use types::{BungieMembershipType, ContentKind, DestinyComponentType, Locale};
