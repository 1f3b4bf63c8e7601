//! `destiny` command-line entry point.
//!
//! Parses arguments, installs the tracing subscriber and dispatches to the
//! command handlers. All API work happens in the destiny-api library.

mod commands;
mod logging;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use destiny_api::{ClientConfig, ContentKind, DefinitionKey, DestinyClient, Locale};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "destiny",
    about = "Bungie.net Destiny 2 API client",
    version,
    long_about = "Download and query the Destiny 2 manifest and call any Bungie.net platform endpoint."
)]
struct Cli {
    /// Bungie.net application API key
    #[arg(long, env = "DESTINY_API_KEY", global = true, hide_env_values = true)]
    api_key: Option<String>,

    /// OAuth access token for authenticated endpoints
    #[arg(long, env = "DESTINY_ACCESS_TOKEN", global = true, hide_env_values = true)]
    access_token: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace); overrides RUST_LOG
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Download and query the manifest content database
    #[command(subcommand)]
    Manifest(ManifestCommands),

    /// List endpoint descriptors
    Endpoints {
        /// Only list this category (e.g. Destiny2, GroupV2)
        #[arg(long)]
        group: Option<String>,
    },

    /// Invoke any endpoint by name and print the JSON response
    Call {
        /// Descriptor name, e.g. Destiny2.GetProfile
        name: String,

        /// Path parameters in template order
        #[arg(allow_negative_numbers = true)]
        params: Vec<String>,

        /// Query parameter as key=value (repeatable)
        #[arg(long = "query", short = 'q', value_parser = parse_key_value)]
        query: Vec<(String, String)>,

        /// JSON request body
        #[arg(long)]
        body: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
enum ManifestCommands {
    /// Download the content file for a locale unless it is already current
    Update {
        #[arg(long, default_value = "en")]
        locale: Locale,

        #[arg(long, value_enum, default_value_t = KindArg::Mobile)]
        kind: KindArg,

        /// Destination directory (defaults to DESTINY_MANIFEST_DIR or ./manifest)
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Download even if the file is already present
        #[arg(long)]
        force: bool,
    },

    /// Decode a definition hash from the local manifest
    Decode {
        /// Definition table, e.g. DestinyInventoryItemDefinition
        definition: String,

        /// Hash (signed or unsigned) or text key, e.g. activitiesCleared
        #[arg(allow_negative_numbers = true)]
        key: DefinitionKey,

        #[arg(long, default_value = "en")]
        locale: Locale,

        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum KindArg {
    /// Zipped SQLite database
    Mobile,
    /// JSON aggregate
    Json,
}

impl From<KindArg> for ContentKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Mobile => Self::MobileWorldContent,
            KindArg::Json => Self::JsonWorldContent,
        }
    }
}

fn parse_key_value(raw: &str) -> std::result::Result<(String, String), String> {
    raw.split_once('=')
        .filter(|(k, _)| !k.is_empty())
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got {raw:?}"))
}

impl Cli {
    fn client(&self, dir: Option<&Path>) -> Result<DestinyClient> {
        let api_key = self
            .api_key
            .clone()
            .context("an API key is required: pass --api-key or set DESTINY_API_KEY")?;

        let mut config = ClientConfig::from_env();
        if let Some(dir) = dir {
            config = config.with_manifest_dir(dir);
        }

        let mut builder = DestinyClient::builder().api_key(api_key).config(config);
        if let Some(token) = &self.access_token {
            builder = builder.access_token(token.clone());
        }
        builder.build().context("failed to create API client")
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.json_logs, cli.log_file.as_deref())?;

    match &cli.command {
        Commands::Manifest(ManifestCommands::Update {
            locale,
            kind,
            dir,
            force,
        }) => {
            let client = cli.client(dir.as_deref())?;
            commands::manifest::update(&client, *locale, (*kind).into(), *force).await
        }
        Commands::Manifest(ManifestCommands::Decode {
            definition,
            key,
            locale,
            dir,
        }) => {
            let client = cli.client(dir.as_deref())?;
            commands::manifest::decode(&client, definition, key, *locale).await
        }
        Commands::Endpoints { group } => commands::endpoints::list(group.as_deref()),
        Commands::Call {
            name,
            params,
            query,
            body,
        } => {
            let client = cli.client(None)?;
            commands::call::invoke(&client, name, params, query, body.as_deref()).await
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_manifest_update() {
        let cli = Cli::try_parse_from([
            "destiny", "--api-key", "k", "manifest", "update", "--locale", "fr", "--kind", "json",
            "--force",
        ])
        .expect("Operation should succeed");

        match cli.command {
            Commands::Manifest(ManifestCommands::Update {
                locale,
                kind,
                dir,
                force,
            }) => {
                assert_eq!(locale, Locale::French);
                assert_eq!(kind, KindArg::Json);
                assert_eq!(dir, None);
                assert!(force);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_decode_defaults() {
        let cli = Cli::try_parse_from([
            "destiny",
            "manifest",
            "decode",
            "DestinyInventoryItemDefinition",
            "3628991658",
        ])
        .expect("Operation should succeed");

        match cli.command {
            Commands::Manifest(ManifestCommands::Decode {
                definition,
                key,
                locale,
                ..
            }) => {
                assert_eq!(definition, "DestinyInventoryItemDefinition");
                assert_eq!(key, DefinitionKey::Hash(3_628_991_658));
                assert_eq!(locale, Locale::English);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_decode_text_and_signed_keys() {
        let cli = Cli::try_parse_from([
            "destiny",
            "manifest",
            "decode",
            "DestinyHistoricalStatsDefinition",
            "activitiesCleared",
        ])
        .expect("Operation should succeed");
        match cli.command {
            Commands::Manifest(ManifestCommands::Decode { key, .. }) => {
                assert_eq!(key, DefinitionKey::Key("activitiesCleared".to_string()));
            }
            other => panic!("unexpected command {other:?}"),
        }

        let cli = Cli::try_parse_from([
            "destiny",
            "manifest",
            "decode",
            "DestinyInventoryItemDefinition",
            "-665975638",
        ])
        .expect("Operation should succeed");
        match cli.command {
            Commands::Manifest(ManifestCommands::Decode { key, .. }) => {
                assert_eq!(key, DefinitionKey::Key("-665975638".to_string()));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_call_with_query_and_body() {
        let cli = Cli::try_parse_from([
            "destiny",
            "-vv",
            "call",
            "Destiny2.GetProfile",
            "-1",
            "4611686018467284386",
            "--query",
            "components=100,200",
            "--body",
            "{}",
        ])
        .expect("Operation should succeed");

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Call {
                name,
                params,
                query,
                body,
            } => {
                assert_eq!(name, "Destiny2.GetProfile");
                assert_eq!(params, vec!["-1", "4611686018467284386"]);
                assert_eq!(query, vec![("components".to_string(), "100,200".to_string())]);
                assert_eq!(body.as_deref(), Some("{}"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_rejects_bad_arguments() {
        assert!(Cli::try_parse_from(["destiny", "call", "X.Y", "--query", "novalue"]).is_err());
        assert!(Cli::try_parse_from(["destiny", "manifest", "update", "--locale", "xx"]).is_err());
        assert!(Cli::try_parse_from(["destiny", "manifest", "decode", "T"]).is_err());
    }
}
