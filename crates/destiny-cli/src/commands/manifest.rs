use anyhow::{Context, Result};
use destiny_api::{ContentKind, DefinitionKey, DestinyClient, Locale, ManifestOptions};
use tracing::info;

pub async fn update(
    client: &DestinyClient,
    locale: Locale,
    kind: ContentKind,
    force: bool,
) -> Result<()> {
    let pipeline = client.manifest()?;
    info!(sink = %pipeline.sink().describe(), %locale, %kind, "Updating manifest");

    let update = pipeline
        .run(ManifestOptions::new(locale).with_kind(kind).with_force(force))
        .await
        .context("manifest update failed")?;

    if update.skipped {
        println!("Up to date: {} (version {})", update.path.display(), update.version);
    } else {
        println!(
            "Wrote {} bytes to {} (version {})",
            update.bytes,
            update.path.display(),
            update.version
        );
    }
    Ok(())
}

pub async fn decode(
    client: &DestinyClient,
    definition: &str,
    key: &DefinitionKey,
    locale: Locale,
) -> Result<()> {
    let value = client
        .decode_hash(key.clone(), definition, locale)
        .await
        .with_context(|| format!("cannot decode {definition} {key}"))?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
