use anyhow::{Context, Result};
use destiny_api::{ApiRequest, DestinyClient, endpoints};
use serde_json::Value;
use tracing::debug;

pub async fn invoke(
    client: &DestinyClient,
    name: &str,
    params: &[String],
    query: &[(String, String)],
    body: Option<&str>,
) -> Result<()> {
    let endpoint = endpoints::find(name)
        .with_context(|| format!("unknown endpoint {name:?}; see `destiny endpoints`"))?;

    let mut request = ApiRequest::new(endpoint);
    for value in params {
        request = request.path(value);
    }
    for (key, value) in query {
        request = request.query(key, value);
    }
    if let Some(body) = body {
        let body: Value = serde_json::from_str(body).context("--body is not valid JSON")?;
        request = request.body(body);
    }

    debug!(endpoint = endpoint.name, "Invoking endpoint");
    let response = client.transport().send(&request).await?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
