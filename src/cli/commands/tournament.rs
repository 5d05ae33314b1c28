use anyhow::Context;
use serde_json::{json, Value};
use std::io::Read;

use crate::cli::client::{ApiClient, ApiReply};
use crate::cli::utils::{output_document, output_error, output_success};
use crate::cli::OutputFormat;

pub async fn load(client: &ApiClient, id: &str, output_format: OutputFormat) -> anyhow::Result<()> {
    let reply = client.load(id).await?;
    ensure_success(&reply, &output_format)?;
    output_document(&output_format, &reply.body)
}

pub async fn save(
    client: &ApiClient,
    id: Option<&str>,
    token: &str,
    file: Option<&str>,
    output_format: OutputFormat,
) -> anyhow::Result<()> {
    let tournament = read_payload(file)?;
    let reply = client.save(id, tournament, token).await?;
    ensure_success(&reply, &output_format)?;

    let saved_id = reply.body.get("id").and_then(Value::as_str).unwrap_or("?");
    let verb = if reply.status == reqwest::StatusCode::CREATED { "Created" } else { "Updated" };
    output_success(
        &output_format,
        &format!("{} tournament {}", verb, saved_id),
        Some(reply.body.clone()),
    )
}

pub async fn delete(client: &ApiClient, id: &str, token: &str, output_format: OutputFormat) -> anyhow::Result<()> {
    let reply = client.delete(id, token).await?;
    ensure_success(&reply, &output_format)?;
    output_success(&output_format, &format!("Deleted tournament {}", id), Some(json!({ "id": id })))
}

pub async fn health(client: &ApiClient, output_format: OutputFormat) -> anyhow::Result<()> {
    let reply = client.health().await?;
    ensure_success(&reply, &output_format)?;
    output_document(&output_format, &reply.body)
}

fn ensure_success(reply: &ApiReply, output_format: &OutputFormat) -> anyhow::Result<()> {
    if reply.is_success() {
        return Ok(());
    }
    let message = reply.error_message();
    // Text mode reports through the returned error only
    if let OutputFormat::Json = output_format {
        output_error(output_format, &message, Some(reply.status.as_u16()))?;
    }
    anyhow::bail!("{} ({})", message, reply.status)
}

fn read_payload(file: Option<&str>) -> anyhow::Result<Value> {
    let raw = match file {
        Some(path) => std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read tournament JSON from stdin")?;
            buf
        }
    };

    serde_json::from_str(&raw).context("tournament payload is not valid JSON")
}
