use anyhow::{Context, Result};
use reqwest::{Method, StatusCode};
use serde_json::Value;
use url::Url;

/// Thin HTTP client for the tournament API
pub struct ApiClient {
    base: Url,
    http: reqwest::Client,
}

/// Status and decoded JSON body of a response
#[derive(Debug)]
pub struct ApiReply {
    pub status: StatusCode,
    pub body: Value,
}

impl ApiReply {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Server-provided error message, or the status text
    pub fn error_message(&self) -> String {
        self.body
            .get("error")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| self.status.to_string())
    }
}

impl ApiClient {
    pub fn new(server: &str) -> Result<Self> {
        let base = Url::parse(server).with_context(|| format!("invalid server URL: {}", server))?;
        Ok(Self {
            base,
            http: reqwest::Client::new(),
        })
    }

    pub fn url(&self, path: &str) -> Result<Url> {
        self.base.join(path).with_context(|| format!("invalid path: {}", path))
    }

    pub async fn load(&self, id: &str) -> Result<ApiReply> {
        let mut url = self.url("/load")?;
        url.query_pairs_mut().append_pair("id", id);
        self.send(self.http.request(Method::GET, url)).await
    }

    pub async fn save(&self, id: Option<&str>, tournament: Value, token: &str) -> Result<ApiReply> {
        let mut body = serde_json::json!({ "tournament": tournament });
        if let Some(id) = id {
            body["id"] = Value::String(id.to_string());
        }

        let request = self
            .http
            .request(Method::POST, self.url("/save")?)
            .bearer_auth(token)
            .json(&body);
        self.send(request).await
    }

    pub async fn delete(&self, id: &str, token: &str) -> Result<ApiReply> {
        // Path segment is percent-encoded by the url crate
        let mut url = self.url("/tournament/")?;
        url.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("server URL cannot have a path"))?
            .pop_if_empty()
            .push(id);

        self.send(self.http.request(Method::DELETE, url).bearer_auth(token)).await
    }

    pub async fn health(&self) -> Result<ApiReply> {
        self.send(self.http.request(Method::GET, self.url("/health")?)).await
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<ApiReply> {
        let response = request.send().await.context("request failed")?;
        let status = response.status();
        let text = response.text().await.context("failed to read response body")?;
        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(Value::String(text))
        };
        Ok(ApiReply { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_paths_against_base() {
        let client = ApiClient::new("http://localhost:3000/").unwrap();
        assert_eq!(client.url("/load").unwrap().as_str(), "http://localhost:3000/load");
    }

    #[test]
    fn rejects_bad_server_urls() {
        assert!(ApiClient::new("localhost without scheme").is_err());
    }

    #[test]
    fn error_message_prefers_body() {
        let reply = ApiReply {
            status: StatusCode::NOT_FOUND,
            body: serde_json::json!({"error": "Tournament not found: x"}),
        };
        assert_eq!(reply.error_message(), "Tournament not found: x");

        let reply = ApiReply {
            status: StatusCode::BAD_GATEWAY,
            body: Value::Null,
        };
        assert_eq!(reply.error_message(), "502 Bad Gateway");
    }
}
