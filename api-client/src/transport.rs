//! HTTP transport for the battle-rap backend.
//!
//! One thin layer over reqwest: resolves the target URL, expands query
//! parameters, attaches the bearer token, serializes bodies, and classifies
//! non-2xx responses as [`ApiError::Status`]. No retries, no caching.

use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::{is_absolute_url, normalize_base_url};
use crate::error::ApiError;

const REQUEST_TIMEOUT_SECS: u64 = 30;
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Query parameters as ordered key/value pairs. List values are expanded
/// into one repeated key per element.
#[derive(Debug, Default, Clone)]
pub struct Query(Vec<(String, String)>);

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, key: &str, value: impl ToString) -> Self {
        self.0.push((key.to_string(), value.to_string()));
        self
    }

    /// Skips `None` entries, matching the transport contract of ignoring
    /// absent parameters.
    pub fn push_opt(self, key: &str, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.push(key, value),
            None => self,
        }
    }

    /// Appends one repeated key per element.
    pub fn push_all<I, V>(mut self, key: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: ToString,
    {
        for value in values {
            self.0.push((key.to_string(), value.to_string()));
        }
        self
    }

    /// Appends another set of pairs after this one, so module-computed
    /// parameters follow whatever the caller already supplied.
    pub fn merge(mut self, other: Query) -> Self {
        self.0.extend(other.0);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.0
    }
}

/// Per-request overrides threaded through every resource-module method.
#[derive(Debug, Default, Clone)]
pub struct RequestOptions {
    pub query: Query,
    /// Overrides the client-level bearer token for this request.
    pub token: Option<String>,
    /// Overrides the configured base URL for this request.
    pub base_url: Option<String>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            ..Self::default()
        }
    }

    pub fn query(mut self, query: Query) -> Self {
        self.query = query;
        self
    }

    /// Keeps the caller's query and appends `extra` after it.
    pub fn merged_query(mut self, extra: Query) -> Self {
        self.query = self.query.merge(extra);
        self
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }
}

enum Body {
    Json(Value),
    Raw {
        bytes: Vec<u8>,
        content_type: Option<String>,
        extra_headers: std::collections::HashMap<String, String>,
    },
}

/// Shared HTTP transport with connection pooling and fixed timeouts.
#[derive(Debug, Clone)]
pub struct Transport {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl Transport {
    pub fn new(base_url: impl AsRef<str>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: normalize_base_url(base_url.as_ref()),
            token: None,
        }
    }

    /// Same transport with a default bearer token applied to every request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn resolve_url(&self, path: &str, options: &RequestOptions) -> String {
        if is_absolute_url(path) {
            return path.to_string();
        }
        let base = options
            .base_url
            .as_deref()
            .map(normalize_base_url)
            .unwrap_or_else(|| self.base_url.clone());
        if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        }
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        options: &RequestOptions,
        body: Option<Body>,
    ) -> Result<Option<Value>, ApiError> {
        let url = self.resolve_url(path, options);

        let mut request = self
            .client
            .request(method.clone(), &url)
            .header(ACCEPT, "application/json");

        if !options.query.is_empty() {
            request = request.query(options.query.pairs());
        }

        if let Some(token) = options.token.as_deref().or(self.token.as_deref()) {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        match body {
            Some(Body::Json(value)) => {
                request = request.header(CONTENT_TYPE, "application/json").json(&value);
            }
            Some(Body::Raw {
                bytes,
                content_type,
                extra_headers,
            }) => {
                if let Some(content_type) = content_type {
                    request = request.header(CONTENT_TYPE, content_type);
                }
                for (name, value) in &extra_headers {
                    request = request.header(name.as_str(), value.as_str());
                }
                request = request.body(bytes);
            }
            None => {}
        }

        let response = request.send().await?;
        let status = response.status();
        let final_url = response.url().to_string();
        let content_length = response.content_length();
        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.contains("application/json"))
            .unwrap_or(false);

        let payload = if status == StatusCode::NO_CONTENT || content_length == Some(0) {
            None
        } else {
            let text = response.text().await?;
            if text.is_empty() {
                None
            } else if is_json {
                match serde_json::from_str(&text) {
                    Ok(value) => Some(value),
                    Err(err) if status.is_success() => {
                        return Err(ApiError::Decode {
                            url: final_url,
                            source: err,
                        });
                    }
                    // Malformed error bodies are kept verbatim as text.
                    Err(_) => Some(Value::String(text)),
                }
            } else {
                Some(Value::String(text))
            }
        };

        if !status.is_success() {
            let message = extract_error_message(payload.as_ref())
                .unwrap_or_else(|| format!("request to {final_url} failed with status {status}"));
            tracing::warn!(%method, url = %final_url, status = status.as_u16(), "API request failed");
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
                data: payload.unwrap_or(Value::Null),
            });
        }

        Ok(payload)
    }

    fn decode<T: DeserializeOwned>(payload: Option<Value>, url: &str) -> Result<T, ApiError> {
        serde_json::from_value(payload.unwrap_or(Value::Null)).map_err(|err| ApiError::Decode {
            url: url.to_string(),
            source: err,
        })
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        options: &RequestOptions,
    ) -> Result<T, ApiError> {
        let payload = self.execute(Method::GET, path, options, None).await?;
        Self::decode(payload, path)
    }

    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<&impl Serialize>,
        options: &RequestOptions,
    ) -> Result<T, ApiError> {
        let body = Self::json_body(body)?;
        let payload = self.execute(Method::POST, path, options, body).await?;
        Self::decode(payload, path)
    }

    pub async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<&impl Serialize>,
        options: &RequestOptions,
    ) -> Result<T, ApiError> {
        let body = Self::json_body(body)?;
        let payload = self.execute(Method::PUT, path, options, body).await?;
        Self::decode(payload, path)
    }

    pub async fn patch<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<&impl Serialize>,
        options: &RequestOptions,
    ) -> Result<T, ApiError> {
        let body = Self::json_body(body)?;
        let payload = self.execute(Method::PATCH, path, options, body).await?;
        Self::decode(payload, path)
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        options: &RequestOptions,
    ) -> Result<T, ApiError> {
        let payload = self.execute(Method::DELETE, path, options, None).await?;
        Self::decode(payload, path)
    }

    /// Sends a pre-encoded body unmodified, e.g. audio bytes to a presigned
    /// upload target. `extra_headers` carries whatever the presign response
    /// demanded on the direct upload request.
    pub async fn put_raw(
        &self,
        path: &str,
        bytes: Vec<u8>,
        content_type: Option<&str>,
        extra_headers: &std::collections::HashMap<String, String>,
        options: &RequestOptions,
    ) -> Result<Option<Value>, ApiError> {
        let body = Body::Raw {
            bytes,
            content_type: content_type.map(str::to_string),
            extra_headers: extra_headers.clone(),
        };
        self.execute(Method::PUT, path, options, Some(body)).await
    }

    fn json_body(body: Option<&impl Serialize>) -> Result<Option<Body>, ApiError> {
        match body {
            Some(body) => {
                let value = serde_json::to_value(body).map_err(|err| ApiError::Decode {
                    url: String::new(),
                    source: err,
                })?;
                Ok(Some(Body::Json(value)))
            }
            None => Ok(None),
        }
    }
}

fn extract_error_message(payload: Option<&Value>) -> Option<String> {
    payload
        .and_then(|value| value.get("message"))
        .and_then(Value::as_str)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_expands_lists_into_repeated_keys() {
        let query = Query::new()
            .push("status", "finished")
            .push_all("role", ["artist", "judge", "listener"]);
        assert_eq!(
            query.pairs(),
            &[
                ("status".to_string(), "finished".to_string()),
                ("role".to_string(), "artist".to_string()),
                ("role".to_string(), "judge".to_string()),
                ("role".to_string(), "listener".to_string()),
            ]
        );
    }

    #[test]
    fn query_skips_absent_optionals() {
        let query = Query::new()
            .push_opt("page", Some(2))
            .push_opt("limit", None::<u32>)
            .push_opt("search", None::<&str>);
        assert_eq!(query.pairs(), &[("page".to_string(), "2".to_string())]);
    }

    #[test]
    fn resolve_url_normalizes_path_and_base() {
        let transport = Transport::new("https://api.example.com/");
        let options = RequestOptions::new();
        assert_eq!(
            transport.resolve_url("/api/v1/battles", &options),
            "https://api.example.com/api/v1/battles"
        );
        assert_eq!(
            transport.resolve_url("api/v1/battles", &options),
            "https://api.example.com/api/v1/battles"
        );
    }

    #[test]
    fn resolve_url_prefers_request_override() {
        let transport = Transport::new("https://api.example.com");
        let options = RequestOptions::new().base_url("https://staging.example.com/");
        assert_eq!(
            transport.resolve_url("/health", &options),
            "https://staging.example.com/health"
        );
    }

    #[test]
    fn resolve_url_passes_absolute_paths_through() {
        let transport = Transport::new("https://api.example.com");
        let options = RequestOptions::new();
        assert_eq!(
            transport.resolve_url("https://cdn.example.com/upload", &options),
            "https://cdn.example.com/upload"
        );
    }

    #[test]
    fn error_message_prefers_body_message_field() {
        let payload = serde_json::json!({ "message": "judges only" });
        assert_eq!(extract_error_message(Some(&payload)).as_deref(), Some("judges only"));
        assert_eq!(extract_error_message(Some(&Value::String("oops".into()))), None);
        assert_eq!(extract_error_message(None), None);
    }
}
