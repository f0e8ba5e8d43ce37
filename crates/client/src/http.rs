//! Thin JSON-over-HTTP client bound to a single base URL.
//!
//! Every request carries `Content-Type: application/json`. Non-2xx answers
//! become [`ApiError`]; 204 answers decode as JSON `null`; every other answer
//! is decoded into the caller's type without further checks.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::config::Config;
use crate::error::{ApiError, ClientError, Result};

/// Ordered query parameters. Values are stored in their `Display` form and
/// appended to the URL in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl ToString) -> &mut Self {
        self.0.push((key.into(), value.to_string()));
        self
    }

    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.push(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.push(key, value);
        }
        params
    }
}

/// Per-request extras. Headers here replace defaults of the same name.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub params: QueryParams,
    pub headers: HeaderMap,
}

impl RequestOptions {
    pub fn with_params(params: QueryParams) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
    default_headers: HeaderMap,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    pub fn with_client(base_url: &str, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            default_headers: HeaderMap::new(),
        }
    }

    /// Client for `API_URL`, authenticated with `API_KEY` when one is set.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = Self::new(&config.api_url);
        match &config.api_key {
            Some(key) => client.with_bearer_token(key),
            None => Ok(client),
        }
    }

    /// Sends `Authorization: Bearer <token>` with every request.
    pub fn with_bearer_token(mut self, token: &str) -> Result<Self> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|e| ClientError::InvalidHeader(e.to_string()))?;
        value.set_sensitive(true);
        self.default_headers.insert(AUTHORIZATION, value);
        Ok(self)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_url(&self, path: &str, params: &QueryParams) -> Result<Url> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, path))?;

        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params.iter());
        }

        Ok(url)
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        options: &RequestOptions,
    ) -> Result<T> {
        self.request::<T, ()>(Method::GET, path, None, options).await
    }

    pub async fn post<T, B>(
        &self,
        path: &str,
        body: Option<&B>,
        options: &RequestOptions,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, path, body, options).await
    }

    pub async fn put<T, B>(
        &self,
        path: &str,
        body: Option<&B>,
        options: &RequestOptions,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::PUT, path, body, options).await
    }

    pub async fn patch<T, B>(
        &self,
        path: &str,
        body: Option<&B>,
        options: &RequestOptions,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::PATCH, path, body, options).await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        options: &RequestOptions,
    ) -> Result<T> {
        self.request::<T, ()>(Method::DELETE, path, None, options).await
    }

    pub async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        options: &RequestOptions,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.build_url(path, &options.params)?;
        tracing::debug!("{} {}", method, url);

        let mut builder = self
            .client
            .request(method, url)
            .headers(self.request_headers(&options.headers));

        if let Some(body) = body {
            builder = builder.body(serde_json::to_vec(body)?);
        }

        let response = builder.send().await?;
        handle_response(response).await
    }

    fn request_headers(&self, overrides: &HeaderMap) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        for layer in [&self.default_headers, overrides] {
            for name in layer.keys() {
                headers.remove(name);
            }
            for (name, value) in layer {
                headers.append(name, value.clone());
            }
        }

        headers
    }
}

async fn handle_response<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();

    if !status.is_success() {
        // An unreadable error body gets the same fallback as an unparsable one.
        let body = response.bytes().await.unwrap_or_default();
        let error = api_error(status, &body);
        tracing::warn!(status = error.status, "API request failed: {}", error.message);
        return Err(error.into());
    }

    if status == StatusCode::NO_CONTENT {
        return Ok(serde_json::from_value(Value::Null)?);
    }

    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

fn api_error(status: StatusCode, body: &[u8]) -> ApiError {
    let status_text = status.canonical_reason().unwrap_or_default().to_string();
    let message = serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|payload| error_message(&payload))
        .unwrap_or_else(|| format!("HTTP {}: {}", status.as_u16(), status_text));

    ApiError {
        status: status.as_u16(),
        status_text,
        message,
    }
}

/// First non-empty string among `message` then `error`.
fn error_message(payload: &Value) -> Option<String> {
    ["message", "error"].into_iter().find_map(|field| {
        payload
            .get(field)
            .and_then(Value::as_str)
            .filter(|message| !message.is_empty())
            .map(str::to_string)
    })
}
