use reqwest::{multipart::Form, Method, RequestBuilder, Url};

use shopdesk_products::ProductPayload;

use crate::{error::ClientError, response::ApiResponse};

/// Long-lived backend client: one connection pool, one base address.
///
/// Requests can only be issued through [`ApiClient::authorized`], so every
/// outbound call carries the session's bearer token.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_http_client(reqwest::Client::new(), base_url)
    }

    /// Use a preconfigured `reqwest::Client` (proxies, TLS roots, timeouts).
    pub fn with_http_client(http: reqwest::Client, base_url: &str) -> Result<Self, ClientError> {
        // Without a trailing slash `join` would replace the last path segment.
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let base_url =
            Url::parse(&normalized).map_err(|_| ClientError::InvalidBaseUrl(base_url.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(normalized));
        }
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Scope the client to one session token.
    pub fn authorized<'a>(&'a self, token: &'a str) -> AuthorizedClient<'a> {
        AuthorizedClient { client: self, token }
    }

    fn url(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|_| ClientError::InvalidPath(path.to_string()))
    }
}

/// Borrowed view of an [`ApiClient`] that injects one bearer token.
#[derive(Clone, Copy)]
pub struct AuthorizedClient<'a> {
    client: &'a ApiClient,
    token: &'a str,
}

impl core::fmt::Debug for AuthorizedClient<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AuthorizedClient")
            .field("base_url", &self.client.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl AuthorizedClient<'_> {
    pub async fn get(&self, path: &str) -> Result<ApiResponse, ClientError> {
        let req = self.request(Method::GET, path)?;
        self.send(req, Method::GET, path).await
    }

    pub async fn post(&self, path: &str, form: Form) -> Result<ApiResponse, ClientError> {
        let req = self.request(Method::POST, path)?.multipart(form);
        self.send(req, Method::POST, path).await
    }

    pub async fn put(&self, path: &str, form: Form) -> Result<ApiResponse, ClientError> {
        let req = self.request(Method::PUT, path)?.multipart(form);
        self.send(req, Method::PUT, path).await
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ClientError> {
        let url = self.client.url(path)?;
        Ok(self.client.http.request(method, url).bearer_auth(self.token))
    }

    async fn send(
        &self,
        req: RequestBuilder,
        method: Method,
        path: &str,
    ) -> Result<ApiResponse, ClientError> {
        let resp = req.send().await.map_err(|e| {
            tracing::warn!(%method, path, error = %e, "backend request failed");
            ClientError::Transport(e)
        })?;

        let status = resp.status();
        let body = resp.text().await?;
        tracing::debug!(%method, path, status = status.as_u16(), "backend responded");

        Ok(ApiResponse::new(status, body))
    }
}

/// Encode a product payload as a multipart form, one text part per field.
pub fn payload_form(payload: &ProductPayload) -> Form {
    payload
        .parts()
        .iter()
        .fold(Form::new(), |form, (name, value)| form.text(*name, value.clone()))
}
