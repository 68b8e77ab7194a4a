use crate::config::{join_url, normalize_base_url};
use crate::{ApiError, Session};
use reqwest::header::AUTHORIZATION;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::{ApiErrorBody, ClientConfig};
use std::sync::Arc;

/// HTTP client for the CareLink REST API.
///
/// Every request is a single attempt against `base_url` + a relative path.
/// When the session holds a token it is sent as `Authorization: Bearer`.
/// No timeout, retry or refresh policy is applied, and failures are returned
/// to the caller as-is.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Arc<str>,
    session: Session,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("session", &self.session)
            .finish()
    }
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

impl ApiClient {
    pub fn new(base_url: &str, session: Session) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: normalize_base_url(base_url).into(),
            session,
        }
    }

    pub fn from_config(config: &ClientConfig, session: Session) -> Self {
        Self::new(&config.api.base_url, session)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        let builder = self.http.request(method.clone(), &url);
        match self.session.token() {
            Some(token) => {
                tracing::debug!(%method, %url, bearer = true, "dispatching request");
                builder.header(AUTHORIZATION, format!("Bearer {token}"))
            }
            None => {
                tracing::debug!(%method, %url, bearer = false, "dispatching request");
                builder
            }
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(self.request(Method::GET, path)).await
    }

    pub async fn get_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.send(self.request(Method::GET, path).query(query)).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(self.request(Method::POST, path).json(body)).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(self.request(Method::PUT, path).json(body)).await
    }

    /// DELETE; any response body is discarded.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send_raw(self.request(Method::DELETE, path)).await?;
        Ok(())
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let (url, text) = self.send_raw(builder).await?;
        // Empty 2xx bodies decode as JSON `null`, which covers `()` and `Option<_>`.
        let text = if text.trim().is_empty() { "null" } else { text.as_str() };
        serde_json::from_str(text).map_err(|source| ApiError::Decode { url, source })
    }

    async fn send_raw(&self, builder: RequestBuilder) -> Result<(String, String), ApiError> {
        let request = builder.build().map_err(|source| ApiError::Transport {
            url: self.base_url.to_string(),
            source,
        })?;
        let url = request.url().to_string();

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|source| ApiError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|source| ApiError::Transport {
            url: url.clone(),
            source,
        })?;

        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "request failed");
            return Err(ApiError::Status {
                url,
                status: status.as_u16(),
                body: ApiErrorBody::parse(&text),
                raw: text,
            });
        }
        Ok((url, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_header_only_when_token_present() {
        let session = Session::in_memory();
        let client = ApiClient::new("http://localhost:8080/", session.clone());

        let anonymous = client.request(Method::GET, "/api/parents").build().unwrap();
        assert!(anonymous.headers().get(AUTHORIZATION).is_none());
        assert_eq!(anonymous.url().as_str(), "http://localhost:8080/api/parents");

        session.sign_in("abc123");
        let authed = client.request(Method::GET, "actuator/health").build().unwrap();
        assert_eq!(authed.headers()[AUTHORIZATION], "Bearer abc123");
        assert_eq!(authed.url().as_str(), "http://localhost:8080/actuator/health");
    }

    #[test]
    fn token_is_read_per_request() {
        let session = Session::in_memory();
        let client = ApiClient::new("http://api", session.clone());
        session.sign_in("first");
        let a = client.request(Method::GET, "/x").build().unwrap();
        session.sign_in("second");
        let b = client.request(Method::GET, "/x").build().unwrap();
        assert_eq!(a.headers()[AUTHORIZATION], "Bearer first");
        assert_eq!(b.headers()[AUTHORIZATION], "Bearer second");
    }
}
