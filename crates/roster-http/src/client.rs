//! JSON-over-HTTP client.

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, trace};

use roster_core::error::{Error, ProtocolError, TransportError};
use roster_core::{ApiResponse, ApiUrl};

use crate::endpoints::ErrorBody;

/// Map a reqwest failure onto the transport variants.
pub(crate) fn transport_error(err: reqwest::Error) -> Error {
    let err = if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else if err.is_decode() {
        TransportError::Decode {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    };
    Error::Transport(err)
}

/// HTTP client bound to one backend.
#[derive(Debug, Clone)]
pub(crate) struct ApiClient {
    client: reqwest::Client,
    api: ApiUrl,
}

impl ApiClient {
    /// Create a new client for the given backend.
    pub fn new(api: ApiUrl) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("roster/", env!("CARGO_PKG_VERSION")))
            .default_headers(Self::default_headers())
            .build()
            .expect("failed to build HTTP client");

        Self { client, api }
    }

    /// Returns the backend URL this client is configured for.
    pub fn api(&self) -> &ApiUrl {
        &self.api
    }

    /// GET a JSON document.
    #[instrument(skip(self), fields(api = %self.api))]
    pub async fn get<R>(&self, url: &str) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        debug!(%url, "GET");

        let response = self.client.get(url).send().await.map_err(transport_error)?;

        self.handle_response(response).await
    }

    /// GET a JSON document with query parameters.
    #[instrument(skip(self), fields(api = %self.api))]
    pub async fn query<Q, R>(&self, url: &str, params: &Q) -> Result<R, Error>
    where
        Q: Serialize + std::fmt::Debug,
        R: DeserializeOwned,
    {
        debug!(%url, "GET");
        trace!(?params, "query parameters");

        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(transport_error)?;

        self.handle_response(response).await
    }

    /// POST a JSON body and decode the JSON answer.
    #[instrument(skip(self, body), fields(api = %self.api))]
    pub async fn post<B, R>(&self, url: &str, body: &B) -> Result<R, Error>
    where
        B: Serialize + std::fmt::Debug,
        R: DeserializeOwned,
    {
        debug!(%url, "POST");
        trace!(?body, "request body");

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;

        self.handle_response(response).await
    }

    /// PUT a JSON body; the answer is opaque.
    #[instrument(skip(self, body), fields(api = %self.api))]
    pub async fn put<B>(&self, url: &str, body: &B) -> Result<ApiResponse, Error>
    where
        B: Serialize + std::fmt::Debug,
    {
        debug!(%url, "PUT");
        trace!(?body, "request body");

        let response = self
            .client
            .put(url)
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;

        self.handle_opaque_response(response).await
    }

    /// DELETE a resource; the answer is opaque.
    #[instrument(skip(self), fields(api = %self.api))]
    pub async fn delete(&self, url: &str) -> Result<ApiResponse, Error> {
        debug!(%url, "DELETE");

        let response = self
            .client
            .delete(url)
            .send()
            .await
            .map_err(transport_error)?;

        self.handle_opaque_response(response).await
    }

    fn default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    /// Decode a successful response, or turn a failed one into an error.
    async fn handle_response<R: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<R, Error> {
        let status = response.status();
        trace!(status = %status, "response");

        if status.is_success() {
            response.json::<R>().await.map_err(transport_error)
        } else {
            Err(Error::Protocol(self.parse_error_response(response).await))
        }
    }

    /// Like [`Self::handle_response`], but tolerates empty and non-JSON bodies.
    async fn handle_opaque_response(
        &self,
        response: reqwest::Response,
    ) -> Result<ApiResponse, Error> {
        let status = response.status();
        trace!(status = %status, "response");

        if !status.is_success() {
            return Err(Error::Protocol(self.parse_error_response(response).await));
        }

        let body = response.text().await.map_err(transport_error)?;
        if body.trim().is_empty() {
            return Ok(ApiResponse::default());
        }

        let value = serde_json::from_str(&body)
            .unwrap_or_else(|_| serde_json::Value::String(body.clone()));
        Ok(ApiResponse::new(value))
    }

    /// Parse an error body, keeping whatever fields are present.
    async fn parse_error_response(&self, response: reqwest::Response) -> ProtocolError {
        let status = response.status().as_u16();

        match response.json::<ErrorBody>().await {
            Ok(body) => ProtocolError::new(status, body.error, body.message),
            Err(_) => ProtocolError::new(status, None, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation() {
        let api = ApiUrl::new("http://localhost:8080").unwrap();
        let client = ApiClient::new(api.clone());
        assert_eq!(client.api().as_str(), api.as_str());
    }
}
