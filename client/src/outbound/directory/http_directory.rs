//! Reqwest-backed user directory adapter.
//!
//! This adapter owns transport details only: request serialisation, HTTP
//! error mapping, and JSON decoding into the port's records. No retries and
//! no policy beyond the transport defaults — failures propagate to the
//! caller as a single [`DirectoryError`].

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};

use super::dto::{RemoteUserDto, UserPayloadDto};
use crate::domain::ports::{DirectoryError, RemoteUser, UserDirectory, UserPayload};

/// Collection endpoint of the public demo backend.
pub const DEFAULT_DIRECTORY_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

/// User directory adapter speaking JSON against one collection endpoint.
pub struct HttpUserDirectory {
    client: Client,
    endpoint: Url,
}

impl HttpUserDirectory {
    /// Build an adapter with a default reqwest client.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url) -> Result<Self, reqwest::Error> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(client, endpoint))
    }

    /// Build an adapter over an existing client, for callers that share one.
    #[must_use]
    pub const fn with_client(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    fn item_url(&self, id: u64) -> Result<Url, DirectoryError> {
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .map_err(|()| DirectoryError::transport("directory endpoint cannot carry path segments"))?
            .push(&id.to_string());
        Ok(url)
    }

    async fn read_success_body(response: reqwest::Response) -> Result<Vec<u8>, DirectoryError> {
        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }
        Ok(body.to_vec())
    }

    fn decode_user(body: &[u8]) -> Result<RemoteUser, DirectoryError> {
        let decoded: RemoteUserDto = serde_json::from_slice(body).map_err(|error| {
            DirectoryError::decode(format!("invalid user payload: {error}"))
        })?;
        Ok(decoded.into_remote_user())
    }
}

#[async_trait]
impl UserDirectory for HttpUserDirectory {
    async fn list(&self) -> Result<Vec<RemoteUser>, DirectoryError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(map_transport_error)?;
        let body = Self::read_success_body(response).await?;

        let decoded: Vec<RemoteUserDto> = serde_json::from_slice(&body).map_err(|error| {
            DirectoryError::decode(format!("invalid user list payload: {error}"))
        })?;
        Ok(decoded
            .into_iter()
            .map(RemoteUserDto::into_remote_user)
            .collect())
    }

    async fn create(&self, payload: &UserPayload) -> Result<RemoteUser, DirectoryError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&UserPayloadDto::from(payload))
            .send()
            .await
            .map_err(map_transport_error)?;
        let body = Self::read_success_body(response).await?;
        Self::decode_user(&body)
    }

    async fn update(&self, id: u64, payload: &UserPayload) -> Result<RemoteUser, DirectoryError> {
        let response = self
            .client
            .put(self.item_url(id)?)
            .json(&UserPayloadDto::from(payload))
            .send()
            .await
            .map_err(map_transport_error)?;
        let body = Self::read_success_body(response).await?;
        Self::decode_user(&body)
    }

    async fn delete(&self, id: u64) -> Result<(), DirectoryError> {
        let response = self
            .client
            .delete(self.item_url(id)?)
            .send()
            .await
            .map_err(map_transport_error)?;
        Self::read_success_body(response).await?;
        Ok(())
    }
}

fn map_transport_error(error: reqwest::Error) -> DirectoryError {
    if error.is_timeout() {
        DirectoryError::timeout(error.to_string())
    } else {
        DirectoryError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> DirectoryError {
    let preview = body_preview(body);
    let message = if preview.is_empty() {
        "no response body".to_owned()
    } else {
        preview
    };

    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            DirectoryError::timeout(format!("status {}: {message}", status.as_u16()))
        }
        _ => DirectoryError::status(status.as_u16(), message),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 120;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        let truncated: String = compact.chars().take(PREVIEW_CHAR_LIMIT).collect();
        format!("{truncated}...")
    } else {
        compact
    }
}
