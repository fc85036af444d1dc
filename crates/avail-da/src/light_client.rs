//! HTTP client for the Avail light-client API.
//!
//! The remote service is a black box: one `POST /submit` per blob, one
//! `GET /blocks/{block_number}/data` per retrieval. The trait seam exists so
//! the adapter can be exercised against a scripted double.

use crate::config::AvailConfig;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SubmitRequest {
    /// Base64-encoded blob bytes; the transport wants a JSON-safe string.
    pub data: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SubmitResponse {
    pub block_hash: String,
    /// Transaction hash. Parsed for completeness, unused downstream.
    pub hash: String,
    /// Index of the transaction within its block.
    pub index: u32,
}

#[derive(Clone, Debug, Deserialize)]
pub struct BlockDataResponse {
    pub block_number: u32,
    pub data_transactions: Vec<DataTransaction>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct DataTransaction {
    pub data: String,
    /// Raw extrinsic. Parsed for completeness, unused downstream.
    pub extrinsic: String,
}

#[derive(Debug, thiserror::Error)]
pub enum LightClientError {
    #[error("http request failed: {0}")]
    Transport(String),

    #[error("http request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("response decode failed: {0}")]
    Decode(String),
}

#[async_trait::async_trait]
pub trait LightClientApi: Send + Sync {
    async fn submit(&self, request: SubmitRequest) -> Result<SubmitResponse, LightClientError>;

    async fn block_data(&self, block_number: u32) -> Result<BlockDataResponse, LightClientError>;
}

#[async_trait::async_trait]
impl<T> LightClientApi for std::sync::Arc<T>
where
    T: LightClientApi + ?Sized,
{
    async fn submit(&self, request: SubmitRequest) -> Result<SubmitResponse, LightClientError> {
        (**self).submit(request).await
    }

    async fn block_data(&self, block_number: u32) -> Result<BlockDataResponse, LightClientError> {
        (**self).block_data(block_number).await
    }
}

#[derive(Clone, Debug)]
pub struct HttpLightClient {
    client: reqwest::Client,
    config: AvailConfig,
}

impl HttpLightClient {
    pub fn new(config: AvailConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn from_env() -> Self {
        Self::new(AvailConfig::from_env())
    }

    async fn read_json<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, LightClientError> {
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|err| LightClientError::Decode(format!("body unreadable: {err}")))?;
        if !status.is_success() {
            return Err(LightClientError::Status {
                status: status.as_u16(),
                body: text,
            });
        }
        serde_json::from_str(&text)
            .map_err(|err| LightClientError::Decode(format!("malformed json: {err}")))
    }
}

#[async_trait::async_trait]
impl LightClientApi for HttpLightClient {
    async fn submit(&self, request: SubmitRequest) -> Result<SubmitResponse, LightClientError> {
        let response = self
            .client
            .post(self.config.submit_endpoint())
            .json(&request)
            .send()
            .await
            .map_err(|err| LightClientError::Transport(format!("submit failed: {err}")))?;
        Self::read_json(response).await
    }

    async fn block_data(&self, block_number: u32) -> Result<BlockDataResponse, LightClientError> {
        let response = self
            .client
            .get(self.config.blocks_endpoint(block_number))
            .send()
            .await
            .map_err(|err| LightClientError::Transport(format!("block data failed: {err}")))?;
        Self::read_json(response).await
    }
}
