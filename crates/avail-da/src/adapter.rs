use crate::config::AvailConfig;
use crate::id::{IdError, ParsedId, decode_block_number, encode_height_id, encode_submission_id};
use crate::light_client::{HttpLightClient, LightClientApi, LightClientError, SubmitRequest};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use da::{Blob, Commitment, DaError, DaResult, DataAvailability, Id, Proof};
use tracing::info;

/// Avail backend for the [`DataAvailability`] contract.
///
/// Holds an application tag and a light-client handle; nothing else. All
/// batch operations issue one request per element, strictly sequentially,
/// and abort on the first failure with no partial results.
#[derive(Clone, Debug)]
pub struct AvailDa<C = HttpLightClient> {
    app_id: u32,
    light_client: C,
}

impl AvailDa<HttpLightClient> {
    pub fn new(app_id: u32, config: AvailConfig) -> Self {
        Self {
            app_id,
            light_client: HttpLightClient::new(config),
        }
    }

    pub fn from_env(app_id: u32) -> Self {
        Self::new(app_id, AvailConfig::from_env())
    }
}

impl<C: LightClientApi> AvailDa<C> {
    /// Build the adapter over any light-client implementation. Tests use
    /// this with a scripted double.
    pub fn with_light_client(app_id: u32, light_client: C) -> Self {
        Self {
            app_id,
            light_client,
        }
    }

    pub fn app_id(&self) -> u32 {
        self.app_id
    }
}

impl From<LightClientError> for DaError {
    fn from(err: LightClientError) -> Self {
        DaError::Backend(err.to_string())
    }
}

impl From<IdError> for DaError {
    fn from(err: IdError) -> Self {
        DaError::MalformedId(err.to_string())
    }
}

#[async_trait::async_trait]
impl<C: LightClientApi> DataAvailability for AvailDa<C> {
    async fn submit(&self, blobs: &[Blob]) -> DaResult<(Vec<Id>, Vec<Proof>)> {
        let mut ids = Vec::with_capacity(blobs.len());
        for blob in blobs {
            let request = SubmitRequest {
                data: STANDARD.encode(blob),
            };
            let response = self.light_client.submit(request).await?;
            ids.push(encode_submission_id(response.index, &response.block_hash));
        }
        info!(app_id = self.app_id, count = ids.len(), "submitted blobs to avail");
        Ok((ids, Vec::new()))
    }

    async fn get(&self, ids: &[Id]) -> DaResult<Vec<Blob>> {
        let mut blobs = Vec::new();
        for id in ids {
            let block_number = match ParsedId::parse(id)? {
                ParsedId::Height(_) => decode_block_number(id)?,
                ParsedId::Submission { .. } => {
                    return Err(DaError::MalformedId(
                        "submission id does not address a block; use a height id".to_string(),
                    ));
                }
            };
            let response = self.light_client.block_data(block_number).await?;
            for transaction in response.data_transactions {
                // Raw bytes of the JSON "data" string, not base64-decoded.
                // Asymmetric with submit; see the adapter tests.
                blobs.push(transaction.data.into_bytes());
            }
        }
        Ok(blobs)
    }

    async fn get_ids(&self, height: u64) -> DaResult<Vec<Id>> {
        // Placeholder until the light-client API can enumerate the blobs at
        // a height: the height itself stands in as the only id.
        Ok(vec![encode_height_id(height)])
    }

    async fn commit(&self, _blobs: &[Blob]) -> DaResult<Vec<Commitment>> {
        Err(DaError::Unsupported("commit"))
    }

    async fn validate(&self, _ids: &[Id], _proofs: &[Proof]) -> DaResult<Vec<bool>> {
        Err(DaError::Unsupported("validate"))
    }
}
