use crate::contract::{DaError, DaResult, DataAvailability};
use crate::types::{Blob, Commitment, Id, Proof};
use std::sync::{Arc, Mutex};

/// In-memory [`DataAvailability`] implementation.
///
/// Every submitted blob lands in its own block; ids are the 8-byte
/// big-endian block index. Intended for tests of code that is generic over
/// the contract, not for production use.
#[derive(Clone, Debug, Default)]
pub struct MemoryDa {
    blocks: Arc<Mutex<Vec<Blob>>>,
}

impl MemoryDa {
    pub fn new() -> Self {
        Self::default()
    }

    fn decode_index(id: &[u8]) -> DaResult<usize> {
        let bytes: [u8; 8] = id
            .try_into()
            .map_err(|_| DaError::MalformedId(format!("expected 8 bytes, got {}", id.len())))?;
        Ok(u64::from_be_bytes(bytes) as usize)
    }

    fn encode_index(index: usize) -> Id {
        (index as u64).to_be_bytes().to_vec()
    }
}

#[async_trait::async_trait]
impl DataAvailability for MemoryDa {
    async fn submit(&self, blobs: &[Blob]) -> DaResult<(Vec<Id>, Vec<Proof>)> {
        let mut blocks = self
            .blocks
            .lock()
            .map_err(|_| DaError::Backend("memory da mutex poisoned".to_string()))?;

        let mut ids = Vec::with_capacity(blobs.len());
        for blob in blobs {
            ids.push(Self::encode_index(blocks.len()));
            blocks.push(blob.clone());
        }
        Ok((ids, Vec::new()))
    }

    async fn get(&self, ids: &[Id]) -> DaResult<Vec<Blob>> {
        let blocks = self
            .blocks
            .lock()
            .map_err(|_| DaError::Backend("memory da mutex poisoned".to_string()))?;

        let mut blobs = Vec::with_capacity(ids.len());
        for id in ids {
            let index = Self::decode_index(id)?;
            let blob = blocks
                .get(index)
                .ok_or_else(|| DaError::Backend(format!("unknown block index {index}")))?;
            blobs.push(blob.clone());
        }
        Ok(blobs)
    }

    async fn get_ids(&self, height: u64) -> DaResult<Vec<Id>> {
        let blocks = self
            .blocks
            .lock()
            .map_err(|_| DaError::Backend("memory da mutex poisoned".to_string()))?;

        if (height as usize) < blocks.len() {
            Ok(vec![Self::encode_index(height as usize)])
        } else {
            Ok(Vec::new())
        }
    }

    async fn commit(&self, _blobs: &[Blob]) -> DaResult<Vec<Commitment>> {
        Err(DaError::Unsupported("commit"))
    }

    async fn validate(&self, _ids: &[Id], _proofs: &[Proof]) -> DaResult<Vec<bool>> {
        Err(DaError::Unsupported("validate"))
    }
}
