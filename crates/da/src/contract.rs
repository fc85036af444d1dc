use crate::types::{Blob, Commitment, Id, Proof};

#[derive(Debug, thiserror::Error)]
pub enum DaError {
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),

    #[error("malformed id: {0}")]
    MalformedId(String),

    #[error("backend failure: {0}")]
    Backend(String),
}

pub type DaResult<T> = Result<T, DaError>;

/// Data-availability capability contract.
///
/// Batch operations are all-or-nothing: the first failing element aborts the
/// whole call and no partial results are returned.
#[async_trait::async_trait]
pub trait DataAvailability: Send + Sync {
    /// Submit each blob to the DA layer, returning one id per blob in input
    /// order together with any inclusion proofs the layer produces.
    async fn submit(&self, blobs: &[Blob]) -> DaResult<(Vec<Id>, Vec<Proof>)>;

    /// Retrieve the blobs addressed by the given ids, flattened in request
    /// order. An id addressing an empty unit contributes no blobs.
    async fn get(&self, ids: &[Id]) -> DaResult<Vec<Blob>>;

    /// Enumerate the ids present at the given chain height.
    async fn get_ids(&self, height: u64) -> DaResult<Vec<Id>>;

    /// Compute commitments for the given blobs.
    ///
    /// Implementations without a commitment scheme return
    /// [`DaError::Unsupported`] rather than an empty success.
    async fn commit(&self, blobs: &[Blob]) -> DaResult<Vec<Commitment>>;

    /// Check the given proofs against the ids they claim to cover.
    async fn validate(&self, ids: &[Id], proofs: &[Proof]) -> DaResult<Vec<bool>>;
}

#[async_trait::async_trait]
impl<T> DataAvailability for std::sync::Arc<T>
where
    T: DataAvailability + ?Sized,
{
    async fn submit(&self, blobs: &[Blob]) -> DaResult<(Vec<Id>, Vec<Proof>)> {
        (**self).submit(blobs).await
    }

    async fn get(&self, ids: &[Id]) -> DaResult<Vec<Blob>> {
        (**self).get(ids).await
    }

    async fn get_ids(&self, height: u64) -> DaResult<Vec<Id>> {
        (**self).get_ids(height).await
    }

    async fn commit(&self, blobs: &[Blob]) -> DaResult<Vec<Commitment>> {
        (**self).commit(blobs).await
    }

    async fn validate(&self, ids: &[Id], proofs: &[Proof]) -> DaResult<Vec<bool>> {
        (**self).validate(ids, proofs).await
    }
}
