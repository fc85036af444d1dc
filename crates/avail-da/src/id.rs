//! Identifier codec.
//!
//! Two id shapes exist side by side and are not mutually decodable:
//!
//! - submission ids: a 4-byte little-endian transaction index followed by
//!   the raw bytes of the containing block's hash string (variable length),
//! - height ids: a chain height as exactly 8 big-endian bytes.
//!
//! [`ParsedId`] disambiguates the two by length so retrieval can reject the
//! shape it cannot address instead of misreading its bytes.

use da::Id;

/// A `u32` transaction index occupies the first 4 bytes of a submission id.
pub const TX_INDEX_LEN: usize = 4;

/// Height ids are a bare big-endian `u64`.
pub const HEIGHT_ID_LEN: usize = 8;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    #[error("id too short: {len} bytes")]
    TooShort { len: usize },

    #[error("block hash bytes are not valid utf-8")]
    HashNotUtf8,
}

/// Encode the location of a submitted blob: transaction index (little-endian)
/// followed by the raw bytes of the block hash string. No length prefix; the
/// hash is whatever remains after the index.
pub fn encode_submission_id(tx_index: u32, block_hash: &str) -> Id {
    let mut id = Vec::with_capacity(TX_INDEX_LEN + block_hash.len());
    id.extend_from_slice(&tx_index.to_le_bytes());
    id.extend_from_slice(block_hash.as_bytes());
    id
}

/// Encode a chain height as an 8-byte big-endian id.
pub fn encode_height_id(height: u64) -> Id {
    height.to_be_bytes().to_vec()
}

/// Read the leading 4 bytes of an id as a big-endian block number.
///
/// This matches the height-id layout only: the same bytes in a submission id
/// are a little-endian transaction index, so the two codecs do not round-trip
/// through each other.
pub fn decode_block_number(id: &[u8]) -> Result<u32, IdError> {
    let bytes: [u8; TX_INDEX_LEN] = id
        .get(..TX_INDEX_LEN)
        .and_then(|head| head.try_into().ok())
        .ok_or(IdError::TooShort { len: id.len() })?;
    Ok(u32::from_be_bytes(bytes))
}

/// An id with its shape recovered.
///
/// Disambiguation is by length: exactly 8 bytes is a height id, anything
/// else at least 4 bytes long is a submission id. A submission id whose
/// block hash were exactly 4 bytes would be indistinguishable from a height
/// id, but real block hashes are hex strings an order of magnitude longer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParsedId {
    Submission { tx_index: u32, block_hash: String },
    Height(u64),
}

impl ParsedId {
    pub fn parse(id: &[u8]) -> Result<Self, IdError> {
        if id.len() == HEIGHT_ID_LEN {
            let bytes: [u8; HEIGHT_ID_LEN] = id.try_into().expect("length checked");
            return Ok(Self::Height(u64::from_be_bytes(bytes)));
        }

        let index_bytes: [u8; TX_INDEX_LEN] = id
            .get(..TX_INDEX_LEN)
            .and_then(|head| head.try_into().ok())
            .ok_or(IdError::TooShort { len: id.len() })?;
        let block_hash = String::from_utf8(id[TX_INDEX_LEN..].to_vec())
            .map_err(|_| IdError::HashNotUtf8)?;

        Ok(Self::Submission {
            tx_index: u32::from_le_bytes(index_bytes),
            block_hash,
        })
    }
}
