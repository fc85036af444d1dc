/// Opaque binary payload submitted for storage and returned on retrieval.
/// The layer never interprets blob contents.
pub type Blob = Vec<u8>;

/// Opaque byte sequence that lets the implementation that produced it locate
/// a previously submitted blob. Only that implementation is expected to
/// decode it.
pub type Id = Vec<u8>;

/// Inclusion proof associated with a submitted blob.
pub type Proof = Vec<u8>;

/// Cryptographic commitment to a blob's contents.
pub type Commitment = Vec<u8>;
