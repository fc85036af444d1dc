pub mod contract;
pub mod memory;
pub mod types;

pub use contract::{DaError, DaResult, DataAvailability};
pub use memory::MemoryDa;
pub use types::{Blob, Commitment, Id, Proof};
