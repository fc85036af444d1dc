pub mod adapter;
pub mod config;
pub mod id;
pub mod light_client;

pub use adapter::AvailDa;
pub use config::AvailConfig;
pub use id::{IdError, ParsedId, decode_block_number, encode_height_id, encode_submission_id};
pub use light_client::{
    BlockDataResponse, DataTransaction, HttpLightClient, LightClientApi, LightClientError,
    SubmitRequest, SubmitResponse,
};
