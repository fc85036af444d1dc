//! Serving harness: exposes any [`DataAvailability`] implementation over
//! HTTP/JSON. Blobs, ids, proofs and commitments travel base64-encoded.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use da::{DaError, DataAvailability};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    da: Arc<dyn DataAvailability>,
}

pub fn router(da: Arc<dyn DataAvailability>) -> Router {
    Router::new()
        .route("/v1/submit", post(submit))
        .route("/v1/get", post(get_blobs))
        .route("/v1/ids/:height", get(get_ids))
        .route("/v1/commit", post(commit))
        .route("/v1/validate", post(validate))
        .with_state(AppState { da })
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitBody {
    pub blobs: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitReply {
    pub ids: Vec<String>,
    pub proofs: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GetBody {
    pub ids: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GetReply {
    pub blobs: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct IdsReply {
    pub ids: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CommitBody {
    pub blobs: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CommitReply {
    pub commitments: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ValidateBody {
    pub ids: Vec<String>,
    pub proofs: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ValidateReply {
    pub results: Vec<bool>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorReply {
    pub error: String,
}

type Rejection = (StatusCode, Json<ErrorReply>);

fn error_status(err: &DaError) -> StatusCode {
    match err {
        DaError::Unsupported(_) => StatusCode::NOT_IMPLEMENTED,
        DaError::MalformedId(_) => StatusCode::BAD_REQUEST,
        DaError::Backend(_) => StatusCode::BAD_GATEWAY,
    }
}

fn reject(status: StatusCode, error: String) -> Rejection {
    (status, Json(ErrorReply { error }))
}

fn reject_da(err: DaError) -> Rejection {
    reject(error_status(&err), err.to_string())
}

fn decode_all(field: &str, values: &[String]) -> Result<Vec<Vec<u8>>, Rejection> {
    values
        .iter()
        .map(|value| {
            STANDARD.decode(value).map_err(|err| {
                reject(
                    StatusCode::BAD_REQUEST,
                    format!("{field} is not valid base64: {err}"),
                )
            })
        })
        .collect()
}

fn encode_all(values: &[Vec<u8>]) -> Vec<String> {
    values.iter().map(|value| STANDARD.encode(value)).collect()
}

async fn submit(
    State(state): State<AppState>,
    Json(body): Json<SubmitBody>,
) -> Result<Json<SubmitReply>, Rejection> {
    let blobs = decode_all("blobs", &body.blobs)?;
    let (ids, proofs) = state.da.submit(&blobs).await.map_err(reject_da)?;
    Ok(Json(SubmitReply {
        ids: encode_all(&ids),
        proofs: encode_all(&proofs),
    }))
}

async fn get_blobs(
    State(state): State<AppState>,
    Json(body): Json<GetBody>,
) -> Result<Json<GetReply>, Rejection> {
    let ids = decode_all("ids", &body.ids)?;
    let blobs = state.da.get(&ids).await.map_err(reject_da)?;
    Ok(Json(GetReply {
        blobs: encode_all(&blobs),
    }))
}

async fn get_ids(
    State(state): State<AppState>,
    Path(height): Path<u64>,
) -> Result<Json<IdsReply>, Rejection> {
    let ids = state.da.get_ids(height).await.map_err(reject_da)?;
    Ok(Json(IdsReply {
        ids: encode_all(&ids),
    }))
}

async fn commit(
    State(state): State<AppState>,
    Json(body): Json<CommitBody>,
) -> Result<Json<CommitReply>, Rejection> {
    let blobs = decode_all("blobs", &body.blobs)?;
    let commitments = state.da.commit(&blobs).await.map_err(reject_da)?;
    Ok(Json(CommitReply {
        commitments: encode_all(&commitments),
    }))
}

async fn validate(
    State(state): State<AppState>,
    Json(body): Json<ValidateBody>,
) -> Result<Json<ValidateReply>, Rejection> {
    let ids = decode_all("ids", &body.ids)?;
    let proofs = decode_all("proofs", &body.proofs)?;
    let results = state.da.validate(&ids, &proofs).await.map_err(reject_da)?;
    Ok(Json(ValidateReply { results }))
}
