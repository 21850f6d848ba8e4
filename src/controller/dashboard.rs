//! Dashboard snapshot endpoints

use actix_web::{get, post, web, Responder};
use serde::Serialize;

use crate::{
    configuration::{AppState, State},
    error::Error,
    model::{DisplaySnapshot, LogView},
};

#[derive(Debug, Serialize)]
pub struct SnapshotResponse {
    pub sequence: u64,
    #[serde(flatten)]
    pub snapshot: DisplaySnapshot,
}

/// Last published snapshot; fetches one if nothing has been published yet.
#[get("/snapshot")]
pub async fn get_snapshot(
    state: web::Data<AppState<State>>,
) -> Result<impl Responder, Error> {
    let (sequence, snapshot) = match state.adapter.published().await {
        (sequence, Some(snapshot)) => (sequence, snapshot),
        (_, None) => {
            let snapshot = state.adapter.fetch_snapshot().await;
            (state.adapter.published().await.0, snapshot)
        },
    };

    Ok(web::Json(SnapshotResponse { sequence, snapshot }))
}

#[post("/refresh")]
pub async fn post_refresh(
    state: web::Data<AppState<State>>,
) -> Result<impl Responder, Error> {
    let snapshot = state.adapter.fetch_snapshot().await;
    let (sequence, _) = state.adapter.published().await;

    Ok(web::Json(SnapshotResponse { sequence, snapshot }))
}

#[derive(Debug, Serialize)]
pub struct LogsResponse {
    pub logs: Vec<LogView>,
}

#[get("/logs")]
pub async fn get_logs(
    state: web::Data<AppState<State>>,
) -> Result<impl Responder, Error> {
    let logs = state.adapter.local_logs().await;
    Ok(web::Json(LogsResponse { logs }))
}
