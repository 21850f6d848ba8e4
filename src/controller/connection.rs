//! Connection management endpoints

use actix_web::{get, post, web, Responder};
use serde::Deserialize;
use tracing::info;

use crate::{
    configuration::{AppState, State},
    error::Error,
};

#[get("/connection")]
pub async fn status(
    state: web::Data<AppState<State>>,
) -> Result<impl Responder, Error> {
    Ok(web::Json(state.adapter.connection_status().await))
}

#[derive(Debug, Deserialize)]
pub struct ConnectBody {
    use_local: Option<bool>,
}

/// Connects to the local replica or mainnet. Without a body the configured
/// endpoint is used.
#[post("/connect")]
pub async fn connect(
    state: web::Data<AppState<State>>,
    body: Option<web::Json<ConnectBody>>,
) -> Result<impl Responder, Error> {
    let use_local = body
        .and_then(|body| body.use_local)
        .unwrap_or(state.config.use_local_endpoint);
    info!("Connect requested, local endpoint: {}", use_local);

    state.adapter.connect(use_local).await;
    Ok(web::Json(state.adapter.connection_status().await))
}

#[post("/disconnect")]
pub async fn disconnect(
    state: web::Data<AppState<State>>,
) -> Result<impl Responder, Error> {
    state.adapter.disconnect().await;
    Ok(web::Json(state.adapter.connection_status().await))
}
