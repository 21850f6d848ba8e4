//! Holder endpoints

use actix_web::{get, web, Responder};
use serde::Serialize;

use crate::{
    configuration::{AppState, State},
    error::Error,
    model::{HolderDataOrigin, HolderRecord},
};

#[derive(Debug, Serialize)]
pub struct HoldersResponse {
    pub origin: HolderDataOrigin,
    pub total_holders: u64,
    pub holders: Vec<HolderRecord>,
}

#[get("/holders")]
pub async fn get_holders(
    state: web::Data<AppState<State>>,
) -> Result<impl Responder, Error> {
    let adapter = &state.adapter;
    let (origin, total_holders, holders) = tokio::join!(
        adapter.data_origin(),
        adapter.fetch_total_holders(),
        adapter.fetch_holders(),
    );

    Ok(web::Json(HoldersResponse {
        origin,
        total_holders,
        holders,
    }))
}

#[get("/holders/overview")]
pub async fn get_overview(
    state: web::Data<AppState<State>>,
) -> Result<impl Responder, Error> {
    Ok(web::Json(state.adapter.fetch_holders_overview().await))
}
