use actix_web::{post, web, Responder};

use crate::{
    configuration::{AppState, State},
    error::Error,
    model::PayoutAction,
};

#[post("/payout")]
pub async fn process(
    state: web::Data<AppState<State>>,
) -> Result<impl Responder, Error> {
    let outcome = state
        .adapter
        .process_action(PayoutAction::ProcessPayouts)
        .await?;
    Ok(web::Json(outcome))
}

#[post("/payout/force")]
pub async fn force(
    state: web::Data<AppState<State>>,
) -> Result<impl Responder, Error> {
    let outcome = state
        .adapter
        .process_action(PayoutAction::ForcePayout)
        .await?;
    Ok(web::Json(outcome))
}
