//! Background dashboard refresh
//!
//! Fetches one snapshot per tick. A tick that fires while the previous
//! fetch is still running is skipped rather than queued.

use std::time::Duration;

use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info};

use crate::{
    configuration::{AppState, State},
    error::Error,
};

pub async fn refresh_task(app_state: AppState<State>) -> Result<(), Error> {
    let period = Duration::from_secs(app_state.config.refresh_interval.max(1));
    info!("Starting dashboard refresh task, every {:?}", period);

    let mut refresh_interval = interval(period);
    refresh_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        refresh_interval.tick().await;

        let snapshot = app_state.adapter.fetch_snapshot().await;
        debug!(
            "Refreshed dashboard snapshot ({:?}, {} logs)",
            snapshot.source,
            snapshot.logs.len()
        );
    }
}
