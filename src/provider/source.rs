use std::future::Future;

use url::Url;

use crate::{
    error::Error,
    types::{
        HealthStatus, HolderInfo, LogRecord, MemoryStats, Statistics,
        UserStats,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Canister {
    Payout,
    Wallet,
}

/// Where a session points: a gateway host plus the two canisters read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub host: Url,
    pub use_local: bool,
    pub payout_canister_id: String,
    pub wallet_canister_id: String,
}

impl Endpoint {
    pub fn canister_id(&self, canister: Canister) -> &str {
        match canister {
            Canister::Payout => &self.payout_canister_id,
            Canister::Wallet => &self.wallet_canister_id,
        }
    }
}

/// Remote stats source: the payout and wallet canisters behind a gateway.
///
/// `connect` opens a session; every other call fails with
/// [`Error::NotConnected`] until it succeeds.
pub trait StatsSource: Send + Sync {
    fn connect(
        &self,
        endpoint: &Endpoint,
    ) -> impl Future<Output = Result<(), Error>> + Send;

    fn disconnect(&self);

    fn get_health(
        &self,
    ) -> impl Future<Output = Result<HealthStatus, Error>> + Send;

    fn get_stats(&self)
        -> impl Future<Output = Result<Statistics, Error>> + Send;

    fn get_logs(
        &self,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<LogRecord>, Error>> + Send;

    fn get_memory_stats(
        &self,
    ) -> impl Future<Output = Result<MemoryStats, Error>> + Send;

    fn get_all_holders(
        &self,
    ) -> impl Future<Output = Result<Vec<(String, HolderInfo)>, Error>> + Send;

    fn get_all_user_stats(
        &self,
    ) -> impl Future<Output = Result<Vec<(String, UserStats)>, Error>> + Send;

    fn get_total_holders(
        &self,
    ) -> impl Future<Output = Result<u64, Error>> + Send;

    fn is_using_csv_data(
        &self,
    ) -> impl Future<Output = Result<bool, Error>> + Send;

    fn process_payouts(&self)
        -> impl Future<Output = Result<(), Error>> + Send;

    fn force_payout(&self) -> impl Future<Output = Result<(), Error>> + Send;
}
