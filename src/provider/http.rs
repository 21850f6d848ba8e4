use std::{sync::RwLock, time::Duration};

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::debug;
use url::Url;

use crate::{
    configuration::Config,
    error::Error,
    types::{
        GatewayStatus, HealthStatus, HolderInfo, LogRecord, MemoryStats,
        Statistics, UserStats,
    },
};

use super::{Canister, Endpoint, StatsSource};

const STATUS_PATH: &str = "api/v2/status";

/// Timeouts keep their own variant so callers can report them as such.
fn request_error(method: &str, e: reqwest::Error) -> Error {
    if e.is_timeout() {
        Error::Timeout(method.to_owned())
    } else {
        Error::query(method, e)
    }
}

/// Talks to the canisters through a JSON query gateway:
/// `POST {host}/api/canister/{id}/query/{method}` for reads and
/// `POST {host}/api/canister/{id}/call/{method}` for updates, with the
/// arguments as a JSON array.
#[derive(Debug)]
pub struct HttpSource {
    client: Client,
    session: RwLock<Option<Endpoint>>,
}

impl HttpSource {
    pub fn new(config: &Config) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout))
            .build()?;

        Ok(HttpSource {
            client,
            session: RwLock::new(None),
        })
    }

    fn endpoint(&self) -> Result<Endpoint, Error> {
        let session = self.session.read().map_err(|_| {
            Error::ServerError(String::from("session lock poisoned"))
        })?;
        session.clone().ok_or(Error::NotConnected)
    }

    fn set_session(&self, endpoint: Option<Endpoint>) -> Result<(), Error> {
        let mut session = self.session.write().map_err(|_| {
            Error::ServerError(String::from("session lock poisoned"))
        })?;
        *session = endpoint;
        Ok(())
    }

    fn method_url(
        endpoint: &Endpoint,
        canister: Canister,
        kind: &str,
        method: &str,
    ) -> Result<Url, Error> {
        let path = format!(
            "api/canister/{}/{}/{}",
            endpoint.canister_id(canister),
            kind,
            method
        );
        Ok(endpoint.host.join(&path)?)
    }

    async fn query<T: DeserializeOwned>(
        &self,
        canister: Canister,
        method: &str,
        args: Value,
    ) -> Result<T, Error> {
        let endpoint = self.endpoint()?;
        let url = Self::method_url(&endpoint, canister, "query", method)?;
        debug!("{}", &url);

        let response = self
            .client
            .post(url)
            .json(&args)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| request_error(method, e))?;

        response
            .json::<T>()
            .await
            .map_err(|e| request_error(method, e))
    }

    async fn call(
        &self,
        canister: Canister,
        method: &str,
        args: Value,
    ) -> Result<(), Error> {
        let endpoint = self.endpoint()?;
        let url = Self::method_url(&endpoint, canister, "call", method)?;
        debug!("{}", &url);

        self.client
            .post(url)
            .json(&args)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| request_error(method, e))?;

        Ok(())
    }
}

impl StatsSource for HttpSource {
    async fn connect(&self, endpoint: &Endpoint) -> Result<(), Error> {
        let url = endpoint.host.join(STATUS_PATH)?;
        debug!("{}", &url);

        let status = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| {
                if e.is_timeout() {
                    Error::Timeout(String::from(STATUS_PATH))
                } else {
                    Error::Connection(e.to_string())
                }
            })?
            .json::<GatewayStatus>()
            .await
            .map_err(|e| Error::Connection(e.to_string()))?;

        if !status.is_healthy() {
            return Err(Error::Connection(format!(
                "replica at {} reports {}",
                endpoint.host,
                status.replica_health_status.unwrap_or_default()
            )));
        }

        self.set_session(Some(endpoint.clone()))
    }

    fn disconnect(&self) {
        if self.set_session(None).is_err() {
            debug!("session lock poisoned on disconnect");
        }
    }

    async fn get_health(&self) -> Result<HealthStatus, Error> {
        self.query(Canister::Payout, "get_health", json!([])).await
    }

    async fn get_stats(&self) -> Result<Statistics, Error> {
        self.query(Canister::Payout, "get_stats", json!([])).await
    }

    async fn get_logs(&self, limit: u64) -> Result<Vec<LogRecord>, Error> {
        self.query(Canister::Payout, "get_logs", json!([limit])).await
    }

    async fn get_memory_stats(&self) -> Result<MemoryStats, Error> {
        self.query(Canister::Payout, "get_memory_stats", json!([]))
            .await
    }

    async fn get_all_holders(
        &self,
    ) -> Result<Vec<(String, HolderInfo)>, Error> {
        self.query(Canister::Wallet, "get_all_holders", json!([]))
            .await
    }

    async fn get_all_user_stats(
        &self,
    ) -> Result<Vec<(String, UserStats)>, Error> {
        self.query(Canister::Payout, "get_all_user_stats", json!([]))
            .await
    }

    async fn get_total_holders(&self) -> Result<u64, Error> {
        self.query(Canister::Wallet, "get_total_holders", json!([]))
            .await
    }

    async fn is_using_csv_data(&self) -> Result<bool, Error> {
        self.query(Canister::Wallet, "is_using_csv_data", json!([]))
            .await
    }

    async fn process_payouts(&self) -> Result<(), Error> {
        self.call(Canister::Payout, "processPayouts", json!([])).await
    }

    async fn force_payout(&self) -> Result<(), Error> {
        self.call(Canister::Payout, "force_payout", json!([])).await
    }
}
