use serde::Deserialize;

/// Payout canister counters. Amounts and fees are e8s, times are
/// nanoseconds since epoch.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct Statistics {
    pub total_holders: u64,
    pub active_holders: u64,
    pub total_payouts_processed: u64,
    pub average_payout_amount: u64,
    pub success_rate: u64,
    pub total_payout_amount: u64,
    pub processing_time_ms: u64,
    pub current_network_fee: u64,
    pub average_network_fee: u64,
    pub failed_transfers: u64,
    pub is_processing: bool,
    pub last_payout_time: i64,
    pub next_payout_time: i64,
    #[serde(default)]
    pub token_balance: u64,
    #[serde(default)]
    pub last_error: Option<String>,
}
