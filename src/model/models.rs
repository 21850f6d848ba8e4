//! Consolidated display models
//!
//! Everything handed to the presentation layer: plain numbers, strings and
//! arrays, never raw canister types.

use std::{fmt, io, str::FromStr};

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

// =============================================================================
// CONNECTION
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Connected,
    Error,
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConnectionState::Disconnected => write!(f, "disconnected"),
            ConnectionState::Connecting => write!(f, "connecting"),
            ConnectionState::Connected => write!(f, "connected"),
            ConnectionState::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ConnectionStatus {
    pub state: ConnectionState,
    pub endpoint: Option<String>,
    pub use_local_endpoint: bool,
    pub payout_canister_id: String,
    pub wallet_canister_id: String,
    pub last_error: Option<String>,
}

// =============================================================================
// LOGS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warning => write!(f, "WARNING"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Critical => write!(f, "CRITICAL"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = io::Error;

    fn from_str(value: &str) -> Result<LogLevel, Self::Err> {
        match value.trim().to_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARNING" | "WARN" => Ok(LogLevel::Warning),
            "ERROR" => Ok(LogLevel::Error),
            "CRITICAL" => Ok(LogLevel::Critical),
            _ => Err(io::Error::other("Log level not supported")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogView {
    /// Milliseconds since epoch.
    pub timestamp: i64,
    pub time: String,
    pub level: LogLevel,
    pub message: String,
    pub source: Option<String>,
    pub details: Option<String>,
}

// =============================================================================
// HISTORY
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HistoryPoint {
    /// Milliseconds since epoch.
    pub timestamp: i64,
    pub value: u64,
}

// =============================================================================
// SNAPSHOT
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotSource {
    Live,
    Mock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MemoryLevel {
    Normal,
    Warning,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthView {
    pub status: String,
    pub is_healthy: bool,
    pub error_count: u64,
    pub warning_count: u64,
    pub balance_status: String,
    pub network_status: String,
    pub memory_usage_kb: u64,
    pub memory_peak_kb: u64,
    pub memory_percentage: u8,
    pub memory_level: MemoryLevel,
    pub last_check: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsView {
    pub total_holders: u64,
    pub active_holders: u64,
    pub total_payouts_processed: u64,
    pub success_rate: f64,
    pub total_payout_amount: String,
    pub average_payout_amount: String,
    pub token_balance: String,
    pub processing_time_ms: u64,
    pub current_network_fee: String,
    pub average_network_fee: String,
    pub failed_transfers: u64,
    pub is_processing: bool,
    pub last_payout_time: Option<i64>,
    pub last_payout_display: Option<String>,
    pub next_payout_time: Option<i64>,
    pub next_payout_display: Option<String>,
    pub last_error: Option<String>,
}

/// One complete, internally consistent set of display data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplaySnapshot {
    pub source: SnapshotSource,
    pub health: HealthView,
    pub stats: StatsView,
    pub logs: Vec<LogView>,
    pub memory_history: Vec<HistoryPoint>,
    pub performance_history: Vec<HistoryPoint>,
}

impl DisplaySnapshot {
    pub fn is_live(&self) -> bool {
        self.source == SnapshotSource::Live
    }
}

// =============================================================================
// HOLDERS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HolderRecord {
    pub address: String,
    pub daku_count: u64,
    pub gg_count: u64,
    pub total_count: u64,
    pub last_updated: u64,
}

impl HolderRecord {
    pub fn new(
        address: String,
        daku_count: u64,
        gg_count: u64,
        last_updated: u64,
    ) -> HolderRecord {
        HolderRecord {
            address,
            daku_count,
            gg_count,
            total_count: daku_count.saturating_add(gg_count),
            last_updated,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HolderDataOrigin {
    Csv,
    Canister,
    Mock,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopHolder {
    pub rank: usize,
    pub address: String,
    pub short_address: String,
    pub daku_count: u64,
    pub gg_count: u64,
    pub total_count: u64,
    pub rewards_estimate: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionShare {
    pub name: String,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HoldingsBucket {
    pub range: String,
    pub percentage: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RewardDistribution {
    pub time: String,
    pub timestamp: i64,
    pub address: String,
    pub short_address: String,
    pub nft_count: u64,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoldersOverview {
    pub source: SnapshotSource,
    pub total_holders: u64,
    pub total_nfts: u64,
    pub top_holders: Vec<TopHolder>,
    pub collection_distribution: Vec<CollectionShare>,
    pub holdings_distribution: Vec<HoldingsBucket>,
    pub recent_rewards: Vec<RewardDistribution>,
    pub total_distributed: String,
    pub total_distributed_tokens: BigDecimal,
}

// =============================================================================
// ACTIONS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayoutAction {
    ProcessPayouts,
    ForcePayout,
}

impl fmt::Display for PayoutAction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PayoutAction::ProcessPayouts => write!(f, "process_payouts"),
            PayoutAction::ForcePayout => write!(f, "force_payout"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ActionOutcome {
    pub action: PayoutAction,
    pub message: String,
    pub holders_processed: u64,
    pub tokens_distributed: String,
    pub snapshot: DisplaySnapshot,
}
