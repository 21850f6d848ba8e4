use serde::Deserialize;

#[derive(Debug, Deserialize, Default, Clone)]
pub struct HealthStatus {
    pub is_healthy: bool,
    pub last_check: i64,
    pub error_count: u64,
    pub warning_count: u64,
    pub balance_status: String,
    #[serde(default)]
    pub network_status: String,
    pub memory_usage_kb: u64,
    pub memory_peak_kb: u64,
}
