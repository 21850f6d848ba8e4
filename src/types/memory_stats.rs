use serde::Deserialize;

#[derive(Debug, Deserialize, Default, Clone)]
pub struct MemoryStats {
    pub current_usage_kb: u64,
    pub peak_usage_kb: u64,
    /// `(timestamp_ns, usage_kb)` pairs as recorded by the canister.
    #[serde(default)]
    pub usage_history: Vec<(i64, u64)>,
}
