use serde::Deserialize;

#[derive(Debug, Deserialize, Default, Clone)]
pub struct HolderInfo {
    pub daku_count: u64,
    pub gg_count: u64,
    pub total_count: u64,
    pub last_updated: u64,
}
