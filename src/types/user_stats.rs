use serde::Deserialize;

#[derive(Debug, Deserialize, Default, Clone)]
pub struct UserStats {
    pub nft_count: u64,
    pub last_payout_amount: u64,
    pub last_payout_time: i64,
    pub total_payouts_received: u64,
}
