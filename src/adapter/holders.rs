//! Holder analytics for the public dashboard.

use std::cmp::Reverse;

use bigdecimal::BigDecimal;

use crate::{
    helpers::{
        compute_percentage, format_timestamp, format_token_amount,
        optional_millis, token_amount, truncate_address, TOKEN_SCALE,
    },
    model::{
        CollectionShare, HolderRecord, HoldersOverview, HoldingsBucket,
        RewardDistribution, SnapshotSource, TopHolder,
    },
    types::UserStats,
};

/// Estimated staking reward per NFT, in e8s.
pub const REWARD_PER_NFT: u64 = 100 * TOKEN_SCALE;

pub const TOP_HOLDERS_LIMIT: usize = 10;
pub const RECENT_REWARDS_LIMIT: usize = 10;

/// Inclusive lower bounds and labels, checked from the top down.
const HOLDING_RANGES: [(u64, &str); 5] = [
    (500, "500+ NFTs"),
    (101, "101-500 NFTs"),
    (51, "51-100 NFTs"),
    (11, "11-50 NFTs"),
    (1, "1-10 NFTs"),
];

pub fn top_holders(records: &[HolderRecord], limit: usize) -> Vec<TopHolder> {
    let mut sorted: Vec<&HolderRecord> = records.iter().collect();
    sorted.sort_by(|a, b| {
        b.total_count
            .cmp(&a.total_count)
            .then_with(|| a.address.cmp(&b.address))
    });

    sorted
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(index, record)| TopHolder {
            rank: index + 1,
            address: record.address.to_owned(),
            short_address: truncate_address(&record.address),
            daku_count: record.daku_count,
            gg_count: record.gg_count,
            total_count: record.total_count,
            rewards_estimate: format_token_amount(
                record.total_count.saturating_mul(REWARD_PER_NFT),
            ),
        })
        .collect()
}

pub fn collection_distribution(
    records: &[HolderRecord],
) -> Vec<CollectionShare> {
    let (daku, gg) = records.iter().fold((0_u64, 0_u64), |(daku, gg), r| {
        (daku.saturating_add(r.daku_count), gg.saturating_add(r.gg_count))
    });

    vec![
        CollectionShare {
            name: String::from("Daku NFTs"),
            value: daku,
        },
        CollectionShare {
            name: String::from("GG Album NFTs"),
            value: gg,
        },
    ]
}

/// Share of holders per holding range. Holders with zero NFTs count toward
/// the total but fall in no range.
pub fn holdings_distribution(records: &[HolderRecord]) -> Vec<HoldingsBucket> {
    let mut counts = [0_u64; HOLDING_RANGES.len()];

    for record in records {
        if let Some(index) = HOLDING_RANGES
            .iter()
            .position(|(lower, _)| record.total_count >= *lower)
        {
            counts[index] += 1;
        }
    }

    let total = records.len() as u64;

    HOLDING_RANGES
        .iter()
        .zip(counts)
        .rev()
        .map(|((_, label), count)| HoldingsBucket {
            range: String::from(*label),
            percentage: compute_percentage(count, total),
        })
        .collect()
}

pub fn recent_rewards(
    user_stats: &[(String, UserStats)],
    limit: usize,
) -> Vec<RewardDistribution> {
    let mut paid: Vec<&(String, UserStats)> = user_stats
        .iter()
        .filter(|(_, stats)| stats.last_payout_amount > 0)
        .collect();
    paid.sort_by_key(|(_, stats)| Reverse(stats.last_payout_time));

    paid.into_iter()
        .take(limit)
        .map(|(address, stats)| {
            let timestamp = optional_millis(stats.last_payout_time);
            RewardDistribution {
                time: timestamp
                    .and_then(format_timestamp)
                    .unwrap_or_else(|| String::from("Never")),
                timestamp: timestamp.unwrap_or(0),
                address: address.to_owned(),
                short_address: truncate_address(address),
                nft_count: stats.nft_count,
                amount: format_token_amount(stats.last_payout_amount),
            }
        })
        .collect()
}

pub fn total_distributed(user_stats: &[(String, UserStats)]) -> BigDecimal {
    user_stats
        .iter()
        .map(|(_, stats)| token_amount(stats.total_payouts_received))
        .sum()
}

pub fn overview(
    records: &[HolderRecord],
    user_stats: &[(String, UserStats)],
    source: SnapshotSource,
) -> HoldersOverview {
    let total_nfts = records
        .iter()
        .fold(0_u64, |acc, r| acc.saturating_add(r.total_count));
    let distributed: u64 = user_stats
        .iter()
        .fold(0_u64, |acc, (_, s)| acc.saturating_add(s.total_payouts_received));

    HoldersOverview {
        source,
        total_holders: records.len() as u64,
        total_nfts,
        top_holders: top_holders(records, TOP_HOLDERS_LIMIT),
        collection_distribution: collection_distribution(records),
        holdings_distribution: holdings_distribution(records),
        recent_rewards: recent_rewards(user_stats, RECENT_REWARDS_LIMIT),
        total_distributed: format_token_amount(distributed),
        total_distributed_tokens: total_distributed(user_stats),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holder(address: &str, daku: u64, gg: u64) -> HolderRecord {
        HolderRecord::new(address.to_owned(), daku, gg, 0)
    }

    fn user(
        address: &str,
        amount: u64,
        time_ns: i64,
        received: u64,
    ) -> (String, UserStats) {
        (
            address.to_owned(),
            UserStats {
                nft_count: 1,
                last_payout_amount: amount,
                last_payout_time: time_ns,
                total_payouts_received: received,
            },
        )
    }

    #[test]
    fn test_top_holders_ranked_by_total() {
        let records = vec![
            holder("b", 2, 0),
            holder("a", 22, 6),
            holder("c", 1, 1),
        ];
        let top = top_holders(&records, 2);

        assert_eq!(top.len(), 2);
        assert_eq!(top[0].rank, 1);
        assert_eq!(top[0].address, "a");
        assert_eq!(top[0].rewards_estimate, "2,800.00");
        // equal totals fall back to address order
        assert_eq!(top[1].address, "b");
    }

    #[test]
    fn test_collection_distribution_sums() {
        let records = vec![holder("a", 3, 4), holder("b", 5, 0)];
        let shares = collection_distribution(&records);

        assert_eq!(shares[0].value, 8);
        assert_eq!(shares[1].value, 4);
    }

    #[test]
    fn test_holdings_distribution() {
        let records = vec![
            holder("a", 5, 0),
            holder("b", 20, 0),
            holder("c", 600, 0),
            holder("d", 0, 0),
        ];
        let buckets = holdings_distribution(&records);
        let labels: Vec<&str> =
            buckets.iter().map(|b| b.range.as_str()).collect();

        assert_eq!(
            labels,
            vec![
                "1-10 NFTs",
                "11-50 NFTs",
                "51-100 NFTs",
                "101-500 NFTs",
                "500+ NFTs"
            ]
        );
        assert_eq!(buckets[0].percentage, 25);
        assert_eq!(buckets[1].percentage, 25);
        assert_eq!(buckets[2].percentage, 0);
        assert_eq!(buckets[4].percentage, 25);
    }

    #[test]
    fn test_holdings_distribution_without_holders() {
        let buckets = holdings_distribution(&[]);
        assert!(buckets.iter().all(|b| b.percentage == 0));
    }

    #[test]
    fn test_recent_rewards_newest_first() {
        let stats = vec![
            user("old", 100_000_000, 1_000_000_000, 0),
            user("unpaid", 0, 9_000_000_000, 0),
            user("new", 250_000_000, 5_000_000_000, 0),
        ];
        let rewards = recent_rewards(&stats, 10);

        assert_eq!(rewards.len(), 2);
        assert_eq!(rewards[0].address, "new");
        assert_eq!(rewards[0].amount, "2.50");
        assert_eq!(rewards[1].address, "old");
    }

    #[test]
    fn test_total_distributed() {
        let stats = vec![
            user("a", 0, 0, 150_000_000),
            user("b", 0, 0, 50_000_000),
        ];

        assert_eq!(total_distributed(&stats), BigDecimal::from(2));
        let overview = overview(&[], &stats, SnapshotSource::Live);
        assert_eq!(overview.total_distributed, "2.00");
        assert_eq!(overview.total_holders, 0);
    }
}
