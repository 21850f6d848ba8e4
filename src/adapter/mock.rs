//! Static demo dataset served whenever live data is unavailable.
//!
//! Every value is anchored to a fixed instant so repeated calls produce the
//! same snapshot.

use crate::{
    helpers::{NANOS_PER_MILLI, TOKEN_SCALE},
    model::{
        DisplaySnapshot, HistoryPoint, HolderRecord, HoldersOverview,
        SnapshotSource,
    },
    types::{HealthStatus, LogRecord, Statistics, UserStats},
};

use super::{holders, normalize};

/// 2025-03-26 10:37:31 UTC
pub const MOCK_ANCHOR_MS: i64 = 1_742_985_451_000;

const MINUTE_MS: i64 = 60_000;
const HOUR_MS: i64 = 60 * MINUTE_MS;

const MEMORY_SERIES: [u64; 6] = [980, 1050, 1240, 1190, 1300, 1245];
const PERFORMANCE_SERIES: [u64; 6] = [210, 195, 230, 250, 245, 235];

fn anchor_nanos(offset_ms: i64) -> i64 {
    (MOCK_ANCHOR_MS + offset_ms) * NANOS_PER_MILLI
}

pub fn health() -> HealthStatus {
    HealthStatus {
        is_healthy: true,
        last_check: anchor_nanos(0),
        error_count: 0,
        warning_count: 2,
        balance_status: String::from("Sufficient"),
        network_status: String::from("Online"),
        memory_usage_kb: 1245,
        memory_peak_kb: 1890,
    }
}

pub fn stats() -> Statistics {
    Statistics {
        total_holders: 120,
        active_holders: 105,
        total_payouts_processed: 1450,
        average_payout_amount: 250 * TOKEN_SCALE,
        success_rate: 99,
        total_payout_amount: 24_500 * TOKEN_SCALE,
        processing_time_ms: 235,
        current_network_fee: 10_000,
        average_network_fee: 10_000,
        failed_transfers: 23,
        is_processing: false,
        last_payout_time: anchor_nanos(-HOUR_MS),
        next_payout_time: anchor_nanos(23 * HOUR_MS),
        token_balance: 25_000_000 * TOKEN_SCALE,
        last_error: None,
    }
}

pub fn logs() -> Vec<LogRecord> {
    let entries = [
        (
            -15 * MINUTE_MS,
            "INFO",
            "Payout process completed successfully",
            "PayoutProcessor",
        ),
        (
            -30 * MINUTE_MS,
            "WARNING",
            "Memory usage approaching threshold",
            "MemoryMonitor",
        ),
        (
            -HOUR_MS,
            "INFO",
            "System balance checked: 25000000 tokens available",
            "BalanceMonitor",
        ),
        (
            -2 * HOUR_MS,
            "WARNING",
            "Slow response time detected in holder lookup",
            "HolderLookup",
        ),
        (
            -3 * HOUR_MS,
            "INFO",
            "Health check completed: System healthy",
            "HealthCheck",
        ),
    ];

    entries
        .into_iter()
        .map(|(offset, level, message, source)| LogRecord {
            timestamp: anchor_nanos(offset),
            level: String::from(level),
            message: String::from(message),
            source: Some(String::from(source)),
            details: None,
        })
        .collect()
}

fn hourly_series(values: &[u64]) -> Vec<HistoryPoint> {
    let len = values.len() as i64;
    values
        .iter()
        .enumerate()
        .map(|(index, value)| HistoryPoint {
            timestamp: MOCK_ANCHOR_MS - (len - index as i64) * HOUR_MS,
            value: *value,
        })
        .collect()
}

pub fn dashboard_snapshot(
    warning_threshold: u8,
    critical_threshold: u8,
) -> DisplaySnapshot {
    DisplaySnapshot {
        source: SnapshotSource::Mock,
        health: normalize::health_view(
            &health(),
            warning_threshold,
            critical_threshold,
        ),
        stats: normalize::stats_view(&stats()),
        logs: logs().iter().map(normalize::log_view).collect(),
        memory_history: hourly_series(&MEMORY_SERIES),
        performance_history: hourly_series(&PERFORMANCE_SERIES),
    }
}

pub fn holders() -> Vec<HolderRecord> {
    let entries = [
        ("kwte6-azaaa-aaaab-qaaaq-cai-eqe", 22, 6),
        ("f2nj3-jtaaa-aaaab-qaabq-cai-sqe", 8, 0),
        ("njxkj-77aaa-aaaab-qaaca-cai-oqe", 4, 0),
        ("l4t4l-26aaa-aaaab-qaacq-cai-cae", 4, 0),
        ("ap2h3-mdaaa-aaaab-qaada-cai-sqe", 2, 0),
        ("r7inp-6aaaa-aaaab-qaadq-cai-qae", 1, 1),
        ("4bxu7-fuaaa-aaaab-qaaea-cai-oae", 2, 0),
    ];

    entries
        .into_iter()
        .map(|(address, daku, gg)| {
            HolderRecord::new(String::from(address), daku, gg, 0)
        })
        .collect()
}

pub fn user_stats() -> Vec<(String, UserStats)> {
    let entries = [
        ("njxkj-77aaa-aaaab-qaaca-cai-oqe", 34, 3450, 0),
        ("kwte6-azaaa-aaaab-qaaaq-cai-eqe", 50, 2313, 1),
        ("f2nj3-jtaaa-aaaab-qaabq-cai-sqe", 25, 1326, 2),
        ("ap2h3-mdaaa-aaaab-qaada-cai-sqe", 2, 1864, 3),
        ("r7inp-6aaaa-aaaab-qaadq-cai-qae", 3, 4920, 4),
    ];

    entries
        .into_iter()
        .map(|(address, nft_count, tokens, hours_ago)| {
            let amount = tokens * TOKEN_SCALE;
            (
                String::from(address),
                UserStats {
                    nft_count,
                    last_payout_amount: amount,
                    last_payout_time: anchor_nanos(-hours_ago * HOUR_MS),
                    total_payouts_received: amount,
                },
            )
        })
        .collect()
}

pub fn holders_overview() -> HoldersOverview {
    holders::overview(&holders(), &user_stats(), SnapshotSource::Mock)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MemoryLevel;

    #[test]
    fn test_mock_snapshot_is_deterministic() {
        assert_eq!(dashboard_snapshot(60, 85), dashboard_snapshot(60, 85));
    }

    #[test]
    fn test_mock_snapshot_shape() {
        let snapshot = dashboard_snapshot(60, 85);

        assert_eq!(snapshot.source, SnapshotSource::Mock);
        assert_eq!(snapshot.stats.total_payout_amount, "24,500.00");
        assert_eq!(snapshot.health.memory_percentage, 66);
        assert_eq!(snapshot.health.memory_level, MemoryLevel::Warning);
        assert_eq!(snapshot.logs.len(), 5);
        assert_eq!(snapshot.memory_history.len(), 6);
        assert!(snapshot
            .memory_history
            .windows(2)
            .all(|w| w[0].timestamp <= w[1].timestamp));
        assert_eq!(
            snapshot.performance_history.last().map(|p| p.timestamp),
            Some(MOCK_ANCHOR_MS - HOUR_MS)
        );
    }

    #[test]
    fn test_mock_holders_respect_total() {
        for record in holders() {
            assert_eq!(record.total_count, record.daku_count + record.gg_count);
        }
        assert_eq!(holders_overview().top_holders[0].total_count, 28);
    }
}
