//! Conversion from canister records to display records.

use tracing::warn;

use crate::{
    helpers::{
        clamp_percentage, compute_percentage, format_time_label,
        format_timestamp, format_token_amount, memory_level, nanos_to_millis,
        optional_millis,
    },
    model::{
        HealthView, HistoryPoint, HolderRecord, LogLevel, LogView, StatsView,
    },
    types::{HealthStatus, HolderInfo, LogRecord, Statistics},
};

pub fn health_view(
    health: &HealthStatus,
    warning_threshold: u8,
    critical_threshold: u8,
) -> HealthView {
    let memory_percentage =
        compute_percentage(health.memory_usage_kb, health.memory_peak_kb);

    HealthView {
        status: if health.is_healthy {
            String::from("Healthy")
        } else {
            String::from("Error")
        },
        is_healthy: health.is_healthy,
        error_count: health.error_count,
        warning_count: health.warning_count,
        balance_status: health.balance_status.to_owned(),
        network_status: if health.network_status.is_empty() {
            String::from("Unknown")
        } else {
            health.network_status.to_owned()
        },
        memory_usage_kb: health.memory_usage_kb,
        memory_peak_kb: health.memory_peak_kb,
        memory_percentage,
        memory_level: memory_level(
            memory_percentage,
            warning_threshold,
            critical_threshold,
        ),
        last_check: optional_millis(health.last_check)
            .and_then(format_timestamp),
    }
}

pub fn stats_view(stats: &Statistics) -> StatsView {
    let last_payout_time = optional_millis(stats.last_payout_time);
    let next_payout_time = optional_millis(stats.next_payout_time);

    StatsView {
        total_holders: stats.total_holders,
        active_holders: stats.active_holders,
        total_payouts_processed: stats.total_payouts_processed,
        success_rate: clamp_percentage(stats.success_rate as f64),
        total_payout_amount: format_token_amount(stats.total_payout_amount),
        average_payout_amount: format_token_amount(
            stats.average_payout_amount,
        ),
        token_balance: format_token_amount(stats.token_balance),
        processing_time_ms: stats.processing_time_ms,
        current_network_fee: format_token_amount(stats.current_network_fee),
        average_network_fee: format_token_amount(stats.average_network_fee),
        failed_transfers: stats.failed_transfers,
        is_processing: stats.is_processing,
        last_payout_time,
        last_payout_display: last_payout_time.and_then(format_timestamp),
        next_payout_time,
        next_payout_display: next_payout_time.and_then(format_timestamp),
        last_error: stats.last_error.to_owned(),
    }
}

pub fn log_view(record: &LogRecord) -> LogView {
    let level = record.level.parse().unwrap_or_else(|_| {
        warn!("Unknown log level {:?}, shown as INFO", &record.level);
        LogLevel::Info
    });
    let timestamp = nanos_to_millis(record.timestamp);

    LogView {
        timestamp,
        time: format_time_label(timestamp),
        level,
        message: record.message.to_owned(),
        source: record
            .source
            .as_ref()
            .filter(|source| !source.is_empty())
            .cloned(),
        details: record
            .details
            .as_ref()
            .filter(|details| !details.is_empty())
            .cloned(),
    }
}

pub fn history_points(history: &[(i64, u64)]) -> Vec<HistoryPoint> {
    history
        .iter()
        .map(|(timestamp, value)| HistoryPoint {
            timestamp: nanos_to_millis(*timestamp),
            value: *value,
        })
        .collect()
}

/// The total is always derived from the per-collection counts.
pub fn holder_record(address: String, info: &HolderInfo) -> HolderRecord {
    let record = HolderRecord::new(
        address,
        info.daku_count,
        info.gg_count,
        info.last_updated,
    );

    if record.total_count != info.total_count {
        warn!(
            "Holder {} reports total {} but collections sum to {}",
            &record.address, info.total_count, record.total_count
        );
    }

    record
}

pub fn holder_records(holders: Vec<(String, HolderInfo)>) -> Vec<HolderRecord> {
    holders
        .into_iter()
        .map(|(address, info)| holder_record(address, &info))
        .collect()
}
