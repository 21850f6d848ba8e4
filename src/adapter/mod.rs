use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use futures::future::try_join;
use tokio::sync::Mutex;
use tracing::{error, info, warn};
use url::Url;

use crate::{
    configuration::Config,
    error::Error,
    helpers::format_time_label,
    history::{HistoryBuffer, LogWindow},
    model::{
        ActionOutcome, ConnectionState, ConnectionStatus, DisplaySnapshot,
        HistoryPoint, HolderDataOrigin, HolderRecord, HoldersOverview,
        LogLevel, LogView, PayoutAction, SnapshotSource,
    },
    provider::{Endpoint, StatsSource},
    types::{HealthStatus, LogRecord, MemoryStats, Statistics},
};

pub mod holders;
pub mod mock;
pub mod normalize;

const LOCAL_LOG_SOURCE: &str = "DataAdapter";

/// Mediates between the stats source and the presentation layer.
///
/// Every snapshot handed out is either fully live or fully mock. Each fetch
/// is tagged with a sequence number and only the most recently issued fetch
/// may update the stored snapshot and history buffers.
#[derive(Debug)]
pub struct DataAdapter<S> {
    config: Config,
    source: S,
    context: Mutex<Context>,
    sequence: AtomicU64,
}

#[derive(Debug)]
struct Context {
    state: ConnectionState,
    use_local: bool,
    endpoint: Option<String>,
    last_error: Option<String>,
    memory_history: HistoryBuffer,
    performance_history: HistoryBuffer,
    local_logs: LogWindow,
    current: Option<DisplaySnapshot>,
    applied_sequence: u64,
}

impl Context {
    fn new(config: &Config) -> Self {
        Context {
            state: ConnectionState::Disconnected,
            use_local: config.use_local_endpoint,
            endpoint: None,
            last_error: None,
            memory_history: HistoryBuffer::new(config.history_window),
            performance_history: HistoryBuffer::new(config.history_window),
            local_logs: LogWindow::new(config.log_window),
            current: None,
            applied_sequence: 0,
        }
    }

    fn log(&mut self, level: LogLevel, message: String) {
        let timestamp = Utc::now().timestamp_millis();
        self.local_logs.append(LogView {
            timestamp,
            time: format_time_label(timestamp),
            level,
            message,
            source: Some(String::from(LOCAL_LOG_SOURCE)),
            details: None,
        });
    }
}

impl<S: StatsSource> DataAdapter<S> {
    pub fn new(config: Config, source: S) -> Self {
        let context = Context::new(&config);
        DataAdapter {
            config,
            source,
            context: Mutex::new(context),
            sequence: AtomicU64::new(0),
        }
    }

    pub async fn state(&self) -> ConnectionState {
        self.context.lock().await.state
    }

    async fn is_connected(&self) -> bool {
        self.state().await == ConnectionState::Connected
    }

    pub async fn connection_status(&self) -> ConnectionStatus {
        let ctx = self.context.lock().await;
        ConnectionStatus {
            state: ctx.state,
            endpoint: ctx.endpoint.to_owned(),
            use_local_endpoint: ctx.use_local,
            payout_canister_id: self.config.payout_canister_id.to_owned(),
            wallet_canister_id: self.config.wallet_canister_id.to_owned(),
            last_error: ctx.last_error.to_owned(),
        }
    }

    /// Opens a session and probes it once. A failed attempt leaves the
    /// stored snapshot untouched.
    pub async fn connect(&self, use_local: bool) -> ConnectionState {
        let host = self.config.host(use_local).to_owned();

        {
            let mut ctx = self.context.lock().await;
            ctx.state = ConnectionState::Connecting;
            ctx.use_local = use_local;
            ctx.endpoint = Some(host.to_owned());
        }

        let result = self.open_session(&host, use_local).await;

        let mut ctx = self.context.lock().await;
        match result {
            Ok(()) => {
                ctx.state = ConnectionState::Connected;
                ctx.last_error = None;
                info!("Connected to Internet Computer at {}", &host);
                ctx.log(
                    LogLevel::Info,
                    format!("Connected to Internet Computer at {}", &host),
                );
            },
            Err(e) => {
                self.source.disconnect();
                ctx.state = ConnectionState::Error;
                ctx.last_error = Some(e.to_string());
                error!("Failed to connect to {}: {}", &host, e);
                ctx.log(
                    LogLevel::Error,
                    format!("Failed to connect to {}: {}", &host, e),
                );
            },
        }

        ctx.state
    }

    async fn open_session(&self, host: &str, use_local: bool) -> Result<(), Error> {
        let endpoint = Endpoint {
            host: Url::parse(host)?,
            use_local,
            payout_canister_id: self.config.payout_canister_id.to_owned(),
            wallet_canister_id: self.config.wallet_canister_id.to_owned(),
        };

        self.source.connect(&endpoint).await?;
        self.source.get_health().await?;

        Ok(())
    }

    pub async fn disconnect(&self) -> ConnectionState {
        self.source.disconnect();

        let mut ctx = self.context.lock().await;
        ctx.state = ConnectionState::Disconnected;
        ctx.endpoint = None;
        info!("Disconnected from Internet Computer");
        ctx.log(
            LogLevel::Info,
            String::from("Disconnected from Internet Computer"),
        );

        ctx.state
    }

    fn mock_snapshot(&self) -> DisplaySnapshot {
        mock::dashboard_snapshot(
            self.config.memory_threshold_warning,
            self.config.memory_threshold_critical,
        )
    }

    fn is_latest(&self, sequence: u64) -> bool {
        self.sequence.load(Ordering::SeqCst) == sequence
    }

    /// Builds the mock snapshot and publishes it if `sequence` is still the
    /// newest fetch.
    fn publish_mock(&self, ctx: &mut Context, sequence: u64) -> DisplaySnapshot {
        let snapshot = self.mock_snapshot();
        if self.is_latest(sequence) && sequence > ctx.applied_sequence {
            ctx.current = Some(snapshot.clone());
            ctx.applied_sequence = sequence;
        }
        snapshot
    }

    /// Live data when connected and every query succeeds, the mock dataset
    /// otherwise.
    pub async fn fetch_snapshot(&self) -> DisplaySnapshot {
        let sequence = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;

        if !self.is_connected().await {
            let mut ctx = self.context.lock().await;
            return self.publish_mock(&mut ctx, sequence);
        }

        let result = tokio::try_join!(
            self.source.get_health(),
            self.source.get_stats(),
            self.source.get_logs(self.config.log_limit),
            self.source.get_memory_stats(),
        );

        let (health, stats, logs, memory) = match result {
            Ok(data) => data,
            Err(e) => {
                warn!("Snapshot query failed, showing mock data: {}", e);
                let mut ctx = self.context.lock().await;
                ctx.log(
                    LogLevel::Warning,
                    format!("Snapshot query failed, showing mock data: {}", e),
                );
                return self.publish_mock(&mut ctx, sequence);
            },
        };

        let mut ctx = self.context.lock().await;

        if ctx.state != ConnectionState::Connected {
            return self.publish_mock(&mut ctx, sequence);
        }

        if !self.is_latest(sequence) || sequence <= ctx.applied_sequence {
            warn!("Discarding stale snapshot {}", sequence);
            return match &ctx.current {
                Some(current) => current.clone(),
                None => self.mock_snapshot(),
            };
        }

        let now = Utc::now().timestamp_millis();
        let Context {
            memory_history,
            performance_history,
            ..
        } = &mut *ctx;
        record_history(memory_history, performance_history, now, &stats, &memory);

        let snapshot = self.live_snapshot(
            &health,
            &stats,
            &logs,
            &ctx.memory_history,
            &ctx.performance_history,
        );
        ctx.current = Some(snapshot.clone());
        ctx.applied_sequence = sequence;

        snapshot
    }

    fn live_snapshot(
        &self,
        health: &HealthStatus,
        stats: &Statistics,
        logs: &[LogRecord],
        memory_history: &HistoryBuffer,
        performance_history: &HistoryBuffer,
    ) -> DisplaySnapshot {
        DisplaySnapshot {
            source: SnapshotSource::Live,
            health: normalize::health_view(
                health,
                self.config.memory_threshold_warning,
                self.config.memory_threshold_critical,
            ),
            stats: normalize::stats_view(stats),
            logs: logs.iter().map(normalize::log_view).collect(),
            memory_history: memory_history.to_vec(),
            performance_history: performance_history.to_vec(),
        }
    }

    /// Runs a payout action, then re-fetches so the caller sees its effect.
    pub async fn process_action(
        &self,
        action: PayoutAction,
    ) -> Result<ActionOutcome, Error> {
        if !self.is_connected().await {
            warn!("Rejected {}: not connected", action);
            return Err(Error::NotConnected);
        }

        let result = match action {
            PayoutAction::ProcessPayouts => self.source.process_payouts().await,
            PayoutAction::ForcePayout => self.source.force_payout().await,
        };

        if let Err(e) = result {
            error!("Action {} failed: {}", action, e);
            let mut ctx = self.context.lock().await;
            ctx.log(LogLevel::Error, format!("Action {} failed: {}", action, e));
            return Err(match e {
                Error::Timeout(method) => Error::Timeout(method),
                e => Error::Action(e.to_string()),
            });
        }

        {
            let mut ctx = self.context.lock().await;
            ctx.log(LogLevel::Info, format!("Action {} submitted", action));
        }

        let snapshot = self.fetch_snapshot().await;
        let outcome = if snapshot.is_live() {
            ActionOutcome {
                action,
                message: format!(
                    "Processed payouts for {} holders",
                    snapshot.stats.active_holders
                ),
                holders_processed: snapshot.stats.active_holders,
                tokens_distributed: snapshot.stats.total_payout_amount.to_owned(),
                snapshot,
            }
        } else {
            ActionOutcome {
                action,
                message: String::from(
                    "Payout submitted, refreshed stats unavailable",
                ),
                holders_processed: 0,
                tokens_distributed: String::from("0.00"),
                snapshot,
            }
        };

        info!("{}", &outcome.message);
        Ok(outcome)
    }

    pub async fn fetch_holders(&self) -> Vec<HolderRecord> {
        if !self.is_connected().await {
            return mock::holders();
        }

        match self.source.get_all_holders().await {
            Ok(holders) => normalize::holder_records(holders),
            Err(e) => {
                warn!("Holder query failed, showing mock holders: {}", e);
                mock::holders()
            },
        }
    }

    pub async fn fetch_total_holders(&self) -> u64 {
        if !self.is_connected().await {
            return mock::holders().len() as u64;
        }

        match self.source.get_total_holders().await {
            Ok(total) => total,
            Err(e) => {
                warn!("Holder count query failed: {}", e);
                mock::holders().len() as u64
            },
        }
    }

    pub async fn data_origin(&self) -> HolderDataOrigin {
        if !self.is_connected().await {
            return HolderDataOrigin::Mock;
        }

        match self.source.is_using_csv_data().await {
            Ok(true) => HolderDataOrigin::Csv,
            Ok(false) => HolderDataOrigin::Canister,
            Err(e) => {
                warn!("Data origin query failed: {}", e);
                HolderDataOrigin::Canister
            },
        }
    }

    /// Holder analytics, all live or all mock like the dashboard snapshot.
    pub async fn fetch_holders_overview(&self) -> HoldersOverview {
        if !self.is_connected().await {
            return mock::holders_overview();
        }

        let result = try_join(
            self.source.get_all_holders(),
            self.source.get_all_user_stats(),
        )
        .await;

        match result {
            Ok((holders, user_stats)) => holders::overview(
                &normalize::holder_records(holders),
                &user_stats,
                SnapshotSource::Live,
            ),
            Err(e) => {
                warn!("Holder overview query failed, showing mock data: {}", e);
                mock::holders_overview()
            },
        }
    }

    pub async fn local_logs(&self) -> Vec<LogView> {
        self.context.lock().await.local_logs.to_vec()
    }

    pub async fn current_snapshot(&self) -> Option<DisplaySnapshot> {
        self.context.lock().await.current.clone()
    }

    /// Published snapshot together with the sequence number that produced it.
    pub async fn published(&self) -> (u64, Option<DisplaySnapshot>) {
        let ctx = self.context.lock().await;
        (ctx.applied_sequence, ctx.current.clone())
    }
}

fn record_history(
    memory_history: &mut HistoryBuffer,
    performance_history: &mut HistoryBuffer,
    now: i64,
    stats: &Statistics,
    memory: &MemoryStats,
) {
    performance_history.push(HistoryPoint {
        timestamp: now,
        value: stats.processing_time_ms,
    });

    if memory.usage_history.is_empty() {
        memory_history.push(HistoryPoint {
            timestamp: now,
            value: memory.current_usage_kb,
        });
    } else {
        memory_history.replace(normalize::history_points(&memory.usage_history));
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::HashSet,
        sync::{
            atomic::{AtomicBool, AtomicUsize},
            Arc, Mutex as StdMutex,
        },
    };

    use tokio::sync::Notify;

    use super::*;
    use crate::types::{HolderInfo, UserStats};

    #[derive(Default)]
    struct Script {
        connect_fails: AtomicBool,
        failing: StdMutex<HashSet<&'static str>>,
        calls: AtomicUsize,
        stats_calls: AtomicU64,
        gate_stats: AtomicBool,
        entered: Notify,
        release: Notify,
        usage_history: StdMutex<Vec<(i64, u64)>>,
    }

    impl Script {
        fn fail(&self, method: &'static str) {
            if let Ok(mut failing) = self.failing.lock() {
                failing.insert(method);
            }
        }

        fn recover(&self, method: &'static str) {
            if let Ok(mut failing) = self.failing.lock() {
                failing.remove(method);
            }
        }

        fn call(&self, method: &'static str) -> Result<(), Error> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let failing = self
                .failing
                .lock()
                .map(|failing| failing.contains(method))
                .unwrap_or(false);
            if failing {
                return Err(Error::query(method, "scripted failure"));
            }
            Ok(())
        }
    }

    #[derive(Clone, Default)]
    struct ScriptedSource(Arc<Script>);

    impl StatsSource for ScriptedSource {
        async fn connect(&self, _endpoint: &Endpoint) -> Result<(), Error> {
            self.0.calls.fetch_add(1, Ordering::SeqCst);
            if self.0.connect_fails.load(Ordering::SeqCst) {
                return Err(Error::Connection(String::from("unreachable")));
            }
            Ok(())
        }

        fn disconnect(&self) {}

        async fn get_health(&self) -> Result<HealthStatus, Error> {
            self.0.call("get_health")?;
            Ok(HealthStatus {
                is_healthy: true,
                memory_usage_kb: 400,
                memory_peak_kb: 800,
                ..Default::default()
            })
        }

        async fn get_stats(&self) -> Result<Statistics, Error> {
            self.0.call("get_stats")?;
            let index = self.0.stats_calls.fetch_add(1, Ordering::SeqCst) + 1;
            if self.0.gate_stats.swap(false, Ordering::SeqCst) {
                self.0.entered.notify_one();
                self.0.release.notified().await;
            }
            Ok(Statistics {
                total_holders: 3,
                active_holders: 2,
                total_payout_amount: 25_000_000_000,
                processing_time_ms: index * 100,
                ..Default::default()
            })
        }

        async fn get_logs(&self, _limit: u64) -> Result<Vec<LogRecord>, Error> {
            self.0.call("get_logs")?;
            Ok(vec![])
        }

        async fn get_memory_stats(&self) -> Result<MemoryStats, Error> {
            self.0.call("get_memory_stats")?;
            let usage_history = self
                .0
                .usage_history
                .lock()
                .map(|history| history.clone())
                .unwrap_or_default();
            Ok(MemoryStats {
                current_usage_kb: 400,
                peak_usage_kb: 800,
                usage_history,
            })
        }

        async fn get_all_holders(
            &self,
        ) -> Result<Vec<(String, HolderInfo)>, Error> {
            self.0.call("get_all_holders")?;
            Ok(vec![(
                String::from("live-holder"),
                HolderInfo {
                    daku_count: 3,
                    gg_count: 1,
                    total_count: 4,
                    last_updated: 0,
                },
            )])
        }

        async fn get_all_user_stats(
            &self,
        ) -> Result<Vec<(String, UserStats)>, Error> {
            self.0.call("get_all_user_stats")?;
            Ok(vec![])
        }

        async fn get_total_holders(&self) -> Result<u64, Error> {
            self.0.call("get_total_holders")?;
            Ok(1)
        }

        async fn is_using_csv_data(&self) -> Result<bool, Error> {
            self.0.call("is_using_csv_data")?;
            Ok(true)
        }

        async fn process_payouts(&self) -> Result<(), Error> {
            self.0.call("process_payouts")
        }

        async fn force_payout(&self) -> Result<(), Error> {
            self.0.call("force_payout")
        }
    }

    fn adapter() -> (DataAdapter<ScriptedSource>, Arc<Script>) {
        let source = ScriptedSource::default();
        let script = Arc::clone(&source.0);
        (DataAdapter::new(Config::default(), source), script)
    }

    #[tokio::test]
    async fn test_disconnected_snapshot_is_mock() {
        let (adapter, script) = adapter();

        let first = adapter.fetch_snapshot().await;
        let second = adapter.fetch_snapshot().await;

        assert_eq!(first.source, SnapshotSource::Mock);
        assert_eq!(first, second);
        assert_eq!(script.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_connected_snapshot_is_live() {
        let (adapter, _script) = adapter();

        assert_eq!(adapter.connect(true).await, ConnectionState::Connected);
        let snapshot = adapter.fetch_snapshot().await;

        assert!(snapshot.is_live());
        assert_eq!(snapshot.stats.total_payout_amount, "250.00");
        assert_eq!(snapshot.health.memory_percentage, 50);
        assert_eq!(snapshot.performance_history.len(), 1);
        assert_eq!(snapshot.memory_history.len(), 1);
        assert_eq!(adapter.current_snapshot().await, Some(snapshot));
    }

    #[tokio::test]
    async fn test_single_failed_query_falls_back_to_full_mock() {
        let (adapter, script) = adapter();
        adapter.connect(true).await;
        script.fail("get_logs");

        let snapshot = adapter.fetch_snapshot().await;

        assert_eq!(snapshot, mock::dashboard_snapshot(60, 85));
        // a failed query never changes the connection state
        assert_eq!(adapter.state().await, ConnectionState::Connected);
        assert!(adapter
            .local_logs()
            .await
            .iter()
            .any(|log| log.level == LogLevel::Warning));
    }

    #[tokio::test]
    async fn test_failed_query_publishes_mock() {
        let (adapter, script) = adapter();
        adapter.connect(true).await;
        assert!(adapter.fetch_snapshot().await.is_live());

        script.fail("get_logs");
        let fallback = adapter.fetch_snapshot().await;

        let (sequence, published) = adapter.published().await;
        assert_eq!(fallback.source, SnapshotSource::Mock);
        assert_eq!(published, Some(fallback));
        assert_eq!(sequence, 2);
    }

    #[tokio::test]
    async fn test_canister_memory_history_replaces_buffer() {
        let (adapter, script) = adapter();
        if let Ok(mut history) = script.usage_history.lock() {
            *history = vec![
                (3_000_000_000, 1_300),
                (1_000_000_000, 1_100),
                (2_000_000_000, 1_200),
            ];
        }
        adapter.connect(true).await;

        let snapshot = adapter.fetch_snapshot().await;

        assert!(snapshot.is_live());
        assert_eq!(
            snapshot.memory_history,
            vec![
                HistoryPoint {
                    timestamp: 1_000,
                    value: 1_100
                },
                HistoryPoint {
                    timestamp: 2_000,
                    value: 1_200
                },
                HistoryPoint {
                    timestamp: 3_000,
                    value: 1_300
                },
            ]
        );
        assert_eq!(snapshot.performance_history.len(), 1);
    }

    #[tokio::test]
    async fn test_reconnect_after_error() {
        let (adapter, script) = adapter();

        script.connect_fails.store(true, Ordering::SeqCst);
        assert_eq!(adapter.connect(true).await, ConnectionState::Error);
        assert!(adapter.connection_status().await.last_error.is_some());
        assert!(!adapter.fetch_snapshot().await.is_live());

        script.connect_fails.store(false, Ordering::SeqCst);
        assert_eq!(adapter.connect(false).await, ConnectionState::Connected);
        assert!(adapter.fetch_snapshot().await.is_live());

        let status = adapter.connection_status().await;
        assert_eq!(status.endpoint.as_deref(), Some("https://ic0.app"));
        assert!(!status.use_local_endpoint);
        assert_eq!(status.last_error, None);
    }

    #[tokio::test]
    async fn test_reconnect_failure_keeps_snapshot() {
        let (adapter, script) = adapter();
        adapter.connect(true).await;
        let live = adapter.fetch_snapshot().await;

        script.fail("get_health");
        assert_eq!(adapter.connect(false).await, ConnectionState::Error);
        assert_eq!(adapter.current_snapshot().await, Some(live));
    }

    #[tokio::test]
    async fn test_action_rejected_when_disconnected() {
        let (adapter, script) = adapter();

        let result = adapter.process_action(PayoutAction::ProcessPayouts).await;

        assert!(matches!(result, Err(Error::NotConnected)));
        assert_eq!(script.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_action_refetches_snapshot() {
        let (adapter, _script) = adapter();
        adapter.connect(true).await;

        let outcome = adapter
            .process_action(PayoutAction::ForcePayout)
            .await
            .unwrap();

        assert!(outcome.snapshot.is_live());
        assert_eq!(outcome.holders_processed, 2);
        assert_eq!(outcome.tokens_distributed, "250.00");
        assert_eq!(outcome.message, "Processed payouts for 2 holders");
    }

    #[tokio::test]
    async fn test_failed_action_keeps_connection() {
        let (adapter, script) = adapter();
        adapter.connect(true).await;
        script.fail("process_payouts");

        let result = adapter.process_action(PayoutAction::ProcessPayouts).await;

        assert!(matches!(result, Err(Error::Action(_))));
        assert_eq!(adapter.state().await, ConnectionState::Connected);

        script.recover("process_payouts");
        assert!(adapter
            .process_action(PayoutAction::ProcessPayouts)
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_stale_fetch_is_discarded() {
        let (adapter, script) = adapter();
        let adapter = Arc::new(adapter);
        adapter.connect(true).await;
        script.gate_stats.store(true, Ordering::SeqCst);

        let slow = tokio::spawn({
            let adapter = Arc::clone(&adapter);
            async move { adapter.fetch_snapshot().await }
        });
        script.entered.notified().await;

        let fresh = adapter.fetch_snapshot().await;
        script.release.notify_one();
        let stale = slow.await.unwrap();

        assert_eq!(stale, fresh);
        assert_eq!(fresh.performance_history.len(), 1);
        assert_eq!(fresh.performance_history[0].value, 200);
        assert_eq!(adapter.current_snapshot().await, Some(fresh));
    }

    #[tokio::test]
    async fn test_stale_fetch_without_published_snapshot_is_mock() {
        let (adapter, script) = adapter();
        let adapter = Arc::new(adapter);
        adapter.connect(true).await;
        script.gate_stats.store(true, Ordering::SeqCst);

        let slow = tokio::spawn({
            let adapter = Arc::clone(&adapter);
            async move { adapter.fetch_snapshot().await }
        });
        script.entered.notified().await;

        // a newer fetch is issued but has not finished yet
        adapter.sequence.fetch_add(1, Ordering::SeqCst);
        script.release.notify_one();
        let stale = slow.await.unwrap();

        assert_eq!(stale, mock::dashboard_snapshot(60, 85));
        assert_eq!(adapter.current_snapshot().await, None);
    }

    #[tokio::test]
    async fn test_holders_follow_connection() {
        let (adapter, script) = adapter();

        assert_eq!(adapter.data_origin().await, HolderDataOrigin::Mock);
        assert_eq!(adapter.fetch_holders().await, mock::holders());
        assert_eq!(adapter.fetch_holders_overview().await.source, SnapshotSource::Mock);

        adapter.connect(true).await;
        assert_eq!(adapter.data_origin().await, HolderDataOrigin::Csv);
        assert_eq!(adapter.fetch_total_holders().await, 1);

        let overview = adapter.fetch_holders_overview().await;
        assert_eq!(overview.source, SnapshotSource::Live);
        assert_eq!(overview.total_nfts, 4);

        script.fail("get_all_user_stats");
        assert_eq!(
            adapter.fetch_holders_overview().await,
            mock::holders_overview()
        );
    }

    #[tokio::test]
    async fn test_disconnect_returns_to_mock() {
        let (adapter, _script) = adapter();
        adapter.connect(true).await;

        assert_eq!(adapter.disconnect().await, ConnectionState::Disconnected);
        assert!(!adapter.fetch_snapshot().await.is_live());
        assert_eq!(adapter.local_logs().await.len(), 2);
    }
}
