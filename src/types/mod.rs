pub use self::{
    gateway_status::GatewayStatus, health_status::HealthStatus,
    holder_info::HolderInfo, log_record::LogRecord,
    memory_stats::MemoryStats, statistics::Statistics,
    user_stats::UserStats,
};

mod gateway_status;
mod health_status;
mod holder_info;
mod log_record;
mod memory_stats;
mod statistics;
mod user_stats;
