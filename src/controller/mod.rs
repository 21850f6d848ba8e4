//! API Controller modules
//!
//! Consolidated controllers organized by dashboard area.

pub mod connection;
pub mod dashboard;
pub mod holders;
pub mod misc;
pub mod payout;
