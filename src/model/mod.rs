//! Display models module
//!
//! All records produced for the presentation layer live in models.rs.

mod models;

pub use models::*;
