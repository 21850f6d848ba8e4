pub use self::{
    http::HttpSource,
    source::{Canister, Endpoint, StatsSource},
};

mod http;
mod source;
