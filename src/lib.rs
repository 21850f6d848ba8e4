#![allow(non_camel_case_types)]

pub mod adapter;
pub mod assets;
pub mod cli;
pub mod configuration;
pub mod controller;
pub mod error;
pub mod handler;
pub mod helpers;
pub mod history;
pub mod model;
pub mod provider;
pub mod server;
pub mod types;
