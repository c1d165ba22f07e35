//! Code shared between the client core and the backend's wire contract

#![warn(unused_crate_dependencies)]

pub mod const_config;
pub mod errors;
pub mod file_ref;
pub mod req_args;
pub mod resp;
pub mod session;
pub mod user;

#[cfg(not(target_arch = "wasm32"))]
pub mod telemetry;
