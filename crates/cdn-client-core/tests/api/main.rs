#![cfg(not(target_arch = "wasm32"))]

mod listing;
mod row_actions;
mod session_gate;
