//! Stores functionality that should be shared between different front ends of
//! the CDN dashboard
//! NB: The assumption is made that the async runtime has already been started
//! before any functions from this library are called

#![warn(unused_crate_dependencies)]


mod client;
pub mod pages;

pub use client::{Client, FetchError, UiCallBack, WakeFn, DUMMY_ARGUMENT};
