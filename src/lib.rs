//! codecache - Code Id Cache for Test Chains
//!
//! Remembers the code id each contract binary was stored under on a test
//! chain, keyed by chain id and file content, and forgets everything once the
//! chain restarts.

pub mod audit;
pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod ui;

pub use error::{CodeCacheError, CodeCacheResult};
