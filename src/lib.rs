//! Lumelines (workspace facade crate).
//!
//! Exposes `lumelines::{core,engine,types}` while the implementation lives in
//! dedicated crates under `crates/`. The `config` module holds the headless
//! runner's environment configuration.

pub mod config;

pub use lumelines_core as core;
pub use lumelines_engine as engine;
pub use lumelines_types as types;
