//! Classifieds: client core for a classified-ads app.
//!
//! Saved listings survive restarts through a pluggable key-value backing;
//! the rest of the crate wires that store to a user session, settings and a
//! JSON-RPC surface for the UI.

pub mod app;
pub mod database;
pub mod logging;
pub mod managers;
pub mod platform;
pub mod rpc_handler;
pub mod services;
pub mod storage;
pub mod types;
