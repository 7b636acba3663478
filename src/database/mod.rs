//! Classifieds database layer.
//!
//! Connection setup and schema migrations for the SQLite-backed local
//! storage. Opening creates missing parent directories and refuses files
//! written by a newer schema.
//!
//! # Usage
//!
//! ```no_run
//! use classifieds::database::Database;
//!
//! // Open a persistent database
//! let db = Database::open("classifieds.db").expect("failed to open database");
//!
//! // Or use an in-memory database for testing
//! let db = Database::open_in_memory().expect("failed to open in-memory database");
//!
//! let conn = db.connection();
//! ```

pub mod connection;
pub mod migrations;

pub use connection::Database;
