//! Dogshouse Service
//!
//! A small HTTP service that stores dog records and exposes read
//! (filtered, sorted, paged) and create operations.
//!
//! # Features
//!
//! - Validated listing parameters compiled into a deterministic query plan
//! - Unique-name creation with an optimistic pre-check and a storage-level
//!   constraint backstop
//! - `SQLite` persistence behind a mockable storage contract
//!
//! # Quick Start
//!
//! ```bash
//! BIND_ADDR=127.0.0.1:8080 ./dogshouse
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌────────┐  GET /dogs, POST /dog   ┌─────────────┐       ┌────────────┐
//! │ Client │────────────────────────▶│ HTTP server │──────▶│ DogService │
//! └────────┘                         └─────────────┘       └─────┬──────┘
//!                                                    QueryPlan   │
//!                                                                ▼
//!                                                             SQLite
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod query;
pub mod server;
pub mod service;
pub mod storage;
pub mod traits;
