//! # Podium Server
//!
//! HTTP server exposing the `podium` tournament library as a REST API.
//!
//! ## Core Modules
//!
//! - [`api`]: Router, application state, and request handlers
//! - [`config`]: Environment-driven server configuration
//! - [`logging`]: Structured logging setup
//! - [`metrics`]: Prometheus exporter and counters

pub mod api;
pub mod config;
pub mod logging;
pub mod metrics;
