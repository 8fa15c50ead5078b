//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via the tracing crate
//! - Log level configurable via environment (RUST_LOG) with the
//!   configuration file's level as fallback
//! - Every mutating site operation logs with structured fields

pub mod logging;
