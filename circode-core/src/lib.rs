//! Shared primitives for the circode crates.
//!
//! `circode-core` provides the foundation that the domain crate builds on:
//!
//! - **Error types** — [`CircodeError`] and [`Result`] for structured error handling
//! - **Diagnostics** — the [`DiagnosticSink`] contract that code tests narrate
//!   their first violation into, plus ready-made sinks

pub mod diagnostic;
pub mod error;

pub use diagnostic::{CollectingSink, DiagnosticSink, NoopSink, TracingSink};
pub use error::{CircodeError, Result};
