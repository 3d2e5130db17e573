//! Diagnostic sinks for code tests.
//!
//! A test that rejects a code writes one human-readable line describing the
//! first violation it found. Sinks are append-only and are never read back
//! by the engine, so results are identical whichever sink is supplied.

use std::sync::{Mutex, PoisonError};

/// Append-only destination for single-line diagnostics.
///
/// Takes `&self` so a single sink can be shared by concurrent callers.
pub trait DiagnosticSink {
    /// Record one diagnostic line.
    fn log(&self, message: &str);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn log(&self, message: &str) {
        (**self).log(message)
    }
}

/// Discards every line.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn log(&self, _message: &str) {}
}

/// Forwards every line as a `tracing` event at INFO level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn log(&self, message: &str) {
        tracing::info!(target: "circode", "{message}");
    }
}

/// Keeps every line in memory, in arrival order.
#[derive(Debug, Default)]
pub struct CollectingSink {
    lines: Mutex<Vec<String>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the lines recorded so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Whether no line has been recorded.
    pub fn is_empty(&self) -> bool {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }

    /// Consume the sink and return its lines.
    pub fn into_lines(self) -> Vec<String> {
        self.lines
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl DiagnosticSink for CollectingSink {
    fn log(&self, message: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collecting_sink_keeps_order() {
        let sink = CollectingSink::new();
        assert!(sink.is_empty());
        sink.log("first");
        sink.log("second");
        assert_eq!(sink.lines(), vec!["first", "second"]);
        assert_eq!(sink.into_lines().len(), 2);
    }

    #[test]
    fn noop_and_tracing_accept_lines() {
        NoopSink.log("ignored");
        TracingSink.log("emitted without a subscriber");
    }

    #[test]
    fn sink_by_reference() {
        let sink = CollectingSink::new();
        let by_ref: &dyn DiagnosticSink = &sink;
        (&by_ref).log("through a reference");
        assert_eq!(sink.lines(), vec!["through a reference"]);
    }

    #[test]
    fn shared_across_threads() {
        let sink = CollectingSink::new();
        std::thread::scope(|s| {
            for i in 0..4 {
                let sink = &sink;
                s.spawn(move || sink.log(&format!("worker {i}")));
            }
        });
        assert_eq!(sink.lines().len(), 4);
    }
}
