//! Log sinks for request/response summaries

use std::sync::Mutex;

/// Sink for the two per-request summary lines the pipeline emits.
///
/// The transport behind the sink is the embedding application's business;
/// the pipeline only requires somewhere to send `info` lines.
pub trait Logger {
    fn info(&self, message: &str);
}

/// Forwards summary lines to `tracing::info!`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }
}

/// Collects summary lines in memory, in emission order.
///
/// Used by tests and by embedders that assert on logging behavior.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    lines: Mutex<Vec<String>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// The lines collected so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().expect("logger mutex poisoned").clone()
    }
}

impl Logger for MemoryLogger {
    fn info(&self, message: &str) {
        self.lines
            .lock()
            .expect("logger mutex poisoned")
            .push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_logger_keeps_order() {
        let logger = MemoryLogger::new();
        logger.info("first");
        logger.info("second");
        assert_eq!(logger.lines(), vec!["first", "second"]);
    }
}
