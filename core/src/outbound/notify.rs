//! Notification surface adapters.

use std::sync::Mutex;

use tracing::{error, info};

use crate::domain::ports::Notifier;

/// Forwards user-facing signals to `tracing`.
///
/// Useful wherever no toast surface is wired up: signals still land in the
/// structured log with their severity attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        info!(signal = "success", "{message}");
    }

    fn error(&self, message: &str) {
        error!(signal = "error", "{message}");
    }

    fn info(&self, message: &str) {
        info!(signal = "info", "{message}");
    }
}

/// A signal captured by [`RecordingNotifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    Success(String),
    Error(String),
    Info(String),
}

/// Captures signals for assertions in tests and demos.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    signals: Mutex<Vec<Signal>>,
}

impl RecordingNotifier {
    /// Everything captured so far, in emission order.
    pub fn signals(&self) -> Vec<Signal> {
        self.signals.lock().map_or_else(|_| Vec::new(), |guard| guard.clone())
    }

    fn push(&self, signal: Signal) {
        if let Ok(mut guard) = self.signals.lock() {
            guard.push(signal);
        }
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.push(Signal::Success(message.to_owned()));
    }

    fn error(&self, message: &str) {
        self.push(Signal::Error(message.to_owned()));
    }

    fn info(&self, message: &str) {
        self.push(Signal::Info(message.to_owned()));
    }
}
