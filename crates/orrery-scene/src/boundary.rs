//! Panic containment around frame work.
//!
//! A failed frame does not take the process down: the boundary records the
//! panic message, exposes a fallback screen, and refuses further frames
//! until [`RenderBoundary::retry`] is called.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use serde::Serialize;

/// Message shown when the panic carried no readable payload.
pub const GENERIC_FAILURE: &str = "Something went wrong, but we're fixing it!";

/// What to show in place of the scene after a failure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Fallback {
    pub title: String,
    pub subtitle: String,
    pub message: String,
    pub retry_label: String,
}

/// Result of running work inside the boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// The work ran to completion.
    Completed,
    /// The work panicked this frame; the boundary is now tripped.
    Failed(String),
    /// The boundary was already tripped; nothing ran.
    Suspended,
}

/// Catches panics from frame work and holds the scene in a fallback state.
#[derive(Debug, Default)]
pub struct RenderBoundary {
    failure: Option<String>,
    failures: u32,
}

impl RenderBoundary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `work` unless the boundary is tripped.
    pub fn run<F: FnOnce()>(&mut self, work: F) -> FrameOutcome {
        if self.failure.is_some() {
            return FrameOutcome::Suspended;
        }
        match panic::catch_unwind(AssertUnwindSafe(work)) {
            Ok(()) => FrameOutcome::Completed,
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                tracing::error!(%message, "frame panicked, showing fallback");
                self.failure = Some(message.clone());
                self.failures += 1;
                FrameOutcome::Failed(message)
            }
        }
    }

    /// Whether a failure is being displayed.
    pub fn is_tripped(&self) -> bool {
        self.failure.is_some()
    }

    /// The recorded panic message.
    pub fn error(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    /// Number of failures caught since creation.
    pub fn failure_count(&self) -> u32 {
        self.failures
    }

    /// Fallback screen while tripped.
    pub fn fallback(&self) -> Option<Fallback> {
        let message = self.failure.as_deref()?;
        Some(Fallback {
            title: "Solar System Loading...".to_string(),
            subtitle: "Initializing the cosmic experience".to_string(),
            message: if message.is_empty() {
                GENERIC_FAILURE.to_string()
            } else {
                message.to_string()
            },
            retry_label: "Retry Launch".to_string(),
        })
    }

    /// Clear the failure so the next frame runs again. Returns whether the
    /// boundary was tripped.
    pub fn retry(&mut self) -> bool {
        let was_tripped = self.failure.take().is_some();
        if was_tripped {
            tracing::info!("retrying after frame failure");
        }
        was_tripped
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        String::new()
    }
}
