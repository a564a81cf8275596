//! User-facing notification sink.
//!
//! The board never renders anything itself; it pushes [`Toast`] values
//! into a [`Notifier`] and the embedding UI decides how to show them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a toast should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Neutral information.
    Info,
    /// A completed action.
    Success,
    /// A failed action the user should know about.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Success => write!(f, "success"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A transient user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    /// Short headline.
    pub title: String,
    /// Optional longer explanation.
    pub detail: Option<String>,
    /// Presentation severity.
    pub severity: Severity,
}

impl Toast {
    /// Creates a success toast.
    #[must_use]
    pub fn success(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            detail: Some(detail.into()),
            severity: Severity::Success,
        }
    }

    /// Creates an error toast.
    #[must_use]
    pub fn error(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            detail: Some(detail.into()),
            severity: Severity::Error,
        }
    }

    /// Creates an info toast with no detail line.
    #[must_use]
    pub fn info(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            detail: None,
            severity: Severity::Info,
        }
    }
}

/// Sink for user-facing notifications.
///
/// `notify` must not block; implementations hand the toast to the UI
/// layer (or a queue) and return.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    /// Surfaces a toast to the user.
    fn notify(&self, toast: Toast);
}

/// A notifier that discards all toasts.
///
/// Used as the default when no sink is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpNotifier;

impl Notifier for NoOpNotifier {
    fn notify(&self, _toast: Toast) {
        // Intentionally empty - discards all toasts
    }
}

/// A notifier that logs toasts through the tracing framework.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, toast: Toast) {
        match toast.severity {
            Severity::Error => tracing::warn!(
                title = %toast.title,
                detail = ?toast.detail,
                "toast"
            ),
            Severity::Info | Severity::Success => tracing::info!(
                title = %toast.title,
                detail = ?toast.detail,
                severity = %toast.severity,
                "toast"
            ),
        }
    }
}

/// A collecting notifier for tests.
#[derive(Debug, Default)]
pub struct CollectingNotifier {
    toasts: parking_lot::RwLock<Vec<Toast>>,
}

impl CollectingNotifier {
    /// Creates a new collecting notifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all collected toasts.
    #[must_use]
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.read().clone()
    }

    /// Returns the number of collected toasts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.read().len()
    }

    /// Returns true if no toasts have been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.read().is_empty()
    }

    /// Returns toasts of the given severity.
    #[must_use]
    pub fn of_severity(&self, severity: Severity) -> Vec<Toast> {
        self.toasts
            .read()
            .iter()
            .filter(|t| t.severity == severity)
            .cloned()
            .collect()
    }

    /// Clears all collected toasts.
    pub fn clear(&self) {
        self.toasts.write().clear();
    }
}

impl Notifier for CollectingNotifier {
    fn notify(&self, toast: Toast) {
        self.toasts.write().push(toast);
    }
}
