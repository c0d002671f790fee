//! A fire-and-forget, ordered stream of user-visible status messages.

use serde::Serialize;
use std::fmt;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{info, warn};

/// How a notification is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Plain,
    Info,
    Success,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Severity::Plain => "message",
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
        };
        f.write_str(tag)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub severity: Severity,
    pub title: String,
    pub description: Option<String>,
}

impl Notification {
    pub fn new(severity: Severity, title: impl Into<String>) -> Self {
        Self {
            severity,
            title: title.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.title)?;
        if let Some(description) = &self.description {
            write!(f, " ({})", description)?;
        }
        Ok(())
    }
}

/// Sending half of the notification stream. Cheap to clone.
#[derive(Debug, Clone)]
pub struct Notifier {
    tx: UnboundedSender<Notification>,
}

/// Receiving half of the notification stream.
#[derive(Debug)]
pub struct NotificationStream {
    rx: UnboundedReceiver<Notification>,
}

/// Creates a connected notifier and stream.
pub fn notification_channel() -> (Notifier, NotificationStream) {
    let (tx, rx) = mpsc::unbounded_channel();
    (Notifier { tx }, NotificationStream { rx })
}

impl Notifier {
    /// Queues a notification. Delivery is not acknowledged and a closed stream
    /// is ignored.
    pub fn notify(&self, notification: Notification) {
        // Error notifications report recoverable rejections.
        match notification.severity {
            Severity::Error => warn!(title = %notification.title, "Notification"),
            _ => info!(severity = %notification.severity, title = %notification.title, "Notification"),
        }
        let _ = self.tx.send(notification);
    }

    pub fn plain(&self, title: impl Into<String>) {
        self.notify(Notification::new(Severity::Plain, title));
    }

    pub fn info(&self, title: impl Into<String>) {
        self.notify(Notification::new(Severity::Info, title));
    }

    pub fn success(&self, title: impl Into<String>) {
        self.notify(Notification::new(Severity::Success, title));
    }

    pub fn error(&self, title: impl Into<String>) {
        self.notify(Notification::new(Severity::Error, title));
    }
}

impl NotificationStream {
    /// Waits for the next notification. `None` once every notifier is dropped.
    pub async fn recv(&mut self) -> Option<Notification> {
        self.rx.recv().await
    }

    /// Everything queued so far, in emission order.
    pub fn drain(&mut self) -> Vec<Notification> {
        let mut out = Vec::new();
        while let Ok(notification) = self.rx.try_recv() {
            out.push(notification);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_preserves_order() {
        let (notifier, mut stream) = notification_channel();
        notifier.info("one");
        notifier.success("two");
        notifier.plain("three");
        let titles: Vec<_> = stream.drain().into_iter().map(|n| n.title).collect();
        assert_eq!(titles, ["one", "two", "three"]);
        assert!(stream.drain().is_empty());
    }

    #[test]
    fn test_send_after_stream_dropped_is_ignored() {
        let (notifier, stream) = notification_channel();
        drop(stream);
        notifier.error("nobody listens");
    }

    #[test]
    fn test_display() {
        let n = Notification::new(Severity::Plain, "Starting").with_description("a > b");
        assert_eq!(n.to_string(), "[message] Starting (a > b)");
    }
}
