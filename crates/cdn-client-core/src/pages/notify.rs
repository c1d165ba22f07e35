use std::collections::VecDeque;

/// Severity of a [`Notification`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    /// The user needs to adjust something before the action can proceed
    Warning,
    /// An operation failed
    Error,
}

/// A message the host UI should show the user as a blocking dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }
}

/// FIFO queue of notifications waiting to be displayed
#[derive(Debug, Default)]
pub struct Notifications(VecDeque<Notification>);

impl Notifications {
    pub fn push(&mut self, notification: Notification) {
        self.0.push_back(notification);
    }

    pub fn pop(&mut self) -> Option<Notification> {
        self.0.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
