use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Severity class of a user-facing message.
///
/// `Cancelled` sits between the other two: the owner declining a
/// transaction is a normal outcome that deserves a neutral note, not
/// an error banner.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum NotificationClass {
    Success,
    Cancelled,
    Error,
}

/// One user-facing message, ready for whatever toast rail or status
/// line the host application renders with.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub class: NotificationClass,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            class: NotificationClass::Success,
            message: message.into(),
        }
    }

    pub fn cancelled(message: impl Into<String>) -> Self {
        Self {
            class: NotificationClass::Cancelled,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            class: NotificationClass::Error,
            message: message.into(),
        }
    }
}

/// Sink for user-facing messages.
///
/// The sync layer emits exactly one notification per submitted write
/// and none for reads.
pub trait NotificationSink {
    fn notify(&self, notification: Notification);
}

impl<T: NotificationSink + ?Sized> NotificationSink for Arc<T> {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification)
    }
}
