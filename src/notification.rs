//! Transient messages that tell the user how an operation went

use std::fmt::{Display, Error, Formatter};
use std::time::Duration;

use crate::config::{ERROR_DURATION, SUCCESS_DURATION};

/// Whether a notification reports a success or a failure
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationStatus {
    Success,
    Error,
}

/// A toast-like message.
///
/// Error notifications carry the raw message of the error that caused them.
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    title: String,
    description: Option<String>,
    status: NotificationStatus,
    duration: Duration,
    closable: bool,
}

impl Notification {
    pub fn success<S: ToString>(title: S) -> Self {
        Self {
            title: title.to_string(),
            description: None,
            status: NotificationStatus::Success,
            duration: SUCCESS_DURATION,
            closable: true,
        }
    }

    pub fn error<S: ToString, T: Display + ?Sized>(title: S, err: &T) -> Self {
        Self {
            title: title.to_string(),
            description: Some(err.to_string()),
            status: NotificationStatus::Error,
            duration: ERROR_DURATION,
            closable: true,
        }
    }

    pub fn title(&self) -> &str { &self.title }
    pub fn description(&self) -> Option<&str> { self.description.as_deref() }
    pub fn status(&self) -> NotificationStatus { self.status }
    /// How long a front end should display this notification
    pub fn duration(&self) -> Duration { self.duration }
    pub fn is_closable(&self) -> bool { self.closable }

    pub fn is_error(&self) -> bool {
        self.status == NotificationStatus::Error
    }
}

impl Display for Notification {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match &self.description {
            None => write!(f, "{}", self.title),
            Some(descr) => write!(f, "{}: {}", self.title, descr),
        }
    }
}



/// See [`notification_channel`]
pub type NotificationSender = tokio::sync::watch::Sender<Option<Notification>>;
/// See [`notification_channel`]
pub type NotificationReceiver = tokio::sync::watch::Receiver<Option<Notification>>;

/// Create a notification channel, that can be used to retrieve the latest notification of a controller
pub fn notification_channel() -> (NotificationSender, NotificationReceiver) {
    tokio::sync::watch::channel(None)
}
