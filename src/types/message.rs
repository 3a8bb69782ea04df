//! Message types
//!
//! Defines chat message structures and senders.

use chrono::{DateTime, Local};
use uuid::Uuid;

/// Who authored a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    /// Message typed by the visitor
    User,
    /// Scripted reply from the assistant
    Bot,
}

/// A single chat message
///
/// Immutable once created; the session only ever appends.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    /// Unique message id
    pub id: Uuid,
    /// The message text
    pub text: String,
    /// Who sent it
    pub sender: Sender,
    /// When the message was created
    pub timestamp: DateTime<Local>,
}

impl Message {
    /// Create a new message stamped with the current time
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            sender,
            timestamp: Local::now(),
        }
    }

    /// Clock-face time shown next to the bubble
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_creation() {
        let msg = Message::new(Sender::User, "Hello, world!");
        assert_eq!(msg.sender, Sender::User);
        assert_eq!(msg.text, "Hello, world!");
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Message::new(Sender::Bot, "a");
        let b = Message::new(Sender::Bot, "b");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_time_label_is_clock_face() {
        let label = Message::new(Sender::User, "hi").time_label();
        assert_eq!(label.len(), 5);
        assert_eq!(&label[2..3], ":");
    }
}
