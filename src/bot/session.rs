//! Conversation state machine
//!
//! Append-only message log plus the Idle/AwaitingReply cycle. The deferred bot
//! reply runs outside this module; it hands its [`ReplyGuard`] back in, so a
//! reply scheduled before teardown can never mutate a dead session.

use crate::types::message::{Message, Sender};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Where the session is in the submit/reply cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    /// A user message is in and the simulated reply has not landed yet
    AwaitingReply,
}

/// Cancellation flag handed to the deferred reply task
///
/// The chat view cancels it on unmount; [`ChatSession::deliver`] refuses to
/// run under a cancelled guard.
#[derive(Debug, Clone, Default)]
pub struct ReplyGuard(Arc<AtomicBool>);

impl ReplyGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// One chat conversation: messages in insertion order, never deleted
#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<Message>,
    state: SessionState,
}

impl ChatSession {
    /// Start a session seeded with the scripted welcome message
    pub fn new(welcome: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::new(Sender::Bot, welcome)],
            state: SessionState::Idle,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// True while the typing indicator should show
    pub fn is_awaiting_reply(&self) -> bool {
        self.state == SessionState::AwaitingReply
    }

    /// Submit user input
    ///
    /// Blank or whitespace-only input is a no-op. Submission while a reply is
    /// pending is rejected by the state machine itself, not just by the
    /// disabled input. On acceptance the user message is appended, the session
    /// moves to `AwaitingReply`, and the trimmed text is returned so the
    /// caller can schedule the reply.
    pub fn submit(&mut self, text: &str) -> Option<String> {
        let text = text.trim();
        if text.is_empty() || self.state == SessionState::AwaitingReply {
            return None;
        }
        self.messages.push(Message::new(Sender::User, text));
        self.state = SessionState::AwaitingReply;
        Some(text.to_string())
    }

    /// Land the deferred bot reply
    ///
    /// Appends the bot message and returns to `Idle`. Refused without any
    /// mutation when the guard was cancelled or no reply is pending; returns
    /// whether the message was appended.
    pub fn deliver(&mut self, guard: &ReplyGuard, reply: impl Into<String>) -> bool {
        if guard.is_cancelled() || self.state != SessionState::AwaitingReply {
            return false;
        }
        self.messages.push(Message::new(Sender::Bot, reply));
        self.state = SessionState::Idle;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;

    #[test]
    fn test_starts_idle_with_welcome() {
        let session = ChatSession::new(content::WELCOME);
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].sender, Sender::Bot);
    }

    #[test]
    fn test_blank_submission_is_a_no_op() {
        let mut session = ChatSession::new("hi");
        assert!(session.submit("").is_none());
        assert!(session.submit("   ").is_none());
        assert!(session.submit("\n\t").is_none());
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(session.messages().len(), 1);
    }

    #[test]
    fn test_submit_appends_user_message_and_awaits() {
        let mut session = ChatSession::new("hi");
        let accepted = session.submit("  hello  ").unwrap();
        assert_eq!(accepted, "hello");
        assert_eq!(session.state(), SessionState::AwaitingReply);
        let last = session.messages().last().unwrap();
        assert_eq!(last.sender, Sender::User);
        assert_eq!(last.text, "hello");
    }

    #[test]
    fn test_submit_rejected_while_awaiting() {
        let mut session = ChatSession::new("hi");
        session.submit("first").unwrap();
        assert!(session.submit("second").is_none());
        assert_eq!(session.messages().len(), 2);
    }

    #[test]
    fn test_deliver_appends_bot_message_and_idles() {
        let mut session = ChatSession::new("hi");
        let guard = ReplyGuard::new();
        session.submit("hello").unwrap();
        assert!(session.deliver(&guard, "there"));
        assert_eq!(session.state(), SessionState::Idle);
        let last = session.messages().last().unwrap();
        assert_eq!(last.sender, Sender::Bot);
        assert_eq!(last.text, "there");
    }

    #[test]
    fn test_deliver_without_pending_reply_is_refused() {
        let mut session = ChatSession::new("hi");
        let guard = ReplyGuard::new();
        assert!(!session.deliver(&guard, "stray"));
        assert_eq!(session.messages().len(), 1);
    }

    #[test]
    fn test_cancelled_guard_blocks_delivery() {
        let mut session = ChatSession::new("hi");
        let guard = ReplyGuard::new();
        session.submit("hello").unwrap();

        // View torn down while AwaitingReply; the deferred reply then fires
        guard.cancel();
        assert!(!session.deliver(&guard, "too late"));
        assert_eq!(session.messages().len(), 2);
        assert_eq!(session.state(), SessionState::AwaitingReply);
    }

    #[test]
    fn test_greeting_round_trip() {
        let book = content::rule_book();
        let mut session = ChatSession::new(content::WELCOME);
        let guard = ReplyGuard::new();

        let accepted = session.submit("hello").unwrap();
        assert_eq!(session.messages().len(), 2);
        assert_eq!(session.state(), SessionState::AwaitingReply);

        let reply = book.respond(&accepted);
        assert!(session.deliver(&guard, reply));
        assert_eq!(session.messages().len(), 3);
        assert_eq!(session.state(), SessionState::Idle);
        assert!(session.messages().last().unwrap().text.contains("virtual assistant"));
    }
}
