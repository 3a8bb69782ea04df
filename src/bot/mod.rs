//! Scripted chat assistant
//!
//! A deterministic keyword-to-reply engine plus the conversation state machine
//! that drives the chat widget. The actual rule table lives in [`crate::content`].

pub mod rules;
pub mod session;

pub use rules::{typing_delay, ResponseRule, RuleBook};
pub use session::{ChatSession, ReplyGuard, SessionState};
