//! Multi-turn dialogue: slot filling, confirmation, session lifecycle
//!
//! One utterance flows normalize -> classify -> machine step -> format; the
//! machine owns the pending slots, the session owns everything around them.

pub mod machine;
pub mod outcome;
pub mod session;

pub use machine::{DialogueMachine, DialogueState};
pub use outcome::TurnOutcome;
pub use session::{Session, SessionReply};
