//! Session object owning one conversation
//!
//! The session is explicit state the caller owns and passes around, so
//! multiple independent conversations can run side by side and unit tests
//! need no ambient setup. It wires the per-utterance pipeline together:
//! normalize, classify, step the machine, format the reply.

use crate::core::types::{Contact, ConversationPhase, TransferInstruction};
use crate::dialogue::machine::{DialogueMachine, DialogueState};
use crate::dialogue::outcome::TurnOutcome;
use crate::directory::Directory;
use crate::intent::{classify, ClassifyContext};
use crate::speech::{ResponseFormatter, SpanishFormatter};
use crate::text::normalize;

/// Reply for one utterance: the text to speak, the instruction to execute
/// when the turn finalized one, and whether the session ended.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionReply {
    pub utterance: String,
    pub instruction: Option<TransferInstruction>,
    pub ended: bool,
}

/// One voice conversation: dialogue machine, directory snapshot, locale
/// formatter, and the presentation phase
pub struct Session {
    machine: DialogueMachine,
    directory: Directory,
    formatter: Box<dyn ResponseFormatter>,
    phase: ConversationPhase,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Box::new(SpanishFormatter))
    }
}

impl Session {
    pub fn new(formatter: Box<dyn ResponseFormatter>) -> Self {
        Self {
            machine: DialogueMachine::new(),
            directory: Directory::default(),
            formatter,
            phase: ConversationPhase::Idle,
        }
    }

    /// Replace the directory snapshot atomically; callable at any time
    pub fn set_directory(&mut self, contacts: Vec<Contact>) {
        tracing::debug!(count = contacts.len(), "directory snapshot replaced");
        self.directory.replace(contacts);
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// Current dialogue slot state
    pub fn state(&self) -> &DialogueState {
        self.machine.state()
    }

    /// What the surrounding system should be doing right now
    pub fn phase(&self) -> ConversationPhase {
        self.phase
    }

    /// Begin (or restart) the conversation: slots cleared, ready to listen
    pub fn start(&mut self) {
        self.machine.reset();
        self.phase = ConversationPhase::Listening;
    }

    /// End the conversation: slots cleared, back to idle
    pub fn stop(&mut self) {
        self.machine.reset();
        self.phase = ConversationPhase::Idle;
    }

    /// Called by the playback collaborator once the reply finished playing
    pub fn resume_listening(&mut self) {
        if self.phase == ConversationPhase::Speaking {
            self.phase = ConversationPhase::Listening;
        }
    }

    /// Process one completed utterance end to end
    pub fn on_utterance(&mut self, raw: &str) -> SessionReply {
        self.phase = ConversationPhase::Processing;

        let text = normalize(raw);
        let ctx = ClassifyContext {
            has_pending_transfer: self.machine.has_pending_transfer(),
            has_pending_amount: self.machine.has_pending_amount(),
        };
        let intent = classify(&text, ctx, &self.directory);
        let outcome = self.machine.step(intent, &self.directory);

        let instruction = outcome.instruction().cloned();
        let ended = outcome.ends_session();
        let utterance = self.formatter.render(&outcome);

        self.phase = if ended {
            ConversationPhase::Idle
        } else {
            ConversationPhase::Speaking
        };

        tracing::info!(heard = %text, reply = %utterance, ended, "turn complete");

        SessionReply {
            utterance,
            instruction,
            ended,
        }
    }

    /// Relay an externally-reported payment result; clears pending slots so
    /// the caller's attempt can never be re-confirmed
    pub fn payment_settled(&mut self, ok: bool, detail: &str) -> String {
        let outcome = self.machine.payment_settled(ok, detail);
        self.formatter.render(&outcome)
    }
}
