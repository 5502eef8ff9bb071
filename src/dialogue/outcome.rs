//! Per-turn dialogue outcomes
//!
//! What the machine decided on a turn, independent of how any locale phrases
//! it. The formatter renders these; the session loop inspects them for the
//! finalized instruction and the end-of-session signal.

use crate::core::types::TransferInstruction;

/// Abstract result of one dialogue turn
#[derive(Debug, Clone, PartialEq)]
pub enum TurnOutcome {
    /// Both slots filled; ask the user to confirm the proposed transfer
    ConfirmRequest { amount: f64, handle: String },

    /// Amount captured, recipient still missing
    AskRecipient { amount: f64 },

    /// A recipient resolved but no amount was given. The resolved contact is
    /// not retained; the recipient must be restated once an amount arrives.
    AskAmount { handle: String },

    /// Recipient still unresolved while an amount is pending; restate the
    /// amount with a sample of the directory
    RecipientRetry { amount: f64, sample: Vec<String> },

    /// Confirmed transfer, ready for the payment collaborator
    Finalized { instruction: TransferInstruction },

    /// Pending transfer dropped on user request
    Cancelled,

    /// Session-ending farewell; all pending slots discarded
    Farewell,

    /// Spoken listing of directory handles (possibly empty)
    ContactList { handles: Vec<String> },

    /// Unrecognized utterance; offer an example command
    Unrecognized,

    /// Relay of an externally-reported payment result
    PaymentSettled { ok: bool, detail: String },
}

impl TurnOutcome {
    /// The finalized instruction, when this turn produced one
    pub fn instruction(&self) -> Option<&TransferInstruction> {
        match self {
            TurnOutcome::Finalized { instruction } => Some(instruction),
            _ => None,
        }
    }

    /// Whether this turn ends the session
    pub fn ends_session(&self) -> bool {
        matches!(self, TurnOutcome::Farewell)
    }
}
