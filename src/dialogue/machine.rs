//! Dialogue state machine
//!
//! Tracks the pending slots across turns and decides when enough information
//! has been confirmed to hand a transfer off. The machine performs no
//! network or cryptographic work; the finalized instruction is its only
//! externally consequential output, and it is emitted exclusively from an
//! explicit confirmation.

use crate::core::config::config;
use crate::core::types::{Contact, TransferInstruction};
use crate::dialogue::outcome::TurnOutcome;
use crate::directory::Directory;
use crate::intent::Intent;

/// Dialogue slot state.
///
/// A single enum keeps the pending amount and the pending transfer mutually
/// exclusive by construction: there is no representable state holding both.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DialogueState {
    #[default]
    Idle,
    /// An amount was captured and awaits a recipient
    AwaitingRecipient { amount: f64 },
    /// A fully-resolved transfer awaits explicit yes/no confirmation
    AwaitingConfirmation { amount: f64, contact: Contact },
}

/// Consumes classified intents and resolver results, emitting one outcome
/// per turn
#[derive(Debug, Default)]
pub struct DialogueMachine {
    state: DialogueState,
}

impl DialogueMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DialogueState {
        &self.state
    }

    pub fn has_pending_transfer(&self) -> bool {
        matches!(self.state, DialogueState::AwaitingConfirmation { .. })
    }

    pub fn has_pending_amount(&self) -> bool {
        matches!(self.state, DialogueState::AwaitingRecipient { .. })
    }

    /// Return to `Idle`, discarding any pending slots
    pub fn reset(&mut self) {
        self.state = DialogueState::Idle;
    }

    /// Advance the dialogue by one intent
    pub fn step(&mut self, intent: Intent, directory: &Directory) -> TurnOutcome {
        tracing::debug!(state = ?self.state, ?intent, "dialogue step");

        match intent {
            Intent::Stop => {
                self.state = DialogueState::Idle;
                TurnOutcome::Farewell
            }

            Intent::Confirm => match std::mem::take(&mut self.state) {
                DialogueState::AwaitingConfirmation { amount, contact } => {
                    tracing::info!(amount, handle = %contact.handle, "transfer confirmed");
                    TurnOutcome::Finalized {
                        instruction: TransferInstruction {
                            amount,
                            recipient_handle: contact.handle,
                            recipient_address: contact.address,
                        },
                    }
                }
                // classifier only emits Confirm with a pending transfer, but
                // stay total anyway
                other => {
                    self.state = other;
                    TurnOutcome::Unrecognized
                }
            },

            Intent::Cancel => match self.state {
                DialogueState::AwaitingConfirmation { .. } => {
                    self.state = DialogueState::Idle;
                    TurnOutcome::Cancelled
                }
                _ => TurnOutcome::Unrecognized,
            },

            Intent::ListContacts => TurnOutcome::ContactList {
                handles: directory.handles(config().max_listed_contacts),
            },

            Intent::Transfer { amount, recipient } => {
                self.step_transfer(amount, recipient, directory)
            }

            Intent::Unknown => self.step_unresolved(directory),
        }
    }

    /// Externally-reported payment result. Clears any pending slot so the
    /// dialogue can never get stuck re-confirming a transfer the caller
    /// already attempted.
    pub fn payment_settled(&mut self, ok: bool, detail: &str) -> TurnOutcome {
        self.state = DialogueState::Idle;
        TurnOutcome::PaymentSettled {
            ok,
            detail: detail.to_string(),
        }
    }

    fn step_transfer(
        &mut self,
        amount: Option<f64>,
        recipient: Option<String>,
        directory: &Directory,
    ) -> TurnOutcome {
        let contact = recipient
            .as_deref()
            .and_then(|token| directory.find_contact(token))
            .cloned();

        // While a recipient is awaited, a resolved token completes the
        // pending transfer; the pending amount wins over any restated one.
        if let DialogueState::AwaitingRecipient { amount: pending } = self.state {
            return match contact {
                Some(contact) => {
                    let handle = contact.handle.clone();
                    self.state = DialogueState::AwaitingConfirmation {
                        amount: pending,
                        contact,
                    };
                    TurnOutcome::ConfirmRequest {
                        amount: pending,
                        handle,
                    }
                }
                None => self.recipient_retry(pending, directory),
            };
        }

        match (amount, contact) {
            (Some(amount), Some(contact)) => {
                let handle = contact.handle.clone();
                self.state = DialogueState::AwaitingConfirmation { amount, contact };
                TurnOutcome::ConfirmRequest { amount, handle }
            }
            (Some(amount), None) => {
                self.state = DialogueState::AwaitingRecipient { amount };
                TurnOutcome::AskRecipient { amount }
            }
            // Recipient without amount: ask for the amount but do not retain
            // the contact; it must be restated together with the amount.
            (None, Some(contact)) => TurnOutcome::AskAmount {
                handle: contact.handle,
            },
            (None, None) => self.step_unresolved(directory),
        }
    }

    fn step_unresolved(&self, directory: &Directory) -> TurnOutcome {
        match self.state {
            DialogueState::AwaitingRecipient { amount } => {
                self.recipient_retry(amount, directory)
            }
            _ => TurnOutcome::Unrecognized,
        }
    }

    fn recipient_retry(&self, amount: f64, directory: &Directory) -> TurnOutcome {
        TurnOutcome::RecipientRetry {
            amount,
            sample: directory.handles(config().max_listed_contacts),
        }
    }
}
