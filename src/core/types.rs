//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// A directory entry: the handle a user speaks plus the payment address
/// behind it.
///
/// Contacts arrive as a snapshot from the external directory service and are
/// replaced wholesale; the interpreter only ever reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub handle: String,
    pub address: String,
}

impl Contact {
    pub fn new(handle: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            address: address.into(),
        }
    }

    /// Handle portion before any `@`, the part people actually say out loud
    pub fn local_part(&self) -> &str {
        match self.handle.find('@') {
            Some(idx) => &self.handle[..idx],
            None => &self.handle,
        }
    }
}

/// The fully-resolved, user-confirmed transfer payload handed to the
/// external payment-execution collaborator.
///
/// Only ever produced out of an explicit confirmation; the interpreter never
/// synthesizes one from a single utterance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferInstruction {
    pub amount: f64,
    pub recipient_handle: String,
    pub recipient_address: String,
}

/// What the surrounding system should currently be doing.
///
/// Drives external presentation (microphone state, status indicator). Carries
/// no dialogue semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConversationPhase {
    Idle,
    Listening,
    Processing,
    Speaking,
}
