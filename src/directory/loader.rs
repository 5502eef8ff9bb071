//! Contact file loading for the session binary
//!
//! The directory service hands the interpreter handle/address pairs; for the
//! standalone binary the same shape is read from a JSON file.

use crate::core::error::{Result, VoicepayError};
use crate::core::types::Contact;
use std::path::Path;

/// Load a directory snapshot from a JSON array of contacts
pub fn load_contacts(path: &Path) -> Result<Vec<Contact>> {
    let raw = std::fs::read_to_string(path)?;
    let contacts: Vec<Contact> = serde_json::from_str(&raw).map_err(|e| {
        VoicepayError::ContactFile(format!("{}: {}", path.display(), e))
    })?;
    Ok(contacts)
}
