//! Contact resolution against the directory snapshot
//!
//! Matches a spoken token to a contact in strict precedence order: exact
//! handle, then the handle's local-part, then a fuzzy score over local-parts.
//! Resolution never fails; an unresolvable token is `None` and the dialogue
//! decides what to ask next.

use crate::core::config::config;
use crate::core::types::Contact;

/// Why a contact matched, in precedence order
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchReason {
    ExactHandle,
    LocalPart,
    Fuzzy { score: f64 },
}

/// The contact list as known to the interpreter at a given moment.
///
/// Replaced wholesale via [`Directory::replace`], never patched. An empty
/// directory degrades listing and resolution to "no match" instead of
/// failing.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    contacts: Vec<Contact>,
}

impl Directory {
    pub fn new(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }

    /// Swap in a fresh snapshot from the directory service
    pub fn replace(&mut self, contacts: Vec<Contact>) {
        self.contacts = contacts;
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// First `limit` handles, for spoken listings and re-prompt samples
    pub fn handles(&self, limit: usize) -> Vec<String> {
        self.contacts
            .iter()
            .take(limit)
            .map(|c| c.handle.clone())
            .collect()
    }

    /// Resolve a free-text token to a contact, if any matches
    pub fn find_contact(&self, query: &str) -> Option<&Contact> {
        self.find_contact_with_reason(query).map(|(c, _)| c)
    }

    /// Resolve a token, reporting which precedence tier matched.
    ///
    /// Precedence is strict: an exact handle match always outranks a
    /// local-part match, which always outranks any fuzzy score.
    pub fn find_contact_with_reason(&self, query: &str) -> Option<(&Contact, MatchReason)> {
        let sanitized = sanitize(query);
        if sanitized.is_empty() {
            return None;
        }

        for contact in &self.contacts {
            if contact.handle.to_lowercase() == sanitized {
                return Some((contact, MatchReason::ExactHandle));
            }
        }

        for contact in &self.contacts {
            if contact.local_part().to_lowercase() == sanitized {
                return Some((contact, MatchReason::LocalPart));
            }
        }

        // Fuzzy tier: best score above threshold, ties to directory order
        let mut best: Option<(&Contact, f64)> = None;
        for contact in &self.contacts {
            let score = fuzzy_score(&sanitized, contact.local_part());
            if score > config().fuzzy_threshold
                && best.map_or(true, |(_, b)| score > b)
            {
                best = Some((contact, score));
            }
        }

        best.map(|(c, score)| (c, MatchReason::Fuzzy { score }))
    }
}

/// Strip a token down to the characters that can appear in a handle
fn sanitize(query: &str) -> String {
    query
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '@' || *c == '.')
        .collect::<String>()
        .to_lowercase()
}

/// Containment-biased similarity between a spoken token and a candidate
/// local-part, in [0.0, 1.0].
///
/// Both sides are stripped to lowercase alphanumerics. If either fully
/// contains the other the score is 1.0; otherwise it is the fraction of the
/// query's characters (duplicates counted) that appear anywhere in the
/// candidate. This is a deliberately cheap heuristic tuned for misheard
/// names, not a stand-in for edit distance: "anita" scores 0.6 against "ana"
/// because recognizers mangle endings far more often than beginnings.
pub fn fuzzy_score(query: &str, candidate: &str) -> f64 {
    let q: String = query
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect::<String>()
        .to_lowercase();
    let c: String = candidate
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect::<String>()
        .to_lowercase();

    if q.is_empty() || c.is_empty() {
        return 0.0;
    }

    if q.contains(&c) || c.contains(&q) {
        return 1.0;
    }

    let found = q.chars().filter(|ch| c.contains(*ch)).count();
    found as f64 / q.chars().count().max(1) as f64
}
