//! Utterance classification into dialogue intents
//!
//! Ordered declarative rules, first match wins. Conversational control
//! phrases (stop, confirm, cancel) outrank transfer parsing so that a bare
//! "sí" or "no" mid-dialogue is never reread as a new transfer attempt.

use crate::core::config::config;
use crate::directory::Directory;
use regex::Regex;
use std::sync::OnceLock;

/// Classified intent for a single utterance.
///
/// Created fresh per utterance and consumed immediately by the dialogue
/// machine. `Transfer` carries whichever slots the utterance yielded; at
/// least one of the two is present, never neither.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    Transfer {
        amount: Option<f64>,
        recipient: Option<String>,
    },
    Confirm,
    Cancel,
    Stop,
    ListContacts,
    Unknown,
}

/// Dialogue slot state the classification rules run under
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassifyContext {
    pub has_pending_transfer: bool,
    pub has_pending_amount: bool,
}

/// Words skipped while scanning for a recipient token. Command verbs, the
/// currency words, and the Spanish prepositions that glue them together.
const RECIPIENT_STOP_WORDS: &[&str] = &[
    "envía", "envia", "manda", "transfer", "lumens", "lumen", "xlm", "a", "para",
];

fn stop_phrases() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^(?:para|detente|stop|adiós|bye|chao|termina)\b")
            .expect("stop phrase pattern")
    })
}

fn affirmative_phrases() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^(?:sí|si|yes|ok|confirma|dale|va|hazlo|claro|adelante)\b")
            .expect("affirmative phrase pattern")
    })
}

fn negative_phrases() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^(?:no|cancela|olvídalo|mejor no|nel)\b")
            .expect("negative phrase pattern")
    })
}

fn listing_words() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)lista|contactos|quiénes|quién").expect("listing word pattern")
    })
}

fn numeral() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+(?:\.\d+)?").expect("numeral pattern"))
}

/// Classify a normalized utterance into an intent.
///
/// Rule order is the contract: stop > confirm > cancel > listing > transfer
/// slot extraction > unknown. Confirm and cancel only fire while a transfer
/// is awaiting confirmation.
pub fn classify(text: &str, ctx: ClassifyContext, directory: &Directory) -> Intent {
    let intent = classify_inner(text, ctx, directory);
    tracing::debug!(
        ?intent,
        pending_transfer = ctx.has_pending_transfer,
        pending_amount = ctx.has_pending_amount,
        "classified utterance"
    );
    intent
}

fn classify_inner(text: &str, ctx: ClassifyContext, directory: &Directory) -> Intent {
    if stop_phrases().is_match(text) {
        return Intent::Stop;
    }

    if ctx.has_pending_transfer && affirmative_phrases().is_match(text) {
        return Intent::Confirm;
    }

    if ctx.has_pending_transfer && negative_phrases().is_match(text) {
        return Intent::Cancel;
    }

    if listing_words().is_match(text) {
        return Intent::ListContacts;
    }

    let amount = extract_amount(text);
    let recipient = find_recipient_token(text, directory);

    if amount.is_some() || recipient.is_some() {
        return Intent::Transfer { amount, recipient };
    }

    Intent::Unknown
}

/// First decimal-or-integer numeral in the utterance. Zero and negative
/// amounts are treated as absent; a pending amount must be positive.
fn extract_amount(text: &str) -> Option<f64> {
    numeral()
        .find(text)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|amount| *amount > 0.0)
}

/// First non-stop-word, non-numeral token long enough to be a name that the
/// resolver can actually resolve. Scanning stops at the first resolvable
/// token; unresolvable tokens are skipped, not fatal.
fn find_recipient_token(text: &str, directory: &Directory) -> Option<String> {
    for token in text.split_whitespace() {
        let lower = token.to_lowercase();
        if RECIPIENT_STOP_WORDS.contains(&lower.as_str()) {
            continue;
        }
        if is_pure_numeral(token) {
            continue;
        }
        if token.chars().count() < config().min_recipient_token_len {
            continue;
        }
        if directory.find_contact(token).is_some() {
            return Some(token.to_string());
        }
    }
    None
}

fn is_pure_numeral(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit() || c == '.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Contact;

    fn directory() -> Directory {
        Directory::new(vec![
            Contact::new("ana@x.com", "ADDR1"),
            Contact::new("bruno@x.com", "ADDR2"),
        ])
    }

    fn ctx_with_pending_transfer() -> ClassifyContext {
        ClassifyContext {
            has_pending_transfer: true,
            has_pending_amount: false,
        }
    }

    #[test]
    fn full_transfer_command_yields_both_slots() {
        let intent = classify("envía 10 lumens a ana", ClassifyContext::default(), &directory());
        assert_eq!(
            intent,
            Intent::Transfer {
                amount: Some(10.0),
                recipient: Some("ana".into())
            }
        );
    }

    #[test]
    fn decimal_amounts_parse() {
        let intent = classify("manda 10.5 a bruno", ClassifyContext::default(), &directory());
        assert_eq!(
            intent,
            Intent::Transfer {
                amount: Some(10.5),
                recipient: Some("bruno".into())
            }
        );
    }

    #[test]
    fn amount_only_command() {
        let intent = classify("manda 20", ClassifyContext::default(), &directory());
        assert_eq!(
            intent,
            Intent::Transfer {
                amount: Some(20.0),
                recipient: None
            }
        );
    }

    #[test]
    fn bare_resolvable_token_is_a_recipient() {
        let intent = classify("anita", ClassifyContext::default(), &directory());
        assert_eq!(
            intent,
            Intent::Transfer {
                amount: None,
                recipient: Some("anita".into())
            }
        );
    }

    #[test]
    fn zero_amount_is_treated_as_absent() {
        let intent = classify("envía 0 a ana", ClassifyContext::default(), &directory());
        assert_eq!(
            intent,
            Intent::Transfer {
                amount: None,
                recipient: Some("ana".into())
            }
        );
    }

    #[test]
    fn short_tokens_are_never_recipients() {
        // "al" is below the token length floor even though fuzzy might bite
        let intent = classify("manda 5 al", ClassifyContext::default(), &directory());
        assert_eq!(
            intent,
            Intent::Transfer {
                amount: Some(5.0),
                recipient: None
            }
        );
    }

    #[test]
    fn unresolvable_tokens_are_skipped_not_fatal() {
        let intent = classify("envía 10 urgente a ana", ClassifyContext::default(), &directory());
        assert_eq!(
            intent,
            Intent::Transfer {
                amount: Some(10.0),
                recipient: Some("ana".into())
            }
        );
    }

    #[test]
    fn stop_phrase_wins_over_everything() {
        let dir = directory();
        assert_eq!(classify("detente", ClassifyContext::default(), &dir), Intent::Stop);
        // even while a transfer awaits confirmation
        assert_eq!(classify("adiós", ctx_with_pending_transfer(), &dir), Intent::Stop);
        // and over a transfer-looking utterance
        assert_eq!(
            classify("stop envía 10 a ana", ClassifyContext::default(), &dir),
            Intent::Stop
        );
    }

    #[test]
    fn affirmative_requires_pending_transfer() {
        let dir = directory();
        assert_eq!(classify("sí", ctx_with_pending_transfer(), &dir), Intent::Confirm);
        assert_eq!(classify("dale", ctx_with_pending_transfer(), &dir), Intent::Confirm);
        // without one, "sí" means nothing
        assert_eq!(classify("sí", ClassifyContext::default(), &dir), Intent::Unknown);
    }

    #[test]
    fn negative_requires_pending_transfer() {
        let dir = directory();
        assert_eq!(classify("no", ctx_with_pending_transfer(), &dir), Intent::Cancel);
        assert_eq!(
            classify("mejor no", ctx_with_pending_transfer(), &dir),
            Intent::Cancel
        );
        assert_eq!(classify("no", ClassifyContext::default(), &dir), Intent::Unknown);
    }

    #[test]
    fn affirmative_must_anchor_at_start() {
        // "va" is affirmative, "vamos" is not
        assert_eq!(
            classify("vamos", ctx_with_pending_transfer(), &directory()),
            Intent::Unknown
        );
    }

    #[test]
    fn listing_request_matches_anywhere() {
        let dir = directory();
        assert_eq!(classify("lista", ClassifyContext::default(), &dir), Intent::ListContacts);
        assert_eq!(
            classify("¿quiénes son mis contactos?", ClassifyContext::default(), &dir),
            Intent::ListContacts
        );
    }

    #[test]
    fn gibberish_is_unknown() {
        assert_eq!(
            classify("xyzzy plugh", ClassifyContext::default(), &directory()),
            Intent::Unknown
        );
        assert_eq!(classify("", ClassifyContext::default(), &directory()), Intent::Unknown);
    }
}
