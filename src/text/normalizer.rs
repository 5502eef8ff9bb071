//! Spoken-text normalization
//!
//! Recognizers spell punctuation out loud: "juan arroba test punto com".
//! This pass canonicalizes those words into symbols and cleans up whitespace
//! before any command matching runs. Pure and total; unrecognized input
//! passes through untouched apart from the whitespace collapse.

use regex::Regex;
use std::sync::OnceLock;

/// Spoken punctuation words, matched as whole words flanked by whitespace.
/// The flanking whitespace is consumed so "juan arroba test" becomes
/// "juan@test".
fn symbol_words() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\s+(arroba|at|punto|dot)\s+").expect("symbol word pattern")
    })
}

fn whitespace_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern"))
}

/// Canonicalize spoken punctuation and collapse whitespace
pub fn normalize(raw: &str) -> String {
    let replaced = symbol_words().replace_all(raw, |caps: &regex::Captures| {
        match caps[1].to_lowercase().as_str() {
            "arroba" | "at" => "@",
            _ => ".",
        }
    });

    whitespace_runs()
        .replace_all(replaced.trim(), " ")
        .into_owned()
}
