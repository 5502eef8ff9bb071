//! Directory snapshot and contact resolution

pub mod loader;
pub mod resolver;

pub use loader::load_contacts;
pub use resolver::{fuzzy_score, Directory, MatchReason};
