//! Voicepay - Conversational Command Interpreter
//!
//! Turns transcribed speech like "envía 10 lumens a ana" into a confirmed,
//! executable payment instruction through a multi-turn dialogue:
//! text normalization -> intent classification -> dialogue state machine ->
//! locale formatting. Speech capture, playback, the directory service, and
//! payment execution live outside this crate behind the [`dialogue::Session`]
//! seams.

pub mod core;
pub mod dialogue;
pub mod directory;
pub mod intent;
pub mod speech;
pub mod text;
