//! Voicepay - Entry Point
//!
//! Runs one interactive session over stdin: each line stands in for a
//! completed utterance from the speech-capture collaborator, replies go to
//! stdout in place of speech playback, and finalized instructions are
//! printed as JSON for the payment collaborator to pick up.

use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;

use voicepay::core::config::config;
use voicepay::core::error::{Result, VoicepayError};
use voicepay::core::types::Contact;
use voicepay::dialogue::Session;
use voicepay::directory::load_contacts;
use voicepay::speech::{EnglishFormatter, ResponseFormatter, SpanishFormatter};

#[derive(Parser, Debug)]
#[command(name = "voicepay", about = "Voice-driven payment command interpreter")]
struct Args {
    /// JSON file with [{"handle": "...", "address": "..."}] entries;
    /// a small demo directory is used when omitted
    #[arg(long)]
    contacts: Option<PathBuf>,

    /// Reply locale: "es" or "en"
    #[arg(long, default_value = "es")]
    locale: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "voicepay=info".into()),
        )
        .init();

    let args = Args::parse();
    config().validate().map_err(VoicepayError::InvalidConfig)?;

    let contacts = match &args.contacts {
        Some(path) => load_contacts(path)?,
        None => demo_contacts(),
    };
    tracing::info!(count = contacts.len(), "directory loaded");

    let formatter: Box<dyn ResponseFormatter> = match args.locale.as_str() {
        "en" => Box::new(EnglishFormatter),
        _ => Box::new(SpanishFormatter),
    };

    let mut session = Session::new(formatter);
    session.set_directory(contacts);
    session.start();

    println!("\n=== VOICEPAY ===");
    println!("Type one utterance per line, e.g.:");
    println!("  envía 10 lumens a ana");
    println!("  manda 20");
    println!("  lista");
    println!("Say \"adiós\" (or \"stop\") to end the session.");
    println!();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let reply = session.on_utterance(line);
        println!("{}", reply.utterance);

        if let Some(instruction) = &reply.instruction {
            println!("payment -> {}", serde_json::to_string(instruction)?);
        }

        if reply.ended {
            break;
        }
        session.resume_listening();
    }

    session.stop();
    Ok(())
}

fn demo_contacts() -> Vec<Contact> {
    vec![
        Contact::new("ana@example.com", "GDEMOANA7XQ4RLMJZT2K"),
        Contact::new("bruno@example.com", "GDEMOBRUNO3WF8YHN5PC"),
        Contact::new("carla@example.com", "GDEMOCARLA9VD6KSB4XE"),
    ]
}
