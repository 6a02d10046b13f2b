//! Command-line interface parsing and startup.

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use tracing::debug;

use crate::core::bot::Chatbot;
use crate::ui::run_chat;

#[derive(Parser)]
#[command(name = "deskbot")]
#[command(about = "A terminal-based customer support chatbot")]
#[command(
    long_about = "Deskbot is a terminal customer-support chatbot. It classifies each message \
with a fixed table of regex intent rules, answers order-status queries for \
ORD/ORDER references, and falls back to fuzzy matching against a small FAQ \
when nothing else applies. Every exchange is appended to a CSV transcript.\n\n\
Environment Variables:\n\
  RUST_LOG          Diagnostic log filter (e.g. RUST_LOG=deskbot=debug)\n\n\
Controls:\n\
  Type              Enter your message at the You: prompt\n\
  bye/goodbye/quit  End the session\n\
  Ctrl+D            End the session (end of input)"
)]
pub struct Args {
    /// Company name used in greetings and the about reply
    #[arg(short, long, default_value = "Acme")]
    pub company: String,

    /// CSV file the transcript is appended to
    #[arg(short, long, value_name = "FILE", default_value = "chat_logs.csv")]
    pub transcript: PathBuf,
}

pub fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    debug!(company = %args.company, transcript = %args.transcript.display(), "starting session");

    let mut bot = Chatbot::new(args.company, args.transcript);
    run_chat(&mut bot)
}
