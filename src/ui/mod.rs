//! Line-oriented interactive chat loop.
//!
//! Deliberately thin: a banner, a `You:` prompt per turn, and plain
//! printed replies. All conversational behavior lives in
//! [`crate::core::bot::Chatbot`]; this layer only shuttles lines in and
//! out and supplies the stdin-backed name prompt.

use std::error::Error;
use std::io::{self, BufRead, Write};

use crate::core::bot::{Chatbot, NamePrompt};
use crate::core::session::Speaker;

/// Stdin-backed [`NamePrompt`] used during interactive sessions.
struct TerminalNamePrompt;

impl NamePrompt for TerminalNamePrompt {
    fn ask_name(&mut self) -> io::Result<String> {
        print!("🤖 May I know your name? ");
        io::stdout().flush()?;
        let mut name = String::new();
        io::stdin().lock().read_line(&mut name)?;
        Ok(name.trim().to_string())
    }
}

/// Runs the interactive session until farewell or end-of-input.
///
/// The opening bot utterance is produced by dispatching an implicit
/// `"hello"` before the loop starts; like the prompt echo itself, it is
/// not logged as a bot turn. Replies inside the loop are logged after
/// printing, so the store follows conversational order.
pub fn run_chat(bot: &mut Chatbot) -> Result<(), Box<dyn Error>> {
    println!("💬 Customer Support Chatbot 🤖");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let mut names = TerminalNamePrompt;
    let opening = bot.respond("hello", &mut names)?;
    println!("{}", opening.text);

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("\nYou: ");
        io::stdout().flush()?;

        line.clear();
        // End-of-input is normal termination; everything appended so far
        // is already durable.
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim_end_matches(['\n', '\r']);

        let reply = bot.respond(input, &mut names)?;
        println!("{}", reply.text);
        bot.log(Speaker::Bot, &reply.text)?;

        if reply.end_session {
            break;
        }
    }

    Ok(())
}
