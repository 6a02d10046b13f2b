//! Deskbot is a terminal-first customer-support chatbot.
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`core`] owns the domain logic: text normalization, the ordered intent
//!   rule table, order-ID extraction, fuzzy FAQ matching, session state, and
//!   the response dispatcher.
//! - [`ui`] runs the line-oriented interactive chat loop that drives user
//!   input and prints replies.
//! - [`utils`] holds the transcript store adapter that mirrors every
//!   exchange to an append-only CSV file.
//!
//! Runtime entrypoints live in the binary crate (`src/main.rs`) and route
//! through [`crate::cli::main`], which parses arguments, constructs a
//! [`core::bot::Chatbot`], and hands it to [`ui::run_chat`] for the
//! interactive session.

pub mod cli;
pub mod core;
pub mod ui;
pub mod utils;
