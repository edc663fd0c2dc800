//! Line-oriented front end that drives a [`Session`] like a keypad.

use crate::calculator::{copy_to_clipboard, looks_like_expression};
use crate::session::Session;
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::warn;

/// One parsed line of REPL input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Append the text and evaluate the whole buffer.
    Evaluate(String),
    /// Append the text without evaluating (`+<text>`).
    Append(String),
    /// Evaluate the current buffer (`=`).
    Equals,
    Backspace,
    Clear,
    MemoryStore,
    MemoryRecall,
    History,
    Copy,
    Help,
    Exit,
    Empty,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let input = line.trim();

        match input {
            "" => Self::Empty,
            "=" => Self::Equals,
            "del" => Self::Backspace,
            "c" => Self::Clear,
            "ms" => Self::MemoryStore,
            "mr" => Self::MemoryRecall,
            "history" => Self::History,
            "copy" => Self::Copy,
            "help" => Self::Help,
            "exit" | "quit" => Self::Exit,
            _ => {
                if let Some(text) = input.strip_prefix('+')
                    && !text.is_empty()
                {
                    return Self::Append(text.to_string());
                }
                if looks_like_expression(input) {
                    Self::Evaluate(input.to_string())
                } else if input.chars().all(|c| c.is_ascii_digit() || c == '.') {
                    // A bare number is a digit button press
                    Self::Append(input.to_string())
                } else {
                    Self::Unknown(input.to_string())
                }
            }
        }
    }
}

/// Read commands from `input` until EOF or `exit`, writing responses to `output`.
pub fn run<R: BufRead, W: Write>(session: &mut Session, input: R, mut output: W) -> Result<()> {
    for line in input.lines() {
        let line = line?;

        match Command::parse(&line) {
            Command::Exit => break,
            Command::Empty => {}
            Command::Evaluate(text) => {
                session.append(&text);
                let result = session.evaluate();
                writeln!(output, "= {}", session.display())?;
                if !result.is_success() {
                    writeln!(output, "  ({})", result.display())?;
                }
            }
            Command::Equals => {
                session.evaluate();
                writeln!(output, "= {}", session.display())?;
            }
            Command::Append(text) => {
                session.append(&text);
                writeln!(output, "{}", session.input())?;
            }
            Command::Backspace => {
                session.backspace();
                writeln!(output, "{}", session.input())?;
            }
            Command::Clear => session.clear(),
            Command::MemoryStore => match session.store_display() {
                Ok(value) => writeln!(output, "M = {}", value)?,
                Err(err) => writeln!(output, "= {}  ({})", session.display(), err)?,
            },
            Command::MemoryRecall => {
                session.recall_into_input();
                writeln!(output, "{}", session.input())?;
            }
            Command::History => {
                if !session.history_entries().is_empty() {
                    writeln!(output, "{}", session.history_text())?;
                }
            }
            Command::Copy => {
                if let Err(err) = copy_to_clipboard(session.display()) {
                    warn!("{:#}", err);
                    writeln!(output, "copy failed: {:#}", err)?;
                }
            }
            Command::Help => show_help(&mut output)?,
            Command::Unknown(text) => {
                writeln!(output, "unknown input '{}', type 'help' for help", text)?;
            }
        }
        output.flush()?;
    }

    Ok(())
}

fn show_help<W: Write>(output: &mut W) -> Result<()> {
    writeln!(output, "Expressions: numbers, + - x / ^, parentheses")?;
    writeln!(output, "Functions (degrees): sin cos tan cot sec csc log sqrt")?;
    writeln!(output, "Commands:")?;
    writeln!(output, "  +<text>   append to the input without evaluating")?;
    writeln!(output, "  =         evaluate the input")?;
    writeln!(output, "  del       remove the last character")?;
    writeln!(output, "  c         clear input and display")?;
    writeln!(output, "  ms / mr   store display in memory / recall memory")?;
    writeln!(output, "  history   show past calculations")?;
    writeln!(output, "  copy      copy the display to the clipboard")?;
    writeln!(output, "  exit      quit")?;
    Ok(())
}
