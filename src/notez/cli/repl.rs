//! The session loop: read a line, split it into words, parse it with clap,
//! run it, print the result. A failing command prints its error and the
//! session carries on; only `quit`, end of input or a broken output stops it.

use super::handlers::{handle, Flow};
use super::render::render_messages;
use super::setup::SessionLine;
use clap::Parser;
use notez::api::{CmdMessage, NotezApi};
use notez::clipboard::Clipboard;
use notez::clock::Clock;
use notez::error::{NotezError, Result};
use notez::ids::IdGenerator;
use std::io::{BufRead, Write};
use tracing::debug;

pub struct SessionOptions {
    /// Print a prompt before each line (interactive terminals only)
    pub prompt: bool,
    pub use_color: bool,
}

pub fn run_session<C, G, K, R, W>(
    api: &mut NotezApi<C, G, K>,
    mut input: R,
    out: &mut W,
    options: &SessionOptions,
) -> Result<()>
where
    C: Clock,
    G: IdGenerator,
    K: Clipboard,
    R: BufRead,
    W: Write,
{
    let mut line = String::new();
    loop {
        if options.prompt {
            write!(out, "{}", prompt(api))?;
            out.flush()?;
        }

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let words = match split_words(trimmed) {
            Ok(words) => words,
            Err(e) => {
                report(out, &e, options.use_color)?;
                continue;
            }
        };

        let command = match SessionLine::try_parse_from(&words) {
            Ok(parsed) => parsed.command,
            Err(e) => {
                // Covers `help` and `<command> --help` as well as parse errors
                write!(out, "{}", e.render())?;
                continue;
            }
        };
        debug!(?command, "session command");

        match handle(api, command, out, options.use_color) {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(e @ NotezError::Io(_)) => return Err(e),
            Err(e) => report(out, &e.to_string(), options.use_color)?,
        }
    }
    out.flush()?;
    Ok(())
}

fn prompt<C: Clock, G: IdGenerator, K: Clipboard>(api: &NotezApi<C, G, K>) -> String {
    match api.editing() {
        Some(dn) => format!("notez [editing {}]> ", dn.index),
        None => "notez> ".to_string(),
    }
}

fn report<W: Write>(out: &mut W, message: &str, use_color: bool) -> Result<()> {
    let rendered = render_messages(&[CmdMessage::error(format!("Error: {}", message))], use_color);
    write!(out, "{}", rendered)?;
    Ok(())
}

/// Splits a session line into words. Single quotes keep text literally,
/// double quotes allow `\"` and `\\` escapes, and a backslash outside quotes
/// escapes the next character.
pub fn split_words(line: &str) -> std::result::Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            '\'' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('\'') => break,
                        Some(ch) => current.push(ch),
                        None => return Err("Unterminated single quote".to_string()),
                    }
                }
            }
            '"' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            Some(ch @ ('"' | '\\')) => current.push(ch),
                            Some('n') => current.push('\n'),
                            Some(ch) => {
                                current.push('\\');
                                current.push(ch);
                            }
                            None => return Err("Unterminated double quote".to_string()),
                        },
                        Some(ch) => current.push(ch),
                        None => return Err("Unterminated double quote".to_string()),
                    }
                }
            }
            '\\' => {
                in_word = true;
                match chars.next() {
                    Some(ch) => current.push(ch),
                    None => return Err("Trailing backslash".to_string()),
                }
            }
            c if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            c => {
                in_word = true;
                current.push(c);
            }
        }
    }

    if in_word {
        words.push(current);
    }
    Ok(words)
}
