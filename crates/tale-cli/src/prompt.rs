//! Line-oriented prompt helpers for the play loop.
//!
//! Each prompt reads whole lines and re-asks until the input is valid. EOF
//! is surfaced as `None` so the caller can wind the session down instead of
//! spinning.

use std::io::{self, BufRead, Write};

/// What the player asked for at a choice prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptAction {
    /// A choice index, already validated against the number of choices.
    Choice(usize),
    /// Leave the adventure.
    Quit,
    /// Save a bookmark and stop.
    Bookmark,
}

fn show(prompt: &str) -> io::Result<()> {
    print!("{prompt}");
    io::stdout().flush()
}

fn read_trimmed(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompt for a choice index below `limit`, or one of the sentinel actions:
/// `q` to quit, `b` to bookmark. Re-prompts on anything else; `None` on EOF.
pub fn prompt_choice(
    input: &mut impl BufRead,
    prompt: &str,
    limit: usize,
) -> io::Result<Option<PromptAction>> {
    loop {
        show(prompt)?;
        let Some(line) = read_trimmed(input)? else {
            return Ok(None);
        };
        match line.as_str() {
            "q" => return Ok(Some(PromptAction::Quit)),
            "b" => return Ok(Some(PromptAction::Bookmark)),
            other => match other.parse::<usize>() {
                Ok(index) if index < limit => return Ok(Some(PromptAction::Choice(index))),
                _ => println!("Invalid value."),
            },
        }
    }
}

/// Prompt for a single character: the first non-whitespace character of the
/// line, lowercased. Re-prompts on empty lines; `None` on EOF.
pub fn prompt_char(input: &mut impl BufRead, prompt: &str) -> io::Result<Option<char>> {
    loop {
        show(prompt)?;
        let Some(line) = read_trimmed(input)? else {
            return Ok(None);
        };
        if let Some(ch) = line.chars().next() {
            return Ok(Some(ch.to_ascii_lowercase()));
        }
    }
}

/// Prompt for a trimmed line of text. `None` on EOF.
pub fn prompt_string(input: &mut impl BufRead, prompt: &str) -> io::Result<Option<String>> {
    show(prompt)?;
    read_trimmed(input)
}
