//! Console formatting for room display.

use colored::Colorize;
use tale_core::Room;

/// Maximum line length for wrapped output.
pub const DISPLAY_WIDTH: usize = 80;

/// Character used for divider lines.
const DIVIDER_CHAR: char = '-';

/// A divider line of [`DISPLAY_WIDTH`] characters.
pub fn divider() -> String {
    DIVIDER_CHAR.to_string().repeat(DISPLAY_WIDTH)
}

/// Wrap text to lines of at most `width` characters.
///
/// A newline in the input resets the line. At the limit, a whitespace
/// character becomes a line break; a non-alphanumeric character is printed
/// and then broken after; a mid-word break is hyphenated unless the
/// preceding character was whitespace, in which case the word moves to the
/// next line whole.
pub fn wrap(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / width.max(1));
    let mut column = 0usize;
    let mut prev = '\0';

    for ch in text.chars() {
        if ch == '\n' {
            out.push('\n');
            column = 0;
            prev = ch;
            continue;
        }

        if column + 1 >= width {
            if ch.is_whitespace() {
                out.push('\n');
                column = 0;
            } else if !ch.is_alphanumeric() {
                out.push(ch);
                out.push('\n');
                column = 0;
            } else if prev.is_whitespace() {
                out.push('\n');
                out.push(ch);
                column = 1;
            } else {
                out.push('-');
                out.push('\n');
                out.push(ch);
                column = 1;
            }
        } else {
            out.push(ch);
            column += 1;
        }
        prev = ch;
    }

    out
}

/// Print a room's title and description between divider lines.
pub fn print_room(room: &Room) {
    println!("{}", divider());
    if room.title.is_empty() {
        println!();
    } else {
        println!("{}", wrap(&room.title, DISPLAY_WIDTH).bold());
    }
    println!();
    if room.description.is_empty() {
        println!();
    } else {
        println!("{}", wrap(&room.description, DISPLAY_WIDTH));
    }
    println!("{}", divider());
}
