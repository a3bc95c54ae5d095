//! Terminal rendering of parse errors.
//!
//! Parser line numbers count from the line after the magic marker; this
//! module maps them back onto the full file text so the report underlines
//! the offending line.

use ariadne::{Color, Label, Report, ReportKind, Source};

use crate::parser::ParseError;

/// Byte range of the given 0-based line within `source`.
fn line_span(source: &str, line_index: usize) -> std::ops::Range<usize> {
    let mut offset = 0;
    for (i, line) in source.lines().enumerate() {
        if i == line_index {
            return offset..offset + line.len();
        }
        offset += line.len() + 1;
    }
    let end = source.len();
    end..end
}

/// Render a parse error against the full file text (magic line included)
/// using ariadne.
///
/// Errors without a line number (an incomplete graph) render as a headline
/// pointing at the start of the file.
pub fn render_parse_error(source: &str, filename: &str, error: &ParseError) -> String {
    // Parser line N is file line index N: the magic line occupies index 0.
    let span = match error.line() {
        Some(line) => line_span(source, line),
        None => 0..source.lines().next().map_or(0, str::len),
    };

    let mut output = Vec::new();
    Report::build(ReportKind::Error, (filename, span.clone()))
        .with_message(error.to_string())
        .with_label(
            Label::new((filename, span))
                .with_message(label_for(error))
                .with_color(Color::Red),
        )
        .finish()
        .write((filename, Source::from(source)), &mut output)
        .ok();

    String::from_utf8(output).unwrap_or_default()
}

fn label_for(error: &ParseError) -> &'static str {
    match error {
        ParseError::Structural { .. } => "this line does not follow the story format",
        ParseError::DuplicateRoom { .. } => "a room with this id was already declared",
        ParseError::Incomplete(_) => "story ends before every room is complete",
    }
}
