//! Text output: listings, echoed input, and diagnostics, with optional color.

use crate::tree::ListEntry;
use crossterm::style::{style, Color, Stylize};
use std::fmt::Display;
use std::io::{self, Write};

/// Spaces of indentation per tree level in a listing.
pub const LEVEL_INDENT: usize = 2;

/// Configuration for the rendering pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    /// Whether to emit color styling.
    pub use_color: bool,
}

/// Escape control characters so user-supplied names cannot inject terminal sequences.
pub fn sanitize_terminal_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '\t' => out.push('\t'),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c if c.is_control() => {
                let code = c as u32;
                if code <= 0xFF {
                    out.push_str(&format!("\\x{:02X}", code));
                } else {
                    out.push_str(&format!("\\u{{{:X}}}", code));
                }
            }
            _ => out.push(c),
        }
    }
    out
}

/// A listing row without styling: `depth * LEVEL_INDENT` spaces, then the name.
pub fn format_entry(entry: &ListEntry) -> String {
    format!(
        "{}{}",
        " ".repeat(entry.depth * LEVEL_INDENT),
        sanitize_terminal_text(&entry.name)
    )
}

/// Write one line per entry. Returns the number of lines written.
pub fn render_listing<W: Write>(
    writer: &mut W,
    entries: &[ListEntry],
    config: &RenderConfig,
) -> io::Result<usize> {
    for entry in entries {
        if config.use_color {
            let indent = " ".repeat(entry.depth * LEVEL_INDENT);
            let name = sanitize_terminal_text(&entry.name);
            writeln!(writer, "{}{}", indent, style(name).with(Color::Blue).bold())?;
        } else {
            writeln!(writer, "{}", format_entry(entry))?;
        }
    }
    Ok(entries.len())
}

/// Echo an input line back before it is processed.
pub fn render_echo<W: Write>(writer: &mut W, line: &str) -> io::Result<()> {
    writeln!(writer, "{}", sanitize_terminal_text(line))
}

/// Write a rejection message on its own line, red when color is on.
pub fn render_diagnostic<W: Write>(
    writer: &mut W,
    message: &dyn Display,
    config: &RenderConfig,
) -> io::Result<()> {
    let text = sanitize_terminal_text(&message.to_string());
    if config.use_color {
        writeln!(writer, "{}", style(text).with(Color::Red).bold())
    } else {
        writeln!(writer, "{}", text)
    }
}
