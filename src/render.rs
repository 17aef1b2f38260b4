//! ANSI terminal rendering of styled text
//!
//! Converts [`StyledText`] into colored terminal output using
//! crossterm. Optionally prefixes each line with a dim line-number
//! gutter and wraps at a column limit (display columns, not bytes).

use std::io::Write;

use crossterm::{
    queue,
    style::{Attribute, Color as TermColor, Print, ResetColor, SetAttribute, SetForegroundColor},
};
use unicode_width::UnicodeWidthChar;

use crate::error::Result;
use crate::syntax::{Color, Style, StyledText};

/// Rendering options for the terminal output
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Prefix each line with a dim, right-aligned line number
    pub line_numbers: bool,
    /// Wrap output at this many display columns
    pub max_width: Option<usize>,
}

/// Map a palette color onto crossterm's; `Default` means "leave the
/// terminal's foreground alone"
fn terminal_color(color: Color) -> Option<TermColor> {
    match color {
        Color::Default => None,
        Color::Black => Some(TermColor::Black),
        Color::Red => Some(TermColor::DarkRed),
        Color::Green => Some(TermColor::DarkGreen),
        Color::Yellow => Some(TermColor::DarkYellow),
        Color::Blue => Some(TermColor::DarkBlue),
        Color::Magenta => Some(TermColor::DarkMagenta),
        Color::Cyan => Some(TermColor::DarkCyan),
        Color::White => Some(TermColor::Grey),
        Color::BrightBlack => Some(TermColor::DarkGrey),
        Color::BrightRed => Some(TermColor::Red),
        Color::BrightGreen => Some(TermColor::Green),
        Color::BrightYellow => Some(TermColor::Yellow),
        Color::BrightBlue => Some(TermColor::Blue),
        Color::BrightMagenta => Some(TermColor::Magenta),
        Color::BrightCyan => Some(TermColor::Cyan),
        Color::BrightWhite => Some(TermColor::White),
    }
}

fn apply_style<W: Write>(out: &mut W, style: Style) -> Result<()> {
    queue!(out, ResetColor, SetAttribute(Attribute::Reset))?;
    if let Some(color) = terminal_color(style.fg) {
        queue!(out, SetForegroundColor(color))?;
    }
    if style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if style.italic {
        queue!(out, SetAttribute(Attribute::Italic))?;
    }
    if style.underline {
        queue!(out, SetAttribute(Attribute::Underlined))?;
    }
    Ok(())
}

/// Render styled text to a terminal-bound writer.
///
/// The caller is responsible for flushing.
pub fn render<W: Write>(styled: &StyledText, options: &RenderOptions, out: &mut W) -> Result<()> {
    let source = styled.text();
    let line_count = source.lines().count().max(1);
    let gutter_digits = if options.line_numbers {
        digits(line_count).max(3)
    } else {
        0
    };

    let mut line = 1usize;
    let mut column = 0usize;
    let mut at_line_start = true;

    for run in styled.runs() {
        apply_style(out, run.style)?;
        for ch in run.text.chars() {
            if at_line_start {
                write_gutter(out, options, gutter_digits, Some(line), run.style)?;
                at_line_start = false;
            }
            if ch == '\n' {
                queue!(out, Print('\n'))?;
                line += 1;
                column = 0;
                at_line_start = true;
                continue;
            }
            let width = UnicodeWidthChar::width(ch).unwrap_or(1);
            if let Some(max) = options.max_width {
                let avail = max.saturating_sub(gutter_width(options, gutter_digits));
                if avail > 0 && column + width > avail {
                    // wrap; continuation lines get a blank gutter
                    queue!(out, Print('\n'))?;
                    write_gutter(out, options, gutter_digits, None, run.style)?;
                    column = 0;
                }
            }
            queue!(out, Print(ch))?;
            column += width;
        }
    }

    queue!(out, ResetColor, SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn gutter_width(options: &RenderOptions, digits: usize) -> usize {
    if options.line_numbers {
        digits + 1
    } else {
        0
    }
}

fn digits(n: usize) -> usize {
    let mut n = n;
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}

fn write_gutter<W: Write>(
    out: &mut W,
    options: &RenderOptions,
    digits: usize,
    line: Option<usize>,
    resume: Style,
) -> Result<()> {
    if !options.line_numbers {
        return Ok(());
    }
    queue!(out, ResetColor, SetAttribute(Attribute::Reset))?;
    queue!(out, SetAttribute(Attribute::Dim))?;
    match line {
        Some(n) => queue!(out, Print(format!("{n:>digits$} ")))?,
        None => queue!(out, Print(" ".repeat(digits + 1)))?,
    }
    queue!(out, SetAttribute(Attribute::NormalIntensity))?;
    // restore the interrupted run's style
    apply_style(out, resume)?;
    Ok(())
}
