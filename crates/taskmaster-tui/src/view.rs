#![forbid(unsafe_code)]

//! Full-rebuild view renderer.
//!
//! Every frame clears the screen and redraws the whole UI from current
//! state: title, task rows, input line, key hints. No retained state, no
//! diffing. List sizes are small and frames are human-triggered, so the
//! rebuild cost is irrelevant. The same state always produces the same
//! bytes, which is what the frame tests assert.

use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::queue;
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{Clear, ClearType};
use taskmaster_core::TaskList;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::input::TextInput;

/// Selection marker for the highlighted row.
const MARKER: &str = "❯ ";
/// Prompt prefix for the input line.
const PROMPT: &str = "> ";
/// Placeholder shown while the input is empty.
const PLACEHOLDER: &str = "New task";
/// Key hints for the footer row.
const HINTS: &str = "Enter add · Tab toggle · Ctrl+D delete · Up/Down select · Esc quit";

/// Draw a complete frame.
///
/// Rows, top to bottom: title, rule, task list (windowed around the
/// selection), rule, input line, hints. The cursor is parked in the input
/// line, which is always focused.
pub fn draw<W: Write>(
    out: &mut W,
    tasks: &TaskList,
    input: &TextInput,
    selected: usize,
    width: u16,
    height: u16,
) -> io::Result<()> {
    queue!(out, Hide, Clear(ClearType::All), MoveTo(0, 0))?;

    draw_title(out, tasks, width)?;
    draw_rule(out, 1, width)?;

    // Rows consumed by chrome: title, two rules, input, hints.
    let list_height = height.saturating_sub(5) as usize;
    draw_tasks(out, tasks, selected, width, list_height)?;

    draw_rule(out, height.saturating_sub(3), width)?;
    draw_hints(out, width, height)?;

    // Input line last so the cursor ends up where the user is typing.
    draw_input(out, input, width, height)?;
    queue!(out, Show)?;
    Ok(())
}

fn draw_title<W: Write>(out: &mut W, tasks: &TaskList, width: u16) -> io::Result<()> {
    let open = tasks.iter().filter(|t| !t.completed).count();
    let summary = format!("  {open} open / {} total", tasks.len());
    queue!(
        out,
        SetAttribute(Attribute::Bold),
        Print("taskmaster"),
        SetAttribute(Attribute::Reset),
        SetAttribute(Attribute::Dim),
        Print(truncate_to_width(
            &summary,
            (width as usize).saturating_sub("taskmaster".len())
        )),
        SetAttribute(Attribute::Reset),
    )
}

fn draw_rule<W: Write>(out: &mut W, row: u16, width: u16) -> io::Result<()> {
    queue!(
        out,
        MoveTo(0, row),
        SetAttribute(Attribute::Dim),
        Print("─".repeat(width as usize)),
        SetAttribute(Attribute::Reset),
    )
}

fn draw_tasks<W: Write>(
    out: &mut W,
    tasks: &TaskList,
    selected: usize,
    width: u16,
    list_height: usize,
) -> io::Result<()> {
    if tasks.is_empty() {
        if list_height > 0 {
            queue!(
                out,
                MoveTo(0, 2),
                SetAttribute(Attribute::Dim),
                Print("No tasks yet. Type below and press Enter."),
                SetAttribute(Attribute::Reset),
            )?;
        }
        return Ok(());
    }

    // Scroll the window so the selection stays visible.
    let offset = (selected + 1).saturating_sub(list_height);

    for (row, (index, task)) in tasks
        .iter()
        .enumerate()
        .skip(offset)
        .take(list_height)
        .enumerate()
    {
        let marker = if index == selected { MARKER } else { "  " };
        let checkbox = if task.completed { "[x] " } else { "[ ] " };
        let budget = (width as usize).saturating_sub(MARKER.width() + checkbox.len());
        let text = truncate_to_width(&task.text, budget);

        queue!(out, MoveTo(0, 2 + row as u16), Print(marker), Print(checkbox))?;
        if task.completed {
            queue!(
                out,
                SetAttribute(Attribute::Dim),
                SetAttribute(Attribute::CrossedOut),
                Print(text),
                SetAttribute(Attribute::Reset),
            )?;
        } else {
            queue!(out, Print(text))?;
        }
    }
    Ok(())
}

fn draw_hints<W: Write>(out: &mut W, width: u16, height: u16) -> io::Result<()> {
    queue!(
        out,
        MoveTo(0, height.saturating_sub(1)),
        SetAttribute(Attribute::Dim),
        Print(truncate_to_width(HINTS, width as usize)),
        SetAttribute(Attribute::Reset),
    )
}

fn draw_input<W: Write>(out: &mut W, input: &TextInput, width: u16, height: u16) -> io::Result<()> {
    let row = height.saturating_sub(2);
    queue!(out, MoveTo(0, row), Print(PROMPT))?;

    let budget = (width as usize).saturating_sub(PROMPT.len());
    if input.is_empty() {
        queue!(
            out,
            SetAttribute(Attribute::Dim),
            Print(truncate_to_width(PLACEHOLDER, budget)),
            SetAttribute(Attribute::Reset),
        )?;
    } else {
        queue!(out, Print(truncate_to_width(input.value(), budget)))?;
    }

    queue!(out, MoveTo(PROMPT.len() as u16 + input.cursor_col(), row))
}

/// Longest prefix of `text` that fits in `max` terminal cells.
fn truncate_to_width(text: &str, max: usize) -> &str {
    let mut used = 0;
    let mut end = 0;
    for (offset, grapheme) in text.grapheme_indices(true) {
        let w = grapheme.width();
        if used + w > max {
            break;
        }
        used += w;
        end = offset + grapheme.len();
    }
    &text[..end]
}
