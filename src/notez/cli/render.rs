//! # Rendering
//!
//! Turns `CmdResult` pieces into terminal text. Layout math (widths,
//! truncation, padding) is Unicode-aware; colors come from
//! [`NOTEZ_THEME`] and are dropped entirely when `use_color` is off.
//!
//! Every function takes `now` so relative times are reproducible in tests.

use super::styles::{paint, NOTEZ_THEME};
use chrono::{DateTime, Utc};
use notez::api::{CmdMessage, MessageLevel};
use notez::index::DisplayNote;
use notez::model::Note;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 80;
pub const TIME_WIDTH: usize = 14;
pub const EDIT_MARKER: &str = "✎";
const PREVIEW_INDENT: &str = "       ";

/// One "card" per note: index, title and age on the first line, a dimmed
/// content preview underneath.
pub fn render_note_list(
    notes: &[DisplayNote],
    editing: Option<usize>,
    now: DateTime<Utc>,
    use_color: bool,
) -> String {
    let theme = &*NOTEZ_THEME;
    let mut out = String::new();

    for dn in notes {
        let is_editing = editing == Some(dn.index);
        let marker = if is_editing { EDIT_MARKER } else { " " };
        let idx_str = format!("{:>3}. ", dn.index);

        let fixed = 2 + idx_str.width() + 2 + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed);
        let title = display_title(&dn.note);
        let title = truncate_to_width(&title, available);
        let padding = " ".repeat(available.saturating_sub(title.width()));

        out.push_str(&format!(
            "{} {}{}{}  {}\n",
            paint(&theme.editing, marker, use_color),
            paint(&theme.index, &idx_str, use_color),
            paint(&theme.title, &title, use_color),
            padding,
            paint(&theme.time, &format_time_ago(dn.note.date, now), use_color),
        ));

        let preview = dn.note.preview();
        if !preview.is_empty() {
            let width = LINE_WIDTH.saturating_sub(PREVIEW_INDENT.len());
            out.push_str(PREVIEW_INDENT);
            out.push_str(&paint(
                &theme.preview,
                &truncate_to_width(preview, width),
                use_color,
            ));
            out.push('\n');
        }
    }

    out
}

/// Full notes, separated by rules.
pub fn render_full_notes(notes: &[DisplayNote], use_color: bool) -> String {
    let theme = &*NOTEZ_THEME;
    let mut out = String::new();

    for (i, dn) in notes.iter().enumerate() {
        if i > 0 {
            out.push_str("\n================================\n\n");
        }
        out.push_str(&format!(
            "{} {}  {}\n",
            paint(&theme.index, &format!("{}.", dn.index), use_color),
            paint(&theme.title, &display_title(&dn.note), use_color),
            paint(&theme.time, &dn.note.date_label(), use_color),
        ));
        out.push_str("--------------------------------\n");
        if !dn.note.content.is_empty() {
            out.push_str(&dn.note.content);
            out.push('\n');
        }
    }

    out
}

pub fn render_share_link(url: &str, use_color: bool) -> String {
    format!("{}\n", paint(&NOTEZ_THEME.link, url, use_color))
}

pub fn render_messages(messages: &[CmdMessage], use_color: bool) -> String {
    let theme = &*NOTEZ_THEME;
    messages
        .iter()
        .map(|msg| {
            let style = match msg.level {
                MessageLevel::Info => &theme.info,
                MessageLevel::Success => &theme.success,
                MessageLevel::Error => &theme.error,
            };
            format!("{}\n", paint(style, &msg.content, use_color))
        })
        .collect()
}

fn display_title(note: &Note) -> String {
    if note.title.trim().is_empty() {
        "(untitled)".to_string()
    } else {
        note.title.clone()
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(timestamp);

    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    // Align units with "seconds"/"minutes" (7 chars)
    let time_str = time_str
        .replace("hours ago", "  hours ago")
        .replace("hour ago", "   hour ago")
        .replace("days ago", "   days ago")
        .replace("day ago", "    day ago")
        .replace("weeks ago", "  weeks ago")
        .replace("week ago", "   week ago")
        .replace("months ago", " months ago")
        .replace("month ago", "  month ago")
        .replace("years ago", "  years ago")
        .replace("year ago", "   year ago");

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
