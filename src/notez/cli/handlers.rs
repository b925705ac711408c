use super::render::{render_full_notes, render_messages, render_note_list, render_share_link};
use super::setup::SessionCommand;
use chrono::Utc;
use notez::api::{CmdResult, NotezApi};
use notez::clipboard::Clipboard;
use notez::clock::Clock;
use notez::error::Result;
use notez::ids::IdGenerator;
use notez::model::Note;
use std::io::Write;

/// Whether the session keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub fn handle<C, G, K, W>(
    api: &mut NotezApi<C, G, K>,
    command: SessionCommand,
    out: &mut W,
    use_color: bool,
) -> Result<Flow>
where
    C: Clock,
    G: IdGenerator,
    K: Clipboard,
    W: Write,
{
    match command {
        SessionCommand::New { title, content } => {
            let result = api.create_note(title.unwrap_or_default(), content.unwrap_or_default())?;
            print_affected(api, &result, out, use_color)?;
        }
        SessionCommand::List { json } => {
            let result = api.list_notes()?;
            if json {
                let notes: Vec<&Note> = result.listed_notes.iter().map(|dn| &dn.note).collect();
                writeln!(out, "{}", serde_json::to_string_pretty(&notes)?)?;
            } else {
                let editing = api.editing().map(|dn| dn.index);
                write!(
                    out,
                    "{}",
                    render_note_list(&result.listed_notes, editing, Utc::now(), use_color)
                )?;
                write!(out, "{}", render_messages(&result.messages, use_color))?;
            }
        }
        SessionCommand::View { selectors } => {
            let result = api.view_notes(&selectors)?;
            write!(out, "{}", render_full_notes(&result.listed_notes, use_color))?;
            write!(out, "{}", render_messages(&result.messages, use_color))?;
        }
        SessionCommand::Edit { selector } => {
            let result = api.begin_edit(&selector)?;
            write!(out, "{}", render_full_notes(&result.affected_notes, use_color))?;
            write!(out, "{}", render_messages(&result.messages, use_color))?;
            writeln!(
                out,
                "Use `save [TITLE] [CONTENT]` to save or `cancel` to discard."
            )?;
        }
        SessionCommand::Save { title, content } => {
            // Omitted fields keep the edited note's current values
            let (current_title, current_content) = api
                .editing()
                .map(|dn| (dn.note.title, dn.note.content))
                .unwrap_or_default();
            let result = api.save_draft(
                title.unwrap_or(current_title),
                content.unwrap_or(current_content),
            )?;
            print_affected(api, &result, out, use_color)?;
        }
        SessionCommand::Cancel => {
            let result = api.cancel_edit()?;
            write!(out, "{}", render_messages(&result.messages, use_color))?;
        }
        SessionCommand::Delete { selectors } => {
            let result = api.delete_notes(&selectors)?;
            write!(out, "{}", render_messages(&result.messages, use_color))?;
        }
        SessionCommand::Share { selector } => {
            let result = api.share_note(&selector)?;
            if let Some(share) = &result.share {
                write!(out, "{}", render_share_link(&share.url, use_color))?;
            }
            write!(out, "{}", render_messages(&result.messages, use_color))?;
        }
        SessionCommand::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

fn print_affected<C, G, K, W>(
    api: &NotezApi<C, G, K>,
    result: &CmdResult,
    out: &mut W,
    use_color: bool,
) -> Result<()>
where
    C: Clock,
    G: IdGenerator,
    K: Clipboard,
    W: Write,
{
    let editing = api.editing().map(|dn| dn.index);
    write!(
        out,
        "{}",
        render_note_list(&result.affected_notes, editing, Utc::now(), use_color)
    )?;
    write!(out, "{}", render_messages(&result.messages, use_color))?;
    Ok(())
}
