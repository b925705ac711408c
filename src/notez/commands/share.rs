use crate::clipboard::Clipboard;
use crate::clock::Clock;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::ids::IdGenerator;
use crate::index::NoteSelector;
use crate::share::{share_url, ShareLink};
use crate::store::NoteStore;
use tracing::warn;

use super::helpers::{display_note, resolve_selector};

/// Builds the note's share link and copies it. A clipboard failure is
/// reported as an error message; the command itself still succeeds.
pub fn run<C: Clock, G: IdGenerator, K: Clipboard + ?Sized>(
    store: &NoteStore<C, G>,
    clipboard: &mut K,
    base_url: &str,
    selector: &NoteSelector,
) -> Result<CmdResult> {
    let (_, id) = resolve_selector(store, selector)?;
    let url = share_url(base_url, &id);

    let mut result = CmdResult::default();
    let copied = match clipboard.copy(&url) {
        Ok(()) => {
            result.add_message(CmdMessage::success("Share link copied to clipboard"));
            true
        }
        Err(e) => {
            warn!(id = %id, error = %e, "could not copy share link");
            result.add_message(CmdMessage::error(format!(
                "Could not copy share link: {}",
                e
            )));
            false
        }
    };

    if let Some(dn) = display_note(store, &id) {
        result.affected_notes.push(dn);
    }
    Ok(result.with_share(ShareLink {
        note_id: id,
        url,
        copied,
    }))
}
