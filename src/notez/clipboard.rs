//! Clipboard facilities used by sharing.
//!
//! Writing to the clipboard is the only call that leaves the process. A
//! failure is reported as [`NotezError::ClipboardUnavailable`] and never
//! affects note state.

use crate::error::{NotezError, Result};
use std::process::{Command, Stdio};

pub trait Clipboard {
    fn copy(&mut self, text: &str) -> Result<()>;
}

impl<K: Clipboard + ?Sized> Clipboard for Box<K> {
    fn copy(&mut self, text: &str) -> Result<()> {
        (**self).copy(text)
    }
}

/// Copies through the platform's clipboard tool.
/// - macOS: `pbcopy`
/// - Linux: `xclip`, falling back to `xsel`
/// - Windows: `clip`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        #[cfg(target_os = "macos")]
        {
            pipe_to("pbcopy", &[], text)
        }

        #[cfg(target_os = "linux")]
        {
            pipe_to("xclip", &["-selection", "clipboard"], text)
                .or_else(|_| pipe_to("xsel", &["--clipboard", "--input"], text))
        }

        #[cfg(target_os = "windows")]
        {
            pipe_to("clip", &[], text)
        }

        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            let _ = text;
            Err(NotezError::ClipboardUnavailable(
                "Clipboard not supported on this platform".to_string(),
            ))
        }
    }
}

#[allow(dead_code)]
fn pipe_to(program: &str, args: &[&str], text: &str) -> Result<()> {
    use std::io::Write;

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| {
            NotezError::ClipboardUnavailable(format!("Failed to spawn {}: {}", program, e))
        })?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes()).map_err(|e| {
            NotezError::ClipboardUnavailable(format!("Failed to write to {}: {}", program, e))
        })?;
    }

    let status = child.wait().map_err(|e| {
        NotezError::ClipboardUnavailable(format!("Failed to wait for {}: {}", program, e))
    })?;

    if status.success() {
        Ok(())
    } else {
        Err(NotezError::ClipboardUnavailable(format!(
            "{} exited with error",
            program
        )))
    }
}

/// Keeps the last copied text in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// Always unavailable. Used when clipboard access is turned off.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledClipboard;

impl Clipboard for DisabledClipboard {
    fn copy(&mut self, _text: &str) -> Result<()> {
        Err(NotezError::ClipboardUnavailable(
            "clipboard access is disabled".to_string(),
        ))
    }
}
