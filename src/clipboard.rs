// Copyright (c) 2024 PostFinance AG
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use clipboard::{ClipboardContext, ClipboardProvider};
use log::{info, warn};
use std::thread;
use std::time::Duration;

pub(crate) trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), Box<dyn std::error::Error>>;
    fn read_text(&mut self) -> Result<String, Box<dyn std::error::Error>>;
}

/// The platform clipboard. One context is opened on the first write and kept
/// for the rest of the session; on X11 the selection is only served while it
/// is alive.
#[derive(Default)]
pub(crate) struct SystemClipboard {
    context: Option<ClipboardContext>,
}

impl SystemClipboard {
    fn context(&mut self) -> Result<&mut ClipboardContext, Box<dyn std::error::Error>> {
        let context = match self.context.take() {
            Some(context) => context,
            None => ClipboardProvider::new()?,
        };
        Ok(self.context.insert(context))
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), Box<dyn std::error::Error>> {
        self.context()?.set_contents(text.to_string())
    }

    fn read_text(&mut self) -> Result<String, Box<dyn std::error::Error>> {
        self.context()?.get_contents()
    }
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum CopyOutcome {
    Copied,
    NothingToCopy,
    Unavailable(String),
}

impl CopyOutcome {
    pub(crate) fn is_success(&self) -> bool {
        matches!(self, CopyOutcome::Copied)
    }

    pub(crate) fn message(&self) -> String {
        match self {
            CopyOutcome::Copied => String::from("Password copied to clipboard!"),
            CopyOutcome::NothingToCopy => String::from("No password to copy!"),
            CopyOutcome::Unavailable(cause) => format!("Failed to copy to clipboard: {cause}"),
        }
    }
}

pub(crate) fn copy_password(password: &str, clipboard: &mut dyn Clipboard) -> CopyOutcome {
    if password.is_empty() {
        return CopyOutcome::NothingToCopy;
    }

    match clipboard.write_text(password) {
        Ok(()) => {
            info!("Copied password to clipboard");
            CopyOutcome::Copied
        }
        Err(e) => {
            warn!("Clipboard write failed: {e}");
            CopyOutcome::Unavailable(e.to_string())
        }
    }
}

/// Keeps the clipboard owned for `duration`, then clears it unless something
/// else has been copied in the meantime.
pub(crate) fn hold_clipboard(clipboard: &mut dyn Clipboard, text: &str, duration: Duration) {
    info!("Holding clipboard for {} seconds", duration.as_secs());
    thread::sleep(duration);

    match clipboard.read_text() {
        Ok(current) if current == text => {
            if let Err(e) = clipboard.write_text("") {
                warn!("Failed to clear clipboard: {e}");
            }
        }
        Ok(_) => info!("Clipboard was overwritten, leaving it as is"),
        Err(e) => warn!("Failed to read clipboard: {e}"),
    }
}
