//! Clipboard capability

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use shared::{AppError, ErrorCode};

use crate::error::AdminResult;

pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> AdminResult<()>;
}

/// Process-local clipboard
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
    unavailable: AtomicBool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<String> {
        self.contents
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Make subsequent writes fail
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::Relaxed);
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&self, text: &str) -> AdminResult<()> {
        if self.unavailable.load(Ordering::Relaxed) {
            return Err(AppError::new(ErrorCode::ClipboardUnavailable).into());
        }
        *self.contents.lock().unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(text.to_string());
        Ok(())
    }
}
