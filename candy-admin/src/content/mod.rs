//! Marketing content generation

mod clipboard;
mod provider;
mod workflow;

pub use clipboard::{Clipboard, MemoryClipboard};
pub use provider::{ContentProvider, SampleContentProvider};
pub use workflow::{COPIED_INDICATOR_MS, ContentWorkflow, Phase};
