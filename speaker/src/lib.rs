//! Terminal client for a `/synthesize` text-to-speech server.
//!
//! [`SynthesisController`] owns the UI state ([`Widgets`]) and drives one
//! request per synthesize action. [`Terminal`] renders that state and maps
//! typed input onto controller operations.

pub mod blob;
pub mod controller;
pub mod keys;
pub mod logging;
pub mod terminal;
pub mod widgets;

pub use blob::{BlobStore, MemoryBlobStore, PlaybackUrl};
pub use controller::{EMPTY_TEXT_MESSAGE, Outcome, Phase, SynthesisController};
pub use keys::{Key, KeyPress, Modifiers};
pub use logging::init_logging;
pub use terminal::{Command, Terminal};
pub use widgets::{BindError, Page, Widgets};
