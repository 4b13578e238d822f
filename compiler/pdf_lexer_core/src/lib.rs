//! Low-level input handling for the PDF lexer.
//!
//! - [`SourceBuffer`]: the immutable input bytes.
//! - [`SlidingWindow`]: an incremental, backtrackable reader over a source
//!   that materializes bytes on demand and tracks the current lexeme.
//! - [`char_class`]: PDF byte classification (white-space, delimiters,
//!   regular characters, digits).
//!
//! This crate knows nothing about tokens. Scanning lives in `pdf_lexer`.

pub mod char_class;
mod source_buffer;
mod window;

pub use source_buffer::{SourceBuffer, SourceError};
pub use window::{SlidingWindow, MIN_WINDOW_CAPACITY};
