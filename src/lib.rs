//! Scrubber - live value scrubbing for text buffers
//!
//! Detects the numeric or color literal under a position and rewrites it in
//! place as the user nudges it with the keyboard or drags it with the pointer.
//! Input arrives as [`ScrubMsg`] values and is applied by [`update`], in the
//! same message/update style as the rest of the crate.

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod keymap;
pub mod messages;
pub mod model;
pub mod scrub;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use config::ScrubConfig;
pub use messages::ScrubMsg;
pub use model::Document;
pub use scrub::EditHost;
pub use update::{update, Scrubber};
