//! # Status Agent Library
//!
//! Provides functionality for rotating a Discord custom status through
//! bounded-length chunks of a longer text, updating the remote user
//! settings endpoint on a timer and verifying each update.
//!
//! Modules:
//! - `chunker` — splits the status text into bounded windows
//! - `updater` — PATCHes one chunk to the remote settings endpoint
//! - `driver` — the rotation loop tying chunker and updater together
//! - `credential` — the authorization token loaded at startup

pub mod chunker;
pub mod config;
pub mod credential;
pub mod driver;
pub mod helpers;
pub mod tests;
pub mod updater;
pub mod utils;


pub use crate::chunker::chunk_text;
pub use crate::credential::Credential;
