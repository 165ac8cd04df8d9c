//! # chuck-core
//!
//! Core types, traits, configuration, language codes, and error handling for chuckbot.

pub mod config;
pub mod error;
pub mod language;
pub mod message;
pub mod session;
pub mod traits;

pub use config::shellexpand;
pub use language::LanguageCode;
pub use session::Session;
