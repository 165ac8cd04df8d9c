//! # chuck-translate
//!
//! Translation backends implementing [`chuck_core::traits::Translator`].

pub mod azure;

pub use azure::AzureTranslator;
