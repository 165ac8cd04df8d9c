//! # chuck-channels
//!
//! Messaging platform integrations for chuckbot.

pub mod telegram;
pub mod utils;
