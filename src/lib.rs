//! # Race Week Bot
//!
//! A Telegram bot that announces the next motor race and asks the group,
//! every race week, whether they will watch it.
//!
//! ## Features
//! - `/next` and an inline button showing the next race from a JSON catalog
//! - Weekly attendance poll on a fixed schedule, plus `/poll` to send it by hand
//! - Long-polling and webhook entry points sharing one dispatch tree
//! - Health endpoints reporting catalog availability

/// Bot command handlers and callback processing
pub mod bot;
/// Configuration management and environment variables
pub mod config;
/// Application context injected into handlers and jobs
pub mod context;
/// Race catalog loading, date resolution and message formatting
pub mod races;
/// Scheduler, poll delivery, health and webhook services
pub mod services;
/// Utility functions for dates and logging
pub mod utils;
