//! `ops-sdk` — the small client the op templates are written against.
//!
//! A [`Client`] bundles three facilities:
//!
//! - [`Prompter`]: interactive line input, with optional non-empty enforcement
//! - [`Ux`]: user-facing printing
//! - [`Tracker`]: event submission to the platform daemon (or the log when
//!   no daemon is configured)

pub mod client;
pub mod config;
pub mod error;
pub mod prompt;
pub mod track;
pub mod ux;

pub use client::Client;
pub use config::SdkConfig;
pub use error::{Result, SdkError};
pub use prompt::{Prompter, TerminalPrompter};
pub use track::{DaemonTracker, LogTracker, Tracker};
pub use ux::Ux;
