//! GM Voice player crate.
//!
//! Read-only game panels and the voice transcript for the GM Voice client.
//! Desktop and web targets are selected at compile time via `cfg`.

pub mod config;
pub mod ui;

// Lets components refer to `crate::presentation::...`.
pub use ui::presentation;

// Re-export commonly used entrypoints
pub use config::PlayerConfig;
pub use ui::app;
pub use ui::{InitialSession, ShellKind};
