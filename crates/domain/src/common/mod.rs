//! Shared building blocks for snapshot types.

pub mod lenient;
mod named_entries;

pub use named_entries::NamedEntries;
