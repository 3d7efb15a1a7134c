//! Voice session transcript components.

pub mod chat_entry;
pub mod chat_transcript;
