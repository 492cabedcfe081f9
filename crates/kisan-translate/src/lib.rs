//! Translation service for Kisan
//!
//! Wraps a LibreTranslate-compatible API with a two-tier cache: a fast
//! in-memory map owned by the [`Translator`] and an optional persistent
//! SQLite tier. Failed or unavailable translations fall back to the original
//! text instead of erroring.

pub mod key;
pub mod language;
pub mod session;
pub mod store;
pub mod translator;

pub use key::cache_key;
pub use language::Language;
pub use session::TranslationSession;
pub use store::{SqliteTranslationStore, TranslationStore};
pub use translator::Translator;
