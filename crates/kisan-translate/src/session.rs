//! UI-facing wrapper around [`Translator`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::language::Language;
use crate::translator::Translator;

/// Binds a target language and tracks request status for display purposes.
///
/// The status side-channel (loading flag, last error message) is purely for
/// UI feedback; the return contract is the same as [`Translator::translate`]
/// and never surfaces an error.
pub struct TranslationSession {
    translator: Arc<Translator>,
    language: Language,
    loading: AtomicBool,
    last_error: Mutex<Option<String>>,
}

impl TranslationSession {
    pub fn new(translator: Arc<Translator>, language: Language) -> Self {
        Self {
            translator,
            language,
            loading: AtomicBool::new(false),
            last_error: Mutex::new(None),
        }
    }

    /// The target language this session translates into.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Whether a translation call is currently in flight.
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Relaxed)
    }

    /// Message from the most recent failed call, if any.
    pub fn last_error(&self) -> Option<String> {
        self.last_error.lock().clone()
    }

    /// Translate `text` from English into the session language.
    pub async fn translate(&self, text: &str) -> String {
        self.translate_from(text, Language::En).await
    }

    /// Translate `text` from `source` into the session language.
    pub async fn translate_from(&self, text: &str, source: Language) -> String {
        self.loading.store(true, Ordering::Relaxed);
        *self.last_error.lock() = None;

        let translated = self
            .translator
            .translate_from(text, source, self.language)
            .await;

        self.loading.store(false, Ordering::Relaxed);
        translated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_session_clears_loading_after_call() {
        let translator = Arc::new(Translator::new("http://127.0.0.1:1/translate").unwrap());
        let session = TranslationSession::new(translator, Language::Hi);

        assert!(!session.is_loading());
        let out = session.translate("Hello").await;
        assert_eq!(out, "Hello");
        assert!(!session.is_loading());
        assert_eq!(session.last_error(), None);
    }

    #[tokio::test]
    async fn test_session_language() {
        let translator = Arc::new(Translator::new("http://127.0.0.1:1/translate").unwrap());
        let session = TranslationSession::new(translator, Language::Pa);
        assert_eq!(session.language(), Language::Pa);
    }
}
