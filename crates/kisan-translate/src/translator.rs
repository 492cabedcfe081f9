//! Translation client with two-tier caching and graceful degradation.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;
use tracing::instrument;

use crate::key::cache_key;
use crate::language::Language;
use crate::store::TranslationStore;

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Request body for a LibreTranslate-compatible endpoint.
#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
}

/// Response body. `translatedText` may be absent; that is treated as "no
/// translation", not as an error.
#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

/// Translation client over a LibreTranslate-compatible API.
///
/// Lookups go persistent tier first, then the in-memory tier, then the
/// network. Successful fetches (including fallbacks) are written to both
/// tiers. [`translate`](Self::translate) never fails: every error collapses
/// to returning the original text.
pub struct Translator {
    client: reqwest::Client,
    endpoint: String,
    memory: Mutex<HashMap<String, String>>,
    store: Option<Box<dyn TranslationStore>>,
}

impl Translator {
    /// Create a translator against the given endpoint, with no persistent tier.
    pub fn new(endpoint: impl Into<String>) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            memory: Mutex::new(HashMap::new()),
            store: None,
        })
    }

    /// Attach a persistent cache tier.
    pub fn with_store(mut self, store: impl TranslationStore + 'static) -> Self {
        self.store = Some(Box::new(store));
        self
    }

    /// Translate `text` from English into `target`.
    pub async fn translate(&self, text: &str, target: Language) -> String {
        self.translate_from(text, Language::En, target).await
    }

    /// Translate `text` from `source` into `target`.
    ///
    /// Returns the translated string, or the original text unchanged when the
    /// service is unavailable, responds with an error, or omits a translation.
    /// Identical source and target codes take the same cache/network path as
    /// any other pair.
    #[instrument(skip(self, text), level = "debug")]
    pub async fn translate_from(&self, text: &str, source: Language, target: Language) -> String {
        let key = cache_key(source, target, text);

        // Persistent tier wins; a hit is returned without touching memory.
        if let Some(store) = &self.store {
            match store.get(&key) {
                Ok(Some(cached)) => return cached,
                Ok(None) => {}
                Err(e) => tracing::debug!("Persistent cache read failed for {}: {}", key, e),
            }
        }

        if let Some(cached) = self.memory.lock().get(&key) {
            return cached.clone();
        }

        let translated = match self.fetch(text, source, target).await {
            Ok(t) => t,
            Err(e) => {
                tracing::debug!("Translation failed, falling back to original text: {}", e);
                text.to_string()
            }
        };

        // The fallback value is cached too; a failed key is not re-fetched.
        self.memory.lock().insert(key.clone(), translated.clone());
        if let Some(store) = &self.store {
            if let Err(e) = store.set(&key, &translated) {
                tracing::debug!("Persistent cache write failed for {}: {}", key, e);
            }
        }

        translated
    }

    /// Issue the remote translation call.
    async fn fetch(
        &self,
        text: &str,
        source: Language,
        target: Language,
    ) -> anyhow::Result<String> {
        let request = TranslateRequest {
            q: text,
            source: source.code(),
            target: target.code(),
            format: "text",
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            anyhow::bail!("translation API returned status {}", response.status());
        }

        let body: TranslateResponse = response.json().await?;
        Ok(body.translated_text.unwrap_or_else(|| text.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SqliteTranslationStore;
    use anyhow::Result;

    // Endpoint that refuses connections; used to prove cache hits skip the
    // network entirely.
    const DEAD_ENDPOINT: &str = "http://127.0.0.1:1/translate";

    #[tokio::test]
    async fn test_network_failure_returns_original() {
        let translator = Translator::new(DEAD_ENDPOINT).unwrap();
        let out = translator.translate("Hello", Language::Hi).await;
        assert_eq!(out, "Hello");
    }

    #[tokio::test]
    async fn test_persistent_hit_needs_no_network() {
        let store = SqliteTranslationStore::in_memory().unwrap();
        store.set("en:hi:Hello", "नमस्ते").unwrap();

        let translator = Translator::new(DEAD_ENDPOINT).unwrap().with_store(store);
        let out = translator.translate("Hello", Language::Hi).await;
        assert_eq!(out, "नमस्ते");
    }

    #[tokio::test]
    async fn test_fallback_is_cached_in_memory() {
        let translator = Translator::new(DEAD_ENDPOINT).unwrap();
        translator.translate("Hello", Language::Hi).await;
        assert_eq!(
            translator.memory.lock().get("en:hi:Hello").map(String::as_str),
            Some("Hello")
        );
    }

    #[tokio::test]
    async fn test_store_read_error_is_swallowed() {
        struct BrokenStore;
        impl TranslationStore for BrokenStore {
            fn get(&self, _key: &str) -> Result<Option<String>> {
                anyhow::bail!("store offline")
            }
            fn set(&self, _key: &str, _value: &str) -> Result<()> {
                anyhow::bail!("store offline")
            }
        }

        let translator = Translator::new(DEAD_ENDPOINT).unwrap().with_store(BrokenStore);
        let out = translator.translate("Hello", Language::Hi).await;
        assert_eq!(out, "Hello");
    }
}
