//! HTTP fetcher for the pre-generated feed documents. One GET per document,
//! cache disabled, then parse → validate → deserialize. No retry, no
//! normalization: on success the parsed document is returned unchanged.

use chrono::Utc;
use reqwest::header::CACHE_CONTROL;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::LoadError;
use crate::model::{AudioIndexDocument, EditorDocument, PulseDocument, TodayDocument};
use crate::validate;

pub const PULSE_ENDPOINT: &str = "/data/pulse.json";
pub const TODAY_ENDPOINT: &str = "/data/today.json";
pub const EDITOR_ENDPOINT: &str = "/data/editor.json";
pub const AUDIO_ENDPOINT: &str = "/data/audio.json";

/// Fetches feed documents from a base URL. Cheap to clone; the inner
/// `reqwest::Client` is already shared.
#[derive(Debug, Clone)]
pub struct DocumentFetcher {
    client: reqwest::Client,
    base: String,
}

impl DocumentFetcher {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base: base.into(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub async fn pulse(&self) -> Result<PulseDocument, LoadError> {
        self.get_json(PULSE_ENDPOINT, validate::pulse).await
    }

    pub async fn today(&self) -> Result<TodayDocument, LoadError> {
        self.get_json(TODAY_ENDPOINT, validate::today).await
    }

    pub async fn editor(&self) -> Result<EditorDocument, LoadError> {
        self.get_json(EDITOR_ENDPOINT, validate::editor).await
    }

    pub async fn audio_index(&self) -> Result<AudioIndexDocument, LoadError> {
        self.get_json(AUDIO_ENDPOINT, validate::audio_index).await
    }

    async fn get_json<T>(
        &self,
        path: &str,
        validator: fn(&Value) -> Vec<String>,
    ) -> Result<T, LoadError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base.trim_end_matches('/'), path);

        // Cache busting: a no-store header plus a millisecond query param so
        // intermediaries cannot serve a stale document.
        let bust = Utc::now().timestamp_millis().to_string();
        let resp = self
            .client
            .get(&url)
            .query(&[("t", bust.as_str())])
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await
            .map_err(|e| LoadError::Transport {
                path: path.to_string(),
                detail: e.to_string(),
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        let body = resp.text().await.map_err(|e| LoadError::Transport {
            path: path.to_string(),
            detail: e.to_string(),
        })?;

        let value: Value = serde_json::from_str(&body).map_err(|e| {
            LoadError::invalid(path, vec![format!("{path} is not valid JSON: {e}")])
        })?;

        let violations = validator(&value);
        if !violations.is_empty() {
            return Err(LoadError::invalid(path, violations));
        }

        serde_json::from_value(value).map_err(|e| {
            LoadError::invalid(path, vec![format!("{path} has an unexpected field type: {e}")])
        })
    }
}
