//! View-model documents for the four pre-generated feeds. All of these are
//! transient: reconstructed on every load, never persisted, never normalized.
//! Fields are deliberately lenient (`default` / `Option`) so documents that
//! pass shape validation deserialize without fuss.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One headline in the pulse feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub source: String,
    /// ISO-8601, or absent. Unparsable timestamps sort as epoch zero.
    #[serde(default)]
    pub published_utc: Option<String>,
}

/// The pulse feed: `/data/pulse.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PulseDocument {
    #[serde(default)]
    pub generated_utc: String,
    #[serde(default)]
    pub items: Vec<FeedItem>,
}

/// One narrative variant of the day, keyed by lens name in `TodayDocument`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    #[serde(default)]
    pub angle: String,
    #[serde(default)]
    pub what_to_say: Vec<String>,
    #[serde(default)]
    pub signal: Option<f64>,
    #[serde(default)]
    pub time_s: Option<u64>,
}

/// One of "the 3" stories of the day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoryCard {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub why_it_matters: String,
    #[serde(default)]
    pub watch_for: String,
    #[serde(default)]
    pub what_to_say: String,
    /// 0.0–1.0; mapped to High/Medium/Low in the trust panel.
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub confidence_reason: String,
}

/// Pointers to the day's audio briefing inside `TodayDocument`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioPointers {
    #[serde(default)]
    pub latest: String,
    #[serde(default)]
    pub transcript: String,
}

/// The daily digest: `/data/today.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TodayDocument {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub updated_utc: String,
    #[serde(default)]
    pub variants: BTreeMap<String, Variant>,
    #[serde(default)]
    pub the3: Vec<StoryCard>,
    #[serde(default)]
    pub audio: AudioPointers,
    /// Shareable image paths; at most 7 are rendered.
    #[serde(default)]
    pub cards: Vec<String>,
}

/// The "most memeable" pick inside the editor brief.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MostMemeable {
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub caption: String,
}

/// The editorial brief: `/data/editor.json`. Optional on the pulse page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditorDocument {
    #[serde(default)]
    pub editors_brief: String,
    #[serde(default)]
    pub top_themes: Vec<String>,
    #[serde(default)]
    pub most_memeable: MostMemeable,
}

/// The audio index: `/data/audio.json`. Entries are kept opaque; only the
/// shape is checked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioIndexDocument {
    #[serde(default)]
    pub latest: String,
    #[serde(default)]
    pub items: Vec<serde_json::Value>,
}
