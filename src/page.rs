//! Page controllers: one sequential async routine per page, mirroring the
//! original load flow. The primary document gates everything; a failure
//! there short-circuits into the error presenter. Secondary documents fail
//! silently.

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::error::LoadError;
use crate::fetch::{DocumentFetcher, PULSE_ENDPOINT, TODAY_ENDPOINT};
use crate::fmt;
use crate::model::TodayDocument;
use crate::render;
use crate::render::today::TodayView;

/// Fragments for the pulse page's mount points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PulsePage {
    pub feed: String,
    pub brief: String,
    pub updated: String,
    pub updated_abs: String,
    pub meta: String,
}

/// Load and render the pulse page. The editor brief is optional: its
/// failure is logged and the section is simply omitted.
pub async fn pulse_page(fetcher: &DocumentFetcher, now: DateTime<Utc>) -> PulsePage {
    let doc = match fetcher.pulse().await {
        Ok(doc) => doc,
        Err(err) => {
            warn!(%err, "pulse feed failed to load");
            return PulsePage {
                feed: render::error::card(&err),
                updated: "—".to_string(),
                updated_abs: "—".to_string(),
                meta: format!("Endpoint: {PULSE_ENDPOINT}"),
                ..PulsePage::default()
            };
        }
    };

    let brief = match fetcher.editor().await {
        Ok(editor) => render::pulse::editor_brief(&editor),
        Err(err) => {
            debug!(%err, "editor brief unavailable");
            String::new()
        }
    };

    PulsePage {
        feed: render::pulse::feed(&doc, now),
        brief,
        updated: format!(
            "Updated {}",
            fmt::time_ago_at(Some(doc.generated_utc.as_str()), now)
        ),
        updated_abs: fmt::escape(&fmt::fmt_utc(Some(doc.generated_utc.as_str()))),
        meta: format!("Endpoint: {PULSE_ENDPOINT}"),
    }
}

/// Outcome of loading the today page. The document is kept so lens changes
/// can re-render without another fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct TodayPage {
    pub view: TodayView,
    pub doc: Option<TodayDocument>,
}

pub async fn today_page(fetcher: &DocumentFetcher, lens: &str, now: DateTime<Utc>) -> TodayPage {
    match fetcher.today().await {
        Ok(doc) => TodayPage {
            view: render::today::view(&doc, lens, now),
            doc: Some(doc),
        },
        Err(err) => {
            warn!(%err, "today digest failed to load");
            TodayPage {
                view: failed_today_view(&err),
                doc: None,
            }
        }
    }
}

/// Error state for the today page: headline swapped for the failure notice,
/// the story region replaced by the error card, everything else empty.
pub fn failed_today_view(err: &LoadError) -> TodayView {
    TodayView {
        title: "Pulse unavailable".to_string(),
        angle: fmt::escape(&err.message()),
        stories: render::error::card(err),
        updated: "—".to_string(),
        updated_abs: "—".to_string(),
        meta: format!("Endpoint: {TODAY_ENDPOINT}"),
        ..TodayView::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_view_replaces_primary_region_only() {
        let err = LoadError::Status {
            path: "/data/today.json".into(),
            status: 500,
        };
        let v = failed_today_view(&err);
        assert_eq!(v.title, "Pulse unavailable");
        assert!(v.angle.contains("Failed to load /data/today.json (500)"));
        assert!(v.stories.contains("error-card"));
        assert!(v.audio.is_empty());
        assert!(v.cards.is_empty());
        assert_eq!(v.meta, "Endpoint: /data/today.json");
    }
}
