//! Axum router and handlers. Page-lifetime state — the cached today
//! document, the progress meter, the preference store — lives in `AppState`
//! behind `Arc`s, mirroring how the original kept it in page scope.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, Redirect},
    routing::{get, post},
    Form, Router,
};
use chrono::Utc;
use serde::Deserialize;
use tokio::sync::Mutex;
use tower_http::{cors::CorsLayer, services::ServeDir};

use crate::fetch::DocumentFetcher;
use crate::meter::{Milestone, ProgressMeter};
use crate::model::TodayDocument;
use crate::page;
use crate::prefs::{self, FilePrefs};
use crate::render;
use crate::ui;

#[derive(Clone)]
pub struct AppState {
    pub fetcher: DocumentFetcher,
    prefs: Arc<Mutex<FilePrefs>>,
    today: Arc<Mutex<Option<TodayDocument>>>,
    meter: Arc<Mutex<ProgressMeter>>,
}

impl AppState {
    pub fn new(fetcher: DocumentFetcher, prefs: FilePrefs) -> Self {
        Self {
            fetcher,
            prefs: Arc::new(Mutex::new(prefs)),
            today: Arc::new(Mutex::new(None)),
            meter: Arc::new(Mutex::new(ProgressMeter::new())),
        }
    }
}

/// Build the router. `static_root` is the directory holding `data/` and
/// `assets/`, served as-is next to the rendered pages.
pub fn create_router(state: AppState, static_root: PathBuf) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/", get(today_page))
        .route("/today", get(today_page))
        .route("/pulse", get(pulse_page))
        .route("/lens", post(change_lens))
        .route("/meter/{step}", post(mark_step))
        .nest_service("/data", ServeDir::new(static_root.join("data")))
        .nest_service("/assets", ServeDir::new(static_root.join("assets")))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

async fn today_page(State(state): State<AppState>) -> Html<String> {
    let lens = {
        let prefs = state.prefs.lock().await;
        prefs::lens(&*prefs)
    };

    let page::TodayPage { view, doc } = page::today_page(&state.fetcher, &lens, Utc::now()).await;

    // A successful render counts as having read the brief.
    let meter_html = {
        let mut meter = state.meter.lock().await;
        if doc.is_some() {
            meter.mark(Milestone::Brief);
        }
        meter.fragment()
    };

    if let Some(doc) = doc {
        *state.today.lock().await = Some(doc);
    }

    Html(ui::today_shell(&view, &meter_html, &lens))
}

async fn pulse_page(State(state): State<AppState>) -> Html<String> {
    let page = page::pulse_page(&state.fetcher, Utc::now()).await;
    Html(ui::pulse_shell(&page))
}

#[derive(Debug, Deserialize)]
struct LensForm {
    lens: String,
}

/// Persist the lens choice and re-render from the cached document — no
/// re-fetch. Before the first successful load there is nothing to render
/// from, so fall back to a normal page load.
async fn change_lens(
    State(state): State<AppState>,
    Form(form): Form<LensForm>,
) -> Result<Html<String>, Redirect> {
    let lens = form.lens.trim().to_string();
    {
        let mut prefs = state.prefs.lock().await;
        prefs::set_lens(&mut *prefs, &lens);
    }

    let cached = state.today.lock().await.clone();
    match cached {
        Some(doc) => {
            let view = render::today::view(&doc, &lens, Utc::now());
            let meter_html = state.meter.lock().await.fragment();
            Ok(Html(ui::today_shell(&view, &meter_html, &lens)))
        }
        None => Err(Redirect::to("/today")),
    }
}

async fn mark_step(
    State(state): State<AppState>,
    Path(step): Path<String>,
) -> Result<Html<String>, (StatusCode, String)> {
    let Some(milestone) = Milestone::parse(&step) else {
        return Err((StatusCode::BAD_REQUEST, format!("unknown step: {step}")));
    };
    let mut meter = state.meter.lock().await;
    meter.mark(milestone);
    Ok(Html(meter.fragment()))
}
