//! Today-page rendering: lens resolution, the day's three stories with their
//! trust panels, the audio briefing, and the shareable card grid.

use chrono::{DateTime, Utc};

use crate::fetch::TODAY_ENDPOINT;
use crate::fmt;
use crate::model::{StoryCard, TodayDocument, Variant};

/// How many shareable cards the grid shows at most.
pub const MAX_CARDS: usize = 7;

/// Named fragments for the today page's fixed mount points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodayView {
    pub kicker: String,
    pub title: String,
    pub angle: String,
    pub lens_detail: String,
    pub count: String,
    pub updated: String,
    pub updated_abs: String,
    pub stories: String,
    pub audio: String,
    pub cards: String,
    pub meta: String,
}

/// Selected lens variant, falling back to "neutral", then to nothing.
pub fn resolve_variant<'a>(doc: &'a TodayDocument, lens: &str) -> Option<&'a Variant> {
    doc.variants.get(lens).or_else(|| doc.variants.get("neutral"))
}

/// Trust-panel label for a 0–1 confidence value.
pub fn confidence_label(confidence: f64) -> &'static str {
    if confidence >= 0.75 {
        "High"
    } else if confidence >= 0.55 {
        "Medium"
    } else {
        "Low"
    }
}

/// Render the whole page from an already-validated document. Pure: lens
/// changes re-run this against the cached document without re-fetching.
pub fn view(doc: &TodayDocument, lens: &str, now: DateTime<Utc>) -> TodayView {
    let variant = resolve_variant(doc, lens);
    let shown = doc.the3.len().min(3);
    TodayView {
        kicker: format!("Your Pulse ({})", fmt::escape(&doc.date)),
        title: "You’re up to speed.".to_string(),
        angle: variant.map(|v| fmt::escape(&v.angle)).unwrap_or_default(),
        lens_detail: variant.map(lens_detail).unwrap_or_default(),
        count: format!("{shown} {}", if shown == 1 { "story" } else { "stories" }),
        updated: format!(
            "Updated {}",
            fmt::time_ago_at(Some(doc.updated_utc.as_str()), now)
        ),
        updated_abs: fmt::escape(&fmt::fmt_utc(Some(doc.updated_utc.as_str()))),
        stories: stories(&doc.the3),
        audio: audio(doc),
        cards: cards(doc),
        meta: format!("Endpoint: {TODAY_ENDPOINT}"),
    }
}

/// One-line summary of the selected variant's extras: the reusable line,
/// the signal strength, and the read time. Only the fields the generator
/// actually emitted appear.
fn lens_detail(variant: &Variant) -> String {
    let mut parts = Vec::new();
    if let Some(line) = variant.what_to_say.first() {
        parts.push(format!("What to say: “{}”", fmt::escape(line)));
    }
    if let Some(signal) = variant.signal {
        parts.push(format!("signal {signal:.2}"));
    }
    if let Some(secs) = variant.time_s {
        parts.push(format!("{} min", secs.div_ceil(60)));
    }
    parts.join(" · ")
}

fn stories(the3: &[StoryCard]) -> String {
    the3.iter().take(3).enumerate().map(|(i, s)| story(i, s)).collect()
}

fn story(index: usize, s: &StoryCard) -> String {
    let link = if s.link.is_empty() { "#" } else { s.link.as_str() };
    format!(
        r#"<article class="t3">
  <div class="t3-k">{rank}</div>
  <div class="t3-b">
    <div class="t3-h">{title}</div>
    <div class="t3-insight">{summary}</div>
    <details class="t3-more">
      <summary>Details</summary>
      <div class="t3-r"><span>Why it matters</span> {why}</div>
      <div class="t3-r"><span>Watch for</span> {watch}</div>
      <div class="t3-r"><span>What to say</span> {say}</div>
    </details>
    <div class="trust">
      <div class="trust-row"><span class="trust-k">Confidence</span> <span class="trust-v">{conf}</span></div>
      <div class="trust-row"><span class="trust-k">Why</span> <span class="trust-v">{conf_why}</span></div>
      <div class="trust-row"><span class="trust-k">Source</span> <span class="trust-v">{source}</span></div>
    </div>
    <div class="t3-f">
      <a href="{link}" target="_blank" rel="noreferrer">Open source</a>
    </div>
  </div>
</article>
"#,
        rank = index + 1,
        title = fmt::escape(&s.title),
        summary = fmt::escape(&s.summary),
        why = fmt::escape(&s.why_it_matters),
        watch = fmt::escape(&s.watch_for),
        say = fmt::escape(&s.what_to_say),
        conf = confidence_label(s.confidence),
        conf_why = fmt::escape(&s.confidence_reason),
        source = fmt::escape(&s.source),
        link = fmt::escape(link),
    )
}

/// Player source path, prefixed with `/` unless already rooted.
fn rooted(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

fn audio(doc: &TodayDocument) -> String {
    if doc.audio.latest.is_empty() {
        return "<p id=\"audio-meta\" class=\"muted\">Audio unavailable.</p>\n".to_string();
    }
    let src = fmt::escape(&rooted(&doc.audio.latest));
    let transcript = fmt::escape(&doc.audio.transcript);
    format!(
        r#"<audio id="audio-player" controls src="{src}"></audio>
<p id="audio-meta">Transcript: <a href="/{transcript}" target="_blank" rel="noreferrer">open</a> · <a href="{src}" download>download</a></p>
"#
    )
}

fn cards(doc: &TodayDocument) -> String {
    doc.cards
        .iter()
        .take(MAX_CARDS)
        .enumerate()
        .map(|(i, png)| {
            let url = fmt::escape(&format!("/{}", png.trim_start_matches('/')));
            format!(
                r#"<figure class="cardimg">
  <a href="{url}" target="_blank" rel="noreferrer"><img src="{url}" alt="Pulseboard shareable" loading="lazy" decoding="async" /></a>
  <figcaption><span class="muted">Card {n}</span> <a class="dl" href="{url}" download>download</a></figcaption>
</figure>
"#,
                n = i + 1,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AudioPointers;
    use chrono::TimeZone;
    use std::collections::BTreeMap;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 8, 16, 12, 0, 0).unwrap()
    }

    fn doc_with_variants(names: &[&str]) -> TodayDocument {
        let mut variants = BTreeMap::new();
        for name in names {
            variants.insert(
                name.to_string(),
                Variant {
                    angle: format!("{name} angle"),
                    ..Variant::default()
                },
            );
        }
        TodayDocument {
            date: "2025-08-16".into(),
            updated_utc: "2025-08-16T11:58:00Z".into(),
            variants,
            ..TodayDocument::default()
        }
    }

    #[test]
    fn confidence_label_boundaries() {
        assert_eq!(confidence_label(0.75), "High");
        assert_eq!(confidence_label(0.749999), "Medium");
        assert_eq!(confidence_label(0.55), "Medium");
        assert_eq!(confidence_label(0.549999), "Low");
        assert_eq!(confidence_label(0.0), "Low");
        assert_eq!(confidence_label(1.0), "High");
    }

    #[test]
    fn lens_falls_back_to_neutral_then_nothing() {
        let doc = doc_with_variants(&["neutral", "cheeky"]);
        assert_eq!(resolve_variant(&doc, "cheeky").unwrap().angle, "cheeky angle");
        assert_eq!(resolve_variant(&doc, "eli12").unwrap().angle, "neutral angle");

        let empty = doc_with_variants(&[]);
        assert!(resolve_variant(&empty, "neutral").is_none());
        assert_eq!(view(&empty, "neutral", now()).angle, "");
    }

    #[test]
    fn view_fills_header_mounts() {
        let doc = doc_with_variants(&["neutral"]);
        let v = view(&doc, "neutral", now());
        assert_eq!(v.kicker, "Your Pulse (2025-08-16)");
        assert_eq!(v.title, "You’re up to speed.");
        assert_eq!(v.updated, "Updated 2m ago");
        assert_eq!(v.updated_abs, "2025-08-16 11:58:00Z");
        assert_eq!(v.meta, "Endpoint: /data/today.json");
    }

    #[test]
    fn lens_detail_line_shows_variant_extras() {
        let mut doc = doc_with_variants(&[]);
        doc.variants.insert(
            "neutral".into(),
            Variant {
                angle: "High signal, low noise.".into(),
                what_to_say: vec!["Reusable line one".into(), "Reusable line two".into()],
                signal: Some(0.82),
                time_s: Some(180),
            },
        );
        let v = view(&doc, "neutral", now());
        assert_eq!(
            v.lens_detail,
            "What to say: “Reusable line one” · signal 0.82 · 3 min"
        );
    }

    #[test]
    fn lens_detail_is_empty_when_the_variant_has_no_extras() {
        let doc = doc_with_variants(&["neutral"]);
        assert_eq!(view(&doc, "neutral", now()).lens_detail, "");

        let empty = doc_with_variants(&[]);
        assert_eq!(view(&empty, "neutral", now()).lens_detail, "");
    }

    #[test]
    fn lens_detail_escapes_the_reusable_line() {
        let mut doc = doc_with_variants(&[]);
        doc.variants.insert(
            "neutral".into(),
            Variant {
                what_to_say: vec!["watch the <levers> & quotes".into()],
                ..Variant::default()
            },
        );
        let v = view(&doc, "neutral", now());
        assert!(v.lens_detail.contains("watch the &lt;levers&gt; &amp; quotes"));
    }

    #[test]
    fn stories_are_ranked_and_capped_at_three() {
        let mut doc = doc_with_variants(&["neutral"]);
        doc.the3 = (0..5)
            .map(|i| StoryCard {
                title: format!("story {i}"),
                confidence: 0.8,
                ..StoryCard::default()
            })
            .collect();
        let v = view(&doc, "neutral", now());
        assert!(v.stories.contains("<div class=\"t3-k\">1</div>"));
        assert!(v.stories.contains("<div class=\"t3-k\">3</div>"));
        assert!(!v.stories.contains("<div class=\"t3-k\">4</div>"));
        assert!(v.stories.contains("story 2"));
        assert!(!v.stories.contains("story 3"));
        assert_eq!(v.count, "3 stories");
    }

    #[test]
    fn story_markup_escapes_and_labels() {
        let s = StoryCard {
            title: "A <b>bold</b> claim".into(),
            summary: "it & that".into(),
            confidence: 0.6,
            confidence_reason: "single source".into(),
            source: "Wire".into(),
            link: String::new(),
            ..StoryCard::default()
        };
        let html = story(0, &s);
        assert!(html.contains("A &lt;b&gt;bold&lt;/b&gt; claim"));
        assert!(html.contains("it &amp; that"));
        assert!(html.contains(">Medium</span>"));
        assert!(html.contains("href=\"#\""));
    }

    #[test]
    fn audio_absent_shows_unavailable_only() {
        let doc = doc_with_variants(&["neutral"]);
        let html = audio(&doc);
        assert!(html.contains("Audio unavailable."));
        assert!(!html.contains("<audio"));
    }

    #[test]
    fn audio_paths_are_rooted_once() {
        let mut doc = doc_with_variants(&["neutral"]);
        doc.audio = AudioPointers {
            latest: "audio/2025-08-16.mp3".into(),
            transcript: "audio/2025-08-16.txt".into(),
        };
        let html = audio(&doc);
        assert!(html.contains("src=\"/audio/2025-08-16.mp3\""));
        assert!(html.contains("href=\"/audio/2025-08-16.txt\""));

        doc.audio.latest = "/audio/rooted.mp3".into();
        assert!(audio(&doc).contains("src=\"/audio/rooted.mp3\""));
    }

    #[test]
    fn cards_cap_at_seven_and_number_from_one() {
        let mut doc = doc_with_variants(&["neutral"]);
        doc.cards = (0..9).map(|i| format!("cards/c{i}.png")).collect();
        let html = cards(&doc);
        assert_eq!(html.matches("<figure").count(), 7);
        assert!(html.contains("Card 1"));
        assert!(html.contains("Card 7"));
        assert!(!html.contains("Card 8"));
        assert!(html.contains("src=\"/cards/c0.png\""));
    }

    #[test]
    fn card_paths_collapse_leading_slashes() {
        let mut doc = doc_with_variants(&["neutral"]);
        doc.cards = vec!["//cards/c.png".into()];
        assert!(cards(&doc).contains("href=\"/cards/c.png\""));
    }
}
