//! Pulse feed rendering: newest-first, grouped by source, one card per item,
//! plus the optional editor's brief section.

use std::cmp::Reverse;
use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::fmt;
use crate::model::{EditorDocument, FeedItem, PulseDocument};

/// Sort key: publication time, unparsable or missing timestamps as epoch
/// zero so they sink to the bottom.
fn published_ts(item: &FeedItem) -> i64 {
    item.published_utc
        .as_deref()
        .and_then(fmt::parse_utc)
        .map(|t| t.timestamp())
        .unwrap_or(0)
}

/// Newest-first view of the items. `sort_by_key` is stable, so items with
/// equal timestamps keep their original relative order.
pub fn sorted_items(doc: &PulseDocument) -> Vec<&FeedItem> {
    let mut items: Vec<&FeedItem> = doc.items.iter().collect();
    items.sort_by_key(|it| Reverse(published_ts(it)));
    items
}

/// Group already-sorted items by source, preserving first-seen group order.
pub fn grouped<'a>(items: &[&'a FeedItem]) -> Vec<(&'a str, Vec<&'a FeedItem>)> {
    let mut order: Vec<&str> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<Vec<&FeedItem>> = Vec::new();
    for &item in items {
        let source = item.source.as_str();
        let at = *index.entry(source).or_insert_with(|| {
            order.push(source);
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[at].push(item);
    }
    order.into_iter().zip(groups).collect()
}

/// The whole feed region.
pub fn feed(doc: &PulseDocument, now: DateTime<Utc>) -> String {
    let items = sorted_items(doc);
    let mut out = String::new();
    for (source, members) in grouped(&items) {
        let suffix = if members.len() == 1 { "item" } else { "items" };
        out.push_str(&format!(
            "<section class=\"feed-group\">\n<h2 class=\"feed-src\">{} <span class=\"feed-count\">{} {}</span></h2>\n",
            fmt::escape(source),
            members.len(),
            suffix
        ));
        for item in members {
            out.push_str(&card(item, now));
        }
        out.push_str("</section>\n");
    }
    out
}

fn card(item: &FeedItem, now: DateTime<Utc>) -> String {
    let when = fmt::time_ago_at(item.published_utc.as_deref(), now);
    let abs = fmt::fmt_utc(item.published_utc.as_deref());
    format!(
        r#"<article class="feed-card {accent}">
  <a class="feed-title" href="{link}" target="_blank" rel="noreferrer">{title}</a>
  <div class="feed-meta"><span class="feed-source">{source}</span> · <span class="feed-when" title="{abs}">{when}</span></div>
</article>
"#,
        accent = fmt::accent_class(&item.source),
        link = fmt::escape(&item.link),
        title = fmt::escape(&item.title),
        source = fmt::escape(&item.source),
        abs = fmt::escape(&abs),
        when = fmt::escape(&when),
    )
}

/// The editor's brief section shown alongside the feed when `editor.json`
/// loads; omitted entirely when it does not.
pub fn editor_brief(doc: &EditorDocument) -> String {
    let themes = doc
        .top_themes
        .iter()
        .map(|t| format!("<li>{}</li>", fmt::escape(t)))
        .collect::<String>();
    let caption = if doc.most_memeable.caption.is_empty() {
        String::new()
    } else {
        format!(
            " <span class=\"muted\">{}</span>",
            fmt::escape(&doc.most_memeable.caption)
        )
    };
    format!(
        r#"<section class="brief">
<h2>Editor&#39;s brief</h2>
<p class="brief-text">{brief}</p>
<ul class="themes">{themes}</ul>
<div class="memeable">Most memeable: <a href="{link}" target="_blank" rel="noreferrer">{headline}</a>{caption}</div>
</section>
"#,
        brief = fmt::escape(&doc.editors_brief),
        link = fmt::escape(&doc.most_memeable.link),
        headline = fmt::escape(&doc.most_memeable.headline),
    )
}
