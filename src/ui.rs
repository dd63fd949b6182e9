//! Page shells. Each page is a const template with `{{MOUNT}}` placeholders;
//! controllers produce the fragments and these helpers splice them in. All
//! fragment text arrives pre-escaped from the render layer.

use crate::fmt;
use crate::page::PulsePage;
use crate::render::today::TodayView;

/// Lens names the generator emits variants for.
pub const LENSES: [&str; 4] = ["neutral", "cheeky", "contrarian", "eli12"];

/// Splice fragments into a template in a single pass over the template.
/// Fragments are never rescanned, so feed text that happens to contain a
/// literal placeholder token stays literal. Unknown tokens are left as-is.
fn fill(template: &str, mounts: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start..];
        let Some(end) = after.find("}}") else {
            out.push_str(after);
            return out;
        };
        let token = &after[2..end];
        match mounts.iter().find(|(name, _)| *name == token) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&after[..end + 2]),
        }
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    out
}

pub fn today_shell(view: &TodayView, meter_html: &str, lens: &str) -> String {
    let options = lens_options(lens);
    fill(
        TODAY_HTML,
        &[
            ("CSS", SHARED_CSS),
            ("KICKER", &view.kicker),
            ("TITLE", &view.title),
            ("ANGLE", &view.angle),
            ("LENS_DETAIL", &view.lens_detail),
            ("COUNT", &view.count),
            ("UPDATED", &view.updated),
            ("UPDATED_ABS", &view.updated_abs),
            ("STORIES", &view.stories),
            ("AUDIO", &view.audio),
            ("CARDS", &view.cards),
            ("METER", meter_html),
            ("LENS_OPTIONS", &options),
            ("META", &view.meta),
        ],
    )
}

pub fn pulse_shell(page: &PulsePage) -> String {
    fill(
        PULSE_HTML,
        &[
            ("CSS", SHARED_CSS),
            ("FEED", &page.feed),
            ("BRIEF", &page.brief),
            ("UPDATED", &page.updated),
            ("UPDATED_ABS", &page.updated_abs),
            ("META", &page.meta),
        ],
    )
}

fn lens_options(current: &str) -> String {
    let mut out = String::new();
    for name in LENSES {
        let selected = if name == current { " selected" } else { "" };
        out.push_str(&format!("<option value=\"{name}\"{selected}>{name}</option>"));
    }
    // A persisted lens the generator no longer emits still shows as chosen.
    if !LENSES.contains(&current) {
        out.push_str(&format!(
            "<option value=\"{0}\" selected>{0}</option>",
            fmt::escape(current)
        ));
    }
    out
}

const SHARED_CSS: &str = r#"
    :root { --bg: #0e0f12; --ink: #e8e6e1; --muted: #9a968e; --card: #17181d; --line: #26272e;
            --accent-a: #8b7cf6; --accent-b: #5aa7e8; --accent-c: #e8b45a; }
    * { box-sizing: border-box; }
    body { margin: 0; background: var(--bg); color: var(--ink);
           font-family: "Inter", "Helvetica Neue", sans-serif; padding: 28px 16px 56px; }
    main { width: min(760px, 100%); margin: 0 auto; display: grid; gap: 22px; }
    a { color: inherit; }
    h1 { margin: 0; font-size: 1.8rem; }
    h2 { margin: 0 0 10px; font-size: 1.1rem; }
    .muted { color: var(--muted); }
    .kicker { text-transform: uppercase; letter-spacing: 0.12em; font-size: 0.8rem; color: var(--muted); }
    section.card { background: var(--card); border: 1px solid var(--line); border-radius: 14px; padding: 18px; }
    .error-card { background: #2a1518; border: 1px solid #5c2a30; border-radius: 14px; padding: 18px; }
    .feed-group { margin-bottom: 18px; }
    .feed-src { border-bottom: 1px solid var(--line); padding-bottom: 6px; }
    .feed-count { color: var(--muted); font-size: 0.85rem; font-weight: 400; }
    .feed-card { padding: 10px 12px; border-left: 3px solid var(--line); margin: 8px 0; }
    .feed-card.accent-0 { border-left-color: var(--accent-a); }
    .feed-card.accent-1 { border-left-color: var(--accent-b); }
    .feed-card.accent-2 { border-left-color: var(--accent-c); }
    .feed-title { text-decoration: none; font-weight: 600; }
    .feed-meta { color: var(--muted); font-size: 0.85rem; margin-top: 4px; }
    .t3 { display: flex; gap: 14px; padding: 14px 0; border-bottom: 1px solid var(--line); }
    .t3-k { font-size: 1.4rem; font-weight: 700; color: var(--muted); }
    .t3-h { font-weight: 600; }
    .t3-insight { margin-top: 4px; }
    .t3-r span, .trust-k { color: var(--muted); margin-right: 6px; }
    .trust { margin-top: 8px; font-size: 0.9rem; }
    .meter-track { background: var(--line); border-radius: 999px; height: 8px; overflow: hidden; }
    #meter-fill { background: var(--accent-a); height: 100%; transition: width 200ms ease; }
    #meter-steps span { margin-right: 12px; color: var(--muted); }
    #meter-steps span.done { color: var(--ink); }
    #cards { display: flex; gap: 12px; overflow-x: auto; }
    .cardimg img { max-height: 180px; border-radius: 10px; }
"#;

const TODAY_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Pulseboard — Today</title>
  <style>{{CSS}}</style>
</head>
<body>
  <main>
    <header>
      <div id="today-kicker" class="kicker">{{KICKER}}</div>
      <h1 id="today-title">{{TITLE}}</h1>
      <p id="today-angle">{{ANGLE}}</p>
      <p id="lens-detail" class="muted">{{LENS_DETAIL}}</p>
      <div class="muted">
        <span id="count">{{COUNT}}</span> ·
        <span id="updated" title="{{UPDATED_ABS}}">{{UPDATED}}</span> ·
        <form id="lens-form" method="post" action="/lens" style="display:inline">
          <select id="lens" name="lens" onchange="this.form.submit()">{{LENS_OPTIONS}}</select>
        </form>
      </div>
    </header>

    <section class="card" id="meter">
{{METER}}
    </section>

    <section class="card">
      <h2>The 3</h2>
      <div id="the3">
{{STORIES}}
      </div>
    </section>

    <section class="card">
      <h2>Listen</h2>
      <div id="audio">
{{AUDIO}}
      </div>
    </section>

    <section class="card">
      <h2>Share</h2>
      <div id="cards">
{{CARDS}}
      </div>
    </section>

    <footer id="meta" class="muted">{{META}}</footer>
  </main>

  <script>
    const markStep = async (step) => {
      try {
        const res = await fetch(`/meter/${step}`, { method: 'POST' });
        if (res.ok) {
          document.getElementById('meter').innerHTML = await res.text();
        }
      } catch (_) { /* milestone tracking is best-effort */ }
    };

    const player = document.getElementById('audio-player');
    if (player) {
      player.addEventListener('play', () => markStep('audio'), { once: true });
    }
    const grid = document.getElementById('cards');
    if (grid) {
      grid.addEventListener('click', () => markStep('cards'), { once: true });
    }
  </script>
</body>
</html>
"#;

const PULSE_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Pulseboard — Pulse</title>
  <style>{{CSS}}</style>
</head>
<body>
  <main>
    <header>
      <div class="kicker">Pulseboard</div>
      <h1>The pulse</h1>
      <div class="muted"><span id="stamp" title="{{UPDATED_ABS}}">{{UPDATED}}</span></div>
    </header>

    <div id="feed">
{{FEED}}
    </div>

    <div id="brief">
{{BRIEF}}
    </div>

    <footer id="meta" class="muted">{{META}}</footer>
  </main>
</body>
</html>
"#;
