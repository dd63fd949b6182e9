//! Shared formatting helpers: relative/absolute timestamps, HTML escaping,
//! and the per-source accent hash. Everything here is pure; callers pass in
//! `now` when they need deterministic output.

use chrono::{DateTime, Utc};

/// Parse an ISO-8601 timestamp into UTC. Returns `None` for anything that
/// does not parse, which downstream helpers display as "—".
pub fn parse_utc(iso: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(iso)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Relative "time ago" label measured against an explicit `now`.
///
/// Buckets: `<60s` seconds, `<60m` minutes, `<48h` hours, then days.
/// Missing or unparsable input renders as "—". Future timestamps clamp to 0s.
pub fn time_ago_at(iso: Option<&str>, now: DateTime<Utc>) -> String {
    let Some(t) = iso.and_then(parse_utc) else {
        return "—".to_string();
    };
    let secs = (now - t).num_seconds().max(0);
    if secs < 60 {
        return format!("{secs}s ago");
    }
    let mins = secs / 60;
    if mins < 60 {
        return format!("{mins}m ago");
    }
    let hours = mins / 60;
    if hours < 48 {
        return format!("{hours}h ago");
    }
    format!("{}d ago", hours / 24)
}

/// Relative label against the current wall clock.
pub fn time_ago(iso: Option<&str>) -> String {
    time_ago_at(iso, Utc::now())
}

/// Absolute UTC form used in tooltips: `YYYY-MM-DD HH:MM:SSZ`, fractional
/// seconds stripped. Missing or unparsable input renders as "—".
pub fn fmt_utc(iso: Option<&str>) -> String {
    match iso.and_then(parse_utc) {
        Some(t) => t.format("%Y-%m-%d %H:%M:%SZ").to_string(),
        None => "—".to_string(),
    }
}

/// Escape untrusted text for HTML bodies and attribute values alike.
/// This is the sole injection defense; every render function routes
/// feed-provided strings through here.
pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Cosmetic per-source accent class, stable across reloads for the same
/// source string.
pub fn accent_class(source: &str) -> &'static str {
    const ACCENTS: [&str; 3] = ["accent-0", "accent-1", "accent-2"];
    ACCENTS[(fnv1a32(source) % 3) as usize]
}

// FNV-1a, 32-bit: xor each byte into the hash, then multiply by the prime.
fn fnv1a32(s: &str) -> u32 {
    let mut hash: u32 = 2_166_136_261;
    for b in s.bytes() {
        hash ^= u32::from(b);
        hash = hash.wrapping_mul(16_777_619);
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn time_ago_bucket_boundaries() {
        let now = Utc.with_ymd_and_hms(2025, 8, 16, 12, 0, 0).unwrap();
        let cases = [
            ("2025-08-16T11:59:01Z", "59s ago"),
            ("2025-08-16T11:59:00Z", "1m ago"),
            ("2025-08-16T11:00:01Z", "59m ago"),
            ("2025-08-16T11:00:00Z", "1h ago"),
            // 47h59m is still hours, 48h flips to days
            ("2025-08-14T12:01:00Z", "47h ago"),
            ("2025-08-14T12:00:00Z", "2d ago"),
        ];
        for (iso, want) in cases {
            assert_eq!(time_ago_at(Some(iso), now), want, "for {iso}");
        }
    }

    #[test]
    fn time_ago_future_clamps_to_zero() {
        let now = Utc.with_ymd_and_hms(2025, 8, 16, 12, 0, 0).unwrap();
        assert_eq!(time_ago_at(Some("2025-08-16T12:05:00Z"), now), "0s ago");
    }

    #[test]
    fn time_ago_invalid_is_dash() {
        let now = Utc::now();
        assert_eq!(time_ago_at(None, now), "—");
        assert_eq!(time_ago_at(Some(""), now), "—");
        assert_eq!(time_ago_at(Some("not-a-date"), now), "—");
    }

    #[test]
    fn fmt_utc_strips_millis_and_uses_space() {
        assert_eq!(
            fmt_utc(Some("2025-08-16T10:30:05.123456+00:00")),
            "2025-08-16 10:30:05Z"
        );
        assert_eq!(fmt_utc(Some("2025-08-16T10:30:05Z")), "2025-08-16 10:30:05Z");
        assert_eq!(fmt_utc(None), "—");
        assert_eq!(fmt_utc(Some("garbage")), "—");
    }

    #[test]
    fn escape_covers_all_five_characters() {
        assert_eq!(
            escape(r#"<script>&"'"#),
            "&lt;script&gt;&amp;&quot;&#39;"
        );
        assert_eq!(escape("plain text"), "plain text");
    }

    #[test]
    fn accent_class_is_stable_and_in_range() {
        let first = accent_class("Reuters");
        for _ in 0..10 {
            assert_eq!(accent_class("Reuters"), first);
        }
        for src in ["Reuters", "AP", "BBC", "", "Ünïcode Wire"] {
            assert!(["accent-0", "accent-1", "accent-2"].contains(&accent_class(src)));
        }
    }
}
