//! Error presenter: a single flagged card that replaces the primary content
//! region when the page's main document cannot be loaded.

use crate::error::LoadError;
use crate::fmt;

pub fn card(err: &LoadError) -> String {
    card_text(&err.message(), err.path())
}

pub fn card_text(message: &str, endpoint: &str) -> String {
    format!(
        r#"<section class="error-card">
<h2>Pulse unavailable</h2>
<p>{}</p>
<p class="muted">Endpoint: {}</p>
</section>
"#,
        fmt::escape(message),
        fmt::escape(endpoint),
    )
}
