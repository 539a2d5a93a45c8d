//! Embedded client page.
//!
//! The client is a single static HTML document compiled into the binary.
//! Its API base is injected at build time through `PALABRA_API_URL`; the
//! empty default makes the page talk to the origin it was served from.

use axum::response::Html;
use once_cell::sync::Lazy;

const INDEX_HTML: &str = include_str!("../assets/index.html");

static PAGE: Lazy<String> = Lazy::new(|| {
    let api_base = option_env!("PALABRA_API_URL").unwrap_or("");
    INDEX_HTML.replace("{{API_BASE}}", api_base.trim_end_matches('/'))
});

/// `GET /`
pub async fn index() -> Html<&'static str> {
    Html(PAGE.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_has_no_unfilled_placeholder() {
        assert!(!PAGE.contains("{{API_BASE}}"));
    }

    #[test]
    fn test_page_has_the_two_panels() {
        assert!(PAGE.contains("Traducir"));
        assert!(PAGE.contains("Diccionario (CRUD)"));
    }
}
