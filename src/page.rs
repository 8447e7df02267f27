//! Page Store
//!
//! Holds the HTML served at `/`. An application can replace it at runtime
//! (for example with a sign-in page), otherwise the built front end's
//! `index.html` is served, and failing that a small built-in page.

use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

/// Served when neither a custom page nor the built front end is available.
pub const FALLBACK_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Webpanel</title>
</head>
<body class="light-theme">
    <button class="btn">Dark</button>
    <div id="msg"></div>
    <button id="button">Send</button>
    <p>The front end has not been built. Run <code>trunk build</code> in <code>webpanel-ui</code>.</p>
</body>
</html>
"#;

/// Where the current page came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSource {
    /// Set through the API or loaded from the configured page file
    Custom,
    /// `index.html` of the static directory
    Static,
    /// [`FALLBACK_PAGE`]
    Fallback,
}

pub struct PageStore {
    custom: RwLock<Option<String>>,
    static_dir: PathBuf,
}

impl PageStore {
    pub fn new(static_dir: impl Into<PathBuf>) -> Self {
        Self {
            custom: RwLock::new(None),
            static_dir: static_dir.into(),
        }
    }

    /// Create a store whose custom page is read from `path`
    pub async fn with_page_file(
        static_dir: impl Into<PathBuf>,
        path: &Path,
    ) -> std::io::Result<Self> {
        let html = tokio::fs::read_to_string(path).await?;
        let store = Self::new(static_dir);
        store.set(html).await;
        Ok(store)
    }

    /// Replace the page served at `/`
    pub async fn set(&self, html: String) {
        *self.custom.write().await = Some(html);
    }

    /// Drop the custom page. Returns whether one was set.
    pub async fn reset(&self) -> bool {
        self.custom.write().await.take().is_some()
    }

    pub fn static_dir(&self) -> &Path {
        &self.static_dir
    }

    /// The page to serve right now
    pub async fn current(&self) -> (PageSource, String) {
        if let Some(html) = self.custom.read().await.clone() {
            return (PageSource::Custom, html);
        }

        let index = self.static_dir.join("index.html");
        match tokio::fs::read_to_string(&index).await {
            Ok(html) => (PageSource::Static, html),
            Err(e) => {
                tracing::debug!(path = ?index, error = %e, "Static index unavailable, serving fallback page");
                (PageSource::Fallback, FALLBACK_PAGE.to_string())
            }
        }
    }
}
