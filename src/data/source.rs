use anyhow::Result;
use async_trait::async_trait;

/// Anything that can hand back the raw text of a reference document.
///
/// The browser build fetches over HTTP, the helper binary reads from disk and
/// tests serve from memory. `?Send` because browser futures are not `Send`.
#[async_trait(?Send)]
pub trait DocumentSource {
    // Either the document text OR an anyhow::Error describing why not
    async fn fetch_text(&self, location: &str) -> Result<String>;

    /// A unique identifier for this implementation (so log lines say where data came from).
    fn signature(&self) -> &'static str;
}

#[cfg(target_arch = "wasm32")]
pub use self::http::HttpSource;

#[cfg(target_arch = "wasm32")]
mod http {
    use super::DocumentSource;
    use anyhow::{Result, anyhow, bail};
    use async_trait::async_trait;
    use gloo::net::http::Request;

    /// Fetches documents relative to the page URL.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct HttpSource;

    #[async_trait(?Send)]
    impl DocumentSource for HttpSource {
        async fn fetch_text(&self, location: &str) -> Result<String> {
            let response = Request::get(location)
                .send()
                .await
                .map_err(|e| anyhow!("request for {} failed: {}", location, e))?;

            if !response.ok() {
                bail!("{} answered HTTP {}", location, response.status());
            }

            response
                .text()
                .await
                .map_err(|e| anyhow!("reading body of {} failed: {}", location, e))
        }

        fn signature(&self) -> &'static str {
            "HTTP fetch"
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use self::file::FileSource;

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use super::DocumentSource;
    use anyhow::{Context, Result};
    use async_trait::async_trait;
    use std::path::PathBuf;

    /// Reads documents from a directory laid out like the deployed site root.
    #[derive(Debug, Clone)]
    pub struct FileSource {
        root: PathBuf,
    }

    impl FileSource {
        pub fn new(root: impl Into<PathBuf>) -> Self {
            Self { root: root.into() }
        }
    }

    #[async_trait(?Send)]
    impl DocumentSource for FileSource {
        async fn fetch_text(&self, location: &str) -> Result<String> {
            let path = self.root.join(location);
            std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))
        }

        fn signature(&self) -> &'static str {
            "Local files"
        }
    }
}
