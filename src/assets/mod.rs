//! Asset provider module
//!
//! Serves the embedded static asset set. The set is packed into the
//! binary at compile time, so it is closed at build time: no runtime
//! additions, and lookups cannot escape the bundle.

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::path::Path;

use crate::http::mime;

/// Static assets bundled into the binary at compile time
#[derive(RustEmbed)]
#[folder = "static/"]
struct StaticAssets;

/// Read-only provider resolving request paths to embedded asset bytes
pub struct AssetProvider {
    route_prefix: String,
}

impl AssetProvider {
    pub fn new(route_prefix: &str) -> Self {
        Self {
            route_prefix: route_prefix.to_string(),
        }
    }

    /// Whether a request path falls under the configured asset prefix
    pub fn matches(&self, path: &str) -> bool {
        path.starts_with(&self.route_prefix)
    }

    /// Look up an asset by request path
    ///
    /// Strips the route prefix and resolves the remainder against the
    /// embedded set. Returns the exact bundled bytes and a content type
    /// inferred from the file extension, or `None` on a miss. Directory
    /// paths never resolve; there is no index lookup or listing.
    pub fn get(&self, path: &str) -> Option<(Cow<'static, [u8]>, &'static str)> {
        let relative = path.strip_prefix(&self.route_prefix)?;
        if relative.is_empty() || relative.ends_with('/') {
            return None;
        }

        let file = StaticAssets::get(relative)?;
        let content_type =
            mime::content_type_for(Path::new(relative).extension().and_then(|e| e.to_str()));
        Some((file.data, content_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> AssetProvider {
        AssetProvider::new("/static/")
    }

    #[test]
    fn test_hit_returns_bundled_bytes() {
        let (data, content_type) = provider()
            .get("/static/style.css")
            .expect("bundled asset should resolve");
        assert_eq!(data.as_ref(), include_bytes!("../../static/style.css"));
        assert_eq!(content_type, "text/css");
    }

    #[test]
    fn test_content_type_inference() {
        let (_, content_type) = provider()
            .get("/static/favicon.svg")
            .expect("bundled asset should resolve");
        assert_eq!(content_type, "image/svg+xml");
    }

    #[test]
    fn test_miss_returns_none() {
        assert!(provider().get("/static/missing.css").is_none());
    }

    #[test]
    fn test_traversal_cannot_escape_bundle() {
        assert!(provider().get("/static/../Cargo.toml").is_none());
        assert!(provider().get("/static/../../etc/passwd").is_none());
    }

    #[test]
    fn test_directory_paths_do_not_resolve() {
        assert!(provider().get("/static/").is_none());
        assert!(provider().get("/static/css/").is_none());
    }

    #[test]
    fn test_unprefixed_path_does_not_match() {
        let p = provider();
        assert!(!p.matches("/style.css"));
        assert!(p.get("/style.css").is_none());
        assert!(p.matches("/static/style.css"));
    }
}
