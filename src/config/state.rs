// Application state module
// Read-only state shared by every request handler

use crate::assets::AssetProvider;
use crate::render::PageRenderer;

use super::types::Config;

/// Application state
///
/// Built once at startup and never mutated afterwards, so it is safe
/// for unlimited concurrent reads without locks.
pub struct AppState {
    pub config: Config,
    pub renderer: PageRenderer,
    pub assets: AssetProvider,
}

impl AppState {
    /// Assemble the shared state from loaded configuration
    ///
    /// Fails if the embedded template is missing or does not parse;
    /// the server must not start in that case.
    pub fn new(config: Config) -> Result<Self, Box<dyn std::error::Error>> {
        let renderer = PageRenderer::new(&config.page)?;
        let assets = AssetProvider::new(&config.static_files.route_prefix);
        Ok(Self {
            config,
            renderer,
            assets,
        })
    }
}
