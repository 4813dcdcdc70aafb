use tracing::debug;

use crate::domain::ports::BrowserPort;

/// Opens links with the platform's default browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowser;

impl BrowserPort for SystemBrowser {
    fn open_url(&self, url: &str) -> std::io::Result<()> {
        debug!(url, "Opening in browser");
        opener::open_browser(url).map_err(std::io::Error::other)
    }
}
