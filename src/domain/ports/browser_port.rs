/// Opens links outside the terminal.
pub trait BrowserPort: Send + Sync {
    /// Opens `url` in the user's browser.
    ///
    /// # Errors
    /// Returns error if no browser could be launched.
    fn open_url(&self, url: &str) -> std::io::Result<()>;
}
