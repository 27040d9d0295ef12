//! Opening `url` button targets in a new browsing context.

/// Error returned by [`open_in_new_tab`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    /// No `window` is reachable.
    #[error("no browser window available")]
    NoWindow,
    /// `window.open` threw or returned no window (popup blocked).
    #[error("window.open blocked for {0}")]
    Blocked(String),
}

/// Open `url` with target `_blank`.
///
/// # Errors
///
/// Returns a [`NavigationError`] when the browser refuses; outside the browser
/// this is a logged no-op.
pub fn open_in_new_tab(url: &str) -> Result<(), NavigationError> {
    #[cfg(feature = "csr")]
    {
        let window = web_sys::window().ok_or(NavigationError::NoWindow)?;
        match window.open_with_url_and_target(url, "_blank") {
            Ok(Some(_)) => Ok(()),
            Ok(None) | Err(_) => Err(NavigationError::Blocked(url.to_owned())),
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::debug!("open {url} skipped outside the browser");
        Ok(())
    }
}
