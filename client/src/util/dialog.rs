//! Blocking acknowledgement dialogs.

/// Show `message` in a blocking browser alert. No-op outside the browser.
pub fn acknowledge(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            log::warn!("no window for acknowledgement: {message}");
            return;
        };
        if let Err(err) = window.alert_with_message(message) {
            log::warn!("alert failed: {err:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        log::info!("acknowledged: {message}");
    }
}
