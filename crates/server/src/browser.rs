use tracing::{info, warn};

/// Open `url` in the user's default browser. Failure is logged, never fatal.
pub fn open_browser(url: &str) {
    match webbrowser::open(url) {
        Ok(()) => info!("Opened browser at {}", url),
        Err(e) => warn!("Failed to open browser automatically: {}", e),
    }
}
