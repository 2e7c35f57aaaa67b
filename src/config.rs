/// Application-level constants
pub const APP_NAME: &str = "Noteflow";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Request timeout for the completion service, in seconds.
pub const COMPLETION_TIMEOUT_SECS: u64 = 60;

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> &'static str {
    "info,noteflow=debug"
}
