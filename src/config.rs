use std::net::SocketAddr;
use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Chartscribe";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter when RUST_LOG is not set.
pub fn default_log_filter() -> String {
    format!("info,{}=debug", env!("CARGO_PKG_NAME"))
}

/// Get the application data directory
/// ~/Chartscribe/ on all platforms unless CHARTSCRIBE_DATA_DIR overrides it
pub fn app_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("CHARTSCRIBE_DATA_DIR") {
        return PathBuf::from(dir);
    }
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("Chartscribe")
}

/// Directory holding medications.json / providers.json.
/// A bundled ./data directory wins so a checkout runs without any setup.
pub fn reference_data_dir() -> PathBuf {
    let bundled = PathBuf::from("data");
    if bundled.is_dir() {
        return bundled;
    }
    app_data_dir().join("data")
}

/// Directory of static frontend assets served at `/`.
pub fn assets_dir() -> PathBuf {
    match std::env::var("CHARTSCRIBE_ASSETS_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => PathBuf::from("assets"),
    }
}

/// Socket address the HTTP server binds to (CHARTSCRIBE_BIND, default local).
pub fn bind_addr() -> SocketAddr {
    std::env::var("CHARTSCRIBE_BIND")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 3000)))
}
