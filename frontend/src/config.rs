/// Configuration for the admin console

/// Base URL of the marketplace REST API.
/// Overridden at compile time via `BRANDBOARD_API_BASE`,
/// e.g. `BRANDBOARD_API_BASE=https://api.example.com/api/v1 trunk build --release`
pub const API_BASE: &str = match option_env!("BRANDBOARD_API_BASE") {
    Some(url) => url,
    None => "http://localhost:5000/api/v1",
};

/// Platform name shown in the sidebar header and on the login card.
pub const PLATFORM_NAME: &str = match option_env!("BRANDBOARD_PLATFORM_NAME") {
    Some(name) => name,
    None => "Brandboard",
};
