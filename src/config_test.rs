use super::*;

#[test]
fn default_points_at_relative_api_root() {
    let config = ClientConfig::from_values(None, None);
    assert_eq!(config.api_base_url, "/api");
    assert_eq!(config.log_level, log::Level::Info);
}

#[test]
fn api_url_drops_trailing_slashes() {
    let config = ClientConfig::from_values(Some("https://api.example.com/v1//"), None);
    assert_eq!(config.api_base_url, "https://api.example.com/v1");
}

#[test]
fn blank_api_url_falls_back_to_default() {
    let config = ClientConfig::from_values(Some("  / "), None);
    assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn log_level_parses_case_insensitively() {
    let config = ClientConfig::from_values(None, Some("DEBUG"));
    assert_eq!(config.log_level, log::Level::Debug);
}

#[test]
fn unknown_log_level_keeps_default() {
    let config = ClientConfig::from_values(None, Some("chatty"));
    assert_eq!(config.log_level, log::Level::Info);
}
