use super::*;

#[test]
fn defaults_when_unset() {
    let config = EndpointConfig::from_values(None, None);
    assert_eq!(config.api_url, "http://localhost:8000");
    assert_eq!(config.ws_url, "ws://localhost:8000/ws");
    assert_eq!(config, EndpointConfig::default());
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let config = EndpointConfig::from_values(Some(""), Some("   "));
    assert_eq!(config, EndpointConfig::default());
}

#[test]
fn explicit_values_are_trimmed() {
    let config = EndpointConfig::from_values(Some(" https://api.revolution-x.com/ "), Some("wss://rt.revolution-x.com/ws//"));
    assert_eq!(config.api_url, "https://api.revolution-x.com");
    assert_eq!(config.ws_url, "wss://rt.revolution-x.com/ws");
}

#[test]
fn build_env_produces_non_empty_urls() {
    let config = EndpointConfig::from_build_env();
    assert!(!config.api_url.is_empty());
    assert!(!config.ws_url.is_empty());
}
