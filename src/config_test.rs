use std::collections::HashMap;

use super::*;

fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
    let map: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    Config::from_lookup(|key| map.get(key).cloned())
}

// =============================================================================
// DEFAULTS
// =============================================================================

#[test]
fn empty_environment_uses_defaults() {
    let cfg = config(&[]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.backend_url, DEFAULT_BACKEND_URL);
    assert_eq!(cfg.assets_dir, PathBuf::from(DEFAULT_ASSETS_DIR));
    assert_eq!(cfg.max_upload_bytes, DEFAULT_MAX_UPLOAD_BYTES);
    assert_eq!(cfg.proxy_timeout_secs, DEFAULT_PROXY_TIMEOUT_SECS);
}

#[test]
fn blank_values_count_as_unset() {
    let cfg = config(&[("FOLIO_PORT", "  "), ("FOLIO_BACKEND_URL", "")]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.backend_url, DEFAULT_BACKEND_URL);
}

// =============================================================================
// OVERRIDES
// =============================================================================

#[test]
fn overrides_are_parsed() {
    let cfg = config(&[
        ("FOLIO_PORT", "8080"),
        ("FOLIO_BACKEND_URL", "https://api.example.com/"),
        ("FOLIO_ASSETS_DIR", "/srv/site"),
        ("FOLIO_MAX_UPLOAD_BYTES", "1024"),
        ("FOLIO_PROXY_TIMEOUT_SECS", "5"),
    ])
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.backend_url, "https://api.example.com");
    assert_eq!(cfg.assets_dir, PathBuf::from("/srv/site"));
    assert_eq!(cfg.max_upload_bytes, 1024);
    assert_eq!(cfg.proxy_timeout_secs, 5);
}

#[test]
fn backend_url_loses_every_trailing_slash() {
    let cfg = config(&[("FOLIO_BACKEND_URL", "http://backend:8000//")]).unwrap();
    assert_eq!(cfg.backend_url, "http://backend:8000");
}

// =============================================================================
// ERRORS
// =============================================================================

#[test]
fn malformed_port_is_rejected() {
    let err = config(&[("FOLIO_PORT", "eighty")]).unwrap_err();
    assert_eq!(err, ConfigError::InvalidNumber { var: "FOLIO_PORT", value: "eighty".to_owned() });
    assert!(err.to_string().contains("FOLIO_PORT"));
}

#[test]
fn out_of_range_port_is_rejected() {
    assert!(matches!(config(&[("FOLIO_PORT", "70000")]), Err(ConfigError::InvalidNumber { .. })));
}

#[test]
fn backend_url_without_scheme_is_rejected() {
    let err = config(&[("FOLIO_BACKEND_URL", "backend:8000")]).unwrap_err();
    assert_eq!(err, ConfigError::InvalidBackendUrl("backend:8000".to_owned()));
}
