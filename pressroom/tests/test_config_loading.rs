use pressroom::site_config::SiteConfig;
use std::path::PathBuf;

/// Test that the example site configuration exists in the test fixtures
#[test]
fn test_fixture_config_exists() {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/content/pressroom.toml");

    assert!(
        config_path.exists(),
        "site configuration should exist at {:?}",
        config_path
    );
}

/// Test that the example site configuration can be loaded and parsed
#[test]
fn test_fixture_config_loads() {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/content/pressroom.toml");

    let config = SiteConfig::load(&config_path).expect("Should be able to load the configuration");

    assert_eq!(config.site_title.as_deref(), Some("Pressroom Example Site"));
    assert_eq!(
        config.media_base_url.as_deref(),
        Some("https://cdn.example.com/media")
    );
    assert_eq!(config.default_tags, vec!["notes".to_string()]);
}
