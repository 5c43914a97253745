//! Tests for /api/colors/matching, /api/palette and /health.

mod common;

use axum::http::StatusCode;
use color_harmony::NamedPalette;
use common::TestApp;
use pretty_assertions::assert_eq;
use zmoda::api::{MatchingResponse, PaletteResponse};

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();

    let response = app.get("/health").await;

    common::assert_ok(&response);
    assert_eq!(response.text(), "OK");
}

#[tokio::test]
async fn test_matching_colors_for_magenta() {
    let app = TestApp::new();

    let response = app
        .post_json("/api/colors/matching", r##"{"hex": "#ff00ff"}"##)
        .await;

    common::assert_ok(&response);
    let matching: MatchingResponse = response.json();
    assert_eq!(matching.base.name, "Magenta");
    assert_eq!(matching.base.hex, "#FF00FF");
    // 300° + 180° = 120°, pure green at the same saturation/lightness
    assert_eq!(matching.complementary.hex, "#00FF00");
    assert!(!matching.complementary.name.is_empty());
    assert_eq!(matching.analogous.len(), 2);
}

#[tokio::test]
async fn test_matching_accepts_short_hex() {
    let app = TestApp::new();

    let response = app
        .post_json("/api/colors/matching", r#"{"hex": "f0f"}"#)
        .await;

    common::assert_ok(&response);
    let matching: MatchingResponse = response.json();
    assert_eq!(matching.base.hex, "#FF00FF");
}

#[tokio::test]
async fn test_matching_rejects_invalid_hex() {
    let app = TestApp::new();

    for body in [
        r##"{"hex": "#12345"}"##,
        r#"{"hex": "zzzzzz"}"#,
        r#"{"hex": ""}"#,
    ] {
        let response = app.post_json("/api/colors/matching", body).await;
        common::assert_json_error(&response, StatusCode::BAD_REQUEST);
        let json: serde_json::Value = response.json();
        assert!(json["error"].as_str().unwrap().starts_with("Invalid color"));
    }
}

#[tokio::test]
async fn test_matching_requires_hex_field() {
    let app = TestApp::new();

    let response = app.post_json("/api/colors/matching", "{}").await;

    common::assert_json_error(&response, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_palette_lists_builtin_and_configured_colors() {
    let app = TestApp::new();

    let response = app.get("/api/palette").await;

    common::assert_ok(&response);
    let palette: PaletteResponse = response.json();
    // Embedded config.yaml adds two neutrals
    assert_eq!(palette.colors.len(), NamedPalette::builtin().len() + 2);

    let navy = palette.colors.iter().find(|c| c.name == "Navy").unwrap();
    assert_eq!(navy.hex, "#1B2A4A");
    assert_eq!(navy.family, "chromatic");

    let oat = palette.colors.iter().find(|c| c.name == "Oat").unwrap();
    assert_eq!(oat.family, "neutral");
}

#[tokio::test]
async fn test_palette_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(
        &path,
        r##"
palette:
  - { name: Zmoda Pink, hex: "#e8a0bf", family: chromatic }
  - { name: Navy, hex: "#000080", family: chromatic }
"##,
    )
    .unwrap();

    let app = TestApp::with_config_file(path);
    let palette: PaletteResponse = app.get("/api/palette").await.json();

    // Clashing name is skipped, the new one normalized
    assert_eq!(palette.colors.len(), NamedPalette::builtin().len() + 1);
    let pink = palette.colors.iter().find(|c| c.name == "Zmoda Pink").unwrap();
    assert_eq!(pink.hex, "#E8A0BF");
    assert!(palette.colors.iter().all(|c| c.name != "Oat"));
}
