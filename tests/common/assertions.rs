//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use zmoda::models::ColorAdvice;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status, expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert response is a JSON error with the given status
pub fn assert_json_error(response: &TestResponse, expected: StatusCode) {
    assert_status(response, expected);
    let json: serde_json::Value = response.json();
    assert_eq!(
        json["status"].as_u64(),
        Some(expected.as_u16() as u64),
        "Expected JSON status {}, got {:?}. Full response: {}",
        expected.as_u16(),
        json["status"],
        serde_json::to_string_pretty(&json).unwrap()
    );
    assert!(json["error"].is_string(), "Expected error message string");
}

/// Assert advice response is valid and return it
pub fn assert_valid_advice(response: &TestResponse) -> ColorAdvice {
    assert_ok(response);
    let advice: ColorAdvice = response.json();

    assert!(!advice.summary.is_empty(), "Summary should not be empty");
    assert!(advice.pairings.len() <= 2, "At most two pairings");
    for pairing in &advice.pairings {
        assert!(!pairing.colors.is_empty(), "Pairing without colors");
        for color in &pairing.colors {
            assert!(
                color.hex.len() == 7 && color.hex.starts_with('#'),
                "Accent hex should be #RRGGBB, got {}",
                color.hex
            );
            assert_eq!(color.hex, color.hex.to_uppercase());
        }
    }
    advice
}

/// Names of every suggested accent
pub fn accent_names(advice: &ColorAdvice) -> Vec<String> {
    advice
        .pairings
        .iter()
        .flat_map(|p| p.colors.iter().map(|c| c.name.clone()))
        .collect()
}
