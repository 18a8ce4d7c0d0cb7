//! Tests for the simulated error catalog

use std::collections::HashSet;

use insta::assert_snapshot;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;

#[test]
fn test_catalog_has_three_distinct_entries_per_locale() {
    for locale in Locale::ALL {
        let catalog = error_catalog(locale);
        let unique: HashSet<_> = catalog.iter().collect();
        assert_eq!(unique.len(), 3, "duplicate messages in {}", locale);
        assert!(catalog.iter().all(|m| !m.trim().is_empty()));
    }
}

#[test]
fn test_japanese_catalog() {
    assert_snapshot!(error_catalog(Locale::Ja).join("\n"), @r"
    ⏰ タイムアウト: サーバーの応答が遅すぎます
    🔧 サーバーエラー: 後でもう一度お試しください
    ⚠️ リクエスト制限: しばらく待ってください
    ");
}

#[test]
fn test_pick_covers_every_kind() {
    let mut rng = StdRng::seed_from_u64(7);
    let seen: HashSet<_> = (0..300).map(|_| MockErrorKind::pick(&mut rng)).collect();
    assert_eq!(seen.len(), 3);
}

#[test]
fn test_pick_is_roughly_uniform() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut counts = [0usize; 3];
    for _ in 0..9_000 {
        let kind = MockErrorKind::pick(&mut rng);
        let idx = MockErrorKind::ALL.iter().position(|k| *k == kind).unwrap();
        counts[idx] += 1;
    }
    // Expected 3000 each, sd ~45
    for count in counts {
        assert!((2700..=3300).contains(&count), "counts: {:?}", counts);
    }
}

#[test]
fn test_mock_error_reachable_from_ai_module() {
    let message = crate::ai::mock_error();
    assert!(error_catalog(Locale::Ja).contains(&message));
}

#[test]
fn test_simulated_error_displays_message() {
    let error = SimulatedError::new(MockErrorKind::RateLimit, Locale::En);
    assert_eq!(error.to_string(), "⚠️ Rate limited: please wait a moment");
    assert_eq!(error.kind, MockErrorKind::RateLimit);
}

#[test]
fn test_kind_serializes_snake_case() {
    let json = serde_json::to_string(&MockErrorKind::ServerError).unwrap();
    assert_eq!(json, "\"server_error\"");
}
