// Environment override parsing for concurrency settings
//
// Unset or blank -> absent; non-numeric or non-positive -> configuration error

#[path = "../helpers/mod.rs"]
mod helpers;

use ai_portal::concurrency::ConcurrencyOverrides;
use ai_portal::config::concurrency::parse_override;
use ai_portal::config::Config;
use ai_portal::core::AppError;
use helpers::env_lookup;
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_positive_integers_parse(value in 1usize..=1_000_000, pad in 0usize..3) {
        let raw = format!("{}{}{}", " ".repeat(pad), value, " ".repeat(pad));
        prop_assert_eq!(parse_override("PORTAL_WORKERS", Some(raw)).unwrap(), Some(value));
    }

    #[test]
    fn test_non_positive_integers_rejected(value in -1_000_000i64..=0) {
        let result = parse_override("PORTAL_THREADS", Some(value.to_string()));
        prop_assert!(matches!(result, Err(AppError::Configuration(_))));
    }

    #[test]
    fn test_non_numeric_rejected(raw in "[a-zA-Z][a-zA-Z0-9_.]{0,8}") {
        let result = parse_override("PORTAL_MAX_CONNECTIONS", Some(raw));
        prop_assert!(matches!(result, Err(AppError::Configuration(_))));
    }
}

#[test]
fn test_all_overrides_read() {
    let overrides = ConcurrencyOverrides::from_lookup(env_lookup(&[
        ("PORTAL_WORKERS", "6"),
        ("PORTAL_WORKERS_PER_CORE", "2"),
        ("PORTAL_THREADS", "2"),
        ("PORTAL_MAX_CONNECTIONS", "500"),
    ]))
    .unwrap();

    assert_eq!(
        overrides,
        ConcurrencyOverrides {
            workers: Some(6),
            workers_per_core: Some(2),
            threads: Some(2),
            max_connections: Some(500),
        }
    );
}

#[test]
fn test_blank_values_are_absent() {
    let overrides = ConcurrencyOverrides::from_lookup(env_lookup(&[
        ("PORTAL_WORKERS", ""),
        ("PORTAL_THREADS", "  "),
    ]))
    .unwrap();

    assert_eq!(overrides, ConcurrencyOverrides::default());
}

#[test]
fn test_decimal_value_rejected() {
    let err = ConcurrencyOverrides::from_lookup(env_lookup(&[("PORTAL_WORKERS_PER_CORE", "1.5")]))
        .unwrap_err();

    assert!(err.to_string().contains("PORTAL_WORKERS_PER_CORE"));
}

#[test]
fn test_negative_worker_count_stops_config_load() {
    let result = Config::from_lookup(env_lookup(&[("PORTAL_WORKERS", "-1")]));

    assert!(matches!(result, Err(AppError::Configuration(_))));
}
