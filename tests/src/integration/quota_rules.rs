//! # Quota Rule Flows
//!
//! Drives the quota extension end-to-end the way the compiler front end
//! does: registry lookup, option dispatch, final check, then listing and
//! saving of the stored descriptor.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ft_core::{MatchRegistry, ProtocolFamily, XtError};
    use ft_match_quota::{QuotaDescriptor, QuotaMatch};
    use ft_runtime::{build_registry, ExtensionConfig};

    use crate::harness::{build_match, print_text, reparse_saved, save_text};

    // =========================================================================
    // TEST FIXTURES
    // =========================================================================

    /// Registry as the runtime wires it at startup.
    fn startup_registry() -> MatchRegistry {
        build_registry(&ExtensionConfig::default()).expect("default wiring succeeds")
    }

    // =========================================================================
    // REGISTRATION
    // =========================================================================

    #[test]
    fn test_startup_registers_quota_bundle() {
        let registry = startup_registry();

        assert!(registry.is_registered("quota"));
        let quota = registry.get("quota").unwrap();
        assert_eq!(quota.name(), "quota");
        assert_eq!(quota.family(), ProtocolFamily::Unspec);

        let layout = quota.layout();
        assert_eq!(layout.wire_size, 24);
        assert_eq!(layout.userspace_size, 16);
    }

    #[test]
    fn test_registry_snapshot_serializes() {
        let registry = startup_registry();
        let json = serde_json::to_value(registry.describe()).unwrap();

        assert_eq!(json[0]["name"], "quota");
        assert_eq!(json[0]["family"], "Unspec");
        assert_eq!(json[0]["wire_size"], 24);
        assert_eq!(json[0]["userspace_size"], 16);
    }

    #[test]
    fn test_duplicate_registration_is_rejected() {
        let registry = startup_registry();
        let err = registry.register(Arc::new(QuotaMatch::new())).unwrap_err();
        assert!(matches!(err, XtError::DuplicateMatch("quota")));
    }

    #[test]
    fn test_disabled_extension_is_absent() {
        let mut config = ExtensionConfig::default();
        config.disable("quota");
        // Disabling the only extension empties the build; wiring refuses it.
        assert!(build_registry(&config).is_err());
    }

    // =========================================================================
    // RULE CONSTRUCTION
    // =========================================================================

    #[test]
    fn test_plain_quota_rule() {
        let quota = QuotaMatch::new();
        let data = build_match(&quota, &["--quota", "12345"]).unwrap();

        let desc = QuotaDescriptor::decode(&data).unwrap();
        assert_eq!(desc.quota, 12_345);
        assert!(!desc.invert);
    }

    #[test]
    fn test_negated_quota_rule() {
        let quota = QuotaMatch::new();
        let data = build_match(&quota, &["!", "--quota", "99"]).unwrap();

        let desc = QuotaDescriptor::decode(&data).unwrap();
        assert_eq!(desc.quota, 99);
        assert!(desc.invert);
    }

    #[test]
    fn test_double_negation_is_rejected() {
        let quota = QuotaMatch::new();
        let err = build_match(&quota, &["!", "--quota", "!99"]).unwrap_err();
        assert_eq!(err.to_string(), "quota: unexpected '!'");
    }

    #[test]
    fn test_missing_quota_option_fails_final_check() {
        let quota = QuotaMatch::new();
        let err = build_match(&quota, &[]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Parameter problem: quota: the --quota argument must be specified"
        );
    }

    #[test]
    fn test_malformed_and_reserved_values_fail() {
        let quota = QuotaMatch::new();

        let err = build_match(&quota, &["--quota", "abc"]).unwrap_err();
        assert!(err.is_parameter_problem());
        assert!(err.to_string().contains("'abc'"));

        // u64::MAX is reserved by the enforcement engine.
        let err = build_match(&quota, &["--quota", "18446744073709551615"]).unwrap_err();
        assert!(err.is_parameter_problem());
    }

    #[test]
    fn test_missing_argument_token_fails() {
        let quota = QuotaMatch::new();
        let err = build_match(&quota, &["--quota"]).unwrap_err();
        assert!(err.is_parameter_problem());
    }

    // =========================================================================
    // LISTING AND SAVING
    // =========================================================================

    #[test]
    fn test_print_is_exact_and_never_shows_negation() {
        let quota = QuotaMatch::new();

        let plain = build_match(&quota, &["--quota", "42"]).unwrap();
        assert_eq!(print_text(&quota, &plain).unwrap(), "quota: 42 bytes");

        let negated = build_match(&quota, &["!", "--quota", "42"]).unwrap();
        assert_eq!(print_text(&quota, &negated).unwrap(), "quota: 42 bytes");
    }

    #[test]
    fn test_save_round_trips_plain_rule() {
        let quota = QuotaMatch::new();
        let data = build_match(&quota, &["--quota", "12345"]).unwrap();

        let saved = save_text(&quota, &data).unwrap();
        let reparsed = reparse_saved(&quota, &saved).unwrap();

        let desc = QuotaDescriptor::decode(&reparsed).unwrap();
        assert_eq!(desc.quota, 12_345);
        assert!(!desc.invert);
    }

    #[test]
    fn test_save_round_trips_negated_rule() {
        let quota = QuotaMatch::new();
        let data = build_match(&quota, &["!", "--quota", "99"]).unwrap();

        let saved = save_text(&quota, &data).unwrap();
        assert!(saved.starts_with("! "));

        let reparsed = reparse_saved(&quota, &saved).unwrap();
        let desc = QuotaDescriptor::decode(&reparsed).unwrap();
        assert_eq!(desc.quota, 99);
        assert!(desc.invert);
    }

    #[test]
    fn test_round_trip_through_registry_lookup() {
        let registry = startup_registry();
        let quota = registry.get("quota").unwrap();

        let data = build_match(quota.as_ref(), &["--quota", "1073741824"]).unwrap();
        let saved = save_text(quota.as_ref(), &data).unwrap();
        let reparsed = reparse_saved(quota.as_ref(), &saved).unwrap();

        assert_eq!(
            QuotaDescriptor::decode(&data).unwrap(),
            QuotaDescriptor::decode(&reparsed).unwrap()
        );
    }
}
