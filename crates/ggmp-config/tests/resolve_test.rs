//! End-to-end resolution scenarios
//!
//! Exercises the full pipeline: external definitions in, effective constant
//! table and typed platform configuration out.

use ggmp_config::{ExternalDefines, GgmpError, Origin, PlatformConfig, keys, resolve_table};

#[test]
fn no_externals_and_enabled_resolves_to_local_services() {
    let config = PlatformConfig::resolve(&ExternalDefines::new()).unwrap();

    assert!(config.ggmp_enabled);
    assert_eq!(config.effective_keymaster_url.as_deref(), Some("http://localhost:3001"));
    assert_eq!(config.effective_policy_url.as_deref(), Some("http://localhost:3002"));
    assert_eq!(config.effective_nucleus_url.as_deref(), Some("http://localhost:3003"));
    assert_eq!(config.policy_live_endpoint.as_deref(), Some("http://localhost:3002/"));
    assert_eq!(config.effective_product_name.as_deref(), Some("GGMP"));
}

#[test]
fn override_wins_over_external_policy_endpoint() {
    let external = ExternalDefines::new().with(keys::CFX_POLICY_URL, "https://example.com");
    let config = PlatformConfig::resolve(&external).unwrap();

    // The platform policy endpoint is unconditionally redirected
    assert_eq!(config.effective_policy_url.as_deref(), Some("http://localhost:3002"));
    assert_eq!(config.policy_live_endpoint.as_deref(), Some("http://localhost:3002/"));

    let define = config.defines.get(keys::CFX_POLICY_URL).unwrap();
    assert!(define.overridden);
    assert_eq!(define.origin, Origin::Endpoints);
}

#[test]
fn disabled_leaves_every_override_target_untouched() {
    let external = ExternalDefines::new()
        .with(keys::GGMP_ENABLED, false)
        .with(keys::PRODUCT_NAME, "Some Platform")
        .with(keys::CFX_KEYMASTER_URL, "https://keymaster.example.com")
        .with(keys::CFX_POLICY_URL, "https://policy.example.com")
        .with(keys::POLICY_LIVE_ENDPOINT, "https://policy.example.com/live/");
    let config = PlatformConfig::resolve(&external).unwrap();

    assert!(!config.ggmp_enabled);
    assert_eq!(config.effective_product_name.as_deref(), Some("Some Platform"));
    assert_eq!(
        config.effective_keymaster_url.as_deref(),
        Some("https://keymaster.example.com")
    );
    assert_eq!(config.effective_policy_url.as_deref(), Some("https://policy.example.com"));
    assert_eq!(
        config.policy_live_endpoint.as_deref(),
        Some("https://policy.example.com/live/")
    );
    // A target the build never defined stays undefined
    assert_eq!(config.effective_nucleus_url, None);

    // Nothing was overridden anywhere in the table, and every retained
    // target carries its real origin
    assert!(config.defines.iter().all(|d| !d.overridden));
    for key in [keys::PRODUCT_NAME, keys::CFX_KEYMASTER_URL, keys::CFX_POLICY_URL] {
        assert_eq!(config.defines.get(key).unwrap().origin, Origin::External);
    }
}

#[test]
fn branding_literals_hold_regardless_of_enable_flag() {
    for enabled in [false, true] {
        let external = ExternalDefines::new().with(keys::GGMP_ENABLED, enabled);
        let config = PlatformConfig::resolve(&external).unwrap();

        assert_eq!(config.product_name, "GGMP");
        assert_eq!(config.product_full_name, "Game Global Multiplayer Platform");
        assert_eq!(config.product_version, "1.0.0");
        assert_eq!(config.window_title, "GGMP - Game Global Multiplayer Platform");
        assert_eq!(config.server_title, "GGMP Server");
        assert_eq!(config.client_title, "GGMP Client");
    }
}

#[test]
fn external_service_url_beats_default_and_feeds_redirect() {
    let external = ExternalDefines::new().with(keys::GGMP_POLICY_URL, "http://policy.lan:9000");
    let config = PlatformConfig::resolve(&external).unwrap();

    assert_eq!(config.policy_url, "http://policy.lan:9000");
    assert_eq!(config.effective_policy_url.as_deref(), Some("http://policy.lan:9000"));
    assert_eq!(config.policy_live_endpoint.as_deref(), Some("http://policy.lan:9000/"));

    // The define-if-absent key carries the external origin
    let define = config.defines.get(keys::GGMP_POLICY_URL).unwrap();
    assert_eq!(define.origin, Origin::External);
}

#[test]
fn conflicting_branding_redefinition_fails_resolution() {
    let external = ExternalDefines::new().with(keys::GGMP_WINDOW_TITLE, "Someone Else's Window");
    let err = PlatformConfig::resolve(&external).unwrap_err();

    match err {
        GgmpError::DefineConflict { key, .. } => assert_eq!(key, keys::GGMP_WINDOW_TITLE),
        other => panic!("expected a definition conflict, got {other}"),
    }
}

#[test]
fn identical_external_branding_value_is_not_a_conflict() {
    let external = ExternalDefines::new().with(keys::GGMP_PRODUCT_NAME, "GGMP");
    let config = PlatformConfig::resolve(&external).unwrap();
    assert_eq!(config.product_name, "GGMP");
}

#[test]
fn defines_file_drives_resolution() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("build.defines");
    std::fs::write(
        &path,
        "# build overrides\nGGMP_KEYMASTER_URL=http://keymaster.lan:3001\nGGMP_MAX_PLAYERS=128\n",
    )
    .unwrap();

    let external = ExternalDefines::from_env_file(&path).unwrap();
    let config = PlatformConfig::resolve(&external).unwrap();

    assert_eq!(config.keymaster_url, "http://keymaster.lan:3001");
    assert_eq!(config.effective_keymaster_url.as_deref(), Some("http://keymaster.lan:3001"));
    assert_eq!(config.max_players, 128);
}

#[test]
fn external_limits_and_platform_info_resolve_without_conflict() {
    let external = ExternalDefines::new()
        .with(keys::GGMP_MAX_PLAYERS, 128u64)
        .with(keys::GGMP_STREAMING_MEMORY, 0x200_0000u64)
        .with(keys::GGMP_PREMIUM_ENABLED, false)
        .with(keys::GGMP_PLATFORM_NAME, "GGMP-Dev");

    let config = PlatformConfig::resolve(&external).unwrap();

    assert_eq!(config.max_players, 128);
    assert_eq!(config.streaming_memory, 0x200_0000);
    assert!(!config.premium_enabled);
    assert_eq!(config.platform_name, "GGMP-Dev");
    // Untouched limits keep their defaults
    assert_eq!(config.platform_version, "1.0.0");
}

#[test]
fn resolved_table_exports_as_env_lines() {
    let table = resolve_table(&ExternalDefines::new()).unwrap();
    let exported = table.to_env_format();

    assert!(exported.contains("CFX_KEYMASTER_URL=http://localhost:3001"));
    assert!(exported.contains("POLICY_LIVE_ENDPOINT=http://localhost:3002/"));
    assert!(exported.contains("GGMP_MAX_PLAYERS=2048"));
    assert!(exported.contains("GGMP_WINDOW_TITLE=\"GGMP - Game Global Multiplayer Platform\""));
}

#[test]
fn resolution_is_deterministic() {
    let external = ExternalDefines::new().with(keys::CFX_POLICY_URL, "https://example.com");

    let first = resolve_table(&external).unwrap();
    let second = resolve_table(&external).unwrap();

    let a: Vec<_> = first.iter().collect();
    let b: Vec<_> = second.iter().collect();
    assert_eq!(a, b);
}
