// ABOUTME: Integration tests for provider selection and per-family domain sets
// ABOUTME: Exercises the factory and end-to-end resolution on the test host

use cubby::provider::provider_for;
use cubby::{user_dirs, Domain, ResolveError};
use serial_test::serial;

/// Helper to clear every env var the providers consult
fn clear_provider_env_vars() {
    std::env::remove_var("XDG_CONFIG_HOME");
    std::env::remove_var("XDG_DATA_HOME");
    std::env::remove_var("XDG_CACHE_HOME");
    std::env::remove_var("XDG_RUNTIME_DIR");
    std::env::remove_var("APPDATA");
    std::env::remove_var("LOCALAPPDATA");
    std::env::remove_var("TEMP");
}

#[cfg(target_os = "linux")]
#[test]
#[serial]
fn test_host_resolution_yields_the_full_xdg_set() {
    clear_provider_env_vars();

    let dirs = user_dirs("cubbytest").unwrap();
    assert_eq!(dirs.family(), "xdg");
    assert_eq!(dirs.domains().count(), 11);
    for (domain, dir) in dirs.domains() {
        assert!(dir.is_absolute(), "{} resolved to a relative path", domain);
    }
}

#[test]
#[serial]
fn test_windows_family_set_through_factory() {
    clear_provider_env_vars();

    let provider = provider_for("windows").unwrap();
    let map = provider.resolve("app").unwrap();
    assert_eq!(map.len(), 8);
    for domain in [Domain::Downloads, Domain::Public, Domain::Templates] {
        assert!(!map.contains_key(&domain));
    }
    for dir in map.values() {
        assert!(dir.is_absolute());
    }
}

#[test]
#[serial]
fn test_generic_family_set_through_factory() {
    clear_provider_env_vars();

    let provider = provider_for("plan9").unwrap();
    assert_eq!(provider.family(), "generic");
    let map = provider.resolve("app").unwrap();
    assert_eq!(map.len(), 6);
    for domain in [
        Domain::Config,
        Domain::Data,
        Domain::Cache,
        Domain::Runtime,
        Domain::Documents,
        Domain::Downloads,
    ] {
        assert!(map.contains_key(&domain), "missing {}", domain);
    }
}

#[test]
fn test_macos_family_fails_before_any_mapping() {
    let err = provider_for("macos").err().expect("should error for macos");
    assert!(matches!(err, ResolveError::UnsupportedPlatform { .. }));
    assert!(err.to_string().contains("macos"));
}
