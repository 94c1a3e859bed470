use themis_config::{BuildKind, Version};

#[test]
fn release_version_has_no_suffix() {
    let version = Version::new(1, 2, 0, BuildKind::Release);
    assert_eq!(version.label(), "Version: 1.2.0");
    assert_eq!(version.release_flag(), 0);
}

#[test]
fn test_version_has_test_suffix() {
    let version = Version::new(1, 2, 0, BuildKind::Test);
    assert_eq!(version.label(), "Version: 1.2.0-test");
    assert_eq!(version.release_flag(), 1);
}

#[test]
fn patch_only_release() {
    assert_eq!(Version::release(0, 0, 1).label(), "Version: 0.0.1");
}

#[test]
fn release_flag_from_documented_values() {
    let from_flag =
        |flag| BuildKind::from_flag(flag).map(|build| Version::new(1, 2, 0, build).label());

    assert_eq!(from_flag(0).as_deref(), Some("Version: 1.2.0"));
    assert_eq!(from_flag(1).as_deref(), Some("Version: 1.2.0-test"));
    assert_eq!(from_flag(7), None);
}

#[test]
fn version_serializes_named_fields() {
    let json = serde_json::to_value(Version::new(3, 4, 5, BuildKind::Test)).expect("serialize");
    assert_eq!(json, serde_json::json!({ "major": 3, "minor": 4, "patch": 5, "build": "test" }));
}
