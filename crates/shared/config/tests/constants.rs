use themis_config::{FAN_COUNT, UDP_BUFFER_SIZE, VERSION, get_version};

#[test]
fn constants_match_configured_values() {
    assert_eq!(UDP_BUFFER_SIZE.get(), 2014);
    assert_eq!(FAN_COUNT.get(), 5);
    assert_eq!((VERSION.major, VERSION.minor, VERSION.patch), (1, 2, 0));
}

#[cfg(not(feature = "test-build"))]
#[test]
fn default_build_is_release() {
    assert!(VERSION.build.is_release());
    assert_eq!(get_version(), "Version: 1.2.0");
}

#[cfg(feature = "test-build")]
#[test]
fn test_build_feature_marks_version() {
    assert!(!VERSION.build.is_release());
    assert_eq!(get_version(), "Version: 1.2.0-test");
}

#[test]
fn get_version_is_idempotent() {
    let first = get_version();
    for _ in 0..16 {
        assert_eq!(get_version(), first);
    }
}
