//! Deserializing carousel options from host option records.
//!
//! Run: cargo test -p glide-carousel --features serde --test config_serde

use glide_carousel::{CarouselConfig, ConfigError, NavigationMode};

#[test]
fn camel_case_record_with_loop_key() {
    let config: CarouselConfig = serde_json::from_str(
        r#"{ "slidesVisible": 3, "slidesToScroll": 2, "loop": true, "pagination": true }"#,
    )
    .expect("valid record");

    assert_eq!(config.slides_visible, 3);
    assert_eq!(config.slides_to_scroll, 2);
    assert!(config.looping);
    assert!(config.pagination);
    assert!(config.navigation, "unspecified options keep defaults");
    assert_eq!(config.validate(), Ok(NavigationMode::Looped));
}

#[test]
fn empty_record_is_default() {
    let config: CarouselConfig = serde_json::from_str("{}").expect("valid record");
    assert_eq!(config, CarouselConfig::default());
}

#[test]
fn breakpoint_and_threshold_keys() {
    let config: CarouselConfig =
        serde_json::from_str(r#"{ "mobileBreakpoint": 600, "commitThreshold": 0.3 }"#)
            .expect("valid record");
    assert_eq!(config.mobile_breakpoint, 600.0);
    assert_eq!(config.commit_threshold, 0.3);
}

#[test]
fn contradictory_record_fails_validation() {
    let config: CarouselConfig =
        serde_json::from_str(r#"{ "loop": true, "infinite": true }"#).expect("valid record");
    assert_eq!(config.validate(), Err(ConfigError::LoopAndInfinite));
}

#[test]
fn serializes_with_host_names() {
    let value = serde_json::to_value(CarouselConfig::default().looping(true)).expect("serialize");
    assert_eq!(value["loop"], true);
    assert_eq!(value["slidesVisible"], 1);
    assert!(value.get("looping").is_none());
}
