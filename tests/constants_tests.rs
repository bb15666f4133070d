// Host-side tests for the DOM-facing constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use parallax_core::ConfigKey;

#[test]
fn event_names_are_lowercase_dom_events() {
    for name in [ORIENTATION_EVENT, MOTION_EVENT, POINTER_EVENT, RESIZE_EVENT] {
        assert!(!name.is_empty());
        assert_eq!(name, name.to_ascii_lowercase());
    }
}

#[test]
fn depth_attributes_do_not_collide_with_config_keys() {
    for attr in [DEPTH_ATTR, DEPTH_X_ATTR, DEPTH_Y_ATTR] {
        assert!(
            ConfigKey::from_name(attr).is_none(),
            "{attr} is also a config key"
        );
    }
    assert!(DEPTH_X_ATTR.starts_with(DEPTH_ATTR));
    assert!(DEPTH_Y_ATTR.starts_with(DEPTH_ATTR));
}

#[test]
fn on_ready_is_not_a_config_key() {
    assert!(ConfigKey::from_name(ON_READY_OPTION).is_none());
}

#[test]
fn acceleration_starts_from_an_identity_3d_transform() {
    let (property, value) = ACCELERATE_STYLES[0];
    assert_eq!(property, "transform");
    assert_eq!(value, "translate3d(0,0,0)");
    assert!(TRANSFORM_PROBE_VALUE.starts_with("translate3d("));
}
