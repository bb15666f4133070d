// Host-side tests for layer offsets and the CSS values written for them.

use glam::{BVec2, Vec2};
use parallax_core::layer::css_px;
use parallax_core::*;

#[test]
fn zero_depth_layer_never_moves() {
    let layer = Layer::new(0.0, 0.0);
    for v in [Vec2::new(50.0, -20.0), Vec2::new(-1e4, 1e4), Vec2::ZERO] {
        for invert in [BVec2::FALSE, BVec2::TRUE] {
            let o = layer.offset(v, invert);
            assert_eq!(o.x.abs(), 0.0);
            assert_eq!(o.y.abs(), 0.0);
        }
    }
}

#[test]
fn offset_is_velocity_times_depth() {
    let layer = Layer::new(0.5, 2.0);
    let o = layer.offset(Vec2::new(10.0, 3.0), BVec2::FALSE);
    assert_eq!(o, Vec2::new(5.0, 6.0));
}

#[test]
fn inverting_x_only_negates_x() {
    let layer = Layer::new(0.8, 1.2);
    let v = Vec2::new(7.0, -4.0);
    let plain = layer.offset(v, BVec2::new(false, false));
    let flipped = layer.offset(v, BVec2::new(true, false));
    assert_eq!(flipped.x, -plain.x);
    assert_eq!(flipped.y, plain.y);
}

#[test]
fn depth_attributes_fall_back_to_depth() {
    let l = Layer::from_attributes(
        &AttrValue::parse("0.4"),
        &AttrValue::Null,
        &AttrValue::parse("1.5"),
    );
    assert_eq!(l.depth, Vec2::new(0.4, 1.5));

    // Explicit zero on an axis is honoured
    let l = Layer::from_attributes(
        &AttrValue::parse("1"),
        &AttrValue::parse("0"),
        &AttrValue::Null,
    );
    assert_eq!(l.depth, Vec2::new(0.0, 1.0));

    // Nothing set, or garbage, means static
    let l = Layer::from_attributes(&AttrValue::Null, &AttrValue::parse("deep"), &AttrValue::Null);
    assert_eq!(l.depth, Vec2::ZERO);
}

#[test]
fn css_px_rounds_to_precision() {
    assert_eq!(css_px(1.26, 1), "1.3px");
    assert_eq!(css_px(-3.0, 0), "-3px");
    assert_eq!(css_px(2.0, 2), "2.00px");
    assert_eq!(css_px(f32::NAN, 1), "0.0px");
}

#[test]
fn css_px_never_writes_negative_zero() {
    assert_eq!(css_px(-0.0, 1), "0.0px");
    assert_eq!(css_px(-0.04, 1), "0.0px");
    assert_eq!(css_px(-0.4, 0), "0px");
    assert_eq!(css_px(-0.004, 2), "0.00px");
    assert_eq!(css_px(-0.06, 1), "-0.1px");
}

#[test]
fn layer_position_prefers_3d_then_2d_then_offsets() {
    let o = Vec2::new(1.26, -2.4);
    assert_eq!(
        LayerPosition::new(o, 1, TransformSupport::ThreeD),
        LayerPosition::Transform("translate3d(1.3px,-2.4px,0)".into())
    );
    assert_eq!(
        LayerPosition::new(o, 2, TransformSupport::TwoD),
        LayerPosition::Transform("translate(1.26px,-2.40px)".into())
    );
    assert_eq!(
        LayerPosition::new(o, 0, TransformSupport::None),
        LayerPosition::Offset {
            left: "1px".into(),
            top: "-2px".into(),
        }
    );
}
