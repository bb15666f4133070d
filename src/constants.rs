// DOM-facing names shared by the web front-end.

// Scene markup
pub const LAYER_CLASS: &str = "layer"; // marker class for depth planes
pub const DATA_PREFIX: &str = "data-"; // declarative config lives in data-* attributes
pub const DEPTH_ATTR: &str = "depth";
pub const DEPTH_X_ATTR: &str = "depth-x";
pub const DEPTH_Y_ATTR: &str = "depth-y";

// Caller options
pub const ON_READY_OPTION: &str = "onReady";

// Window events
pub const ORIENTATION_EVENT: &str = "deviceorientation";
pub const MOTION_EVENT: &str = "devicemotion";
pub const POINTER_EVENT: &str = "pointermove";
pub const RESIZE_EVENT: &str = "resize";

// Global constructors whose presence signals sensor support
pub const ORIENTATION_API: &str = "DeviceOrientationEvent";
pub const MOTION_API: &str = "DeviceMotionEvent";

// Transform capability probe
pub const TRANSFORM_PROBE_VALUE: &str = "translate3d(1px,1px,1px)";

// Styles that promote an element to its own compositing layer
pub const ACCELERATE_STYLES: [(&str, &str); 3] = [
    ("transform", "translate3d(0,0,0)"),
    ("transform-style", "preserve-3d"),
    ("backface-visibility", "hidden"),
];
