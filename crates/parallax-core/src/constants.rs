// Tuning constants and defaults shared by the core pipeline and the web front-end.

// Sensor input
pub const ROTATION_DIVISOR: f32 = 30.0; // degrees of tilt mapped to one unit of input

// Calibration
pub const DEFAULT_CALIBRATION_THRESHOLD: f32 = 100.0; // |delta| that forces an immediate re-zero
pub const DEFAULT_CALIBRATION_DELAY_MS: u32 = 500; // initial settle time before the first re-zero
pub const DEFAULT_SUPPORT_DELAY_MS: u32 = 500; // sensor liveness window before falling back

// Motion shaping
pub const DEFAULT_SCALAR: f32 = 10.0; // percent of element size per unit of input
pub const DEFAULT_FRICTION: f32 = 0.1; // smoothing coefficient, (0, 1]
pub const DEFAULT_ORIGIN: f32 = 0.5; // normalized center of the element/window

// Rendering
pub const DEFAULT_PRECISION: usize = 1; // decimal places written to CSS lengths
pub const MAX_PRECISION: usize = 10;

// User agents that are treated as handheld devices with usable sensors.
pub const MOBILE_AGENT_MARKERS: &[&str] = &[
    "iphone",
    "ipod",
    "ipad",
    "android",
    "blackberry",
    "bb10",
    "mobi",
    "tablet",
    "opera mini",
    "nexus 7",
];
