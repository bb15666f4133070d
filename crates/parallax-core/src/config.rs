//! Effect configuration and the declarative attribute parser.
//!
//! Configuration is assembled once per effect from three layers, in
//! increasing priority: built-in defaults, caller-supplied options and the
//! root element's `data-*` attributes. Each layer is a list of loosely typed
//! key/value pairs ([`AttrValue`]) that [`Config::set`] checks against the
//! field it targets.

use crate::constants::*;
use crate::error::{ParallaxError, Result};
use glam::{BVec2, Vec2};

/// Tagged value produced by deserializing a declarative attribute.
#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    Bool(bool),
    Null,
    Number(f64),
    Str(String),
}

impl AttrValue {
    /// Deserialize an attribute string: `"true"`/`"false"` become booleans,
    /// `"null"` becomes [`AttrValue::Null`], a string that reads as a finite
    /// number becomes [`AttrValue::Number`] and anything else is kept as text.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "true" => Self::Bool(true),
            "false" => Self::Bool(false),
            "null" => Self::Null,
            _ => match raw.trim().parse::<f64>() {
                Ok(n) if n.is_finite() => Self::Number(n),
                _ => Self::Str(raw.to_string()),
            },
        }
    }

    /// Deserialize an optional attribute; a missing attribute reads as `Null`.
    pub fn from_attribute(raw: Option<&str>) -> Self {
        raw.map(Self::parse).unwrap_or(Self::Null)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Str(s) => match s.trim().parse::<f64>() {
                Ok(n) if n.is_finite() => Some(n),
                _ => None,
            },
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    fn describe(&self) -> String {
        match self {
            Self::Bool(b) => b.to_string(),
            Self::Null => "null".to_string(),
            Self::Number(n) => n.to_string(),
            Self::Str(s) => format!("\"{s}\""),
        }
    }
}

/// Convert a hyphenated key (`limit-x`) to camelCase (`limitX`).
///
/// Runs of hyphens collapse and a trailing hyphen is dropped.
pub fn camel_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut upper_next = false;
    for ch in value.chars() {
        if ch == '-' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Per-axis clamp bound on shaped motion.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Limit {
    #[default]
    Unbounded,
    Bounded(f32),
}

impl Limit {
    #[inline]
    pub fn apply(self, value: f32) -> f32 {
        match self {
            Self::Unbounded => value,
            Self::Bounded(limit) => {
                let l = limit.abs();
                value.clamp(-l, l)
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Limits {
    pub x: Limit,
    pub y: Limit,
}

impl Limits {
    #[inline]
    pub fn apply(&self, motion: Vec2) -> Vec2 {
        Vec2::new(self.x.apply(motion.x), self.y.apply(motion.y))
    }
}

/// Every configurable field, addressable by its hyphenated attribute name or
/// its camelCase option name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    RelativeInput,
    ClipRelativeInput,
    CalibrationThreshold,
    CalibrationDelay,
    SupportDelay,
    CalibrateX,
    CalibrateY,
    InvertX,
    InvertY,
    LimitX,
    LimitY,
    ScalarX,
    ScalarY,
    FrictionX,
    FrictionY,
    OriginX,
    OriginY,
    PointerEvents,
    Precision,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 19] = [
        Self::RelativeInput,
        Self::ClipRelativeInput,
        Self::CalibrationThreshold,
        Self::CalibrationDelay,
        Self::SupportDelay,
        Self::CalibrateX,
        Self::CalibrateY,
        Self::InvertX,
        Self::InvertY,
        Self::LimitX,
        Self::LimitY,
        Self::ScalarX,
        Self::ScalarY,
        Self::FrictionX,
        Self::FrictionY,
        Self::OriginX,
        Self::OriginY,
        Self::PointerEvents,
        Self::Precision,
    ];

    /// Hyphenated name used for `data-*` attributes.
    pub fn attribute(self) -> &'static str {
        match self {
            Self::RelativeInput => "relative-input",
            Self::ClipRelativeInput => "clip-relative-input",
            Self::CalibrationThreshold => "calibration-threshold",
            Self::CalibrationDelay => "calibration-delay",
            Self::SupportDelay => "support-delay",
            Self::CalibrateX => "calibrate-x",
            Self::CalibrateY => "calibrate-y",
            Self::InvertX => "invert-x",
            Self::InvertY => "invert-y",
            Self::LimitX => "limit-x",
            Self::LimitY => "limit-y",
            Self::ScalarX => "scalar-x",
            Self::ScalarY => "scalar-y",
            Self::FrictionX => "friction-x",
            Self::FrictionY => "friction-y",
            Self::OriginX => "origin-x",
            Self::OriginY => "origin-y",
            Self::PointerEvents => "pointer-events",
            Self::Precision => "precision",
        }
    }

    /// Look a key up by either naming convention.
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = camel_case(name);
        Self::ALL
            .into_iter()
            .find(|k| camel_case(k.attribute()) == wanted)
    }
}

/// Immutable-after-construction effect parameters.
///
/// The tuning operations on [`crate::Parallax`] mutate these in place; every
/// other field is fixed once the effect is built.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub relative_input: bool,
    pub clip_relative_input: bool,
    pub calibration_threshold: f32,
    pub calibration_delay_ms: u32,
    pub support_delay_ms: u32,
    pub calibrate: BVec2,
    pub invert: BVec2,
    pub limit: Limits,
    pub scalar: Vec2,
    pub friction: Vec2,
    pub origin: Vec2,
    pub pointer_events: bool,
    pub precision: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            relative_input: false,
            clip_relative_input: false,
            calibration_threshold: DEFAULT_CALIBRATION_THRESHOLD,
            calibration_delay_ms: DEFAULT_CALIBRATION_DELAY_MS,
            support_delay_ms: DEFAULT_SUPPORT_DELAY_MS,
            calibrate: BVec2::new(false, true),
            invert: BVec2::new(true, true),
            limit: Limits::default(),
            scalar: Vec2::splat(DEFAULT_SCALAR),
            friction: Vec2::splat(DEFAULT_FRICTION),
            origin: Vec2::splat(DEFAULT_ORIGIN),
            pointer_events: true,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl Config {
    /// Apply one loosely typed value to the field named by `key`.
    ///
    /// `Null` means "not provided" and leaves the field untouched. On error
    /// the field keeps its previous value.
    pub fn set(&mut self, key: ConfigKey, value: &AttrValue) -> Result<()> {
        if value.is_null() {
            return Ok(());
        }
        let name = key.attribute();
        match key {
            ConfigKey::RelativeInput => self.relative_input = expect_bool(name, value)?,
            ConfigKey::ClipRelativeInput => self.clip_relative_input = expect_bool(name, value)?,
            ConfigKey::PointerEvents => self.pointer_events = expect_bool(name, value)?,
            ConfigKey::CalibrateX => self.calibrate.x = expect_bool(name, value)?,
            ConfigKey::CalibrateY => self.calibrate.y = expect_bool(name, value)?,
            ConfigKey::InvertX => self.invert.x = expect_bool(name, value)?,
            ConfigKey::InvertY => self.invert.y = expect_bool(name, value)?,
            ConfigKey::CalibrationThreshold => {
                self.calibration_threshold = expect_range(name, value, 0.0, f64::MAX)? as f32
            }
            ConfigKey::CalibrationDelay => {
                self.calibration_delay_ms = expect_range(name, value, 0.0, u32::MAX as f64)? as u32
            }
            ConfigKey::SupportDelay => {
                self.support_delay_ms = expect_range(name, value, 0.0, u32::MAX as f64)? as u32
            }
            ConfigKey::LimitX => self.limit.x = expect_limit(name, value)?,
            ConfigKey::LimitY => self.limit.y = expect_limit(name, value)?,
            ConfigKey::ScalarX => self.scalar.x = expect_number(name, value)? as f32,
            ConfigKey::ScalarY => self.scalar.y = expect_number(name, value)? as f32,
            ConfigKey::FrictionX => self.friction.x = expect_friction(name, value)?,
            ConfigKey::FrictionY => self.friction.y = expect_friction(name, value)?,
            ConfigKey::OriginX => self.origin.x = expect_range(name, value, 0.0, 1.0)? as f32,
            ConfigKey::OriginY => self.origin.y = expect_range(name, value, 0.0, 1.0)? as f32,
            ConfigKey::Precision => {
                let places = expect_range(name, value, 0.0, MAX_PRECISION as f64)?;
                self.precision = places.round() as usize
            }
        }
        Ok(())
    }

    /// Apply a value addressed by name, in either naming convention.
    pub fn set_named(&mut self, name: &str, value: &AttrValue) -> Result<()> {
        let key = ConfigKey::from_name(name).ok_or_else(|| ParallaxError::unknown_key(name))?;
        self.set(key, value)
    }

    pub fn set_calibrate(&mut self, x: Option<bool>, y: Option<bool>) {
        merge_axis(&mut self.calibrate.x, x);
        merge_axis(&mut self.calibrate.y, y);
    }

    pub fn set_invert(&mut self, x: Option<bool>, y: Option<bool>) {
        merge_axis(&mut self.invert.x, x);
        merge_axis(&mut self.invert.y, y);
    }

    /// Non-positive, non-finite or greater-than-one values are ignored for
    /// their axis.
    pub fn set_friction(&mut self, x: Option<f32>, y: Option<f32>) {
        merge_axis(&mut self.friction.x, x.filter(|v| valid_friction(*v, "friction-x")));
        merge_axis(&mut self.friction.y, y.filter(|v| valid_friction(*v, "friction-y")));
    }

    pub fn set_scalar(&mut self, x: Option<f32>, y: Option<f32>) {
        merge_axis(&mut self.scalar.x, x.filter(|v| v.is_finite()));
        merge_axis(&mut self.scalar.y, y.filter(|v| v.is_finite()));
    }

    pub fn set_limit(&mut self, x: Option<Limit>, y: Option<Limit>) {
        let finite = |l: &Limit| !matches!(l, Limit::Bounded(v) if !v.is_finite());
        merge_axis(&mut self.limit.x, x.filter(finite));
        merge_axis(&mut self.limit.y, y.filter(finite));
    }

    /// Values outside `[0, 1]` are ignored for their axis.
    pub fn set_origin(&mut self, x: Option<f32>, y: Option<f32>) {
        merge_axis(&mut self.origin.x, x.filter(|v| valid_origin(*v, "origin-x")));
        merge_axis(&mut self.origin.y, y.filter(|v| valid_origin(*v, "origin-y")));
    }
}

/// Collects configuration layers and merges them with a fixed precedence:
/// defaults < options < attributes, independent of the order the layers were
/// supplied in.
#[derive(Clone, Debug, Default)]
pub struct ConfigBuilder {
    options: Vec<(String, AttrValue)>,
    attributes: Vec<(String, AttrValue)>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn option(mut self, name: impl Into<String>, value: AttrValue) -> Self {
        self.options.push((name.into(), value));
        self
    }

    pub fn options<I, K>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, AttrValue)>,
        K: Into<String>,
    {
        self.options
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v)));
        self
    }

    pub fn attribute(mut self, name: impl Into<String>, value: AttrValue) -> Self {
        self.attributes.push((name.into(), value));
        self
    }

    pub fn attributes<I, K>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, AttrValue)>,
        K: Into<String>,
    {
        self.attributes
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v)));
        self
    }

    /// Merge all layers, returning the config and every rejected entry.
    pub fn build_with_report(self) -> (Config, Vec<ParallaxError>) {
        let mut config = Config::default();
        let mut rejected = Vec::new();
        for (name, value) in self.options.iter().chain(self.attributes.iter()) {
            if let Err(e) = config.set_named(name, value) {
                rejected.push(e);
            }
        }
        (config, rejected)
    }

    /// Merge all layers; rejected entries are logged and skipped.
    pub fn build(self) -> Config {
        let (config, rejected) = self.build_with_report();
        for e in &rejected {
            log::warn!("[config] ignoring {}", e);
        }
        config
    }
}

#[inline]
fn merge_axis<T>(slot: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *slot = v;
    }
}

fn valid_friction(value: f32, name: &str) -> bool {
    let ok = value.is_finite() && value > 0.0 && value <= 1.0;
    if !ok {
        log::warn!("[config] {} must be in (0, 1], got {}", name, value);
    }
    ok
}

fn valid_origin(value: f32, name: &str) -> bool {
    let ok = (0.0..=1.0).contains(&value);
    if !ok {
        log::warn!("[config] {} must be in [0, 1], got {}", name, value);
    }
    ok
}

fn expect_bool(key: &str, value: &AttrValue) -> Result<bool> {
    match value {
        AttrValue::Bool(b) => Ok(*b),
        other => Err(ParallaxError::config_type(key, "boolean", other.describe())),
    }
}

fn expect_number(key: &str, value: &AttrValue) -> Result<f64> {
    value
        .as_number()
        .ok_or_else(|| ParallaxError::config_type(key, "number", value.describe()))
}

fn expect_range(key: &str, value: &AttrValue, min: f64, max: f64) -> Result<f64> {
    let n = expect_number(key, value)?;
    if n < min || n > max {
        return Err(ParallaxError::out_of_range(key, n));
    }
    Ok(n)
}

fn expect_friction(key: &str, value: &AttrValue) -> Result<f32> {
    let n = expect_number(key, value)?;
    if n <= 0.0 || n > 1.0 {
        return Err(ParallaxError::out_of_range(key, n));
    }
    Ok(n as f32)
}

fn expect_limit(key: &str, value: &AttrValue) -> Result<Limit> {
    match value {
        AttrValue::Bool(false) => Ok(Limit::Unbounded),
        other => other
            .as_number()
            .map(|n| Limit::Bounded(n as f32))
            .ok_or_else(|| ParallaxError::config_type(key, "number or false", other.describe())),
    }
}
