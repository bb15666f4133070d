//! Platform-independent core of the parallax layer effect.
//!
//! The pipeline runs once per rendering frame: input signal, calibration,
//! motion shaping and per-layer offsets. Everything environment-specific
//! (event listeners, timers, frame scheduling, style writes) goes through the
//! [`Host`] trait, so the same [`Parallax`] drives the DOM front-end and the
//! host-side tests.

pub mod calibration;
pub mod config;
pub mod constants;
pub mod effect;
pub mod error;
pub mod geometry;
pub mod host;
pub mod input;
pub mod layer;
pub mod motion;

pub use calibration::Calibrator;
pub use config::{camel_case, AttrValue, Config, ConfigBuilder, ConfigKey, Limit, Limits};
pub use effect::{Parallax, RuntimeState};
pub use error::{ParallaxError, Result};
pub use geometry::{Bounds, Frame};
pub use host::{EventSource, FrameId, Host, Timer, TimerId};
pub use input::{is_desktop_agent, Capabilities, InputStrategy, PointerMode, TransformSupport};
pub use layer::{Layer, LayerPosition};
pub use motion::MotionState;
