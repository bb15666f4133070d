//! The effect instance: lifecycle, event handling and the per-frame tick.

use crate::calibration::Calibrator;
use crate::config::{Config, Limit};
use crate::geometry::Frame;
use crate::host::{EventSource, FrameId, Host, Timer, TimerId};
use crate::input::{
    pointer_input, rotation_input, select_strategy, Capabilities, InputStrategy, PointerMode,
    SensorStatus,
};
use crate::layer::{Layer, LayerPosition};
use crate::motion::MotionState;
use glam::Vec2;
use smallvec::SmallVec;

/// Mutable state owned by one effect instance.
#[derive(Clone, Debug, Default)]
pub struct RuntimeState {
    pub enabled: bool,
    pub strategy: Option<InputStrategy>,
    pub orientation: SensorStatus,
    pub motion_sensor: SensorStatus,
    pub input: Vec2,
    pub calibrator: Calibrator,
    pub motion: MotionState,
    /// `None` until the first sensor reading after a sensor strategy starts.
    pub portrait: Option<bool>,
    pub window: Frame,
    pub element: Frame,
    calibration_timer: Option<TimerId>,
    support_timer: Option<TimerId>,
    frame: Option<FrameId>,
}

impl RuntimeState {
    pub fn frame_pending(&self) -> bool {
        self.frame.is_some()
    }

    pub fn calibration_pending(&self) -> bool {
        self.calibration_timer.is_some()
    }

    pub fn support_probe_pending(&self) -> bool {
        self.support_timer.is_some()
    }
}

/// A parallax effect bound to one host.
///
/// Built disabled; [`Parallax::initialise`] enables it and queues the first
/// calibration. Every `on_*` method is a host callback.
pub struct Parallax<H: Host> {
    config: Config,
    capabilities: Capabilities,
    host: H,
    layers: SmallVec<[Layer; 8]>,
    state: RuntimeState,
}

impl<H: Host> Parallax<H> {
    pub fn new(config: Config, capabilities: Capabilities, host: H) -> Self {
        let state = RuntimeState {
            orientation: SensorStatus::new(capabilities.orientation_events),
            motion_sensor: SensorStatus::new(capabilities.motion_events),
            ..RuntimeState::default()
        };
        Self {
            config,
            capabilities,
            host,
            layers: SmallVec::new(),
            state,
        }
    }

    pub fn initialise(&mut self) {
        self.enable();
        self.queue_calibration(self.config.calibration_delay_ms);
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    pub fn state(&self) -> &RuntimeState {
        &self.state
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn is_enabled(&self) -> bool {
        self.state.enabled
    }

    pub fn set_layers(&mut self, layers: impl IntoIterator<Item = Layer>) {
        self.layers = layers.into_iter().collect();
        log::debug!("[layers] count={}", self.layers.len());
    }

    // ---------------- Lifecycle ----------------

    pub fn enable(&mut self) {
        if self.state.enabled {
            return;
        }
        self.state.enabled = true;

        let strategy = select_strategy(
            self.capabilities.desktop,
            self.state.orientation,
            self.state.motion_sensor,
        );
        match strategy {
            InputStrategy::Orientation | InputStrategy::Motion => {
                self.state.portrait = None;
                self.state.support_timer = self.host.set_timer(
                    Timer::SupportProbe(strategy),
                    self.config.support_delay_ms,
                );
            }
            InputStrategy::Pointer => {
                self.state.calibrator.reset();
                self.state.portrait = Some(false);
            }
        }
        self.host.listen(EventSource::for_strategy(strategy));
        self.state.strategy = Some(strategy);

        self.refresh_window();
        self.refresh_element();
        self.host.listen(EventSource::Resize);
        self.state.frame = self.host.request_frame();
        log::info!("[parallax] enabled with {:?} input", strategy);
    }

    /// Detach listeners and cancel every outstanding frame and timer, so no
    /// callback reaches the effect after this returns.
    pub fn disable(&mut self) {
        if !self.state.enabled {
            return;
        }
        self.state.enabled = false;

        if let Some(strategy) = self.state.strategy.take() {
            self.host.unlisten(EventSource::for_strategy(strategy));
        }
        self.host.unlisten(EventSource::Resize);
        if let Some(id) = self.state.frame.take() {
            self.host.cancel_frame(id);
        }
        if let Some(id) = self.state.calibration_timer.take() {
            self.host.clear_timer(id);
        }
        if let Some(id) = self.state.support_timer.take() {
            self.host.clear_timer(id);
        }
        log::info!("[parallax] disabled");
    }

    pub fn destroy(&mut self) {
        self.disable();
        self.layers.clear();
    }

    fn queue_calibration(&mut self, delay_ms: u32) {
        if let Some(id) = self.state.calibration_timer.take() {
            self.host.clear_timer(id);
        }
        self.state.calibration_timer = self.host.set_timer(Timer::Calibration, delay_ms);
    }

    // ---------------- Tuning ----------------

    pub fn calibrate(&mut self, x: Option<bool>, y: Option<bool>) {
        self.config.set_calibrate(x, y);
    }

    pub fn invert(&mut self, x: Option<bool>, y: Option<bool>) {
        self.config.set_invert(x, y);
    }

    pub fn friction(&mut self, x: Option<f32>, y: Option<f32>) {
        self.config.set_friction(x, y);
    }

    pub fn scalar(&mut self, x: Option<f32>, y: Option<f32>) {
        self.config.set_scalar(x, y);
    }

    pub fn limit(&mut self, x: Option<Limit>, y: Option<Limit>) {
        self.config.set_limit(x, y);
    }

    pub fn origin(&mut self, x: Option<f32>, y: Option<f32>) {
        self.config.set_origin(x, y);
        self.refresh_window();
    }

    // ---------------- Host callbacks ----------------

    pub fn on_orientation(&mut self, beta: Option<f64>, gamma: Option<f64>) {
        if self.state.strategy != Some(InputStrategy::Orientation) {
            return;
        }
        if let Some(v) = rotation_input(beta, gamma) {
            self.state.orientation.seen = true;
            self.rotate(v);
        }
    }

    pub fn on_motion(&mut self, beta: Option<f64>, gamma: Option<f64>) {
        if self.state.strategy != Some(InputStrategy::Motion) {
            return;
        }
        if let Some(v) = rotation_input(beta, gamma) {
            self.state.motion_sensor.seen = true;
            self.rotate(v);
        }
    }

    pub fn on_pointer_move(&mut self, client: Vec2) {
        if self.state.strategy != Some(InputStrategy::Pointer) {
            return;
        }
        let mode = PointerMode::new(self.config.relative_input, self.config.clip_relative_input);
        self.state.input = pointer_input(client, mode, &self.state.element, &self.state.window);
    }

    pub fn on_resize(&mut self) {
        self.refresh_window();
    }

    pub fn on_timer(&mut self, timer: Timer) {
        match timer {
            Timer::Calibration => {
                if self.state.calibration_timer.take().is_none() {
                    log::debug!("[calibrate] stale timer ignored");
                    return;
                }
                self.state.calibrator.request();
            }
            Timer::SupportProbe(strategy) => {
                if self.state.support_timer.take().is_none() {
                    return;
                }
                self.probe_support(strategy);
            }
        }
    }

    pub fn on_frame(&mut self) {
        if self.state.frame.take().is_none() || !self.state.enabled {
            return;
        }
        self.refresh_element();
        self.tick();
        self.state.frame = self.host.request_frame();
        if self.state.frame.is_none() {
            log::warn!("[frame] host refused the next frame; animation stopped");
        }
    }

    // ---------------- Internals ----------------

    fn rotate(&mut self, v: Vec2) {
        let portrait = self.state.window.is_portrait();
        if self.state.portrait != Some(portrait) {
            self.state.portrait = Some(portrait);
            self.state.calibrator.request();
        }
        self.state.calibrator.observe(v);
        self.state.input = v;
    }

    fn probe_support(&mut self, strategy: InputStrategy) {
        if self.state.strategy != Some(strategy) {
            return;
        }
        let status = match strategy {
            InputStrategy::Orientation => &mut self.state.orientation,
            InputStrategy::Motion => &mut self.state.motion_sensor,
            InputStrategy::Pointer => return,
        };
        if status.seen {
            return;
        }
        status.available = false;
        log::info!("[parallax] no {:?} events received; falling back", strategy);
        let calibrating = self.state.calibration_pending();
        self.disable();
        self.enable();
        // The restart must not swallow a queued calibration.
        if calibrating {
            self.queue_calibration(0);
        }
    }

    fn refresh_window(&mut self) {
        self.state.window = Frame::viewport(self.host.viewport(), self.config.origin);
        log::debug!(
            "[geometry] window center={:?} radius={:?}",
            self.state.window.center,
            self.state.window.radius
        );
    }

    fn refresh_element(&mut self) {
        self.state.element = Frame::new(self.host.element_bounds(), self.config.origin);
    }

    fn tick(&mut self) {
        let input = self.state.input;
        if self
            .state
            .calibrator
            .exceeds(input, self.config.calibration_threshold)
        {
            self.queue_calibration(0);
        }

        let delta = self.state.calibrator.delta(input);
        let velocity = self.state.motion.step(
            input,
            delta,
            self.state.portrait.unwrap_or(false),
            self.state.element.bounds.size,
            &self.config,
        );

        let transform = self.capabilities.transform;
        for (i, layer) in self.layers.iter().enumerate() {
            let offset = layer.offset(velocity, self.config.invert);
            let position = LayerPosition::new(offset, self.config.precision, transform);
            self.host.place_layer(i, &position);
        }
    }
}

/// Dropping an enabled effect detaches it from the host first, so the host
/// never keeps a listener, frame or timer aimed at a dead effect.
impl<H: Host> Drop for Parallax<H> {
    fn drop(&mut self) {
        self.disable();
    }
}

impl<H: Host> std::fmt::Debug for Parallax<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parallax")
            .field("enabled", &self.state.enabled)
            .field("strategy", &self.state.strategy)
            .field("layers", &self.layers.len())
            .field("velocity", &self.state.motion.velocity)
            .finish()
    }
}
