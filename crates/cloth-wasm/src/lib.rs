use cloth_core::{
    Button, ClothConfig, InputEvent, InteractionConfig, Key, LineSegment, SessionConfig,
    SimulationSession,
};
use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::prelude::*;

/// Forwards `log` records to the browser console.
struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line: JsValue = format!("[{}] {}", record.target(), record.args()).into();
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

fn init_logging() {
    // Only the first world installs the logger.
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Info);
    }
}

#[wasm_bindgen]
pub struct ClothWorld {
    session: SimulationSession,
    /// Events received since the last `step`, folded in order before physics.
    pending: Vec<InputEvent>,
    segments: Vec<LineSegment>,
    close_requested: bool,
}

#[wasm_bindgen]
impl ClothWorld {
    /// Create a world for a `width` x `height` viewport using the default
    /// cloth: 1.3 x 940 by 0.4 x 580 pixels at 8 px spacing.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Result<ClothWorld, JsValue> {
        Self::with_config(width, height, ClothConfig::default(), InteractionConfig::default())
    }

    /// Create a world with a custom grid. `tear_factor` and `solver_passes`
    /// override the defaults.
    #[wasm_bindgen]
    pub fn with_grid(
        width: f32,
        height: f32,
        cols: u32,
        rows: u32,
        spacing: f32,
        tear_factor: f32,
        solver_passes: u32,
    ) -> Result<ClothWorld, JsValue> {
        let cloth = ClothConfig::default()
            .with_grid(cols as usize, rows as usize)
            .with_spacing(spacing)
            .with_tear_factor(tear_factor)
            .with_solver_passes(solver_passes);
        Self::with_config(width, height, cloth, InteractionConfig::default())
    }

    #[wasm_bindgen]
    pub fn resize(&mut self, width: f32, height: f32) {
        self.session.resize(width, height);
    }

    #[wasm_bindgen]
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.pending.push(InputEvent::Moved { x, y });
    }

    /// `button`: 0 = primary, 2 = secondary (DOM `MouseEvent.button`).
    #[wasm_bindgen]
    pub fn button_changed(&mut self, button: u32, pressed: bool, ctrl: bool) {
        let button = match button {
            0 => Button::Left,
            2 => Button::Right,
            other => {
                log::warn!("ignoring pointer button {}", other);
                return;
            }
        };
        self.pending.push(InputEvent::ButtonChanged {
            button,
            pressed,
            ctrl,
        });
    }

    #[wasm_bindgen]
    pub fn scrolled(&mut self, dy: f32) {
        self.pending.push(InputEvent::Scrolled { dy });
    }

    /// Takes a DOM `KeyboardEvent.key` name.
    #[wasm_bindgen]
    pub fn key_pressed(&mut self, key: &str) {
        let key = match key {
            "Escape" => Key::Escape,
            " " | "Space" => Key::Space,
            _ => Key::Other,
        };
        self.pending.push(InputEvent::KeyPressed(key));
    }

    /// Run one frame and refresh the segment buffer. Returns the time the
    /// frame took in milliseconds.
    #[wasm_bindgen]
    pub fn step(&mut self, dt: f32) -> f32 {
        let start = js_sys::Date::now();
        let events = std::mem::take(&mut self.pending);
        let report = self.session.frame(events, dt);
        self.close_requested |= report.close_requested;
        self.write_segment_output();
        let elapsed = js_sys::Date::now() - start;
        elapsed as f32
    }

    #[wasm_bindgen]
    pub fn reset(&mut self) {
        if self.session.reset() {
            self.write_segment_output();
        }
    }

    #[wasm_bindgen]
    pub fn close_requested(&self) -> bool {
        self.close_requested
    }

    #[wasm_bindgen]
    pub fn is_initialized(&self) -> bool {
        self.session.cloth().is_initialized()
    }

    #[wasm_bindgen]
    pub fn segment_buffer_ptr(&self) -> *const f32 {
        self.segments.as_ptr() as *const f32
    }

    #[wasm_bindgen]
    pub fn segment_buffer_byte_length(&self) -> usize {
        self.segments.len() * std::mem::size_of::<LineSegment>()
    }

    #[wasm_bindgen]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Copy of the segment buffer as `x0, y0, x1, y1, ...`.
    #[wasm_bindgen]
    pub fn segment_floats(&self) -> Vec<f32> {
        cloth_core::geometry::as_floats(&self.segments).to_vec()
    }

    /// Pinned particle positions as `x, y, ...`.
    #[wasm_bindgen]
    pub fn pinned_points(&self) -> Vec<f32> {
        self.session
            .cloth()
            .pinned_points()
            .flat_map(|p| p.to_array())
            .collect()
    }

    #[wasm_bindgen]
    pub fn interaction_radius(&self) -> f32 {
        self.session.interaction().radius()
    }
}

impl ClothWorld {
    fn with_config(
        width: f32,
        height: f32,
        cloth: ClothConfig,
        interaction: InteractionConfig,
    ) -> Result<ClothWorld, JsValue> {
        init_logging();

        let mut session = SimulationSession::new(SessionConfig { cloth, interaction })
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        session.resize(width, height);

        log::info!("ClothWorld created for a {}x{} viewport", width, height);

        Ok(ClothWorld {
            session,
            pending: Vec::new(),
            segments: Vec::new(),
            close_requested: false,
        })
    }

    fn write_segment_output(&mut self) {
        self.session.cloth().write_segments(&mut self.segments);
    }
}
