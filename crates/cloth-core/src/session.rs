use crate::cloth::{Cloth, StepStats};
use crate::config::SessionConfig;
use crate::error::ClothError;
use crate::input::{HostCommand, InputEvent};
use crate::interaction::Interaction;
use glam::Vec2;
use log::{info, warn};

/// Result of one [`SimulationSession::frame`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Escape was pressed; the host should close its window.
    pub close_requested: bool,
    /// The cloth was rebuilt this frame.
    pub reset: bool,
    pub stats: StepStats,
    pub active_constraints: usize,
}

/// One running simulation: the cloth, the pointer state and the viewport.
///
/// Per frame the host passes every pending event to [`frame`](Self::frame);
/// events are folded into the pointer state before the physics step runs.
pub struct SimulationSession {
    cloth: Cloth,
    interaction: Interaction,
    viewport: Option<Vec2>,
}

impl SimulationSession {
    pub fn new(config: SessionConfig) -> Result<Self, ClothError> {
        let interaction = Interaction::new(config.interaction)?;
        let cloth = Cloth::new(config.cloth)?;
        Ok(Self {
            cloth,
            interaction,
            viewport: None,
        })
    }

    /// Record the host's drawable size. The cloth is built on the first
    /// frame after this is known.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Some(Vec2::new(width, height));
    }

    /// Top-left of the cloth: centered horizontally, 20% down the viewport.
    pub fn cloth_origin(&self) -> Option<Vec2> {
        self.viewport.map(|size| {
            let width = self.cloth.config().pixel_width();
            Vec2::new(size.x / 2.0 - width / 2.0, size.y * 0.2)
        })
    }

    /// Fold one event. `Reset` is handled here; `Close` is returned.
    pub fn handle_event(&mut self, event: &InputEvent) -> Option<HostCommand> {
        match self.interaction.apply_event(event)? {
            HostCommand::Reset => self.reset().then_some(HostCommand::Reset),
            HostCommand::Close => Some(HostCommand::Close),
        }
    }

    /// Rebuild the cloth at the viewport origin, or where it was last built.
    ///
    /// An unbuilt cloth stays unbuilt until the viewport is known. Returns
    /// whether the cloth was rebuilt.
    pub fn reset(&mut self) -> bool {
        let origin = match self.cloth_origin() {
            Some(origin) => origin,
            None if self.cloth.is_initialized() => self.cloth.origin(),
            None => {
                warn!("reset before the viewport size is known, ignored");
                return false;
            }
        };
        self.cloth.reset(origin.x, origin.y);
        true
    }

    /// Run one frame: fold `events`, step the cloth, then advance the
    /// pointer's hold timer.
    pub fn frame<I>(&mut self, events: I, dt: f32) -> FrameReport
    where
        I: IntoIterator<Item = InputEvent>,
    {
        let mut report = FrameReport::default();

        if !self.cloth.is_initialized() {
            match self.cloth_origin() {
                Some(origin) => self.cloth.init(origin.x, origin.y),
                None => warn!("viewport size unknown, cloth not built yet"),
            }
        }

        for event in events {
            match self.handle_event(&event) {
                Some(HostCommand::Close) => {
                    info!("close requested");
                    report.close_requested = true;
                }
                Some(HostCommand::Reset) => report.reset = true,
                None => {}
            }
        }

        report.stats = self.cloth.update(dt, &self.interaction);
        self.interaction.end_frame(dt);
        report.active_constraints = self.cloth.constraints.active_count();
        report
    }

    pub fn cloth(&self) -> &Cloth {
        &self.cloth
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }
}
