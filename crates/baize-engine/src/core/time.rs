/// Most fixed steps one frame may trigger. Caps the spiral of death after
/// a long stall: anything beyond this much accumulated time is dropped.
pub const MAX_STEPS_PER_FRAME: u32 = 8;

/// Fixed timestep accumulator.
///
/// The host calls `accumulate(frame_dt)` once per displayed frame and runs
/// the returned number of fixed simulation steps. Simulation cadence and
/// render cadence stay independent.
pub struct FixedTimestep {
    dt: f32,
    accumulator: f32,
}

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
        }
    }

    /// Add frame time. Returns how many fixed steps to run now.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.max(0.0);
        self.accumulator = self
            .accumulator
            .min(self.dt * MAX_STEPS_PER_FRAME as f32);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    /// Interpolation alpha in [0, 1] for rendering between ticks.
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.dt
    }

    /// The fixed delta time.
    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Discard accumulated time, e.g. when the host un-pauses.
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
