use crate::domain::{Coord, Generation, Pattern};

/// Session orchestrates the simulation.
/// It owns the current generation and the stepping state the front-end
/// drives; the engine itself stays stateless between calls.
#[derive(Clone, Debug)]
pub struct Session<G> {
    pub generation: G,
    pub is_running: bool,
    /// Generations advanced since the session started (or was cleared)
    pub steps: u64,
    pub updates_per_second: f32,
    update_timer: f32,
}

impl<G: Generation> Session<G> {
    pub const MIN_SPEED: f32 = 1.0;
    pub const MAX_SPEED: f32 = 60.0;

    /// Create a paused session around an existing generation
    pub fn new(generation: G) -> Self {
        Self {
            generation,
            is_running: false,
            steps: 0,
            updates_per_second: 10.0,
            update_timer: 0.0,
        }
    }

    pub fn with_steps(mut self, steps: u64) -> Self {
        self.steps = steps;
        self
    }

    /// Set running state (builder pattern)
    pub fn with_running(mut self, running: bool) -> Self {
        self.is_running = running;
        self
    }

    /// Set the tempo from seconds per generation
    pub fn with_step_interval(mut self, seconds: f32) -> Self {
        self.updates_per_second = if seconds > 0.0 {
            (1.0 / seconds).clamp(Self::MIN_SPEED, Self::MAX_SPEED)
        } else {
            Self::MAX_SPEED
        };
        self
    }

    /// Seconds between generations while running
    pub fn step_interval(&self) -> f32 {
        1.0 / self.updates_per_second
    }

    /// Advance exactly one generation
    pub fn step(mut self) -> Self {
        self.generation = self.generation.advance();
        self.steps += 1;
        log::debug!(
            "step {}: population {}",
            self.steps,
            self.generation.population()
        );
        self
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        self.update_timer = 0.0;
        self
    }

    /// Kill every cell and reset the step counter
    pub fn clear(mut self) -> Self {
        self.generation.clear();
        self.steps = 0;
        self.is_running = false;
        self
    }

    /// Adjust simulation speed
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        self.updates_per_second =
            (self.updates_per_second + delta).clamp(Self::MIN_SPEED, Self::MAX_SPEED);
        self
    }

    /// Update simulation by one frame.
    /// Advances at most one generation, and only when running and the
    /// step interval has elapsed.
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        if self.update_timer >= self.step_interval() {
            self.update_timer = 0.0;
            return self.step();
        }

        self
    }

    /// Flip a single cell of the current generation.
    /// Returns `false` when the coordinate is outside the generation.
    pub fn toggle_cell(&mut self, coord: Coord) -> bool {
        self.generation.toggle(coord)
    }

    /// Stamp a pattern with its top-left corner at `origin`
    pub fn paste(&mut self, pattern: &Pattern, origin: Coord) -> usize {
        pattern.place_on(&mut self.generation, origin)
    }
}
