//! Animation state and the per-tick update.
//!
//! The scene's mutable record lives here: sun descent, sky fade, plane
//! drift, and the damped vertical plane physics. One tick advances one
//! frame of the 360-frame loop; composition reads the state immutably.

/// Frames in one full animation cycle.
pub const TOTAL_FRAMES: u32 = 360;

/// Lowest plane altitude.
pub const PLANE_Y_MIN: f32 = 200.0;
/// Highest plane altitude.
pub const PLANE_Y_MAX: f32 = 550.0;

/// Per-tick multiplicative decay applied to the plane's vertical speed.
const PLANE_SPEED_DAMPING: f32 = 0.95;

/// How vertical inputs act on the plane.
///
/// The two schemes are not interchangeable; each came from one of the two
/// source demos and both are kept selectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlMode {
    /// Inputs set the vertical speed to ±5; damping integrates it.
    #[default]
    Velocity,
    /// Inputs move the plane ±10 directly, clamped immediately.
    Direct,
}

/// A vertical plane-control input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaneInput {
    /// Fly higher.
    Climb,
    /// Fly lower.
    Descend,
}

/// Scene variant configuration.
///
/// Consolidates the two source demos behind one toggle: the animated
/// sunset and the still daytime scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneConfig {
    /// Run the sunset animation; when false the scene is a still frame.
    pub animated: bool,
    /// Plane control scheme.
    pub control: ControlMode,
    /// Title shown by the presentation surface.
    pub title: String,
}

impl SceneConfig {
    /// The animated sunset variant (velocity-based plane control).
    #[must_use]
    pub fn sunset() -> Self {
        Self {
            animated: true,
            control: ControlMode::Velocity,
            title: "Airport Sunset Scene".to_string(),
        }
    }

    /// The still daytime variant (direct plane control, no timer).
    #[must_use]
    pub fn still() -> Self {
        Self {
            animated: false,
            control: ControlMode::Direct,
            title: "Airport Scene".to_string(),
        }
    }

    /// Override the control scheme.
    #[must_use]
    pub fn with_control(mut self, control: ControlMode) -> Self {
        self.control = control;
        self
    }

    /// Override the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::sunset()
    }
}

/// The mutable animation record.
///
/// Sun position/size, sky brightness, and horizontal plane position are
/// affine in the frame counter; vertical plane position integrates a
/// damped velocity and stays clamped to `[PLANE_Y_MIN, PLANE_Y_MAX]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneState {
    /// Current frame in `[0, TOTAL_FRAMES)`.
    pub frame_index: u32,
    /// Sun center height.
    pub sun_y: f32,
    /// Sun radius.
    pub sun_size: f32,
    /// Sky brightness in `[0, 1]`; 1.0 is full daylight.
    pub sky_brightness: f32,
    /// Plane horizontal position.
    pub plane_x: f32,
    /// Plane vertical position.
    pub plane_y: f32,
    /// Plane vertical speed, decayed every tick.
    pub plane_vertical_speed: f32,
}

impl SceneState {
    /// Initial state for a scene variant.
    ///
    /// The still variant pins the plane mid-canvas; the animated variant
    /// starts it off-screen left so it enters with the first frames.
    #[must_use]
    pub fn new(config: &SceneConfig) -> Self {
        Self {
            frame_index: 0,
            sun_y: 400.0,
            sun_size: 50.0,
            sky_brightness: 1.0,
            plane_x: if config.animated { -100.0 } else { 400.0 },
            plane_y: 450.0,
            plane_vertical_speed: 0.0,
        }
    }

    /// Advance one timer tick.
    ///
    /// A no-op for the still variant, which registers no timer.
    pub fn tick(&mut self, config: &SceneConfig) {
        if !config.animated {
            return;
        }

        self.frame_index = (self.frame_index + 1) % TOTAL_FRAMES;
        let progress = self.frame_index as f32 / TOTAL_FRAMES as f32;

        self.sun_y = 400.0 - progress * 200.0;
        self.sun_size = 50.0 - progress * 10.0;
        self.sky_brightness = 1.0 - progress;
        self.plane_x = -100.0 + progress * 1000.0;

        self.plane_vertical_speed *= PLANE_SPEED_DAMPING;
        self.plane_y += self.plane_vertical_speed;
        self.clamp_altitude();
    }

    /// Apply a vertical control input under the configured scheme.
    pub fn apply_input(&mut self, input: PlaneInput, mode: ControlMode) {
        match mode {
            ControlMode::Velocity => {
                self.plane_vertical_speed = match input {
                    PlaneInput::Climb => 5.0,
                    PlaneInput::Descend => -5.0,
                };
            }
            ControlMode::Direct => {
                self.plane_y += match input {
                    PlaneInput::Climb => 10.0,
                    PlaneInput::Descend => -10.0,
                };
                self.clamp_altitude();
            }
        }
    }

    /// Clamp altitude to the flight envelope, killing velocity at the
    /// boundaries.
    fn clamp_altitude(&mut self) {
        if self.plane_y < PLANE_Y_MIN {
            self.plane_y = PLANE_Y_MIN;
            self.plane_vertical_speed = 0.0;
        }
        if self.plane_y > PLANE_Y_MAX {
            self.plane_y = PLANE_Y_MAX;
            self.plane_vertical_speed = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_frame_zero() {
        let state = SceneState::new(&SceneConfig::sunset());
        assert_eq!(state.frame_index, 0);
        assert!((state.sky_brightness - 1.0).abs() < f32::EPSILON);
        assert!((state.sun_y - 400.0).abs() < f32::EPSILON);
        assert!((state.plane_x - -100.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_still_variant_pins_plane() {
        let state = SceneState::new(&SceneConfig::still());
        assert!((state.plane_x - 400.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_still_variant_tick_is_noop() {
        let config = SceneConfig::still();
        let mut state = SceneState::new(&config);
        let before = state.clone();

        for _ in 0..100 {
            state.tick(&config);
        }
        assert_eq!(state, before);
    }

    #[test]
    fn test_last_frame_brightness() {
        let config = SceneConfig::sunset();
        let mut state = SceneState::new(&config);

        for _ in 0..359 {
            state.tick(&config);
        }
        assert_eq!(state.frame_index, 359);
        assert!((state.sky_brightness - (1.0 - 359.0 / 360.0)).abs() < 1e-6);
    }

    #[test]
    fn test_cycle_periodicity() {
        let config = SceneConfig::sunset();
        let mut state = SceneState::new(&config);

        for _ in 0..360 {
            state.tick(&config);
        }
        assert_eq!(state.frame_index, 0);
        assert!((state.sky_brightness - 1.0).abs() < f32::EPSILON);
        assert!((state.sun_y - 400.0).abs() < f32::EPSILON);
        assert!((state.sun_size - 50.0).abs() < f32::EPSILON);
        assert!((state.plane_x - -100.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_velocity_input_sets_speed() {
        let mut state = SceneState::new(&SceneConfig::sunset());
        state.apply_input(PlaneInput::Climb, ControlMode::Velocity);
        assert!((state.plane_vertical_speed - 5.0).abs() < f32::EPSILON);

        state.apply_input(PlaneInput::Descend, ControlMode::Velocity);
        assert!((state.plane_vertical_speed - -5.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_direct_input_moves_and_clamps() {
        let config = SceneConfig::still();
        let mut state = SceneState::new(&config);

        state.apply_input(PlaneInput::Climb, ControlMode::Direct);
        assert!((state.plane_y - 460.0).abs() < f32::EPSILON);

        for _ in 0..20 {
            state.apply_input(PlaneInput::Climb, ControlMode::Direct);
        }
        assert!((state.plane_y - PLANE_Y_MAX).abs() < f32::EPSILON);

        for _ in 0..50 {
            state.apply_input(PlaneInput::Descend, ControlMode::Direct);
        }
        assert!((state.plane_y - PLANE_Y_MIN).abs() < f32::EPSILON);
    }

    #[test]
    fn test_damped_speed_converges_within_envelope() {
        let config = SceneConfig::sunset();
        let mut state = SceneState::new(&config);
        state.apply_input(PlaneInput::Climb, ControlMode::Velocity);

        for _ in 0..1000 {
            state.tick(&config);
            assert!(state.plane_y >= PLANE_Y_MIN && state.plane_y <= PLANE_Y_MAX);
        }
        assert!(state.plane_vertical_speed.abs() < 1e-3);
    }

    #[test]
    fn test_clamp_zeroes_speed_at_ceiling() {
        let config = SceneConfig::sunset();
        let mut state = SceneState::new(&config);

        // Repeated climbs pin the plane at the ceiling with no residual speed
        for _ in 0..200 {
            state.apply_input(PlaneInput::Climb, ControlMode::Velocity);
            state.tick(&config);
        }
        assert!((state.plane_y - PLANE_Y_MAX).abs() < f32::EPSILON);
        assert!(state.plane_vertical_speed.abs() < f32::EPSILON);
    }
}
