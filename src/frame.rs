//! Per-frame animation state.

/// Degrees the wave phase advances per frame.
pub const DEGREES_PER_FRAME: u64 = 2;
/// Frames spent on each atlas quadrant.
pub const QUADRANT_PERIOD: u64 = 384;

/// Uniform values for one draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameUniforms {
    /// Phase in degrees, always in `[0, 360)`.
    pub angle: f32,
    /// Texel shift selecting the atlas quadrant.
    pub shift: [f32; 2],
}

/// Monotonic frame counter driving the animation.
#[derive(Debug, Clone)]
pub struct FrameClock {
    frame_count: u64,
    quadrant_period: u64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(QUADRANT_PERIOD)
    }
}

impl FrameClock {
    /// A zero `quadrant_period` is treated as 1.
    pub fn new(quadrant_period: u64) -> Self {
        Self {
            frame_count: 0,
            quadrant_period: quadrant_period.max(1),
        }
    }

    /// Starts the clock at an arbitrary frame.
    pub fn starting_at(frame_count: u64, quadrant_period: u64) -> Self {
        Self {
            frame_count,
            ..Self::new(quadrant_period)
        }
    }

    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Uniforms for the current frame without advancing.
    pub fn uniforms(&self) -> FrameUniforms {
        FrameUniforms {
            angle: angle_at(self.frame_count),
            shift: shift_for(self.quadrant(self.frame_count)),
        }
    }

    /// Atlas quadrant (0..4) shown at `frame_count`.
    #[inline]
    pub fn quadrant(&self, frame_count: u64) -> u64 {
        (frame_count / self.quadrant_period) % 4
    }

    /// Returns the uniforms for the current frame, then advances by one.
    pub fn tick(&mut self) -> FrameUniforms {
        let uniforms = self.uniforms();
        self.frame_count = self.frame_count.wrapping_add(1);
        uniforms
    }

    /// True when the frame about to be drawn shows a different quadrant
    /// than the one before it.
    pub fn quadrant_changed(&self) -> bool {
        self.frame_count > 0 && self.frame_count % self.quadrant_period == 0
    }
}

/// `frame_count * 2` degrees reduced to one turn, so `f32` precision does not
/// degrade as the counter grows.
#[inline]
fn angle_at(frame_count: u64) -> f32 {
    ((frame_count % 360) * DEGREES_PER_FRAME % 360) as f32
}

#[inline]
fn shift_for(quadrant: u64) -> [f32; 2] {
    [(quadrant & 1) as f32 / 2.0, (quadrant / 2) as f32 / 2.0]
}
