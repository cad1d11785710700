/// Idle bobbing applied to every glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatMotion {
    pub speed: f32,
    pub rotation_intensity: f32,
    pub float_intensity: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FloatOffset {
    /// World-space vertical displacement.
    pub lift: f32,
    /// Screen-space rotation in radians.
    pub tilt: f32,
}

/// Upper bound of the phase drawn per glyph so glyphs do not move in lockstep.
pub const MAX_PHASE: f32 = 1000.0;

const FLOATING_RANGE: f32 = 0.1;

impl Default for FloatMotion {
    fn default() -> Self {
        Self { speed: 1.5, rotation_intensity: 0.5, float_intensity: 0.8 }
    }
}

impl FloatMotion {
    pub fn offset(&self, time: f32, phase: f32) -> FloatOffset {
        let t = (phase + time) / 4.0 * self.speed;
        let wave = t.sin();
        FloatOffset {
            lift: wave * FLOATING_RANGE * self.float_intensity,
            tilt: wave / 20.0 * self.rotation_intensity,
        }
    }

    pub fn max_lift(&self) -> f32 {
        FLOATING_RANGE * self.float_intensity
    }

    pub fn max_tilt(&self) -> f32 {
        self.rotation_intensity / 20.0
    }
}
