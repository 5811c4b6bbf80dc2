//! Brightness curves for fade animations
//!
//! A curve holds `n` colors approaching a target color. Step `t` (1-based)
//! scales the target by an intensity factor that grows with `t / n`, so the
//! last step always equals the target. Channels are computed in floating
//! point and clamped back into `0..=255`.
//!
//! Curves live in fixed-capacity storage. Asking for more steps than
//! [`MAX_CURVE_STEPS`] fails instead of producing a shorter curve.

use core::ops::Index;

use heapless::Vec;

use crate::color::{BLACK, Rgb};

/// Largest number of steps a curve can hold
pub const MAX_CURVE_STEPS: usize = 256;

/// Added before truncating exponential steps so `2^log2(c)` lands on `c`
const EXP_EPSILON: f64 = 1e-9;

/// Errors returned while building a curve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveError {
    /// A curve needs at least one step
    NoSteps,
    /// The requested step count does not fit the curve storage
    CapacityExceeded { requested: usize, capacity: usize },
}

/// Shape of the intensity factor over time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveShape {
    /// `t / n`
    Linear,
    /// `(t / n)^2`
    Quadratic,
    /// `c^(t / n)` per channel, so low levels rise slowly
    Exponential,
}

impl CurveShape {
    /// Intensity factor of `step` out of `steps` (1-based), in `(0, 1]`
    ///
    /// The exponential factor depends on the channel value; this reports it
    /// for a full scale (255) channel.
    #[allow(clippy::cast_precision_loss)]
    pub fn factor(self, step: usize, steps: usize) -> f32 {
        if steps == 0 {
            return 0.0;
        }
        let t = step as f32 / steps as f32;
        match self {
            Self::Linear => t,
            Self::Quadratic => t * t,
            Self::Exponential => libm::powf(255.0, t - 1.0),
        }
    }
}

/// Precomputed brightness levels of one color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrightnessCurve {
    levels: Vec<Rgb, MAX_CURVE_STEPS>,
}

impl BrightnessCurve {
    /// Build a curve of the given shape that fades in from black to `color`
    pub fn generate(shape: CurveShape, color: Rgb, steps: usize) -> Result<Self, CurveError> {
        match shape {
            CurveShape::Linear => Self::linear(color, steps),
            CurveShape::Quadratic => Self::quadratic(color, steps),
            CurveShape::Exponential => Self::exponential(color, steps),
        }
    }

    /// Brightness increasing linearly with time
    pub fn linear(color: Rgb, steps: usize) -> Result<Self, CurveError> {
        Self::build(steps, |step| {
            let factor = CurveShape::Linear.factor(step, steps);
            Rgb {
                r: scaled(color.r, factor),
                g: scaled(color.g, factor),
                b: scaled(color.b, factor),
            }
        })
    }

    /// Brightness increasing quadratically with time
    pub fn quadratic(color: Rgb, steps: usize) -> Result<Self, CurveError> {
        Self::quadratic_between(BLACK, color, steps)
    }

    /// Quadratic curve from just above `min` up to `max`
    ///
    /// Each channel is `(max - min) * factor + min`, so a channel where
    /// `max < min` fades downwards.
    pub fn quadratic_between(min: Rgb, max: Rgb, steps: usize) -> Result<Self, CurveError> {
        Self::build(steps, |step| {
            let factor = CurveShape::Quadratic.factor(step, steps);
            Rgb {
                r: interpolated(min.r, max.r, factor),
                g: interpolated(min.g, max.g, factor),
                b: interpolated(min.b, max.b, factor),
            }
        })
    }

    /// Brightness increasing exponentially with time
    ///
    /// Channel `c` at step `t` is `2^(log2(c) * t / n)` with the fraction
    /// dropped. A zero channel stays zero at every step.
    pub fn exponential(color: Rgb, steps: usize) -> Result<Self, CurveError> {
        Self::exponential_between(BLACK, color, steps)
    }

    /// Exponential curve from `min` towards `max`
    ///
    /// The exponential rise is applied to the distance between the
    /// endpoints. Channels with equal endpoints stay at `min`.
    pub fn exponential_between(min: Rgb, max: Rgb, steps: usize) -> Result<Self, CurveError> {
        Self::build(steps, |step| Rgb {
            r: exponential_channel(min.r, max.r, step, steps),
            g: exponential_channel(min.g, max.g, step, steps),
            b: exponential_channel(min.b, max.b, step, steps),
        })
    }

    fn build(steps: usize, level_at: impl Fn(usize) -> Rgb) -> Result<Self, CurveError> {
        if steps == 0 {
            return Err(CurveError::NoSteps);
        }
        let exceeded = CurveError::CapacityExceeded {
            requested: steps,
            capacity: MAX_CURVE_STEPS,
        };
        if steps > MAX_CURVE_STEPS {
            return Err(exceeded);
        }

        let mut levels = Vec::new();
        for step in 1..=steps {
            levels.push(level_at(step)).map_err(|_| exceeded)?;
        }
        Ok(Self { levels })
    }

    /// Number of steps
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Curves are never empty once built
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.levels.get(index).copied()
    }

    /// Brightest level, equal to the target color
    pub fn peak(&self) -> Option<Rgb> {
        self.levels.last().copied()
    }

    pub fn as_slice(&self) -> &[Rgb] {
        &self.levels
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Rgb> + '_ {
        self.levels.iter().copied()
    }
}

impl Index<usize> for BrightnessCurve {
    type Output = Rgb;

    fn index(&self, index: usize) -> &Rgb {
        &self.levels[index]
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_channel(value: f32) -> u8 {
    value.clamp(0.0, 255.0) as u8
}

fn scaled(channel: u8, factor: f32) -> u8 {
    clamp_channel(libm::roundf(f32::from(channel) * factor))
}

fn interpolated(min: u8, max: u8, factor: f32) -> u8 {
    let span = f32::from(max) - f32::from(min);
    clamp_channel(libm::roundf(span * factor + f32::from(min)))
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn exponential_channel(min: u8, max: u8, step: usize, steps: usize) -> u8 {
    let span = i16::from(max) - i16::from(min);
    if span == 0 {
        return min;
    }

    let max_exponent = libm::log2(f64::from(span.unsigned_abs()));
    let t = step as f64 / steps as f64;
    let rise = libm::floor(libm::exp2(max_exponent * t) + EXP_EPSILON);

    let value = if span > 0 {
        f64::from(min) + rise
    } else {
        f64::from(min) - rise
    };
    value.clamp(0.0, 255.0) as u8
}
