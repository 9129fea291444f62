//! Clamped linear ramps over frame ranges.

/// Linear map of `x` from `[x0, x1]` onto `[y0, y1]`, clamped on both sides.
///
/// Values before `x0` hold `y0`, values after `x1` hold `y1`. A degenerate input range
/// (`x0 == x1`) steps from `y0` to `y1` at `x1`.
pub fn interpolate(x: f64, input: [f64; 2], output: [f64; 2]) -> f64 {
    let [x0, x1] = input;
    let [y0, y1] = output;
    if x1 <= x0 {
        return if x >= x1 { y1 } else { y0 };
    }
    let t = ((x - x0) / (x1 - x0)).clamp(0.0, 1.0);
    y0 + (y1 - y0) * t
}

/// A value ramp between two endpoints over a frame window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ramp {
    /// First frame of the window.
    pub from_frame: f64,
    /// Last frame of the window (inclusive end of the ramp).
    pub to_frame: f64,
}

impl Ramp {
    /// Ramp covering `len` frames from `start`.
    pub fn starting_at(start: u64, len: u64) -> Self {
        Self {
            from_frame: start as f64,
            to_frame: start.saturating_add(len) as f64,
        }
    }

    /// Ramp covering the last `len` frames of a window ending at `end`.
    pub fn ending_at(end: u64, len: u64) -> Self {
        Self {
            from_frame: end.saturating_sub(len) as f64,
            to_frame: end as f64,
        }
    }

    /// Sample the ramp at `frame`, mapping the window onto `[from, to]`.
    pub fn sample(self, frame: f64, from: f64, to: f64) -> f64 {
        interpolate(frame, [self.from_frame, self.to_frame], [from, to])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ramp.rs"]
mod tests;
