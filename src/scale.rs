// ---------------------------------------------------------------------------
// Linear scale: data domain → pixel range
// ---------------------------------------------------------------------------

/// Target tick count used for nicing and tick generation on both axes.
pub const DEFAULT_TICK_COUNT: usize = 10;

const E10: f64 = 7.071067811865476; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// A linear mapping from a numeric data domain to a pixel interval.
///
/// The range may be inverted (`r0 > r1`) so that larger values plot higher
/// on a vertical axis. A degenerate zero-span domain maps every input to the
/// midpoint of the range; `NaN` inputs propagate to `NaN` pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f32,
    r1: f32,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f32, f32)) -> Self {
        LinearScale { d0: domain.0, d1: domain.1, r0: range.0, r1: range.1 }
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.d0, self.d1)
    }

    pub fn range(&self) -> (f32, f32) {
        (self.r0, self.r1)
    }

    /// Extend the domain outward to round tick boundaries (1/2/5 ladder).
    /// Iterates until the step stabilises so the widened domain and its
    /// ticks agree; zero-span and non-finite domains are left untouched.
    pub fn nice(mut self, count: usize) -> Self {
        let mut start = self.d0;
        let mut stop = self.d1;
        let mut prestep = f64::NAN;
        for _ in 0..10 {
            let step = tick_increment(start, stop, count);
            if step == prestep || step == 0.0 || !step.is_finite() {
                break;
            }
            if step > 0.0 {
                start = (start / step).floor() * step;
                stop = (stop / step).ceil() * step;
            } else {
                start = (start * step).ceil() / step;
                stop = (stop * step).floor() / step;
            }
            prestep = step;
        }
        self.d0 = start;
        self.d1 = stop;
        self
    }

    /// Map a data value onto the pixel range.
    pub fn scale(&self, value: f64) -> f32 {
        let t = if self.d1 == self.d0 {
            0.5
        } else {
            (value - self.d0) / (self.d1 - self.d0)
        };
        self.r0 + (t as f32) * (self.r1 - self.r0)
    }

    /// Round tick values covering the domain, roughly `count` of them.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let mut start = self.d0;
        let mut stop = self.d1;
        if !start.is_finite() || !stop.is_finite() {
            return Vec::new();
        }
        if start == stop {
            return vec![start];
        }
        let reverse = stop < start;
        if reverse {
            std::mem::swap(&mut start, &mut stop);
        }
        let step = tick_increment(start, stop, count);
        if step == 0.0 || !step.is_finite() {
            return Vec::new();
        }
        let mut ticks;
        if step > 0.0 {
            let mut r0 = (start / step).round();
            let mut r1 = (stop / step).round();
            if r0 * step < start {
                r0 += 1.0;
            }
            if r1 * step > stop {
                r1 -= 1.0;
            }
            let n = ((r1 - r0 + 1.0).max(0.0)) as usize;
            ticks = Vec::with_capacity(n);
            for i in 0..n {
                ticks.push((r0 + i as f64) * step);
            }
        } else {
            let inv = -step;
            let mut r0 = (start * inv).round();
            let mut r1 = (stop * inv).round();
            if r0 / inv < start {
                r0 += 1.0;
            }
            if r1 / inv > stop {
                r1 -= 1.0;
            }
            let n = ((r1 - r0 + 1.0).max(0.0)) as usize;
            ticks = Vec::with_capacity(n);
            for i in 0..n {
                ticks.push((r0 + i as f64) / inv);
            }
        }
        if reverse {
            ticks.reverse();
        }
        ticks
    }
}

/// Step size for roughly `count` ticks across [start, stop], snapped to the
/// 1/2/5 ladder. Negative return values encode reciprocal steps
/// (increment = 1 / -value) so fractional ladders stay on exact decimals.
fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count.max(1) as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -(10f64.powf(-power)) / factor
    }
}

/// Render a tick value for an axis label, suppressing float noise and the
/// trailing `.0` on whole numbers.
pub fn tick_label(value: f64) -> String {
    let rounded = (value * 1e9).round() / 1e9;
    if rounded == rounded.trunc() && rounded.abs() < 1e15 {
        format!("{}", rounded as i64)
    } else {
        format!("{rounded}")
    }
}
