//! Homogeneous spatial Poisson point sampling over a rectangular region.
//!
//! The count of points over a region of area `A` at intensity `lambda` is
//! `Poisson(lambda * A)`, and conditional on the count the points are i.i.d.
//! uniform over the region. Coordinates follow a half-open convention:
//! `min <= x < max` on both axes.
use glam::DVec2;
use mint::Vector2;
use rand::rand_core::RngCore;
use tracing::debug;

use crate::error::{Error, Result};

/// Axis-aligned rectangular sampling region.
///
/// Construction validates that all bounds are finite and that
/// `max_x >= min_x` and `max_y >= min_y`. A zero-width or zero-height region
/// is valid and has zero area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    min: DVec2,
    max: DVec2,
}

impl Region {
    /// Create a region from `(min_x, min_y, max_x, max_y)`.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Result<Self> {
        if ![min_x, min_y, max_x, max_y].iter().all(|v| v.is_finite()) {
            return Err(Error::InvalidArgument(format!(
                "region bounds must be finite, got ({min_x}, {min_y}, {max_x}, {max_y})"
            )));
        }
        if max_x < min_x || max_y < min_y {
            return Err(Error::InvalidArgument(format!(
                "region bounds are inverted: ({min_x}, {min_y}, {max_x}, {max_y})"
            )));
        }

        Ok(Self {
            min: DVec2::new(min_x, min_y),
            max: DVec2::new(max_x, max_y),
        })
    }

    /// Lower-left corner.
    pub fn min(&self) -> Vector2<f64> {
        self.min.into()
    }

    /// Upper-right corner (exclusive for sampled points).
    pub fn max(&self) -> Vector2<f64> {
        self.max.into()
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Whether a point lies inside the region under the half-open convention.
    pub fn contains(&self, point: Vector2<f64>) -> bool {
        point.x >= self.min.x && point.x < self.max.x && point.y >= self.min.y && point.y < self.max.y
    }
}

/// Homogeneous spatial Poisson process sampler.
///
/// `intensity` is the expected number of points per unit area. The generator
/// is passed per call so callers control seeding and thread ownership.
#[derive(Debug, Clone, Copy)]
pub struct PoissonPointSampling {
    intensity: f64,
}

impl PoissonPointSampling {
    /// Create a sampler with the given intensity (events per unit area).
    ///
    /// Fails with [`Error::InvalidArgument`] for negative or non-finite
    /// intensity.
    pub fn new(intensity: f64) -> Result<Self> {
        if !intensity.is_finite() || intensity < 0.0 {
            return Err(Error::InvalidArgument(format!(
                "intensity must be finite and non-negative, got {intensity}"
            )));
        }
        Ok(Self { intensity })
    }

    pub fn intensity(&self) -> f64 {
        self.intensity
    }

    /// Sample one realization of the process over `region`.
    ///
    /// The returned order is an artifact of generation and carries no
    /// meaning. Zero intensity or a zero-area region yields an empty vector.
    pub fn sample(&self, region: Region, rng: &mut dyn RngCore) -> Vec<Vector2<f64>> {
        let w = region.width();
        let h = region.height();

        if self.intensity == 0.0 || w <= 0.0 || h <= 0.0 {
            return Vec::new();
        }

        let lambda = self.intensity * w * h;
        let n = poisson_count(lambda, rng);
        debug!(count = n, lambda, "drew poisson point count");

        // Next representable floats below the right/top edges to enforce strict < comparisons
        let max_x = next_down(region.max.x);
        let max_y = next_down(region.max.y);

        let mut out = Vec::with_capacity(n as usize);
        for _ in 0..n {
            let x = (region.min.x + rand01(rng) * w).clamp(region.min.x, max_x);
            let y = (region.min.y + rand01(rng) * h).clamp(region.min.y, max_y);
            out.push(DVec2::new(x, y));
        }

        out.into_iter().map(Into::into).collect()
    }
}

/// Generate a random float in the range [0, 1).
///
/// Uses the 53 high bits of a `u64` draw, so every value is representable
/// exactly and 1.0 is never produced.
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f64 {
    (rng.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}

/// Compute the next smaller representable float value.
///
/// Returns a value that is strictly less than the input, useful for
/// ensuring bounds are strictly inside a domain. Handles edge cases
/// safely including very small positive values and zero.
#[inline]
pub(crate) fn next_down(val: f64) -> f64 {
    if val.is_nan() {
        return f64::NAN;
    }

    if val == f64::NEG_INFINITY {
        return f64::NEG_INFINITY;
    }

    if val == f64::INFINITY {
        return f64::MAX;
    }

    if val == 0.0 {
        return -f64::MIN_POSITIVE;
    }

    let bits = val.to_bits();
    if val > 0.0 {
        f64::from_bits(bits.saturating_sub(1))
    } else {
        f64::from_bits(bits.saturating_add(1))
    }
}

// Knuth inversion below the threshold; above it exp(-lambda) underflows, so
// switch to a Gaussian approximation with continuity correction.
const NORMAL_APPROX_THRESHOLD: f64 = 64.0;

fn poisson_count(lambda: f64, rng: &mut dyn RngCore) -> u64 {
    if !lambda.is_finite() || lambda <= 0.0 {
        return 0;
    }

    if lambda < NORMAL_APPROX_THRESHOLD {
        let l = (-lambda).exp();
        let mut k: u64 = 0;
        let mut p: f64 = 1.0;

        loop {
            k += 1;
            p *= rand01(rng);
            if p <= l {
                return k - 1;
            }
        }
    }

    let (z, _) = box_muller_pair(rng);
    let n = lambda + lambda.sqrt() * z + 0.5;
    if n <= 0.0 {
        0
    } else {
        n as u64
    }
}

fn box_muller_pair(rng: &mut dyn RngCore) -> (f64, f64) {
    let u1 = (1.0 - rand01(rng)).clamp(f64::MIN_POSITIVE, 1.0);
    let u2 = rand01(rng);

    let r = (-2.0 * u1.ln()).sqrt();
    let theta = 2.0 * std::f64::consts::PI * u2;

    (r * theta.cos(), r * theta.sin())
}
