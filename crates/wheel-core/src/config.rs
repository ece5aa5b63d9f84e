use crate::constants::*;
use rand::Rng;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("cell size must be a positive finite number, got {0}")]
    CellSize(f32),
    #[error("rotation rate must be a positive finite number, got {0}")]
    RotationRate(f64),
    #[error("mutation interval must be non-zero")]
    MutationInterval,
    #[error("colour step must lie in (0, 1], got {0}")]
    ColorStep(f32),
    #[error("{name} range [{lo}, {hi}) must satisfy 1 <= lo < hi")]
    Range {
        name: &'static str,
        lo: u32,
        hi: u32,
    },
}

/// Half-open integer range `[lo, hi)` for randomized pattern parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParamRange {
    pub lo: u32,
    pub hi: u32,
}

impl ParamRange {
    pub const fn new(lo: u32, hi: u32) -> Self {
        Self { lo, hi }
    }

    fn validate(&self, name: &'static str) -> Result<(), ConfigError> {
        if self.lo >= 1 && self.lo < self.hi {
            Ok(())
        } else {
            Err(ConfigError::Range {
                name,
                lo: self.lo,
                hi: self.hi,
            })
        }
    }

    /// Uniform draw. Never returns 0, even for a range that skipped
    /// validation; an empty range yields its (clamped) lower bound.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let lo = self.lo.max(1);
        if self.hi <= lo {
            return lo as usize;
        }
        rng.gen_range(lo..self.hi) as usize
    }
}

impl From<(u32, u32)> for ParamRange {
    fn from((lo, hi): (u32, u32)) -> Self {
        Self { lo, hi }
    }
}

#[derive(Clone, Debug)]
pub struct PatternParams {
    pub stripe_width: ParamRange,
    pub block_size: ParamRange,
    pub ring_thickness: ParamRange,
    pub wave_period: ParamRange,
}

impl Default for PatternParams {
    fn default() -> Self {
        Self {
            stripe_width: STRIPE_WIDTH_RANGE.into(),
            block_size: BLOCK_SIZE_RANGE.into(),
            ring_thickness: RING_THICKNESS_RANGE.into(),
            wave_period: WAVE_PERIOD_RANGE.into(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct EngineConfig {
    pub cell_size: f32,
    pub rotation_rate: f64,
    pub scroll_debounce: Duration,
    pub mutation_interval: Duration,
    pub color_step: f32,
    pub patterns: PatternParams,
    /// `None` seeds the pattern RNG from entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cell_size: CELL_SIZE,
            rotation_rate: ROTATION_RATE,
            scroll_debounce: SCROLL_DEBOUNCE,
            mutation_interval: MUTATION_INTERVAL,
            color_step: COLOR_STEP,
            patterns: PatternParams::default(),
            seed: None,
        }
    }
}

impl EngineConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(ConfigError::CellSize(self.cell_size));
        }
        if !(self.rotation_rate.is_finite() && self.rotation_rate > 0.0) {
            return Err(ConfigError::RotationRate(self.rotation_rate));
        }
        if self.mutation_interval.is_zero() {
            return Err(ConfigError::MutationInterval);
        }
        if !(self.color_step > 0.0 && self.color_step <= 1.0) {
            return Err(ConfigError::ColorStep(self.color_step));
        }
        let p = &self.patterns;
        p.stripe_width.validate("stripe width")?;
        p.block_size.validate("block size")?;
        p.ring_thickness.validate("ring thickness")?;
        p.wave_period.validate("wave period")?;
        Ok(())
    }
}
