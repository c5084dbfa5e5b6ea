use crate::error::StepRangeError;
use alloy::primitives::U256;
use rand::Rng;

/// Half-open range `[low, high)` sampled on a grid of `step` starting at `low`.
///
/// The number of grid points is `floor((high - low) / step)`, so every sample
/// is strictly below `high` and `(sample - low) % step == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepRange {
    low: U256,
    high: U256,
    step: U256,
    steps: u64,
}

impl StepRange {
    pub fn new(low: U256, high: U256, step: U256) -> Result<Self, StepRangeError> {
        if step.is_zero() {
            return Err(StepRangeError::ZeroStep);
        }
        if low >= high {
            return Err(StepRangeError::EmptyRange { low, high });
        }
        let steps = (high - low) / step;
        if steps.is_zero() {
            return Err(StepRangeError::NoSteps { low, high, step });
        }
        let steps = u64::try_from(steps).map_err(|_| StepRangeError::TooManySteps)?;
        Ok(Self {
            low,
            high,
            step,
            steps,
        })
    }

    pub fn low(&self) -> U256 {
        self.low
    }

    pub fn high(&self) -> U256 {
        self.high
    }

    pub fn step(&self) -> U256 {
        self.step
    }

    /// Number of distinct values [`StepRange::sample`] can return.
    pub fn num_steps(&self) -> u64 {
        self.steps
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> U256 {
        let index = rng.gen_range(0..self.steps);
        self.low + U256::from(index) * self.step
    }
}
