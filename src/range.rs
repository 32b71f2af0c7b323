//! Bounded integer value model.
//!
//! Every mutation keeps `minimum <= value <= maximum`. Inputs are never
//! rejected; out-of-range values and inverted bounds are corrected.

use crate::constants;

/// Value plus the range it lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeState {
    value: i32,
    minimum: i32,
    maximum: i32,
    small_change: i32,
    large_change: i32,
}

impl Default for RangeState {
    fn default() -> Self {
        Self {
            value: constants::DEFAULT_MINIMUM,
            minimum: constants::DEFAULT_MINIMUM,
            maximum: constants::DEFAULT_MAXIMUM,
            small_change: constants::SMALL_CHANGE,
            large_change: constants::LARGE_CHANGE,
        }
    }
}

impl RangeState {
    pub fn new(minimum: i32, maximum: i32) -> Self {
        let mut state = Self::default();
        state.set_range(minimum, maximum);
        state
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn minimum(&self) -> i32 {
        self.minimum
    }

    pub fn maximum(&self) -> i32 {
        self.maximum
    }

    /// `maximum - minimum`, widened so extreme bounds cannot overflow.
    pub fn span(&self) -> i64 {
        self.maximum as i64 - self.minimum as i64
    }

    /// True when the range collapsed to a single value.
    pub fn is_degenerate(&self) -> bool {
        self.maximum == self.minimum
    }

    pub fn small_change(&self) -> i32 {
        self.small_change
    }

    pub fn large_change(&self) -> i32 {
        self.large_change
    }

    pub fn set_small_change(&mut self, step: i32) {
        self.small_change = step.max(1);
    }

    pub fn set_large_change(&mut self, step: i32) {
        self.large_change = step.max(1);
    }

    /// Clamp `value` into range and store it. Returns whether it changed.
    pub fn set_value(&mut self, value: i32) -> bool {
        let clamped = value.clamp(self.minimum, self.maximum);
        if clamped == self.value {
            return false;
        }
        self.value = clamped;
        true
    }

    /// Returns whether the value moved as a side effect.
    pub fn set_minimum(&mut self, minimum: i32) -> bool {
        let old = self.value;
        self.minimum = minimum;
        if self.minimum > self.maximum {
            self.maximum = self.minimum;
        }
        if self.minimum > self.value {
            self.value = self.minimum;
        }
        old != self.value
    }

    /// Returns whether the value moved as a side effect.
    pub fn set_maximum(&mut self, maximum: i32) -> bool {
        let old = self.value;
        self.maximum = maximum;
        if self.maximum < self.value {
            self.value = self.maximum;
        }
        if self.maximum < self.minimum {
            self.minimum = self.maximum;
        }
        old != self.value
    }

    /// Minimum, clamp up, maximum, clamp down, then the minimum floor check.
    ///
    /// Returns whether the value moved as a side effect.
    pub fn set_range(&mut self, minimum: i32, maximum: i32) -> bool {
        let old = self.value;
        self.minimum = minimum;
        if self.minimum > self.value {
            self.value = self.minimum;
        }
        self.maximum = maximum;
        if self.maximum < self.value {
            self.value = self.maximum;
        }
        if self.maximum < self.minimum {
            self.minimum = self.maximum;
        }
        old != self.value
    }

    /// Add `step`, saturating at the bounds.
    pub fn increment(&mut self, step: i32) {
        self.value = self
            .value
            .saturating_add(step)
            .clamp(self.minimum, self.maximum);
    }

    /// Subtract `step`, saturating at the bounds.
    pub fn decrement(&mut self, step: i32) {
        self.value = self
            .value
            .saturating_sub(step)
            .clamp(self.minimum, self.maximum);
    }
}
