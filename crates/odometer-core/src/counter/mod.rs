//! The counter display model.
//!
//! A [`Counter`] owns an append-only [`DigitRegistry`] and renders values into
//! it right-aligned. Counters built with [`Counter::with_animation`] can also
//! reel toward a target on a timer (see [`crate::reel`]).

mod element;
mod registry;
pub mod render;

use std::fmt;
use std::time::Duration;

pub use element::DigitElement;
pub use registry::DigitRegistry;

use crate::config::CounterConfig;
use crate::reel::{Animation, Skip};

/// Class name of the root container
pub const CONTAINER_CLASS: &str = "counter";

/// Default number of digit cells on a fresh counter
pub const DEFAULT_DIGITS: usize = 2;

pub struct Counter {
    registry: DigitRegistry,
    /// Current value
    n: u64,
    /// Configured minimum width
    total: usize,
    /// Reel driver, present only on animated counters
    pub(crate) animation: Option<Animation>,
}

impl Default for Counter {
    fn default() -> Self {
        Self::new()
    }
}

impl Counter {
    /// Create a static counter showing `0` in two digits
    pub fn new() -> Self {
        let mut counter = Self {
            registry: DigitRegistry::new(),
            n: 0,
            total: 0,
            animation: None,
        };
        counter.digits(DEFAULT_DIGITS);
        counter
    }

    /// Create a counter that can reel, stepping by `skip` every `interval`
    pub fn with_animation(interval: Duration, skip: Skip) -> Self {
        let mut counter = Self::new();
        counter.animation = Some(Animation::new(interval, skip));
        counter
    }

    /// Build a counter from configuration
    pub fn from_config(config: &CounterConfig) -> Self {
        let mut counter = if config.animated {
            Self::with_animation(config.interval(), config.skip)
        } else {
            Self::new()
        };
        counter.digits(config.digits);
        counter
    }

    /// Set the total number of digits to `n`, growing the registry if needed
    pub fn digits(&mut self, n: usize) -> &mut Self {
        self.total = n;
        self.registry.ensure(n);
        self
    }

    /// Display `n`
    pub fn update(&mut self, n: u64) -> &mut Self {
        self.n = n;
        self.registry.ensure(render::decimal_len(n));
        for (index, digit) in render::placements(n, self.total) {
            self.registry.update_digit_at(index, digit);
        }
        self
    }

    /// Current value
    #[inline]
    pub fn value(&self) -> u64 {
        self.n
    }

    /// Configured minimum width
    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    #[inline]
    pub fn elements(&self) -> &DigitRegistry {
        &self.registry
    }

    pub fn class_name(&self) -> &'static str {
        CONTAINER_CLASS
    }

    /// Displayed characters, left to right
    pub fn display_digits(&self) -> String {
        self.registry.iter().map(DigitElement::text).collect()
    }
}

impl fmt::Debug for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Counter")
            .field("n", &self.n)
            .field("total", &self.total)
            .field("digits", &self.display_digits())
            .field("animation", &self.animation)
            .finish()
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_digits())
    }
}
