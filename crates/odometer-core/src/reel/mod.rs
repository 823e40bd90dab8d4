//! Timer-driven reeling between counter values.
//!
//! - `skip` - Step size with lenient parsing
//! - `driver` - Reel state machine (Idle / Reeling) attached to [`crate::Counter`]
//!
//! # Usage
//!
//! ```ignore
//! use std::time::Duration;
//! use odometer_core::{Counter, ReelOutcome, Skip};
//!
//! let mut counter = Counter::with_animation(Duration::from_millis(50), Skip::new(5));
//! counter.reel_to(10, |outcome| assert_eq!(outcome, ReelOutcome::Completed))?;
//!
//! while counter.is_reeling() {
//!     counter.tick().await;
//! }
//! ```

mod driver;
mod skip;

pub(crate) use driver::Animation;
pub use driver::{ReelCallback, ReelOutcome};
pub use skip::Skip;
