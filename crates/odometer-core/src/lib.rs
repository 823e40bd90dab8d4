pub mod config;
pub mod counter;
pub mod error;
pub mod reel;

pub use config::{AppConfig, CounterConfig, GeneralConfig, UiConfig};
pub use counter::{Counter, DigitElement, DigitRegistry};
pub use error::{Error, Result};
pub use reel::{ReelOutcome, Skip};
