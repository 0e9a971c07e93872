//! Parameter definitions with physical units and documented semantics.
//!
//! The reference fixture constants live here as `Default` impls:
//! - Physical units (seconds, Hz)
//! - Documented ranges and meanings
//! - Overridable from the command line (see `cli`)

mod plot;
mod signal;

// Re-export all types
pub use plot::{ImageFormat, PlotConfig};
pub use signal::{RoundingMode, SignalConfig};
