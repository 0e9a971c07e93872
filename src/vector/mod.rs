//! C array-literal emission and parsing.
//!
//! The emitter writes the waveform as a `static int` declaration that can be
//! pasted into firmware sources. The reader accepts the same ad hoc format
//! back, which is also what the external FFT test program writes.

mod emit;
mod read;

// Re-export public API
pub use emit::{format_c_vector, write_c_vector};
pub use read::{parse_c_vector, read_samples_from_file, ReadError};
