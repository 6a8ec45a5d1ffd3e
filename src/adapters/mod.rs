//! Optional adapters for external math libraries.
//!
//! Enable feature flags (e.g. `nalgebra`) to convert between `Vector3` and
//! external vector types.

#[cfg(feature = "nalgebra")]
pub mod nalgebra;
