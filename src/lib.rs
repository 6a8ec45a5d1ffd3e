//! Smooth motion between two rays.
//!
//! A [`Curve`] connects a start anchor and an end anchor, each carrying a
//! direction of travel. When the two rays converge in front of both anchors the
//! path is a straight run, a bend of bounded half length and a second straight
//! run. Otherwise the whole path is a single speed-corrected segment that blends
//! the projections along both rays.
//!
//! The building blocks are exposed as free functions so callers can
//! pre-compute lengths or speed variations without evaluating points:
//!
//! - [`line_crossing_distance`] / [`Ray2::crossing_distance`]
//! - [`speed_variation`]
//! - [`speed_scale_factor`] / [`curve_length`]
//! - [`corrected_distance`]
//! - [`curve_point`] / [`Curve::point_at`]
//!
//! Everything is pure and allocation free; z is carried along linearly and
//! never takes part in the bend geometry.
#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($($arg:tt)*) => { tracing::trace!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! debug_event {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! debug_event {
    ($($arg:tt)*) => {};
}

pub mod adapters;
pub mod bend;
pub mod correct;
pub mod curve;
pub mod layout;
pub mod policy;
pub mod ray;
pub mod spline;
pub mod vector;

pub use bend::{speed_variation, speed_variation_with};
pub use correct::{corrected_distance, Correction};
pub use curve::{curve_point, Curve, CurveError, CurvePoint};
pub use layout::{curve_length, speed_scale_factor, BendLayout, Segment, SegmentKind};
pub use policy::BendPolicy;
pub use ray::{line_crossing_distance, Intersection, Ray2};
pub use spline::Spline;
pub use vector::Vector3;

// single precision throughout, matching the callers' vector layout
pub type NativeFloat = f32;

/// Lengths and totals below this are treated as zero.
pub const DEGENERATE_LENGTH: NativeFloat = 1e-5;

/// Absolute tolerance used by the unit tests.
#[cfg(test)]
pub(crate) const EPSILON: NativeFloat = 1e-5;
