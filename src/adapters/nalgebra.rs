//! Nalgebra adapter implementations.
//!
//! Enable this adapter with the `nalgebra` feature to pass
//! `nalgebra::Vector3<f32>` positions and directions straight into a `Curve`.
//!
//! # Example
//! ```rust,no_run
//! use nalgebra::Vector3;
//! use bendcurve::Curve;
//!
//! let curve = Curve::new(
//!     Vector3::new(0.0, 0.0, 0.0).into(),
//!     Vector3::new(1.0, 1.0, 0.0).into(),
//!     Vector3::new(1.0, 0.0, 0.0).into(),
//!     Vector3::new(0.0, 1.0, 0.0).into(),
//! );
//!
//! let mid: Vector3<f32> = curve.position_at(0.5).into();
//! # let _ = mid;
//! ```

use crate::{NativeFloat, Vector3};

impl From<nalgebra::Vector3<NativeFloat>> for Vector3 {
    fn from(v: nalgebra::Vector3<NativeFloat>) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for nalgebra::Vector3<NativeFloat> {
    fn from(v: Vector3) -> Self {
        nalgebra::Vector3::new(v.x, v.y, v.z)
    }
}
