/// spline.rs
/// Trait for common abstractions over everything that can be sampled at a
/// normalized parameter
use super::{NativeFloat, Vector3};

pub trait Spline {
    fn eval(&self, t: NativeFloat) -> Vector3;
}
