//! Planar rays and where they cross.
//!
//! Directions are never normalized here. Every result scales with the length
//! of the direction vectors, which is what the callers rely on.

use num_traits::Float;

use super::{NativeFloat, Vector3};

/// Outcome of intersecting the lines through two rays.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Intersection {
    /// Signed distance along the first ray, in units of its direction vector.
    /// Negative values lie behind the base point.
    Crossing(NativeFloat),
    /// The directions are linearly dependent (parallel or coincident lines).
    Parallel,
}

impl Intersection {
    /// Distance value of the legacy numeric contract: `-1.0` stands for
    /// [`Intersection::Parallel`].
    pub fn distance_or_sentinel(self) -> NativeFloat {
        match self {
            Intersection::Crossing(distance) => distance,
            Intersection::Parallel => -1.0,
        }
    }

    /// The crossing distance if it lies strictly ahead of the base point.
    pub fn ahead(self) -> Option<NativeFloat> {
        match self {
            Intersection::Crossing(distance) if distance > 0.0 => Some(distance),
            _ => None,
        }
    }

    pub fn map<F>(self, f: F) -> Self
    where
        F: FnOnce(NativeFloat) -> NativeFloat,
    {
        match self {
            Intersection::Crossing(distance) => Intersection::Crossing(f(distance)),
            Intersection::Parallel => Intersection::Parallel,
        }
    }
}

/// Base point plus direction in the xy plane.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Ray2 {
    pub base_x: NativeFloat,
    pub base_y: NativeFloat,
    pub dir_x: NativeFloat,
    pub dir_y: NativeFloat,
}

impl Ray2 {
    pub fn new(
        base_x: NativeFloat,
        base_y: NativeFloat,
        dir_x: NativeFloat,
        dir_y: NativeFloat,
    ) -> Self {
        Ray2 {
            base_x,
            base_y,
            dir_x,
            dir_y,
        }
    }

    /// Planar ray from a position and a direction; z of both is dropped.
    pub fn from_vectors(base: Vector3, dir: Vector3) -> Self {
        Ray2::new(base.x, base.y, dir.x, dir.y)
    }

    pub fn base(&self) -> Vector3 {
        Vector3::new(self.base_x, self.base_y, 0.0)
    }

    pub fn dir(&self) -> Vector3 {
        Vector3::new(self.dir_x, self.dir_y, 0.0)
    }

    /// Distance along `self` to the point where it meets the line through `other`.
    pub fn crossing_distance(&self, other: &Ray2) -> Intersection {
        let cross = self.dir().perp_dot(other.dir());
        if cross == 0.0 {
            return Intersection::Parallel;
        }

        let offset = (self.base() - other.base()).perp_dot(other.dir());
        Intersection::Crossing(-offset / cross)
    }

    /// Distance from `(x, y)` to the infinite line through the ray.
    ///
    /// The projection onto the direction is not divided by its length, so the
    /// result is only the true perpendicular distance for unit directions.
    /// Points whose projection exceeds their offset report zero.
    pub fn distance_to_point(&self, x: NativeFloat, y: NativeFloat) -> NativeFloat {
        let offset = Vector3::new(x, y, 0.0) - self.base();
        let along = offset.dot_2d(self.dir());
        let squared = offset.squared_magnitude_2d() - along * along;
        if squared <= 0.0 {
            0.0
        } else {
            squared.sqrt()
        }
    }
}

/// Scalar form of [`Ray2::crossing_distance`] returning `-1.0` for parallel lines.
#[allow(clippy::too_many_arguments)]
pub fn line_crossing_distance(
    line_base_x: NativeFloat,
    line_base_y: NativeFloat,
    line_dir_x: NativeFloat,
    line_dir_y: NativeFloat,
    other_base_x: NativeFloat,
    other_base_y: NativeFloat,
    other_dir_x: NativeFloat,
    other_dir_y: NativeFloat,
) -> NativeFloat {
    let line = Ray2::new(line_base_x, line_base_y, line_dir_x, line_dir_y);
    let other = Ray2::new(other_base_x, other_base_y, other_dir_x, other_dir_y);
    line.crossing_distance(&other).distance_or_sentinel()
}
