//! How much a bend slows travel.
//!
//! The speed variation is a dimensionless factor in `[0, 1/3]` for the default
//! policy: `1/3` for perpendicular or opposing directions, falling linearly to
//! zero as the directions close in on `ALIGNED_DOT`, and for nearly aligned
//! directions proportional to how far the start lies off the end line.

use super::{BendPolicy, NativeFloat, Ray2, Vector3, DEGENERATE_LENGTH};

/// Speed variation for a bend from `start` (heading `start_dir_*`) to `end`
/// (heading `end_dir_*`) under the default [`BendPolicy`].
pub fn speed_variation(
    start: Vector3,
    end: Vector3,
    start_dir_x: NativeFloat,
    start_dir_y: NativeFloat,
    end_dir_x: NativeFloat,
    end_dir_y: NativeFloat,
) -> NativeFloat {
    speed_variation_with(
        &BendPolicy::DEFAULT,
        start,
        end,
        start_dir_x,
        start_dir_y,
        end_dir_x,
        end_dir_y,
    )
}

/// [`speed_variation`] with explicit policy constants.
pub fn speed_variation_with(
    policy: &BendPolicy,
    start: Vector3,
    end: Vector3,
    start_dir_x: NativeFloat,
    start_dir_y: NativeFloat,
    end_dir_x: NativeFloat,
    end_dir_y: NativeFloat,
) -> NativeFloat {
    let start_dir = Vector3::new(start_dir_x, start_dir_y, 0.0);
    let end_dir = Vector3::new(end_dir_x, end_dir_y, 0.0);
    let dot = start_dir.dot_2d(end_dir);

    if dot <= policy.opposed_dot {
        return policy.max_speed_variation;
    }

    if dot <= policy.aligned_dot {
        return (1.0 - dot / policy.aligned_dot) * policy.max_speed_variation;
    }

    let end_line = Ray2::new(end.x, end.y, end_dir_x, end_dir_y);
    let off_line = end_line.distance_to_point(start.x, start.y);

    let mut straight = start.distance_2d(end);
    if straight < DEGENERATE_LENGTH {
        debug_event!(straight, "anchors coincide in the plane, clamping bend denominator");
        straight = DEGENERATE_LENGTH;
    }

    (off_line / straight) * policy.max_speed_variation
}
