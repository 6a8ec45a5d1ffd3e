//! Speed correction along a single segment.
//!
//! Maps linear progress to the distance actually covered when the object slows
//! down and speeds up again by the speed variation, together with a raised
//! cosine easing factor over the same progress.

use core::f32::consts::{PI, TAU};

use num_traits::Float;

use super::{NativeFloat, DEGENERATE_LENGTH};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Correction {
    /// Distance covered after `current` units of linear progress.
    pub distance: NativeFloat,
    /// Raised cosine easing in `[0, 1]` over `current / total`.
    pub interpolation: NativeFloat,
}

/// Corrected distance after `current` of `total` units of progress.
///
/// `total` below [`DEGENERATE_LENGTH`] (including negative totals) yields a
/// distance of zero at the midpoint of the easing. The variation is not
/// validated; values of one or more produce zero or negative distances.
///
/// With a variation of zero the distance is exactly `current`.
pub fn corrected_distance(
    current: NativeFloat,
    total: NativeFloat,
    variation: NativeFloat,
) -> Correction {
    if total < DEGENERATE_LENGTH {
        return Correction {
            distance: 0.0,
            interpolation: 0.5,
        };
    }

    let average_speed = (total / TAU) * variation;
    let distance =
        (1.0 - variation) * current + average_speed * ((current * TAU) / total).sin();
    let interpolation = 0.5 - ((current / total) * PI).cos() * 0.5;

    Correction {
        distance,
        interpolation,
    }
}
