//! Tunable constants of the bend model.
//!
//! The values are untuned policy rather than anything derived from the
//! geometry.

use super::NativeFloat;

/// Upper bound for half the length of the bend segment.
pub const MAX_BEND_HALF_LENGTH: NativeFloat = 5.0;

/// At or below this direction dot product the bend is treated as a full turn.
pub const OPPOSED_DOT: NativeFloat = 0.0;

/// Above this direction dot product the directions count as nearly aligned and
/// the speed variation is derived from the lateral offset instead.
pub const ALIGNED_DOT: NativeFloat = 0.7;

/// Speed variation of the sharpest bend.
pub const MAX_SPEED_VARIATION: NativeFloat = 1.0 / 3.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BendPolicy {
    pub max_bend_half_length: NativeFloat,
    pub opposed_dot: NativeFloat,
    pub aligned_dot: NativeFloat,
    pub max_speed_variation: NativeFloat,
}

impl BendPolicy {
    pub const DEFAULT: Self = BendPolicy {
        max_bend_half_length: MAX_BEND_HALF_LENGTH,
        opposed_dot: OPPOSED_DOT,
        aligned_dot: ALIGNED_DOT,
        max_speed_variation: MAX_SPEED_VARIATION,
    };

    /// `max_speed_variation` must stay below one: direct paths are stretched
    /// by `1 / (1 - variation)`.
    pub fn new(
        max_bend_half_length: NativeFloat,
        opposed_dot: NativeFloat,
        aligned_dot: NativeFloat,
        max_speed_variation: NativeFloat,
    ) -> Self {
        debug_assert!(
            max_speed_variation < 1.0,
            "max_speed_variation must be below one, got {max_speed_variation}"
        );
        BendPolicy {
            max_bend_half_length,
            opposed_dot,
            aligned_dot,
            max_speed_variation,
        }
    }

    /// Same policy with a different bend half length cap.
    pub fn with_max_bend_half_length(self, max_bend_half_length: NativeFloat) -> Self {
        BendPolicy {
            max_bend_half_length,
            ..self
        }
    }
}

impl Default for BendPolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}
