//! Evaluating position and velocity along the path between two rays.

use core::fmt;

use num_traits::Float;
use tinyvec::ArrayVec;

use super::{
    corrected_distance, BendLayout, BendPolicy, NativeFloat, Segment, Spline, Vector3,
    DEGENERATE_LENGTH,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveError {
    /// Velocity is distance over traversal time, which must be non-zero.
    ZeroTraversalTime,
}

impl fmt::Display for CurveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurveError::ZeroTraversalTime => write!(f, "traversal time must be greater than zero"),
        }
    }
}

#[cfg(any(test, feature = "std"))]
impl std::error::Error for CurveError {}

/// Position on the path and the velocity at that point, in distance units per second.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CurvePoint {
    pub position: Vector3,
    pub velocity: Vector3,
}

/// Path from `start` to `end` leaving along `start_dir` and arriving along `end_dir`.
///
/// Both directions point the way the object travels. They need not be unit
/// length, but distances along the straight runs are measured in multiples of
/// them, so non-unit directions stretch those runs accordingly.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Curve {
    pub start: Vector3,
    pub end: Vector3,
    pub start_dir: Vector3,
    pub end_dir: Vector3,
    policy: BendPolicy,
}

impl Curve {
    pub fn new(start: Vector3, end: Vector3, start_dir: Vector3, end_dir: Vector3) -> Self {
        Curve {
            start,
            end,
            start_dir,
            end_dir,
            policy: BendPolicy::DEFAULT,
        }
    }

    pub fn with_policy(self, policy: BendPolicy) -> Self {
        Curve { policy, ..self }
    }

    pub fn policy(&self) -> &BendPolicy {
        &self.policy
    }

    pub fn layout(&self) -> BendLayout {
        BendLayout::new(
            &self.policy,
            self.start,
            self.end,
            self.start_dir,
            self.end_dir,
        )
    }

    /// Distance travelled from `start` to `end`.
    pub fn length(&self) -> NativeFloat {
        self.layout().total_length()
    }

    pub fn segments(&self) -> ArrayVec<[Segment; 3]> {
        self.layout().segments()
    }

    /// Position and velocity at normalized time `t`, clamped to `[0, 1]`.
    ///
    /// A `traversal_millis` of zero yields zero velocity; see
    /// [`Curve::try_point_at`] to reject it instead.
    pub fn point_at(&self, t: NativeFloat, traversal_millis: u32) -> CurvePoint {
        let t = t.clamp(0.0, 1.0);
        let layout = self.layout();
        trace_event!(?layout, t, "evaluating curve point");

        let (position, total) = match layout {
            BendLayout::Direct {
                straight,
                variation,
            } => {
                let total = layout.total_length();
                (self.direct_position(t, straight, total, variation), total)
            }
            BendLayout::ThreeSegment {
                straight_start,
                bend_half,
                straight_end,
                ..
            } => {
                let total = layout.total_length();
                let position = self.three_segment_position(
                    t * total,
                    total,
                    straight_start,
                    bend_half,
                    straight_end,
                );
                (position, total)
            }
        };

        CurvePoint {
            position,
            velocity: self.velocity(t, total, traversal_millis),
        }
    }

    /// Like [`Curve::point_at`], but rejects a zero traversal time.
    pub fn try_point_at(
        &self,
        t: NativeFloat,
        traversal_millis: u32,
    ) -> Result<CurvePoint, CurveError> {
        if traversal_millis == 0 {
            return Err(CurveError::ZeroTraversalTime);
        }
        Ok(self.point_at(t, traversal_millis))
    }

    /// Position at normalized time `t`, clamped to `[0, 1]`.
    pub fn position_at(&self, t: NativeFloat) -> Vector3 {
        self.point_at(t, 1000).position
    }

    /// Approximates the length of the evaluated path with `nsteps` straight
    /// pieces. Unlike [`Curve::length`] this measures the bend as drawn, and
    /// includes z.
    pub fn arclen(&self, nsteps: usize) -> NativeFloat {
        let nsteps = nsteps.max(1);
        let mut arclen: NativeFloat = 0.0;
        let mut prev = self.position_at(0.0);
        for i in 1..=nsteps {
            let t = i as NativeFloat / nsteps as NativeFloat;
            let p = self.position_at(t);
            let d = p - prev;
            arclen = arclen + (d.squared_magnitude_2d() + d.z * d.z).sqrt();
            prev = p;
        }
        arclen
    }

    // single corrected segment: project the corrected distance along both rays
    // and blend the two projections by the easing factor
    fn direct_position(
        &self,
        t: NativeFloat,
        straight: NativeFloat,
        total: NativeFloat,
        variation: NativeFloat,
    ) -> Vector3 {
        // anchors stacked in the plane leave nothing to correct, only z moves
        if total < DEGENERATE_LENGTH {
            return self.start.lerp(self.end, t);
        }
        let correction = corrected_distance(total * t, total, variation);
        let along_start = self.start + self.start_dir * correction.distance;
        let along_end = self.end + self.end_dir * (correction.distance - straight);
        along_start.lerp(along_end, correction.interpolation)
    }

    fn three_segment_position(
        &self,
        distance: NativeFloat,
        total: NativeFloat,
        straight_start: NativeFloat,
        bend_half: NativeFloat,
        straight_end: NativeFloat,
    ) -> Vector3 {
        let bend = bend_half * 2.0;

        if distance < straight_start {
            return self.start + self.start_dir * distance;
        }

        if distance > straight_start + bend {
            // remaining distance is covered along end_dir into the end anchor
            return self.end - self.end_dir * (total - distance);
        }

        let bend_t = (distance - straight_start) / bend;
        let bend_start = self.start + self.start_dir * straight_start;
        let bend_end = self.end - self.end_dir * straight_end;

        // pull each bend endpoint towards the corner, then blend: a quadratic
        // bezier with the corner as control point
        let from_start = bend_start + self.start_dir * (bend_half * bend_t);
        let into_end = bend_end - self.end_dir * (bend_half * (1.0 - bend_t));
        from_start.lerp(into_end, bend_t)
    }

    fn velocity(&self, t: NativeFloat, total: NativeFloat, traversal_millis: u32) -> Vector3 {
        if traversal_millis == 0 {
            debug_event!("zero traversal time, reporting zero velocity");
            return Vector3::ZERO;
        }
        let seconds = traversal_millis as NativeFloat * 0.001;
        let heading = self.end_dir * t + self.start_dir * (1.0 - t);
        (heading * (total / seconds)).with_z(0.0)
    }
}

impl Spline for Curve {
    fn eval(&self, t: NativeFloat) -> Vector3 {
        self.position_at(t)
    }
}

/// Position and velocity at `t` on the path between the two rays, using the
/// default [`BendPolicy`].
pub fn curve_point(
    start: Vector3,
    end: Vector3,
    start_dir: Vector3,
    end_dir: Vector3,
    t: NativeFloat,
    traversal_millis: u32,
) -> CurvePoint {
    Curve::new(start, end, start_dir, end_dir).point_at(t, traversal_millis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EPSILON;
    use approx::assert_abs_diff_eq;

    fn v(x: NativeFloat, y: NativeFloat, z: NativeFloat) -> Vector3 {
        Vector3::new(x, y, z)
    }

    fn assert_near(actual: Vector3, expected: Vector3) {
        let err = actual - expected;
        assert!(
            err.squared_magnitude_2d() + err.z * err.z < EPSILON * EPSILON,
            "{actual:?} != {expected:?}"
        );
    }

    fn quarter_turn() -> Curve {
        Curve::new(v(0.0, 0.0, 0.0), v(1.0, 1.0, 0.0), v(1.0, 0.0, 0.0), v(0.0, 1.0, 0.0))
    }

    #[test]
    fn straight_line_midpoint() {
        let p = curve_point(
            v(0.0, 0.0, 0.0),
            v(1.0, 0.0, 0.0),
            v(1.0, 0.0, 0.0),
            v(1.0, 0.0, 0.0),
            0.5,
            1000,
        );
        assert_near(p.position, v(0.5, 0.0, 0.0));
        assert_near(p.velocity, v(1.0, 0.0, 0.0));
    }

    #[test]
    fn quarter_turn_stays_inside_corner() {
        let p = quarter_turn().point_at(0.5, 1000);
        assert_near(p.position, v(0.75, 0.25, 0.0));
        assert!(p.position.x > 0.0 && p.position.x < 1.0);
        assert!(p.position.y > 0.0 && p.position.y < 1.0);
        // heading halfway between the rays, two units of path per second
        assert_near(p.velocity, v(1.0, 1.0, 0.0));
    }

    #[test]
    fn endpoints_are_exact() {
        let curve = quarter_turn();
        assert_near(curve.position_at(0.0), curve.start);
        assert_near(curve.position_at(1.0), curve.end);

        let long = Curve::new(
            v(0.0, 0.0, 0.0),
            v(1000.0, 1000.0, 0.0),
            v(1.0, 0.0, 0.0),
            v(0.0, 1.0, 0.0),
        );
        assert_eq!(long.position_at(0.0), long.start);
        assert_eq!(long.position_at(1.0), long.end);

        let direct = Curve::new(
            v(2.0, -1.0, 3.0),
            v(-4.0, 5.0, 1.0),
            v(0.3, 1.0, 0.0),
            v(-0.3, -1.0, 0.0),
        );
        assert!(matches!(direct.layout(), BendLayout::Direct { .. }));
        assert_near(direct.position_at(0.0), direct.start);
        let end = direct.position_at(1.0);
        assert_abs_diff_eq!(end.x, direct.end.x, epsilon = 1e-4);
        assert_abs_diff_eq!(end.y, direct.end.y, epsilon = 1e-4);
        assert_abs_diff_eq!(end.z, direct.end.z, epsilon = 1e-4);
    }

    #[test]
    fn large_bend_walks_all_three_segments() {
        let curve = Curve::new(
            v(0.0, 0.0, 0.0),
            v(1000.0, 1000.0, 0.0),
            v(1.0, 0.0, 0.0),
            v(0.0, 1.0, 0.0),
        );
        assert_eq!(curve.length(), 2000.0);
        assert_eq!(curve.segments().len(), 3);

        // first straight
        assert_near(curve.position_at(0.25), v(500.0, 0.0, 0.0));
        // middle of the bend, inside the corner at (1000, 0)
        let mid = curve.position_at(0.5);
        assert_near(mid, v(998.75, 1.25, 0.0));
        // final straight, approaching the end along end_dir
        assert_near(curve.position_at(0.75), v(1000.0, 500.0, 0.0));
    }

    #[test]
    fn path_is_continuous_across_segment_boundaries() {
        let curve = Curve::new(
            v(0.0, 0.0, 0.0),
            v(20.0, 20.0, 0.0),
            v(1.0, 0.0, 0.0),
            v(0.0, 1.0, 0.0),
        );
        // straights of 15, bend of 10: boundaries at 15/40 and 25/40
        for boundary in [15.0 / 40.0, 25.0 / 40.0] {
            let before = curve.position_at(boundary - 1e-5);
            let after = curve.position_at(boundary + 1e-5);
            let gap = before - after;
            assert!(gap.magnitude_2d() < 0.01, "jump of {gap:?} at {boundary}");
        }
    }

    #[test]
    fn z_axis_passes_through() {
        let p = curve_point(
            v(0.0, 0.0, 0.0),
            v(0.0, 0.0, 1.0),
            v(0.0, 0.0, 1.0),
            v(0.0, 0.0, 1.0),
            0.5,
            1000,
        );
        assert_near(p.position, v(0.0, 0.0, 0.5));
        assert_eq!(p.velocity.z, 0.0);
    }

    #[test]
    fn stacked_anchors_reach_both_ends() {
        let curve = Curve::new(
            v(3.0, 4.0, 0.0),
            v(3.0, 4.0, 10.0),
            v(1.0, 0.0, 0.0),
            v(1.0, 0.0, 0.0),
        );
        assert_eq!(curve.position_at(0.0), curve.start);
        assert_eq!(curve.position_at(1.0), curve.end);
        assert_near(curve.position_at(0.5), v(3.0, 4.0, 5.0));
        assert_near(curve.position_at(0.25), v(3.0, 4.0, 2.5));
    }

    #[test]
    fn direct_velocity_covers_stretched_length() {
        // parallel rays two units apart: variation 1/3 stretches 2 to 3
        let curve = Curve::new(
            v(0.0, 0.0, 0.0),
            v(0.0, 2.0, 0.0),
            v(1.0, 0.0, 0.0),
            v(1.0, 0.0, 0.0),
        );
        assert!(matches!(curve.layout(), BendLayout::Direct { .. }));
        assert_abs_diff_eq!(curve.layout().variation(), 1.0 / 3.0, epsilon = EPSILON);
        assert_abs_diff_eq!(curve.length(), 3.0, epsilon = EPSILON);
        assert_near(curve.point_at(0.0, 1000).velocity, v(3.0, 0.0, 0.0));
        assert_near(curve.point_at(0.0, 2000).velocity, v(1.5, 0.0, 0.0));
    }

    #[test]
    fn reversing_direction() {
        let p = curve_point(
            v(0.0, 0.0, 0.0),
            v(1.0, 0.0, 0.0),
            v(1.0, 0.0, 0.0),
            v(-1.0, 0.0, 0.0),
            0.5,
            1000,
        );
        assert_near(p.position, v(1.0, 0.0, 0.0));
    }

    #[test]
    fn time_is_clamped() {
        let curve = quarter_turn();
        assert_eq!(curve.point_at(-1.0, 500), curve.point_at(0.0, 500));
        assert_eq!(curve.point_at(-0.001, 500), curve.point_at(0.0, 500));
        assert_eq!(curve.point_at(2.0, 500), curve.point_at(1.0, 500));
        assert_eq!(curve.point_at(1.5, 500), curve.point_at(1.0, 500));
    }

    #[test]
    fn velocity_scales_with_traversal_time() {
        let curve = quarter_turn();
        let fast = curve.point_at(0.0, 500).velocity;
        let slow = curve.point_at(0.0, 2000).velocity;
        assert_near(fast, v(4.0, 0.0, 0.0));
        assert_near(slow, v(1.0, 0.0, 0.0));
        assert_near(curve.point_at(1.0, 1000).velocity, v(0.0, 2.0, 0.0));
    }

    #[test]
    fn velocity_ignores_z() {
        let curve = Curve::new(
            v(0.0, 0.0, 0.0),
            v(10.0, 10.0, 8.0),
            v(1.0, 0.0, 1.0),
            v(0.0, 1.0, 1.0),
        );
        assert_eq!(curve.point_at(0.3, 1000).velocity.z, 0.0);
    }

    #[test]
    fn zero_traversal_time() {
        let curve = quarter_turn();
        assert_eq!(curve.point_at(0.5, 0).velocity, Vector3::ZERO);
        assert_eq!(curve.try_point_at(0.5, 0), Err(CurveError::ZeroTraversalTime));
        assert_eq!(curve.try_point_at(0.5, 1000), Ok(curve.point_at(0.5, 1000)));
        assert_eq!(
            CurveError::ZeroTraversalTime.to_string(),
            "traversal time must be greater than zero"
        );
    }

    #[test]
    fn spline_eval_matches_position() {
        let curve = quarter_turn();
        for i in 0..=10 {
            let t = i as NativeFloat / 10.0;
            assert_eq!(Spline::eval(&curve, t), curve.position_at(t));
        }
    }

    #[test]
    fn drawn_bend_is_shorter_than_layout() {
        let curve = Curve::new(
            v(0.0, 0.0, 0.0),
            v(20.0, 20.0, 0.0),
            v(1.0, 0.0, 0.0),
            v(0.0, 1.0, 0.0),
        );
        let drawn = curve.arclen(512);
        // straights of 15 each plus a bend cutting the corner
        assert!(drawn < curve.length());
        assert!(drawn > 30.0 + 10.0 * core::f32::consts::FRAC_1_SQRT_2);

        let straight = Curve::new(
            v(0.0, 0.0, 0.0),
            v(4.0, 0.0, 0.0),
            v(1.0, 0.0, 0.0),
            v(1.0, 0.0, 0.0),
        );
        assert_abs_diff_eq!(straight.arclen(64), 4.0, epsilon = 1e-3);
    }

    #[test]
    fn custom_policy_changes_bend() {
        let default = quarter_turn();
        let tight = default.with_policy(BendPolicy::default().with_max_bend_half_length(0.5));
        assert_eq!(tight.policy().max_bend_half_length, 0.5);
        assert_eq!(tight.length(), default.length());
        assert_ne!(tight.position_at(0.5), default.position_at(0.5));
        assert_near(tight.position_at(0.5), v(0.875, 0.125, 0.0));
    }
}
