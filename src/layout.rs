//! Splitting the path between two rays into segments.
//!
//! When each ray meets the other's line strictly in front of its anchor the
//! path is laid out as straight run, bend and straight run. Otherwise it is a
//! single direct segment whose length is inflated by the speed variation.

use tinyvec::ArrayVec;

use super::{speed_variation_with, BendPolicy, NativeFloat, Ray2, Vector3};

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum SegmentKind {
    #[default]
    Straight,
    Bend,
    /// The single corrected segment of a [`BendLayout::Direct`] path.
    Direct,
}

#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Segment {
    pub kind: SegmentKind,
    pub length: NativeFloat,
}

/// Geometry of the path between two rays, independent of time.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum BendLayout {
    /// The rays do not converge ahead of both anchors.
    Direct {
        /// Planar distance between the anchors.
        straight: NativeFloat,
        variation: NativeFloat,
    },
    /// Straight run, bend of length `2 * bend_half`, straight run.
    ThreeSegment {
        straight_start: NativeFloat,
        bend_half: NativeFloat,
        straight_end: NativeFloat,
        variation: NativeFloat,
    },
}

impl BendLayout {
    /// Lays out the path from `start` heading `start_dir` to `end` heading
    /// `end_dir`. Only x and y of the directions are used.
    pub fn new(
        policy: &BendPolicy,
        start: Vector3,
        end: Vector3,
        start_dir: Vector3,
        end_dir: Vector3,
    ) -> Self {
        let variation = speed_variation_with(
            policy,
            start,
            end,
            start_dir.x,
            start_dir.y,
            end_dir.x,
            end_dir.y,
        );

        let start_ray = Ray2::from_vectors(start, start_dir);
        let end_ray = Ray2::from_vectors(end, end_dir);

        // distance from the crossing forward to the end anchor, hence the flip
        let to_crossing = start_ray.crossing_distance(&end_ray).ahead();
        let from_crossing = end_ray.crossing_distance(&start_ray).map(|d| -d).ahead();

        match (to_crossing, from_crossing) {
            (Some(d1), Some(d2)) => {
                let bend_half = d1.min(d2).min(policy.max_bend_half_length);
                BendLayout::ThreeSegment {
                    straight_start: d1 - bend_half,
                    bend_half,
                    straight_end: d2 - bend_half,
                    variation,
                }
            }
            _ => BendLayout::Direct {
                straight: start.distance_2d(end),
                variation,
            },
        }
    }

    pub fn variation(&self) -> NativeFloat {
        match *self {
            BendLayout::Direct { variation, .. } => variation,
            BendLayout::ThreeSegment { variation, .. } => variation,
        }
    }

    /// Distance travelled over the whole path.
    ///
    /// A direct path is stretched by `1 / (1 - variation)` because the slower
    /// effective speed has to cover more ground in the same time.
    pub fn total_length(&self) -> NativeFloat {
        match *self {
            BendLayout::Direct {
                straight,
                variation,
            } => straight / (1.0 - variation),
            BendLayout::ThreeSegment {
                straight_start,
                bend_half,
                straight_end,
                ..
            } => straight_start + bend_half * 2.0 + straight_end,
        }
    }

    /// The segments in travel order. Straight runs of zero length are skipped.
    pub fn segments(&self) -> ArrayVec<[Segment; 3]> {
        let mut segments = ArrayVec::new();
        match *self {
            BendLayout::Direct { .. } => segments.push(Segment {
                kind: SegmentKind::Direct,
                length: self.total_length(),
            }),
            BendLayout::ThreeSegment {
                straight_start,
                bend_half,
                straight_end,
                ..
            } => {
                if straight_start > 0.0 {
                    segments.push(Segment {
                        kind: SegmentKind::Straight,
                        length: straight_start,
                    });
                }
                segments.push(Segment {
                    kind: SegmentKind::Bend,
                    length: bend_half * 2.0,
                });
                if straight_end > 0.0 {
                    segments.push(Segment {
                        kind: SegmentKind::Straight,
                        length: straight_end,
                    });
                }
            }
        }
        segments
    }
}

/// Total path length for the rays through `start` and `end` with planar
/// directions given per component.
pub fn speed_scale_factor(
    start: Vector3,
    end: Vector3,
    start_dir_x: NativeFloat,
    start_dir_y: NativeFloat,
    end_dir_x: NativeFloat,
    end_dir_y: NativeFloat,
) -> NativeFloat {
    let start_dir = Vector3::new(start_dir_x, start_dir_y, 0.0);
    let end_dir = Vector3::new(end_dir_x, end_dir_y, 0.0);
    curve_length(start, end, start_dir, end_dir)
}

/// Total path length for the rays `start`/`start_dir` and `end`/`end_dir`.
pub fn curve_length(
    start: Vector3,
    end: Vector3,
    start_dir: Vector3,
    end_dir: Vector3,
) -> NativeFloat {
    BendLayout::new(&BendPolicy::DEFAULT, start, end, start_dir, end_dir).total_length()
}
