//! The anthropometric ratio table driving the built-in generator.
//!
//! A default instance ships with the crate; callers may substitute their
//! own. Instances are immutable once constructed.

use serde::{Deserialize, Serialize};

/// Ratios and reference points for the spinal column.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpineProportions {
    /// Spine length as a fraction of total height.
    pub length: f32,
    pub vertebrae: VertebraeProportions,
    /// Forward offset of the skull pivot, as a fraction of spine length.
    pub skull: f32,
}

/// Per-vertebra placement factors, each `[sagittal offset ratio, height
/// interpolation factor]`: the first scales spine length into a forward/back
/// offset, the second interpolates between sacrum and head heights.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VertebraeProportions {
    pub l3: [f32; 2],
    pub t12: [f32; 2],
    pub t7: [f32; 2],
    pub c7: [f32; 2],
}

/// Skull sizing and where it connects to the spine.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeadProportions {
    /// Head length as a fraction of total height.
    pub length: f32,
    /// Head depth as a fraction of head length.
    pub depth: f32,
    /// Neck connection point, `[depth offset, height offset]`, in head
    /// lengths.
    pub connection: [f32; 2],
}

/// Hand sizing relative to the wingspan.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HandProportions {
    /// Hand length as a fraction of wingspan.
    pub length: f32,
    /// Palm center offset from the wrist, in hand lengths.
    pub palm: [f32; 3],
}

/// Shoulder-girdle anchors (as offsets from the sacrum, in spine lengths)
/// and hand sizing.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArmProportions {
    pub clavicle: [f32; 3],
    pub scapula: [f32; 3],
    pub upper_arm: [f32; 3],
    pub hand: HandProportions,
}

/// The full ratio table.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Proportions {
    pub spine: SpineProportions,
    pub head: HeadProportions,
    pub arm: ArmProportions,
}

impl Default for Proportions {
    fn default() -> Self {
        Proportions {
            spine: SpineProportions {
                length: 0.4,
                vertebrae: VertebraeProportions {
                    l3: [0.05, 0.157],
                    t12: [0.0, 0.37],
                    t7: [-0.075, 0.59],
                    c7: [0.0, 0.88],
                },
                skull: 0.059,
            },
            head: HeadProportions {
                length: 0.225 / 1.76,
                depth: 0.8,
                connection: [-0.25, -0.4],
            },
            arm: ArmProportions {
                clavicle: [0.03, 0.86, 0.18],
                scapula: [0.14, 0.65, -0.1],
                upper_arm: [0.29, 0.8, 0.015],
                hand: HandProportions {
                    length: 0.2 / 1.75,
                    palm: [0.3, -0.075, 0.0],
                },
            },
        }
    }
}
