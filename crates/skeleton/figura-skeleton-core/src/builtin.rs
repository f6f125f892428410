//! The built-in kinematic generator.
//!
//! Placement happens in world space first: spine and head joints along the
//! vertical axis, then the right arm chain off the shoulder girdle, then the
//! left side as a mirror of the finished right side. The completed absolute
//! tree is converted to parent-relative transforms in one pass at the end,
//! which keeps every placement formula expressed against a shared origin.

use figura_body_core::{BodyNode, BodyTree, Space, Transform};

use crate::measurements::BodyMeasurements;
use crate::proportions::Proportions;

/// Generate a default-posed skeleton using [`Proportions::default`].
///
/// Matches the generator delegate shape for [`BodyMeasurements`] inputs.
/// Degenerate measurements produce degenerate geometry; the entry points in
/// [`skeleton`](crate::skeleton) validate before dispatching here.
pub fn generate(input: &BodyMeasurements) -> BodyTree<Transform> {
    generate_with(&(Proportions::default(), *input))
}

/// Generate a default-posed skeleton from caller-supplied proportions.
///
/// Matches the generator delegate shape for `(Proportions,
/// BodyMeasurements)` inputs.
pub fn generate_with(input: &(Proportions, BodyMeasurements)) -> BodyTree<Transform> {
    let (proportions, measurements) = input;
    let mut world: BodyTree<Transform> = BodyTree::new();
    place_spine_and_head(measurements, proportions, &mut world);
    place_arms(measurements, proportions, &mut world);
    mirror_left_arm(&mut world);
    anchor_legs(&mut world);
    world.converted(Space::Local)
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
fn add3(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

#[inline]
fn scale3(v: [f32; 3], s: f32) -> [f32; 3] {
    [v[0] * s, v[1] * s, v[2] * s]
}

fn place_spine_and_head(
    measurements: &BodyMeasurements,
    proportions: &Proportions,
    world: &mut BodyTree<Transform>,
) {
    let spine_length = proportions.spine.length * measurements.height;
    let head_length = proportions.head.length * measurements.height;
    let head_depth = head_length * proportions.head.depth;

    let head_y = measurements.height + head_length * (-0.5 + proportions.head.connection[1]);
    let sacrum_y = head_y - spine_length;

    // Sagittal offset scales with spine length; height interpolates between
    // sacrum and head.
    let vertebra = |factors: [f32; 2]| {
        [0.0, lerp(sacrum_y, head_y, factors[1]), spine_length * factors[0]]
    };
    let vertebrae = proportions.spine.vertebrae;

    let head = [0.0, head_y, spine_length * proportions.spine.skull];
    let face_z = 2.0 * head[2] - proportions.head.connection[0] * head_depth;
    let eyes = [0.0, head_y - head_length / 2.0, face_z + 0.5 * head_depth];
    let head_top = [0.0, measurements.height, face_z];

    world[BodyNode::Sacrum] = Transform::from_translation([0.0, sacrum_y, 0.0]);
    world[BodyNode::L3] = Transform::from_translation(vertebra(vertebrae.l3));
    world[BodyNode::T12] = Transform::from_translation(vertebra(vertebrae.t12));
    world[BodyNode::T7] = Transform::from_translation(vertebra(vertebrae.t7));
    world[BodyNode::C7] = Transform::from_translation(vertebra(vertebrae.c7));
    world[BodyNode::Head] = Transform::from_translation(head);
    world[BodyNode::Eyes] = Transform::from_translation(eyes);
    world[BodyNode::HeadTop] = Transform::from_translation(head_top);
}

fn place_arms(
    measurements: &BodyMeasurements,
    proportions: &Proportions,
    world: &mut BodyTree<Transform>,
) {
    let spine_length = proportions.spine.length * measurements.height;
    let sacrum = world[BodyNode::Sacrum].position();

    // Shoulder-girdle anchors are sacrum-relative ratio vectors.
    let anchor = |ratios: [f32; 3]| add3(sacrum, scale3(ratios, spine_length));

    let clavicle = anchor(proportions.arm.clavicle);
    let scapula = anchor(proportions.arm.scapula);
    let upper_arm = anchor(proportions.arm.upper_arm);

    // Half the wingspan reaches from the sagittal plane to the fingertips;
    // what remains after the upper-arm anchor and the hand splits evenly
    // into the two arm segments.
    let hand_length = measurements.wingspan * proportions.arm.hand.length;
    let arm_length = measurements.wingspan / 2.0 - upper_arm[0];
    let segment_length = (arm_length - hand_length) / 2.0;

    let forearm = add3(upper_arm, [segment_length, 0.0, 0.0]);
    let wrist = add3(forearm, [segment_length, 0.0, 0.0]);
    let hand = add3(wrist, scale3(proportions.arm.hand.palm, hand_length));

    world[BodyNode::RightClavicle] = Transform::from_translation(clavicle);
    world[BodyNode::RightScapula] = Transform::from_translation(scapula);
    world[BodyNode::RightUpperArm] = Transform::from_translation(upper_arm);
    world[BodyNode::RightForearm] = Transform::from_translation(forearm);
    world[BodyNode::RightWrist] = Transform::from_translation(wrist);
    world[BodyNode::RightHand] = Transform::from_translation(hand);
}

const RIGHT_ARM: [BodyNode; 6] = [
    BodyNode::RightClavicle,
    BodyNode::RightScapula,
    BodyNode::RightUpperArm,
    BodyNode::RightForearm,
    BodyNode::RightWrist,
    BodyNode::RightHand,
];

/// Reflect the finished right arm across the sagittal plane. Runs after
/// [`place_arms`]; the left side is never derived independently.
fn mirror_left_arm(world: &mut BodyTree<Transform>) {
    for node in RIGHT_ARM {
        world[node.mirror()] = world[node].mirrored_x();
    }
}

const LEGS: [BodyNode; 8] = [
    BodyNode::RightUpperLeg,
    BodyNode::RightLowerLeg,
    BodyNode::RightFoot,
    BodyNode::RightToes,
    BodyNode::LeftUpperLeg,
    BodyNode::LeftLowerLeg,
    BodyNode::LeftFoot,
    BodyNode::LeftToes,
];

/// Leg generation is not implemented. Anchoring each unplaced node to its
/// parent's absolute transform makes the parent-relative result exactly the
/// identity, which keeps the tree total over the catalog.
fn anchor_legs(world: &mut BodyTree<Transform>) {
    for node in LEGS {
        if let Some(parent) = node.parent() {
            world[node] = world[parent];
        }
    }
}
