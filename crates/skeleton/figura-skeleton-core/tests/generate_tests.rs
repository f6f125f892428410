use figura_body_core::{BodyNode, BodyTree, Space, Transform};
use figura_registry_core::{Callable, Candidate, SkeletonGeneratorRegistry, Tag};
use figura_skeleton_core::{
    builtin, builtin_candidates, generate_skeleton, generate_skeleton_with, BodyMeasurements,
    MeasurementError, Proportions,
};

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

fn approx3(a: [f32; 3], b: [f32; 3], eps: f32) {
    for i in 0..3 {
        assert!((a[i] - b[i]).abs() <= eps, "left={a:?} right={b:?}");
    }
}

fn default_measurements() -> BodyMeasurements {
    BodyMeasurements {
        height: 1.76,
        wingspan: 1.8,
    }
}

/// Generated trees are parent-relative; tests on absolute positions convert
/// back to world space first.
fn generated_world(measurements: BodyMeasurements) -> BodyTree<Transform> {
    builtin::generate(&measurements).converted(Space::World)
}

#[test]
fn every_node_has_a_finite_transform() {
    let tree = builtin::generate(&default_measurements());
    for (node, transform) in tree.iter() {
        for c in transform.translation {
            assert!(c.is_finite(), "{node:?} translation is not finite");
        }
        for c in transform.rotation {
            assert!(c.is_finite(), "{node:?} rotation is not finite");
        }
    }
}

#[test]
fn sacrum_lands_at_the_derived_height() {
    let m = default_measurements();
    let world = generated_world(m);

    // head_y = height + head_length * (-0.5 + connection_y); the sacrum sits
    // one spine length below it.
    let proportions = Proportions::default();
    let head_length = proportions.head.length * m.height;
    let head_y = m.height + head_length * (-0.5 + proportions.head.connection[1]);
    let sacrum_y = head_y - proportions.spine.length * m.height;

    approx3(world[BodyNode::Sacrum].position(), [0.0, sacrum_y, 0.0], 1e-5);
    approx(sacrum_y, 0.8535, 1e-4);
}

#[test]
fn local_tree_reconverts_to_the_same_world_positions() {
    let local = builtin::generate(&default_measurements());
    let world = local.converted(Space::World);
    let back = world.converted(Space::Local);
    for (node, transform) in local.iter() {
        approx3(back[node].translation, transform.translation, 1e-5);
    }
}

#[test]
fn hands_are_symmetric_across_the_sagittal_plane() {
    let world = generated_world(default_measurements());
    let right = world[BodyNode::RightHand].position();
    let left = world[BodyNode::LeftHand].position();
    approx(left[0], -right[0], 1e-6);
    approx(left[1], right[1], 1e-6);
    approx(left[2], right[2], 1e-6);
}

#[test]
fn taller_bodies_raise_every_spine_joint() {
    let short = generated_world(BodyMeasurements {
        height: 1.7,
        wingspan: 1.8,
    });
    let tall = generated_world(BodyMeasurements {
        height: 1.8,
        wingspan: 1.8,
    });

    for node in [
        BodyNode::Sacrum,
        BodyNode::L3,
        BodyNode::T12,
        BodyNode::T7,
        BodyNode::C7,
        BodyNode::HeadTop,
    ] {
        assert!(
            tall[node].position()[1] > short[node].position()[1],
            "{node:?} did not rise with height"
        );
    }
}

#[test]
fn arm_reach_matches_the_wingspan_derivation() {
    let m = default_measurements();
    let proportions = Proportions::default();
    let world = generated_world(m);

    let spine_length = proportions.spine.length * m.height;
    let upper_arm = world[BodyNode::RightUpperArm].position();
    approx(upper_arm[0], proportions.arm.upper_arm[0] * spine_length, 1e-5);

    let forearm = world[BodyNode::RightForearm].position();
    let wrist = world[BodyNode::RightWrist].position();
    let first = forearm[0] - upper_arm[0];
    let second = wrist[0] - forearm[0];
    approx(first, second, 1e-6);

    let hand_length = m.wingspan * proportions.arm.hand.length;
    approx(
        first + second + hand_length,
        m.wingspan / 2.0 - upper_arm[0],
        1e-5,
    );
}

#[test]
fn unimplemented_legs_stay_at_identity() {
    let local = builtin::generate(&default_measurements());
    for node in [
        BodyNode::RightUpperLeg,
        BodyNode::RightLowerLeg,
        BodyNode::RightFoot,
        BodyNode::RightToes,
        BodyNode::LeftUpperLeg,
        BodyNode::LeftLowerLeg,
        BodyNode::LeftFoot,
        BodyNode::LeftToes,
    ] {
        approx3(local[node].translation, [0.0, 0.0, 0.0], 1e-6);
    }
}

#[test]
fn degenerate_measurements_are_rejected() {
    let registry = SkeletonGeneratorRegistry::new();
    let err = generate_skeleton(
        &registry,
        BodyMeasurements {
            height: 0.0,
            wingspan: 1.8,
        },
    )
    .unwrap_err();
    assert_eq!(err, MeasurementError::InvalidHeight(0.0));

    let err = generate_skeleton(
        &registry,
        BodyMeasurements {
            height: 1.76,
            wingspan: -2.0,
        },
    )
    .unwrap_err();
    assert_eq!(err, MeasurementError::InvalidWingspan(-2.0));
}

fn stub_generator(_: &BodyMeasurements) -> BodyTree<Transform> {
    let mut tree: BodyTree<Transform> = BodyTree::new();
    tree[BodyNode::Head] = Transform::from_translation([0.0, 9.0, 0.0]);
    tree
}

#[test]
fn discovered_generator_takes_precedence_over_builtin() {
    let mut registry = SkeletonGeneratorRegistry::new();
    registry.discover([Candidate::new(
        "stub",
        Tag::Generator { target: None },
        Callable::generator::<BodyMeasurements>(stub_generator),
    )]);

    let tree = generate_skeleton(&registry, default_measurements()).expect("valid input");
    assert_eq!(tree[BodyNode::Head].translation, [0.0, 9.0, 0.0]);
}

#[test]
fn empty_registry_falls_back_to_builtin() {
    let registry = SkeletonGeneratorRegistry::new();
    let via_entry_point = generate_skeleton(&registry, default_measurements()).expect("valid");
    let direct = builtin::generate(&default_measurements());
    assert_eq!(via_entry_point, direct);
}

#[test]
fn builtin_candidates_cover_both_input_shapes() {
    let mut registry = SkeletonGeneratorRegistry::new();
    registry.discover(builtin_candidates());
    assert_eq!(registry.len(), 2);
    assert!(registry.find::<BodyMeasurements>().is_some());
    assert!(registry.find::<(Proportions, BodyMeasurements)>().is_some());

    // Dispatch through the registry reproduces the direct call.
    let via_registry =
        generate_skeleton_with(&registry, Proportions::default(), default_measurements())
            .expect("valid");
    let direct = builtin::generate_with(&(Proportions::default(), default_measurements()));
    assert_eq!(via_registry, direct);
}
