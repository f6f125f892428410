//! Generation entry points and the built-in generator's candidate list.

use figura_body_core::{BodyTree, Transform};
use figura_registry_core::{Callable, Candidate, SkeletonGeneratorRegistry, Tag};

use crate::builtin;
use crate::measurements::{BodyMeasurements, MeasurementError};
use crate::proportions::Proportions;

/// Generate a skeleton for `measurements`, preferring a discovered generator
/// for the [`BodyMeasurements`] input type over the built-in one.
pub fn generate_skeleton(
    registry: &SkeletonGeneratorRegistry,
    measurements: BodyMeasurements,
) -> Result<BodyTree<Transform>, MeasurementError> {
    measurements.validate()?;
    let tree = match registry.find::<BodyMeasurements>() {
        Some(generator) => generator(&measurements),
        None => builtin::generate(&measurements),
    };
    Ok(tree)
}

/// Like [`generate_skeleton`], but with caller-supplied proportions; dispatch
/// is keyed by the `(Proportions, BodyMeasurements)` input type.
pub fn generate_skeleton_with(
    registry: &SkeletonGeneratorRegistry,
    proportions: Proportions,
    measurements: BodyMeasurements,
) -> Result<BodyTree<Transform>, MeasurementError> {
    measurements.validate()?;
    let input = (proportions, measurements);
    let tree = match registry.find::<(Proportions, BodyMeasurements)>() {
        Some(generator) => generator(&input),
        None => builtin::generate_with(&input),
    };
    Ok(tree)
}

/// The built-in generator's two registrable shapes, ready to hand to a
/// registry during discovery. Hosts typically append third-party candidates
/// and run discovery once at startup.
pub fn builtin_candidates() -> Vec<Candidate> {
    vec![
        Candidate::new(
            "figura::builtin::generate",
            Tag::Generator { target: None },
            Callable::generator::<BodyMeasurements>(builtin::generate),
        ),
        Candidate::new(
            "figura::builtin::generate_with",
            Tag::Generator { target: None },
            Callable::generator::<(Proportions, BodyMeasurements)>(builtin::generate_with),
        ),
    ]
}
