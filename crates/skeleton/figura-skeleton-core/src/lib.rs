//! Figura skeleton generation (engine-agnostic)
//!
//! Turns a pair of body measurements (height, wingspan) and a table of
//! anthropometric ratios into a fully populated [`BodyTree`] of
//! parent-relative transforms. The built-in generator can be dispatched
//! directly or through a [`SkeletonGeneratorRegistry`], where third-party
//! generators registered for the same input type take precedence.
//!
//! [`BodyTree`]: figura_body_core::BodyTree
//! [`SkeletonGeneratorRegistry`]: figura_registry_core::SkeletonGeneratorRegistry

pub mod builtin;
pub mod measurements;
pub mod proportions;
pub mod skeleton;

pub use measurements::{BodyMeasurements, MeasurementError};
pub use proportions::{
    ArmProportions, HandProportions, HeadProportions, Proportions, SpineProportions,
    VertebraeProportions,
};
pub use skeleton::{builtin_candidates, generate_skeleton, generate_skeleton_with};
