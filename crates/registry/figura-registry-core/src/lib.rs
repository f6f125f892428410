//! Figura capability registries (engine-agnostic)
//!
//! Pluggable skeleton generators and posers are discovered from explicit
//! candidate lists, validated against the delegate shape each registry
//! dispatches, and indexed by their declared input type (plus a target
//! node for scoped entries). Lookup is purely type-driven: a caller asks
//! for "the generator for input type `I`" and receives the first matching
//! entry in discovery order, or `None`.
//!
//! Registries are plain objects owned by whoever runs discovery; there is
//! no process-global state. A malformed candidate is skipped with a
//! `log::warn!`, never a panic, so the worst outcome of a bad plugin is
//! that it is excluded from dispatch.

pub mod candidate;
pub mod generator;
pub mod poser;

pub use candidate::{Callable, Candidate, Generator, Poser, PoserWithSettings, Signature, Tag};
pub use generator::{NodeGeneratorRegistry, SkeletonGeneratorRegistry};
pub use poser::{NodePoserRegistry, SkeletonPoserRegistry};
