//! The discovery boundary: candidate callables, their tags, and the
//! type-erased storage the registries index.

use std::any::{Any, TypeId};
use std::fmt;

use figura_body_core::{BodyNode, BodyTree, Transform};

/// A callable that produces a full skeleton tree from a read-only input.
pub type Generator<I> = fn(&I) -> BodyTree<Transform>;

/// A callable that adjusts an existing skeleton tree in place.
pub type Poser<I> = fn(&mut BodyTree<Transform>, &I);

/// A poser that additionally receives a settings value alongside its input.
pub type PoserWithSettings<S, I> = fn(&mut BodyTree<Transform>, &S, &I);

/// Tag declared by a pluggable implementation.
///
/// Generators are registered for the whole skeleton by default; setting
/// `target` scopes one to a single node. Posers always name the joint they
/// adjust.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tag {
    Generator { target: Option<BodyNode> },
    Poser { target: BodyNode },
}

/// Runtime description of a callable's parameter shape.
///
/// Registries validate this against the delegate shape they dispatch before
/// accepting an entry, and lookup filters on the captured [`TypeId`]s before
/// downcasting.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Signature {
    Generator { input: TypeId },
    Poser { input: TypeId },
    PoserWithSettings { settings: TypeId, input: TypeId },
}

/// A type-erased callable plus the metadata needed to validate, deduplicate,
/// and retrieve it.
///
/// Construction goes through the typed constructors, which capture the true
/// signature alongside the erased function pointer; retrieval only succeeds
/// for the exact delegate type that was stored.
pub struct Callable {
    signature: Signature,
    erased: Box<dyn Any + Send + Sync>,
    identity: usize,
}

impl Callable {
    pub fn generator<I: 'static>(f: Generator<I>) -> Self {
        Callable {
            signature: Signature::Generator {
                input: TypeId::of::<I>(),
            },
            erased: Box::new(f),
            identity: f as usize,
        }
    }

    pub fn poser<I: 'static>(f: Poser<I>) -> Self {
        Callable {
            signature: Signature::Poser {
                input: TypeId::of::<I>(),
            },
            erased: Box::new(f),
            identity: f as usize,
        }
    }

    pub fn poser_with_settings<S: 'static, I: 'static>(f: PoserWithSettings<S, I>) -> Self {
        Callable {
            signature: Signature::PoserWithSettings {
                settings: TypeId::of::<S>(),
                input: TypeId::of::<I>(),
            },
            erased: Box::new(f),
            identity: f as usize,
        }
    }

    #[inline]
    pub fn signature(&self) -> Signature {
        self.signature
    }

    /// Address of the underlying function; two candidates wrapping the same
    /// function are duplicates regardless of their names.
    #[inline]
    pub(crate) fn identity(&self) -> usize {
        self.identity
    }

    pub(crate) fn downcast<F: Copy + 'static>(&self) -> Option<F> {
        self.erased.downcast_ref::<F>().copied()
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callable")
            .field("signature", &self.signature)
            .field("identity", &self.identity)
            .finish()
    }
}

/// One candidate handed to a registry during discovery: a display name for
/// diagnostics, the tag its implementer declared, and the erased callable.
#[derive(Debug)]
pub struct Candidate {
    pub name: String,
    pub tag: Tag,
    pub callable: Callable,
}

impl Candidate {
    pub fn new(name: impl Into<String>, tag: Tag, callable: Callable) -> Self {
        Candidate {
            name: name.into(),
            tag,
            callable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop_generator(_: &f32) -> BodyTree<Transform> {
        BodyTree::new()
    }

    #[test]
    fn constructors_capture_the_signature() {
        let g = Callable::generator::<f32>(noop_generator);
        assert_eq!(
            g.signature(),
            Signature::Generator {
                input: TypeId::of::<f32>()
            }
        );
        let p = Callable::poser_with_settings::<u8, f32>(|_, _, _| {});
        assert_eq!(
            p.signature(),
            Signature::PoserWithSettings {
                settings: TypeId::of::<u8>(),
                input: TypeId::of::<f32>()
            }
        );
    }

    #[test]
    fn downcast_only_matches_the_stored_delegate_type() {
        let g = Callable::generator::<f32>(noop_generator);
        assert!(g.downcast::<Generator<f32>>().is_some());
        assert!(g.downcast::<Generator<u32>>().is_none());
        assert!(g.downcast::<Poser<f32>>().is_none());
    }

    #[test]
    fn identity_tracks_the_underlying_function() {
        let a = Callable::generator::<f32>(noop_generator);
        let b = Callable::generator::<f32>(noop_generator);
        assert_eq!(a.identity(), b.identity());
    }
}
