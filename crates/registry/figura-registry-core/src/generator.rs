//! Registries for whole-skeleton and node-scoped generator callables.

use std::any::TypeId;

use hashbrown::HashSet;

use figura_body_core::BodyNode;

use crate::candidate::{Callable, Candidate, Generator, Signature, Tag};

struct Entry {
    input: TypeId,
    callable: Callable,
}

/// Index of whole-skeleton generators, keyed by their declared input type.
///
/// Entries are append-only during discovery and read-only afterward; lookup
/// returns the first match in discovery order.
#[derive(Default)]
pub struct SkeletonGeneratorRegistry {
    entries: Vec<Entry>,
    seen: HashSet<usize>,
}

impl SkeletonGeneratorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run discovery over `candidates`, in order. Mismatched or duplicate
    /// candidates are skipped with a warning; discovery itself never fails.
    pub fn discover(&mut self, candidates: impl IntoIterator<Item = Candidate>) {
        for candidate in candidates {
            self.install(candidate);
        }
    }

    fn install(&mut self, candidate: Candidate) {
        let Candidate {
            name,
            tag,
            callable,
        } = candidate;
        if !matches!(tag, Tag::Generator { target: None }) {
            log::warn!("{name} is tagged {tag:?}, which this registry does not dispatch; skipping");
            return;
        }
        let input = match callable.signature() {
            Signature::Generator { input } => input,
            other => {
                log::warn!(
                    "{name} is tagged as a skeleton generator, but its signature {other:?} \
                     does not match a generator delegate; skipping"
                );
                return;
            }
        };
        if !self.seen.insert(callable.identity()) {
            log::warn!("{name} is already registered; skipping duplicate");
            return;
        }
        self.entries.push(Entry { input, callable });
    }

    /// First generator registered for input type `I`, in discovery order.
    pub fn find<I: 'static>(&self) -> Option<Generator<I>> {
        let input = TypeId::of::<I>();
        self.entries
            .iter()
            .filter(|e| e.input == input)
            .find_map(|e| e.callable.downcast::<Generator<I>>())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

struct NodeEntry {
    input: TypeId,
    target: BodyNode,
    callable: Callable,
}

/// Index of node-scoped generators, keyed by declared input type and the
/// target node from the candidate's tag.
#[derive(Default)]
pub struct NodeGeneratorRegistry {
    entries: Vec<NodeEntry>,
    seen: HashSet<usize>,
}

impl NodeGeneratorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run discovery over `candidates`, in order. Mismatched or duplicate
    /// candidates are skipped with a warning; discovery itself never fails.
    pub fn discover(&mut self, candidates: impl IntoIterator<Item = Candidate>) {
        for candidate in candidates {
            self.install(candidate);
        }
    }

    fn install(&mut self, candidate: Candidate) {
        let Candidate {
            name,
            tag,
            callable,
        } = candidate;
        let target = match tag {
            Tag::Generator {
                target: Some(target),
            } => target,
            other => {
                log::warn!(
                    "{name} is tagged {other:?}, which this registry does not dispatch; skipping"
                );
                return;
            }
        };
        let input = match callable.signature() {
            Signature::Generator { input } => input,
            other => {
                log::warn!(
                    "{name} is tagged as a node generator, but its signature {other:?} \
                     does not match a generator delegate; skipping"
                );
                return;
            }
        };
        if !self.seen.insert(callable.identity()) {
            log::warn!("{name} is already registered; skipping duplicate");
            return;
        }
        self.entries.push(NodeEntry {
            input,
            target,
            callable,
        });
    }

    /// First generator registered for input type `I` and `target`, in
    /// discovery order.
    pub fn find<I: 'static>(&self, target: BodyNode) -> Option<Generator<I>> {
        let input = TypeId::of::<I>();
        self.entries
            .iter()
            .filter(|e| e.target == target && e.input == input)
            .find_map(|e| e.callable.downcast::<Generator<I>>())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
