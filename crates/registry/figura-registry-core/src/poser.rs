//! Registries for poser callables, keyed by target node.

use std::any::TypeId;

use hashbrown::HashSet;

use figura_body_core::BodyNode;

use crate::candidate::{Callable, Candidate, Poser, PoserWithSettings, Signature, Tag};

struct Entry {
    signature: Signature,
    target: BodyNode,
    callable: Callable,
}

fn unpack(registry: &str, candidate: Candidate) -> Option<(String, BodyNode, Callable)> {
    let Candidate {
        name,
        tag,
        callable,
    } = candidate;
    match tag {
        Tag::Poser { target } => Some((name, target, callable)),
        other => {
            log::warn!("{name} is tagged {other:?}, which the {registry} does not dispatch; skipping");
            None
        }
    }
}

/// Index of whole-skeleton posers: callables that adjust an existing tree in
/// place, registered against the joint they act on. Both the plain and the
/// settings-taking delegate shapes are accepted.
#[derive(Default)]
pub struct SkeletonPoserRegistry {
    entries: Vec<Entry>,
    seen: HashSet<usize>,
}

impl SkeletonPoserRegistry {
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
        let Some((name, target, callable)) = unpack("skeleton poser registry", candidate) else {
            return;
        };
        let signature = callable.signature();
        if let Signature::Generator { .. } = signature {
            log::warn!(
                "{name} is tagged as a skeleton poser, but its signature {signature:?} \
                 does not match a poser delegate; skipping"
            );
            return;
        }
        if !self.seen.insert(callable.identity()) {
            log::warn!("{name} is already registered; skipping duplicate");
            return;
        }
        self.entries.push(Entry {
            signature,
            target,
            callable,
        });
    }

    /// First plain poser registered for input type `I` and `target`, in
    /// discovery order.
    pub fn find<I: 'static>(&self, target: BodyNode) -> Option<Poser<I>> {
        let wanted = Signature::Poser {
            input: TypeId::of::<I>(),
        };
        self.entries
            .iter()
            .filter(|e| e.target == target && e.signature == wanted)
            .find_map(|e| e.callable.downcast::<Poser<I>>())
    }

    /// First settings-taking poser registered for `(S, I)` and `target`, in
    /// discovery order.
    pub fn find_with_settings<S: 'static, I: 'static>(
        &self,
        target: BodyNode,
    ) -> Option<PoserWithSettings<S, I>> {
        let wanted = Signature::PoserWithSettings {
            settings: TypeId::of::<S>(),
            input: TypeId::of::<I>(),
        };
        self.entries
            .iter()
            .filter(|e| e.target == target && e.signature == wanted)
            .find_map(|e| e.callable.downcast::<PoserWithSettings<S, I>>())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Index of node-scoped posers. Only the plain poser delegate shape is
/// dispatched here.
#[derive(Default)]
pub struct NodePoserRegistry {
    entries: Vec<Entry>,
    seen: HashSet<usize>,
}

impl NodePoserRegistry {
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
        let Some((name, target, callable)) = unpack("node poser registry", candidate) else {
            return;
        };
        let signature = callable.signature();
        let Signature::Poser { .. } = signature else {
            log::warn!(
                "{name} is tagged as a node poser, but its signature {signature:?} \
                 does not match a poser delegate; skipping"
            );
            return;
        };
        if !self.seen.insert(callable.identity()) {
            log::warn!("{name} is already registered; skipping duplicate");
            return;
        }
        self.entries.push(Entry {
            signature,
            target,
            callable,
        });
    }

    /// First poser registered for input type `I` and `target`, in discovery
    /// order.
    pub fn find<I: 'static>(&self, target: BodyNode) -> Option<Poser<I>> {
        let wanted = Signature::Poser {
            input: TypeId::of::<I>(),
        };
        self.entries
            .iter()
            .filter(|e| e.target == target && e.signature == wanted)
            .find_map(|e| e.callable.downcast::<Poser<I>>())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
