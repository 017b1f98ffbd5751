use common::visits_or_one;
use generational_arena::{Arena, Index};
use half::f16;

/// A vertex of the search tree.
///
/// Nodes live in an arena and reference each other by index. `value_score` accumulates values from the
/// first player's perspective; the sign is only flipped when a child is scored for selection.
#[derive(Debug)]
pub struct MCTSNode<A> {
    action: Option<A>,
    visits: usize,
    value_score: f32,
    policy_score: f16,
    parent: Option<Index>,
    children: Vec<Index>,
}

impl<A> MCTSNode<A> {
    pub(crate) fn root() -> Self {
        Self {
            action: None,
            visits: 0,
            value_score: 0.0,
            policy_score: f16::ONE,
            parent: None,
            children: Vec::new(),
        }
    }

    pub(crate) fn new(action: A, policy_score: f32, parent: Index) -> Self {
        Self {
            action: Some(action),
            visits: 0,
            value_score: 0.0,
            policy_score: f16::from_f32(policy_score),
            parent: Some(parent),
            children: Vec::new(),
        }
    }

    /// The action that led to this node. `None` only for the root.
    pub fn action(&self) -> Option<&A> {
        self.action.as_ref()
    }

    pub fn visits(&self) -> usize {
        self.visits
    }

    pub fn value_score(&self) -> f32 {
        self.value_score
    }

    pub fn mean_value(&self) -> f32 {
        self.value_score / visits_or_one(self.visits)
    }

    pub fn policy_score(&self) -> f32 {
        self.policy_score.to_f32()
    }

    pub fn parent(&self) -> Option<Index> {
        self.parent
    }

    pub fn children(&self) -> &[Index] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub(crate) fn set_children(&mut self, children: Vec<Index>) {
        debug_assert!(self.children.is_empty(), "node expanded twice");
        self.children = children;
    }

    pub(crate) fn take_children(&mut self) -> Vec<Index> {
        std::mem::take(&mut self.children)
    }

    pub(crate) fn add_value(&mut self, value: f32) {
        self.value_score += value;
    }

    pub(crate) fn record_visit(&mut self, value: f32) {
        self.visits += 1;
        self.value_score += value;
    }

    pub(crate) fn make_root(&mut self) {
        self.action = None;
        self.parent = None;
    }
}

/// Walks parent links from a node up to and including the root.
///
/// Lazy and side-effect free. Clone it, or ask the tree again, to restart the walk.
pub struct Ancestors<'a, A> {
    arena: &'a Arena<MCTSNode<A>>,
    next: Option<Index>,
}

impl<'a, A> Ancestors<'a, A> {
    pub(crate) fn new(arena: &'a Arena<MCTSNode<A>>, start: Index) -> Self {
        Self {
            arena,
            next: Some(start),
        }
    }
}

impl<'a, A> Clone for Ancestors<'a, A> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            next: self.next,
        }
    }
}

impl<'a, A> Iterator for Ancestors<'a, A> {
    type Item = (Index, &'a MCTSNode<A>);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.next?;
        let node = self.arena.get(index)?;
        self.next = node.parent;
        Some((index, node))
    }
}
