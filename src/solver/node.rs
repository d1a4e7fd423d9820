use std::cmp::Ordering;
use std::collections::{BTreeMap, BinaryHeap, VecDeque};

use crate::data::Dir;
use crate::moves::Moves;
use crate::state::GameState;

/// A state together with how it was reached.
///
/// Nodes live in an arena for the duration of one search and point to their parent
/// so the path is shared instead of copied into every node.
pub(crate) struct SearchNode<'a> {
    pub(crate) state: GameState,
    prev: Option<(&'a SearchNode<'a>, Dir)>,
}

impl<'a> SearchNode<'a> {
    pub(crate) fn root(state: GameState) -> Self {
        SearchNode { state, prev: None }
    }

    pub(crate) fn child(state: GameState, prev: &'a SearchNode<'a>, dir: Dir) -> Self {
        SearchNode {
            state,
            prev: Some((prev, dir)),
        }
    }

    pub(crate) fn moves(&self) -> Moves {
        let mut dirs = Vec::with_capacity(self.state.current_cost());
        let mut node = self;
        while let Some((prev, dir)) = node.prev {
            dirs.push(dir);
            node = prev;
        }
        dirs.reverse();
        Moves::new(dirs)
    }
}

/// Order in which nodes leave a priority frontier, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Priority {
    /// Moves made so far.
    Cost,
    Heuristic,
    /// Moves made so far plus heuristic.
    Total,
}

impl Priority {
    pub(crate) fn of(self, state: &GameState) -> usize {
        match self {
            Priority::Cost => state.current_cost(),
            Priority::Heuristic => state.heuristic(),
            Priority::Total => state.total_cost(),
        }
    }
}

/// Nodes waiting to be expanded.
///
/// `seq` is unique and increasing, priority frontiers use it to break ties
/// so equal priority nodes come out in the order they were added.
pub(crate) trait Frontier<'a> {
    fn push(&mut self, node: &'a SearchNode<'a>, priority: usize, seq: usize);

    fn pop(&mut self) -> Option<&'a SearchNode<'a>>;
}

/// LIFO, ignores priorities.
impl<'a> Frontier<'a> for Vec<&'a SearchNode<'a>> {
    fn push(&mut self, node: &'a SearchNode<'a>, _priority: usize, _seq: usize) {
        Vec::push(self, node);
    }

    fn pop(&mut self) -> Option<&'a SearchNode<'a>> {
        Vec::pop(self)
    }
}

/// FIFO, ignores priorities.
impl<'a> Frontier<'a> for VecDeque<&'a SearchNode<'a>> {
    fn push(&mut self, node: &'a SearchNode<'a>, _priority: usize, _seq: usize) {
        self.push_back(node);
    }

    fn pop(&mut self) -> Option<&'a SearchNode<'a>> {
        self.pop_front()
    }
}

pub(crate) struct Prioritized<'a> {
    priority: usize,
    seq: usize,
    node: &'a SearchNode<'a>,
}

impl PartialOrd for Prioritized<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Prioritized<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // intentionally reversed for BinaryHeap
        (other.priority, other.seq).cmp(&(self.priority, self.seq))
    }
}

impl PartialEq for Prioritized<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl Eq for Prioritized<'_> {}

impl<'a> Frontier<'a> for BinaryHeap<Prioritized<'a>> {
    fn push(&mut self, node: &'a SearchNode<'a>, priority: usize, seq: usize) {
        BinaryHeap::push(self, Prioritized { priority, seq, node });
    }

    fn pop(&mut self) -> Option<&'a SearchNode<'a>> {
        BinaryHeap::pop(self).map(|prioritized| prioritized.node)
    }
}

/// Ordered map keyed by `(priority, seq)` - an alternative to the heap.
impl<'a> Frontier<'a> for BTreeMap<(usize, usize), &'a SearchNode<'a>> {
    fn push(&mut self, node: &'a SearchNode<'a>, priority: usize, seq: usize) {
        self.insert((priority, seq), node);
    }

    fn pop(&mut self) -> Option<&'a SearchNode<'a>> {
        let key = *self.keys().next()?;
        self.remove(&key)
    }
}
