use fnv::FnvHashSet;
use log::{debug, info};
use typed_arena::Arena;

use crate::data::DIRECTIONS;
use crate::moves::Moves;
use crate::state::GameState;

use super::node::{Frontier, Priority, SearchNode};
use super::stats::Stats;

/// Graph search which marks states as visited when they're taken from the frontier.
///
/// The same state can be in the frontier multiple times, only the first one to come out
/// gets expanded. The frontier decides the order - a stack gives DFS,
/// priority queues give UCS, greedy or A* depending on `priority`.
///
/// Nodes deeper than `max_depth` are counted as expanded but their successors are never generated.
pub(crate) fn search<'a, F: Frontier<'a>>(
    arena: &'a Arena<SearchNode<'a>>,
    mut to_visit: F,
    priority: Priority,
    max_depth: Option<usize>,
    initial_state: &GameState,
) -> (Option<Moves>, Stats) {
    let mut stats = Stats::new();
    let mut visited: FnvHashSet<&GameState> = FnvHashSet::default();
    let mut seq = 0;

    let start = &*arena.alloc(SearchNode::root(initial_state.clone()));
    to_visit.push(start, priority.of(&start.state), seq);

    while let Some(cur_node) = to_visit.pop() {
        let depth = cur_node.state.current_cost();
        if visited.contains(&cur_node.state) {
            stats.add_duplicate(depth);
            continue;
        }
        if stats.add_expanded(depth) {
            debug!("Expanded new depth: {}", depth);
        }

        if let Some(max_depth) = max_depth {
            if depth > max_depth {
                continue;
            }
        }

        if cur_node.state.is_solved() {
            info!("Solved at depth {}", depth);
            return (Some(cur_node.moves()), stats);
        }

        visited.insert(&cur_node.state);

        for &dir in &DIRECTIONS {
            let new_state = match cur_node.state.make_move(dir) {
                Some(new_state) => new_state,
                None => continue,
            };
            seq += 1;
            stats.add_generated(depth + 1);

            // this only filters states expanded so far, it's checked again when popping
            if visited.contains(&new_state) {
                continue;
            }
            let next_node = &*arena.alloc(SearchNode::child(new_state, cur_node, dir));
            to_visit.push(next_node, priority.of(&next_node.state), seq);
        }
    }

    (None, stats)
}
