use std::collections::VecDeque;

use fnv::FnvHashSet;
use log::{debug, info};
use typed_arena::Arena;

use crate::data::DIRECTIONS;
use crate::moves::Moves;
use crate::state::GameState;

use super::node::{Frontier, SearchNode};
use super::stats::Stats;

/// Breadth-first search.
///
/// Unlike the other strategies, states are marked as visited as soon as they're generated
/// so each state is queued at most once.
pub(crate) fn search(initial_state: &GameState) -> (Option<Moves>, Stats) {
    let mut stats = Stats::new();

    let arena = Arena::new();
    let mut visited = FnvHashSet::default();
    let mut to_visit: VecDeque<&SearchNode<'_>> = VecDeque::new();

    let start = &*arena.alloc(SearchNode::root(initial_state.clone()));
    visited.insert(&start.state);
    stats.add_expanded(0);
    to_visit.push(start, 0, 0);

    while let Some(cur_node) = to_visit.pop() {
        if cur_node.state.is_solved() {
            info!("Solved at depth {}", cur_node.state.current_cost());
            return (Some(cur_node.moves()), stats);
        }

        let depth = cur_node.state.current_cost() + 1;
        for &dir in &DIRECTIONS {
            // blocked moves count too
            stats.add_generated(depth);

            let new_state = match cur_node.state.make_move(dir) {
                Some(new_state) => new_state,
                None => continue,
            };
            if visited.contains(&new_state) {
                stats.add_duplicate(depth);
                continue;
            }

            let next_node = &*arena.alloc(SearchNode::child(new_state, cur_node, dir));
            visited.insert(&next_node.state);
            if stats.add_expanded(depth) {
                debug!("Reached new depth: {}", depth);
            }
            to_visit.push(next_node, 0, 0);
        }
    }

    (None, stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_push() {
        let state: GameState = "@$.".parse().unwrap();
        let (moves, stats) = search(&state);
        assert_eq!(moves.unwrap().to_string(), "R");
        // U, D, L hit the edge of the map
        assert_eq!(stats.total_generated(), 4);
        assert_eq!(stats.total_expanded(), 2);
    }

    #[test]
    fn already_solved() {
        let state: GameState = "#@*#".parse().unwrap();
        let (moves, stats) = search(&state);
        assert!(moves.unwrap().is_empty());
        assert_eq!(stats.total_generated(), 0);
        assert_eq!(stats.total_expanded(), 1);
    }

    #[test]
    fn no_solution() {
        let state: GameState = r"
#####
#$  #
#  .#
# @ #
#####
"
        .parse()
        .unwrap();
        let (moves, stats) = search(&state);
        assert!(moves.is_none());
        // the box never moves, only the player's 8 positions are reachable
        assert_eq!(stats.total_expanded(), 8);
        assert_eq!(stats.total_generated(), 8 * 4);
    }
}
