use log::{debug, info};

use crate::data::Dir;
use crate::moves::Moves;
use crate::state::GameState;

use super::stats::Stats;

// right before left - unlike the other strategies
const DIRECTIONS: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Right, Dir::Left];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Solved,
    /// Smallest total cost above the bound that was cut off.
    Exceeded(usize),
    /// Nothing was cut off - raising the bound can't help.
    Exhausted,
}

impl Outcome {
    fn min(self, other: Outcome) -> Outcome {
        match (self, other) {
            (Outcome::Solved, _) | (_, Outcome::Solved) => Outcome::Solved,
            (Outcome::Exceeded(a), Outcome::Exceeded(b)) => Outcome::Exceeded(a.min(b)),
            (Outcome::Exceeded(a), Outcome::Exhausted)
            | (Outcome::Exhausted, Outcome::Exceeded(a)) => Outcome::Exceeded(a),
            (Outcome::Exhausted, Outcome::Exhausted) => Outcome::Exhausted,
        }
    }
}

/// Iterative deepening A*.
///
/// Repeated depth-first searches, each cutting off nodes whose total cost exceeds the bound.
/// The next bound is the smallest total cost that was cut off.
/// Cycles are avoided only along the current path, there is no visited set.
pub(crate) fn search(initial_state: &GameState) -> (Option<Moves>, Stats) {
    let mut stats = Stats::new();
    let mut bound = initial_state.heuristic();
    let mut path = vec![initial_state.clone()];
    let mut moves = Moves::default();

    debug!("Initial bound: {}", bound);
    loop {
        match bounded_search(&mut path, &mut moves, bound, &mut stats) {
            Outcome::Solved => {
                info!("Solved at depth {} with bound {}", moves.move_cnt(), bound);
                return (Some(moves), stats);
            }
            Outcome::Exceeded(next_bound) => {
                debug!("Raising bound from {} to {}", bound, next_bound);
                bound = next_bound;
            }
            Outcome::Exhausted => {
                debug!("Nothing exceeded bound {}", bound);
                return (None, stats);
            }
        }
    }
}

/// On `Solved`, `path` and `moves` lead to the solved state,
/// otherwise they're left as they were before the call.
fn bounded_search(
    path: &mut Vec<GameState>,
    moves: &mut Moves,
    bound: usize,
    stats: &mut Stats,
) -> Outcome {
    let new_states: Vec<(Dir, GameState)> = {
        let state = path.last().expect("Path always contains the current state");
        let total_cost = state.total_cost();
        if total_cost > bound {
            return Outcome::Exceeded(total_cost);
        }

        stats.add_expanded(state.current_cost());

        if state.is_solved() {
            return Outcome::Solved;
        }

        DIRECTIONS
            .iter()
            .filter_map(|&dir| state.make_move(dir).map(|new_state| (dir, new_state)))
            .filter(|(_, new_state)| !path.contains(new_state))
            .collect()
    };

    let mut outcome = Outcome::Exhausted;
    for (dir, new_state) in new_states {
        stats.add_generated(new_state.current_cost());
        path.push(new_state);
        moves.add(dir);

        outcome = outcome.min(bounded_search(path, moves, bound, stats));
        if outcome == Outcome::Solved {
            return outcome;
        }

        path.pop();
        moves.remove_last();
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(level: &str) -> GameState {
        level.parse().unwrap()
    }

    #[test]
    fn combining_outcomes() {
        use self::Outcome::*;

        assert_eq!(Exhausted.min(Exhausted), Exhausted);
        assert_eq!(Exhausted.min(Exceeded(7)), Exceeded(7));
        assert_eq!(Exceeded(3).min(Exhausted), Exceeded(3));
        assert_eq!(Exceeded(3).min(Exceeded(2)), Exceeded(2));
        assert_eq!(Exceeded(3).min(Solved), Solved);
    }

    #[test]
    fn one_push() {
        let (moves, stats) = search(&parse("@$."));
        assert_eq!(moves.unwrap().to_string(), "R");
        assert_eq!(stats.total_generated(), 1);
        assert_eq!(stats.total_expanded(), 2);
    }

    #[test]
    fn raises_bound() {
        // heuristic is 1 but 3 moves are needed
        let (moves, _) = search(&parse("#@  $.#"));
        assert_eq!(moves.unwrap().to_string(), "RRR");
    }

    #[test]
    fn detour() {
        // the box has to be pushed down from above so the heuristic underestimates a lot
        let state = parse(
            r"
#####
#   #
# $@#
# . #
#####
",
        );
        let (moves, _) = search(&state);
        let moves = moves.unwrap();
        // U L D is shortest
        assert_eq!(moves.move_cnt(), 3);

        let mut end = state.clone();
        for &dir in &moves {
            end = end.make_move(dir).unwrap();
        }
        assert!(end.is_solved());
    }

    #[test]
    fn exhausts_unsolvable() {
        let state = parse(
            r"
#####
#$  #
#  .#
# @ #
#####
",
        );
        let (moves, stats) = search(&state);
        assert!(moves.is_none());
        assert!(stats.total_expanded() > 0);
    }
}
