mod bfs;
mod graph_search;
mod ida_star;
mod node;
mod stats;

use std::collections::{BTreeMap, BinaryHeap};
use std::fmt::{self, Debug, Display, Formatter};
use std::time::{Duration, Instant};

use log::debug;
use typed_arena::Arena;

use crate::config::{ConfigErr, Strategy};
use crate::moves::Moves;
use crate::state::GameState;
use crate::Solve;

use self::node::{Prioritized, Priority, SearchNode};

pub use self::stats::Stats;

pub struct SolverOk {
    pub moves: Option<Moves>,
    pub stats: Stats,
    pub strategy: Strategy,
    /// Wall-clock time of the search alone.
    pub elapsed: Duration,
}

impl SolverOk {
    fn new(moves: Option<Moves>, stats: Stats, strategy: Strategy, elapsed: Duration) -> Self {
        Self {
            moves,
            stats,
            strategy,
            elapsed,
        }
    }

    /// Length of the solution or `None` if there isn't one.
    pub fn move_cnt(&self) -> Option<usize> {
        self.moves.as_ref().map(Moves::move_cnt)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs() as f64 * 1000.0 + f64::from(self.elapsed.subsec_nanos()) / 1_000_000.0
    }
}

impl Display for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.moves {
            None => writeln!(f, "No solution")?,
            Some(ref moves) => {
                writeln!(f, "Solution: {}", moves)?;
                writeln!(f, "Moves: {}", moves.move_cnt())?;
            }
        }
        write!(f, "{}", self.stats)?;
        writeln!(f, "Time: {:.3} ms", self.elapsed_ms())
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.moves {
            None => writeln!(f, "{}: no solution", self.strategy)?,
            Some(ref moves) => writeln!(f, "{}: {}", self.strategy, moves.move_cnt())?,
        }
        write!(f, "{:?}", self.stats)
    }
}

impl Solve for GameState {
    fn solve(&self, strategy: Strategy) -> SolverOk {
        solve(self, strategy)
    }
}

/// Runs the strategy with the given name, see `Strategy` for the names.
pub fn solve_named(initial_state: &GameState, strategy_name: &str) -> Result<SolverOk, ConfigErr> {
    let strategy = strategy_name.parse()?;
    Ok(solve(initial_state, strategy))
}

fn solve(initial_state: &GameState, strategy: Strategy) -> SolverOk {
    debug!("Starting {}", strategy);
    let started = Instant::now();

    // each run gets its own arena, frontier and visited set
    let arena = Arena::new();
    let (moves, stats) = match strategy {
        Strategy::Bfs => bfs::search(initial_state),
        Strategy::Dfs => {
            let stack: Vec<&SearchNode<'_>> = Vec::new();
            graph_search::search(&arena, stack, Priority::Cost, None, initial_state)
        }
        Strategy::DfsLimitedDepth(max_depth) => {
            let stack: Vec<&SearchNode<'_>> = Vec::new();
            graph_search::search(&arena, stack, Priority::Cost, Some(max_depth), initial_state)
        }
        Strategy::Ucs => {
            let heap: BinaryHeap<Prioritized<'_>> = BinaryHeap::new();
            graph_search::search(&arena, heap, Priority::Cost, None, initial_state)
        }
        Strategy::Greedy => {
            let heap: BinaryHeap<Prioritized<'_>> = BinaryHeap::new();
            graph_search::search(&arena, heap, Priority::Heuristic, None, initial_state)
        }
        Strategy::AStar => {
            let heap: BinaryHeap<Prioritized<'_>> = BinaryHeap::new();
            graph_search::search(&arena, heap, Priority::Total, None, initial_state)
        }
        Strategy::AStarAlt => {
            let map: BTreeMap<(usize, usize), &SearchNode<'_>> = BTreeMap::new();
            graph_search::search(&arena, map, Priority::Total, None, initial_state)
        }
        Strategy::IdaStar => ida_star::search(initial_state),
    };

    let elapsed = started.elapsed();
    debug!("Finished {} in {:?}", strategy, elapsed);
    SolverOk::new(moves, stats, strategy, elapsed)
}
