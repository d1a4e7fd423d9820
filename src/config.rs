use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Depth cap used by `dfs_limited_depth` unless told otherwise.
pub const DEFAULT_MAX_DEPTH: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    Bfs,
    Dfs,
    DfsLimitedDepth(usize),
    Ucs,
    Greedy,
    AStar,
    /// Same ordering as `AStar`, different frontier - only for comparing the two.
    AStarAlt,
    IdaStar,
}

impl Strategy {
    pub const ALL: [Strategy; 8] = [
        Strategy::Bfs,
        Strategy::Dfs,
        Strategy::DfsLimitedDepth(DEFAULT_MAX_DEPTH),
        Strategy::Ucs,
        Strategy::Greedy,
        Strategy::AStar,
        Strategy::AStarAlt,
        Strategy::IdaStar,
    ];

    /// Only changes `DfsLimitedDepth`, the other strategies have no depth limit.
    pub fn with_max_depth(self, max_depth: usize) -> Self {
        match self {
            Strategy::DfsLimitedDepth(_) => Strategy::DfsLimitedDepth(max_depth),
            other => other,
        }
    }

    /// BFS, UCS and both A* variants always find a solution with the fewest moves.
    pub fn is_move_optimal(self) -> bool {
        match self {
            Strategy::Bfs | Strategy::Ucs | Strategy::AStar | Strategy::AStarAlt => true,
            _ => false,
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Strategy::Bfs => write!(f, "bfs"),
            Strategy::Dfs => write!(f, "dfs"),
            Strategy::DfsLimitedDepth(_) => write!(f, "dfs_limited_depth"),
            Strategy::Ucs => write!(f, "ucs"),
            Strategy::Greedy => write!(f, "greedy"),
            Strategy::AStar => write!(f, "astar"),
            Strategy::AStarAlt => write!(f, "astar_pq"),
            Strategy::IdaStar => write!(f, "idas"),
        }
    }
}

impl FromStr for Strategy {
    type Err = ConfigErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bfs" => Ok(Strategy::Bfs),
            "dfs" => Ok(Strategy::Dfs),
            "dfs_limited_depth" => Ok(Strategy::DfsLimitedDepth(DEFAULT_MAX_DEPTH)),
            "ucs" => Ok(Strategy::Ucs),
            "greedy" => Ok(Strategy::Greedy),
            "astar" => Ok(Strategy::AStar),
            "astar_pq" => Ok(Strategy::AStarAlt),
            "idas" => Ok(Strategy::IdaStar),
            _ => Err(ConfigErr::UnknownStrategy(s.to_owned())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigErr {
    UnknownStrategy(String),
}

impl Display for ConfigErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ConfigErr::UnknownStrategy(ref name) => write!(
                f,
                "Unknown strategy '{}' - expected one of bfs, dfs, dfs_limited_depth, \
                 ucs, greedy, astar, astar_pq, idas",
                name
            ),
        }
    }
}

impl Error for ConfigErr {}
