use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};

use crate::data::{Dir, MapCell, Pos};
use crate::vec2d::Vec2d;

/// One snapshot of the puzzle.
///
/// States are never modified after construction, every move produces a new one.
/// Two states are equal when their grids and player positions match,
/// the cost it took to reach them doesn't matter.
#[derive(Clone)]
pub struct GameState {
    grid: Vec2d<MapCell>,
    player: Pos,
    boxes: Vec<Pos>,
    targets: Vec<Pos>,
    current_cost: usize,
    solved: bool,
}

impl GameState {
    /// `player` must be the only cell holding the player.
    pub(crate) fn new(grid: Vec2d<MapCell>, player: Pos, current_cost: usize) -> Self {
        let mut boxes = Vec::new();
        let mut targets = Vec::new();
        for pos in grid.positions() {
            let cell = grid[pos];
            if cell.has_box() {
                boxes.push(pos);
            }
            if cell.is_target() {
                targets.push(pos);
            }
        }

        let mut state = GameState {
            grid,
            player,
            boxes,
            targets,
            current_cost,
            solved: false,
        };
        state.solved = state.check_solved();
        state
    }

    pub fn player(&self) -> Pos {
        self.player
    }

    /// Box positions in row-major order.
    pub fn boxes(&self) -> &[Pos] {
        &self.boxes
    }

    pub fn targets(&self) -> &[Pos] {
        &self.targets
    }

    /// Number of moves from the initial configuration.
    pub fn current_cost(&self) -> usize {
        self.current_cost
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// `None` outside the grid.
    pub fn cell(&self, pos: Pos) -> Option<MapCell> {
        self.grid.get(pos).cloned()
    }

    /// Cached when the state is created.
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    pub fn check_solved(&self) -> bool {
        self.boxes
            .iter()
            .all(|&pos| self.grid[pos] == MapCell::BoxOnTarget)
    }

    /// Sum of distances from each box to its nearest target.
    ///
    /// Boxes are not matched to targets so several boxes can count the same target.
    pub fn heuristic(&self) -> usize {
        let mut goal_dist_sum = 0;
        for box_pos in &self.boxes {
            let nearest = self
                .targets
                .iter()
                .map(|&target| box_pos.dist(target))
                .min()
                .unwrap_or(0);
            goal_dist_sum += nearest;
        }
        goal_dist_sum
    }

    pub fn total_cost(&self) -> usize {
        self.current_cost + self.heuristic()
    }

    /// Moves the player one cell, pushing at most one box.
    ///
    /// Returns `None` if the move is blocked by a wall, by a box that can't be pushed
    /// or by the edge of the grid.
    pub fn make_move(&self, dir: Dir) -> Option<GameState> {
        let new_player_pos = self.player + dir;
        let dest = *self.grid.get(new_player_pos)?;

        let mut new_grid = self.grid.clone();
        if dest.is_free() {
            // step
            new_grid[self.player] = self.grid[self.player].floor();
            new_grid[new_player_pos] = dest.with_player();
        } else if dest.has_box() {
            let push_dest = new_player_pos + dir;
            let beyond = *self.grid.get(push_dest)?;
            if !beyond.is_free() {
                return None;
            }

            // push
            new_grid[self.player] = self.grid[self.player].floor();
            new_grid[new_player_pos] = dest.with_player();
            new_grid[push_dest] = beyond.with_box();
        } else {
            return None;
        }

        Some(GameState::new(new_grid, new_player_pos, self.current_cost + 1))
    }
}

impl PartialEq for GameState {
    fn eq(&self, other: &Self) -> bool {
        self.player == other.player && self.grid == other.grid
    }
}

impl Eq for GameState {}

impl Hash for GameState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // boxes are determined by the grid
        self.grid.hash(state);
        self.player.hash(state);
    }
}

impl Display for GameState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for r in 0..self.grid.rows() {
            // don't print trailing empty cells to match the input level strings
            let last = (0..self.grid.cols())
                .rev()
                .find(|&c| self.grid[Pos::new(r, c)] != MapCell::Empty);
            if let Some(last) = last {
                for c in 0..=last {
                    write!(f, "{}", self.grid[Pos::new(r, c)])?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Debug for GameState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "cost: {}", self.current_cost)?;
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::data::DIRECTIONS;

    fn parse(level: &str) -> GameState {
        level.parse().unwrap()
    }

    #[test]
    fn derived_positions() {
        let state = parse(
            r"
#######
#@$ .*#
#  .  #
#######
",
        );
        assert_eq!(state.player(), Pos::new(1, 1));
        assert_eq!(state.boxes(), &[Pos::new(1, 2), Pos::new(1, 5)]);
        assert_eq!(
            state.targets(),
            &[Pos::new(1, 4), Pos::new(1, 5), Pos::new(2, 3)]
        );
        assert_eq!(state.current_cost(), 0);
        assert!(!state.is_solved());
    }

    #[test]
    fn push_onto_target() {
        let state = parse("@$.");
        let new_state = state.make_move(Dir::Right).unwrap();
        assert_eq!(new_state.to_string(), " @*\n");
        assert_eq!(new_state.player(), Pos::new(0, 1));
        assert_eq!(new_state.boxes(), &[Pos::new(0, 2)]);
        assert_eq!(new_state.current_cost(), 1);
        assert!(new_state.is_solved());
        assert!(new_state.check_solved());
        assert_eq!(new_state.heuristic(), 0);
    }

    #[test]
    fn step_restores_target() {
        let state = parse(
            r"
#####
# +.#
#####
",
        );
        let new_state = state.make_move(Dir::Right).unwrap();
        assert_eq!(new_state.cell(Pos::new(1, 2)), Some(MapCell::Target));
        assert_eq!(new_state.cell(Pos::new(1, 3)), Some(MapCell::PlayerOnTarget));
        let back = new_state.make_move(Dir::Left).unwrap().make_move(Dir::Left).unwrap();
        assert_eq!(back.to_string(), "#####\n#@..#\n#####\n");
        assert_eq!(back.cell(Pos::new(1, 1)), Some(MapCell::Player));
        assert_eq!(back.current_cost(), 3);
    }

    #[test]
    fn push_off_target() {
        let state = parse("#@* #");
        let new_state = state.make_move(Dir::Right).unwrap();
        assert_eq!(new_state.to_string(), "# +$#\n");
        assert!(!new_state.is_solved());
    }

    #[test]
    fn blocked_by_walls() {
        let state = parse(
            r"
###
#$#
#@#
###
",
        );
        for &dir in &DIRECTIONS {
            assert!(state.make_move(dir).is_none(), "{} should be blocked", dir);
            // same answer when asked again
            assert!(state.make_move(dir).is_none());
        }

        let state = parse("#@$#");
        assert!(state.make_move(Dir::Right).is_none());
        assert!(state.make_move(Dir::Left).is_none());
    }

    #[test]
    fn blocked_by_box() {
        let state = parse("@$$.");
        assert!(state.make_move(Dir::Right).is_none());
    }

    #[test]
    fn blocked_by_edge() {
        let state = parse("@");
        for &dir in &DIRECTIONS {
            assert!(state.make_move(dir).is_none());
        }
        let state = parse("@ $");
        let state = state.make_move(Dir::Right).unwrap();
        assert!(state.make_move(Dir::Right).is_none());
    }

    #[test]
    fn transitions_keep_invariants() {
        // walk a few levels of the state graph and check every successor
        let initial = parse(
            r"
#######
#     #
# $$ .#
# .@  #
#######
",
        );
        let mut states = vec![initial];
        for _ in 0..4 {
            let mut next = Vec::new();
            for state in &states {
                for &dir in &DIRECTIONS {
                    if let Some(new_state) = state.make_move(dir) {
                        assert_ne!(state.cell(new_state.player()), Some(MapCell::Wall));
                        assert!(new_state.cell(new_state.player()).unwrap().has_player());
                        for &b in new_state.boxes() {
                            assert!(new_state.cell(b).unwrap().has_box());
                        }
                        let unique: HashSet<_> = new_state.boxes().iter().collect();
                        assert_eq!(unique.len(), 2);
                        assert_eq!(new_state.targets().len(), 2);
                        assert_eq!(new_state.current_cost(), state.current_cost() + 1);
                        assert_eq!(new_state.is_solved(), new_state.check_solved());
                        next.push(new_state);
                    }
                }
            }
            states = next;
        }
    }

    #[test]
    fn heuristic_nearest_target() {
        let state = parse(
            r"
########
#@$  ..#
# $    #
########
",
        );
        // (1,2) -> (1,5) = 3, (2,2) -> (1,5) = 4
        assert_eq!(state.heuristic(), 7);
        assert_eq!(state.total_cost(), 7);

        let moved = state.make_move(Dir::Right).unwrap();
        assert_eq!(moved.heuristic(), 6);
        assert_eq!(moved.total_cost(), 7);
    }

    #[test]
    fn heuristic_zero_when_boxes_on_targets() {
        let state = parse("#@ ** .#");
        assert!(state.is_solved());
        assert_eq!(state.heuristic(), 0);
    }

    #[test]
    fn identity_ignores_cost() {
        let state = parse("#@  #");
        let there_and_back = state
            .make_move(Dir::Right)
            .unwrap()
            .make_move(Dir::Left)
            .unwrap();
        assert_eq!(there_and_back.current_cost(), 2);
        assert_eq!(state, there_and_back);

        let mut set = HashSet::new();
        set.insert(state.clone());
        assert!(set.contains(&there_and_back));
        assert!(!set.contains(&state.make_move(Dir::Right).unwrap()));
    }
}
