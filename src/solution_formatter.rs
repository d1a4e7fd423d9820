use std::fmt::{self, Debug, Display, Formatter};

use crate::moves::Moves;
use crate::state::GameState;

/// Prints the initial state followed by the state after each move, separated by empty lines.
///
/// Moves are replayed, not trusted - if one of them is blocked
/// (e.g. moves from a different level), playback stops there.
pub struct SolutionFormatter<'a> {
    initial_state: &'a GameState,
    moves: &'a Moves,
}

impl<'a> SolutionFormatter<'a> {
    pub fn new(initial_state: &'a GameState, moves: &'a Moves) -> Self {
        Self {
            initial_state,
            moves,
        }
    }
}

impl Display for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.initial_state)?;
        let mut last_state = self.initial_state.clone();
        for (i, &dir) in self.moves.iter().enumerate() {
            match last_state.make_move(dir) {
                Some(new_state) => {
                    writeln!(f, "{}", new_state)?;
                    last_state = new_state;
                }
                None => {
                    writeln!(f, "Move {} ({}) is blocked", i + 1, dir)?;
                    break;
                }
            }
        }
        Ok(())
    }
}

impl Debug for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
