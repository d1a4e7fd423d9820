use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::data::{MapCell, Pos};
use crate::state::GameState;
use crate::vec2d::Vec2d;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErr {
    Pos(usize, usize),
    MultiplePlayers,
    NoPlayer,
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Pos(r, c) => write!(f, "Invalid cell at pos: [{}, {}]", r, c),
            ParserErr::MultiplePlayers => write!(f, "More than one player"),
            ParserErr::NoPlayer => write!(f, "No player"),
        }
    }
}

impl Error for ParserErr {}

impl FromStr for GameState {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parses the XSB symbols ` #$.@+*`, nothing else is allowed.
///
/// Rows are padded with empty cells to the width of the longest row.
pub(crate) fn parse(level: &str) -> Result<GameState, ParserErr> {
    // trim so we can specify levels using raw strings more easily
    let level = level.trim_matches(|c| c == '\n' || c == '\r').trim_end();

    let mut grid = Vec::new();
    let mut player_pos = None;

    for (r, line) in level.lines().enumerate() {
        let mut line_cells = Vec::new();
        for (c, cur_char) in line.trim_end().chars().enumerate() {
            let cell = MapCell::from_char(cur_char).ok_or(ParserErr::Pos(r, c))?;
            if cell.has_player() {
                if player_pos.is_some() {
                    return Err(ParserErr::MultiplePlayers);
                }
                player_pos = Some(Pos::new(r, c));
            }
            line_cells.push(cell);
        }
        grid.push(line_cells);
    }

    let player_pos = player_pos.ok_or(ParserErr::NoPlayer)?;
    Ok(GameState::new(Vec2d::new(&grid), player_pos, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fail_empty() {
        assert_failure("", ParserErr::NoPlayer);
    }

    #[test]
    fn fail_no_player() {
        let level = r"
#####
#$ .#
#####
";
        assert_failure(level, ParserErr::NoPlayer);
    }

    #[test]
    fn fail_multiple_players() {
        let level = r"
#####
#@$+#
#####
";
        assert_failure(level, ParserErr::MultiplePlayers);
    }

    #[test]
    fn fail_pos() {
        let level = r"
#####
#@X.#
#####
";
        assert_failure(level, ParserErr::Pos(1, 2));
    }

    #[test]
    fn fail_other_formats() {
        // no aliases from other formats
        assert_failure("#@-$.#", ParserErr::Pos(0, 2));
        assert_failure("#p$.#", ParserErr::Pos(0, 1));
    }

    #[test]
    fn simplest() {
        let level = r"
#####
#@$.#
#####
";
        assert_success(level);
    }

    #[test]
    fn ragged_rows() {
        let level = r"
    #####
    #   #
    #$  #
  ###  $##
  #  $ $ #
### # ## #   ######
#   # ## #####  ..#
# $  $          ..#
##### ### #@##  ..#
    #     #########
    #######
";
        let state = assert_success(level);
        assert_eq!(state.rows(), 11);
        assert_eq!(state.cols(), 19);
        assert_eq!(state.cell(Pos::new(0, 18)), Some(MapCell::Empty));
        assert_eq!(state.boxes().len(), 6);
        assert_eq!(state.targets().len(), 6);
        assert_eq!(state.player(), Pos::new(8, 11));
    }

    #[test]
    fn windows_line_endings() {
        let state: GameState = "#####\r\n#@$.#\r\n#####\r\n".parse().unwrap();
        assert_eq!(state.to_string(), "#####\n#@$.#\n#####\n");
    }

    fn assert_failure(input_level: &str, expected_err: ParserErr) {
        assert_eq!(input_level.parse::<GameState>().unwrap_err(), expected_err);
    }

    fn assert_success(input_level: &str) -> GameState {
        let state: GameState = input_level.parse().unwrap();
        assert_eq!(state.to_string(), input_level.trim_start_matches('\n'));
        state
    }
}
