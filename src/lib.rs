// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]
// Clippy
#![allow(unknown_lints)] // necessary because rustc doesn't know about clippy
#![warn(clippy::all)]

pub mod config;
pub mod data;
pub mod moves;
pub mod solution_formatter;
pub mod solver;
pub mod state;

mod fs;
mod parser;
mod vec2d;

use std::error::Error;

pub use crate::config::{ConfigErr, Strategy};
pub use crate::parser::ParserErr;
pub use crate::state::GameState;

use crate::solver::SolverOk;

pub trait LoadLevel {
    fn load_level(&self) -> Result<GameState, Box<dyn Error>>;
}

pub trait Solve {
    fn solve(&self, strategy: Strategy) -> SolverOk;
}
