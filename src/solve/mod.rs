//! Kociemba's two phase algorithm.
//!
//! Phase 1 brings the cube into the subgroup G1 = <U, D, R2, F2, L2, B2>, in
//! which all corners and edges are oriented and the UD-Slice edges are in
//! the UD-Slice. Phase 2 solves the cube using only the turns of G1.
//! Both phases are iterative deepening searches guided by pruning tables,
//! see `tables`. Phase 1 keeps producing new candidates so the total length
//! shrinks the longer the search runs.

pub mod search;
pub mod tables;

use lazy_static::lazy_static;

use crate::cube::{turn::Turn, CubeError};

pub use search::Solver;
pub use tables::{TableError, Tables};

lazy_static! {
	/// Tables used by `solve`, generated on first use
	static ref TABLES: Tables = Tables::generate();
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SolveError {
	#[error("Invalid cube")]
	Cube(#[from] CubeError),
	#[error("Invalid timeout of {0} seconds")]
	InvalidTimeout(f64),
	#[error("Could not solve the given Rubik's Cube!")]
	NoSolution,
}

/// Turns a cube, given as facelet string, into a solving sequence.
pub trait Solve {
	/// Solve `cube_state` (54 letters out of U, R, F, D, L, B).
	///
	/// The search returns as soon as a solution with at most `max_depth`
	/// turns is known, 0 means to keep improving. After `timeout` seconds the
	/// best solution found so far is returned; if there is none yet, the
	/// search continues until the first one is found.
	fn solve(&self, cube_state: &str, max_depth: usize, timeout: f64) -> Result<String, SolveError>;
}

/// Solve the cube with the tables shared by the whole process.
///
/// The first call generates the tables, which takes a moment.
pub fn solve(cube_state: &str, max_depth: usize, timeout: f64) -> Result<String, SolveError> {
	Solver::new(&TABLES).solve(cube_state, max_depth, timeout)
}

/// Space separated turns, e.g. "R U' F2". Empty for no turns.
pub fn format_turns(turns: &[Turn]) -> String {
	turns
		.iter()
		.map(ToString::to_string)
		.collect::<Vec<_>>()
		.join(" ")
}
