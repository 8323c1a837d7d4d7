//! Solve a Rubik's Cube given by its facelets with Kociemba's two phase
//! algorithm.
//!
//! ```no_run
//! use twophase::prelude::*;
//!
//! let solution = solve("DUUBULDBFRBFRRULLLBRDFFFBLURDBFDFDRFRULBLUFDURRBLBDUDL", 0, 0.3).unwrap();
//! println!("{}", solution);
//! ```
//!
//! The facelets are listed face by face in the order U, R, F, D, L, B and
//! row by row on each face. The solution uses the usual notation, e.g.
//! "R U' F2".
//!
//! Cubes can also be turned directly:
//!
//! ```
//! use twophase::prelude::*;
//!
//! let mut cube = CubieCube::new();
//!
//! cube.apply_turns(parse_turns("U2 D2 B2 F2 L2 R2").unwrap());
//! cube.apply_turns(parse_turns("R2 L2 F2 B2 D2 U2").unwrap());
//!
//! assert!(cube.is_solved());
//! ```

pub mod cube;
mod math;
pub mod solve;

pub mod prelude {
	pub use crate::cube::{cubiecube::*, facecube::*, turn::*, *};
	pub use crate::solve::{format_turns, solve, Solve, SolveError, Solver, TableError, Tables};
}
