use std::{
	str::FromStr,
	time::{Duration, Instant},
};

use tracing::{debug, info};

use super::{
	format_turns,
	tables::{is_phase2_turn, Tables, PHASE2_TURNS},
	Solve, SolveError,
};
use crate::cube::{cubiecube::CubieCube, facecube::FaceCube, turn::*, RubiksCube};

/// No cube needs more phase 1 turns
const MAX_PHASE1_DEPTH: usize = 20;
/// No cube in G1 needs more phase 2 turns
const MAX_PHASE2_DEPTH: usize = 18;

/// Two phase solver on top of a set of tables.
///
/// The solver only reads the tables, so one set can be shared by many
/// solvers and threads.
pub struct Solver<'a> {
	tables: &'a Tables,
}

/// Turning `next` after `last` either merges into a single turn or is
/// the reordering of a sequence which is searched anyway.
fn is_redundant(last: Turn, next: Turn) -> bool {
	next.side == last.side || (next.side == last.side.opposite() && (next.side as usize) < (last.side as usize))
}

/// The state of a single solve
struct Search<'a> {
	tables: &'a Tables,
	cube: &'a CubieCube,
	path: Vec<Turn>,
	best: Option<Vec<Turn>>,
	max_depth: usize,
	deadline: Option<Instant>,
	stop: bool,
}

impl Search<'_> {
	fn past_deadline(&self) -> bool {
		self.deadline.map_or(false, |d| Instant::now() >= d)
	}

	/// Iterative deepening search for G1. `togo` is the exact number of
	/// turns left in phase 1.
	fn phase1(&mut self, twist: usize, flip: usize, udslice: usize, togo: usize) {
		if togo == 0 {
			// Ending in a G1 turn means a shorter phase 1 would reach G1 as well
			let ends_outside = self.path.last().map_or(true, |t| !is_phase2_turn(*t));
			if twist == 0 && flip == 0 && udslice == 0 && ends_outside {
				self.phase2_start();
			}
			return;
		}

		// Without any solution the search has to go on
		if self.best.is_some() && self.past_deadline() {
			self.stop = true;
			return;
		}

		for turn in ALL_TURNS {
			if self.path.last().map_or(false, |last| is_redundant(*last, turn)) {
				continue;
			}

			let m = turn.index();
			let t = self.tables.twist_move[twist][m] as usize;
			let f = self.tables.flip_move[flip][m] as usize;
			let s = self.tables.udslice_move[udslice][m] as usize;
			if self.tables.phase1_distance(t, f, s) >= togo {
				continue;
			}

			self.path.push(turn);
			self.phase1(t, f, s, togo - 1);
			self.path.pop();

			if self.stop {
				return;
			}
		}
	}

	/// The cube reached G1 with the turns in `path`, solve the rest.
	fn phase2_start(&mut self) {
		let n1 = self.path.len();

		// Only solutions shorter than the best one are of interest
		let limit = match &self.best {
			Some(best) => match best.len().checked_sub(n1 + 1) {
				Some(limit) => limit.min(MAX_PHASE2_DEPTH),
				None => return,
			},
			None => MAX_PHASE2_DEPTH,
		};

		let mut cube = self.cube.clone();
		cube.apply_turns(self.path.iter().copied());
		let corner = cube.get_corner_perm_coord();
		let edge8 = cube.get_edge8_perm_coord();
		let slice = cube.get_slice_perm_coord();

		let start = self.tables.phase2_distance(corner, edge8, slice);
		for depth in start..=limit {
			if self.phase2(corner, edge8, slice, depth) {
				let solution = self.path.clone();
				self.path.truncate(n1);

				debug!(phase1 = n1, phase2 = depth, solution = %format_turns(&solution), "Found solution");
				let short_enough = self.max_depth > 0 && solution.len() <= self.max_depth;
				self.best = Some(solution);
				if short_enough || self.past_deadline() {
					self.stop = true;
				}
				return;
			}
		}
	}

	/// Iterative deepening search for the solved cube using G1 turns only.
	/// On success the turns stay in `path`.
	fn phase2(&mut self, corner: usize, edge8: usize, slice: usize, togo: usize) -> bool {
		if togo == 0 {
			return corner == 0 && edge8 == 0 && slice == 0;
		}

		for (i, turn) in PHASE2_TURNS.iter().enumerate() {
			if self.path.last().map_or(false, |last| is_redundant(*last, *turn)) {
				continue;
			}

			let c = self.tables.corner_move[corner][i] as usize;
			let e = self.tables.edge8_move[edge8][i] as usize;
			let s = self.tables.slice_perm_move[slice][i] as usize;
			if self.tables.phase2_distance(c, e, s) >= togo {
				continue;
			}

			self.path.push(*turn);
			if self.phase2(c, e, s, togo - 1) {
				return true;
			}
			self.path.pop();
		}

		false
	}
}

impl<'a> Solver<'a> {
	pub fn new(tables: &'a Tables) -> Self {
		Self { tables }
	}

	/// Find a turn sequence solving `cube`.
	///
	/// See `Solve::solve` for the meaning of `max_depth` and `timeout`.
	pub fn solve_cube(
		&self,
		cube: &CubieCube,
		max_depth: usize,
		timeout: Duration,
	) -> Result<Vec<Turn>, SolveError> {
		cube.verify()?;

		let start = Instant::now();
		let mut search = Search {
			tables: self.tables,
			cube,
			path: Vec::with_capacity(MAX_PHASE1_DEPTH + MAX_PHASE2_DEPTH),
			best: None,
			max_depth,
			deadline: start.checked_add(timeout),
			stop: false,
		};

		let twist = cube.get_twist_coord();
		let flip = cube.get_flip_coord();
		let udslice = cube.get_udslice_coord();

		for depth in self.tables.phase1_distance(twist, flip, udslice)..=MAX_PHASE1_DEPTH {
			search.phase1(twist, flip, udslice, depth);
			if search.stop {
				break;
			}

			// Any later phase 1 is longer than the best solution
			if search.best.as_ref().map_or(false, |best| best.len() <= depth + 1) {
				break;
			}
		}

		let solution = search.best.ok_or(SolveError::NoSolution)?;
		info!(length = solution.len(), elapsed = ?start.elapsed(), "Solved cube");
		Ok(solution)
	}
}

impl Solve for Solver<'_> {
	fn solve(&self, cube_state: &str, max_depth: usize, timeout: f64) -> Result<String, SolveError> {
		let timeout = Duration::try_from_secs_f64(timeout).map_err(|_| SolveError::InvalidTimeout(timeout))?;

		let cube = CubieCube::try_from(&FaceCube::from_str(cube_state)?)?;
		let solution = self.solve_cube(&cube, max_depth, timeout)?;

		Ok(format_turns(&solution))
	}
}

#[cfg(test)]
mod tests {
	use rand::{rngs::StdRng, SeedableRng};

	use super::*;
	use crate::{cube::CubeError, solve::TABLES};

	const SOLVED: &str = "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB";

	fn scrambled(turns: &str) -> String {
		let mut cube = CubieCube::new();
		cube.apply_turns(parse_turns(turns).unwrap());
		FaceCube::from(&cube).to_string()
	}

	/// Apply the solution to the cube given by the facelets
	fn is_solution(cube_state: &str, solution: &str) -> bool {
		let face = FaceCube::from_str(cube_state).unwrap();
		let mut cube = CubieCube::try_from(&face).unwrap();
		cube.apply_turns(parse_turns(solution).unwrap());
		cube.is_solved()
	}

	#[test]
	fn redundant_turns() {
		let t = |s: &str| Turn::from_str(s).unwrap();

		assert!(is_redundant(t("R"), t("R2")));
		assert!(is_redundant(t("D"), t("U'")));
		assert!(!is_redundant(t("U"), t("D'")));
		assert!(!is_redundant(t("U"), t("R")));
	}

	#[test]
	fn solve_solved() {
		let solver = Solver::new(&TABLES);
		assert_eq!(solver.solve(SOLVED, 0, 0.3), Ok(String::new()));
		assert_eq!(solver.solve(SOLVED, 20, 0.0), Ok(String::new()));
	}

	#[test]
	fn solve_short_scramble() {
		let solver = Solver::new(&TABLES);
		let state = scrambled("R U F'");

		let solution = solver.solve(&state, 0, 5.0).unwrap();
		assert!(is_solution(&state, &solution));
		assert!(parse_turns(&solution).unwrap().len() <= 3);
	}

	#[test]
	fn solve_phase2_only() {
		let solver = Solver::new(&TABLES);
		let state = scrambled("U R2 D' F2 L2 B2 U2");

		let solution = solver.solve(&state, 0, 5.0).unwrap();
		assert!(is_solution(&state, &solution));
		assert!(parse_turns(&solution).unwrap().len() <= 7);
	}

	#[test]
	/// Stop as soon as the solution has at most max_depth turns
	fn solve_random_cubes() {
		let solver = Solver::new(&TABLES);
		let mut rng = StdRng::seed_from_u64(42);

		for _ in 0..10 {
			let cube = CubieCube::random_with(&mut rng);
			let state = FaceCube::from(&cube).to_string();

			let start = Instant::now();
			let solution = solver.solve(&state, 30, 30.0).unwrap();
			assert!(start.elapsed() < Duration::from_secs(10));
			assert!(is_solution(&state, &solution));
			assert!(parse_turns(&solution).unwrap().len() <= 30);
		}
	}

	#[test]
	/// A tight max_depth is reached long before the timeout
	fn solve_within_max_depth() {
		let solver = Solver::new(&TABLES);
		let mut rng = StdRng::seed_from_u64(21);

		for _ in 0..3 {
			let cube = CubieCube::random_with(&mut rng);

			let start = Instant::now();
			let turns = solver.solve_cube(&cube, 21, Duration::from_secs(30)).unwrap();
			assert!(start.elapsed() < Duration::from_secs(15));
			assert!(turns.len() <= 21);

			let mut solved = cube.clone();
			solved.apply_turns(turns);
			assert!(solved.is_solved());
		}
	}

	#[test]
	/// The first solution short enough ends the search
	fn stop_at_max_depth() {
		let solver = Solver::new(&TABLES);

		let state = scrambled("R U F'");
		let start = Instant::now();
		let solution = solver.solve(&state, 3, 30.0).unwrap();
		assert!(start.elapsed() < Duration::from_secs(5));
		assert!(is_solution(&state, &solution));
		assert!(parse_turns(&solution).unwrap().len() <= 3);

		// Any phase 2 solution of this G1 cube is accepted
		let state = scrambled("U R2 D' F2 L2 B2 U2");
		let start = Instant::now();
		let solution = solver.solve(&state, 7, 30.0).unwrap();
		assert!(start.elapsed() < Duration::from_secs(5));
		assert!(is_solution(&state, &solution));
		assert!(parse_turns(&solution).unwrap().len() <= 7);
	}

	#[test]
	/// With max_depth 0 the search ends with the timeout
	fn solve_with_timeout() {
		let solver = Solver::new(&TABLES);
		let mut rng = StdRng::seed_from_u64(7);
		let cube = CubieCube::random_with(&mut rng);

		let start = Instant::now();
		let turns = solver.solve_cube(&cube, 0, Duration::from_millis(200)).unwrap();
		assert!(start.elapsed() < Duration::from_secs(10));

		let mut solved = cube.clone();
		solved.apply_turns(turns);
		assert!(solved.is_solved());
	}

	#[test]
	fn solve_invalid() {
		let solver = Solver::new(&TABLES);

		assert_eq!(
			solver.solve("UUU", 0, 0.3),
			Err(SolveError::Cube(CubeError::Length(3)))
		);
		assert_eq!(solver.solve(SOLVED, 0, -1.0), Err(SolveError::InvalidTimeout(-1.0)));
		assert!(matches!(
			solver.solve(SOLVED, 0, f64::NAN),
			Err(SolveError::InvalidTimeout(_))
		));

		// Twist the URF corner in place
		let mut twisted: Vec<char> = SOLVED.chars().collect();
		twisted[8] = 'F';
		twisted[9] = 'U';
		twisted[20] = 'R';
		let twisted: String = twisted.into_iter().collect();
		assert!(matches!(
			solver.solve(&twisted, 0, 0.3),
			Err(SolveError::Cube(CubeError::CornerOrientation(_)))
		));

		// Swap two edges
		let mut cube = CubieCube::new();
		cube.edges.swap(0, 1);
		assert_eq!(
			solver.solve_cube(&cube, 0, Duration::from_secs(1)),
			Err(SolveError::Cube(CubeError::Permutation))
		);
	}
}
