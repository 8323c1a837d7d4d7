//! Tests for the command line wrapper, using a recording solver

use std::cell::RefCell;

use clap::Parser;

use cube_solver::{load_tables, run, Args, DEFAULT_CUBE_STATE};
use twophase::prelude::*;

/// Remembers every call and answers with a fixed result
struct FakeSolver {
	calls: RefCell<Vec<(String, usize, f64)>>,
	answer: Result<String, SolveError>,
}

impl FakeSolver {
	fn answering(answer: Result<String, SolveError>) -> Self {
		Self {
			calls: RefCell::new(vec![]),
			answer,
		}
	}
}

impl Solve for FakeSolver {
	fn solve(&self, cube_state: &str, max_depth: usize, timeout: f64) -> Result<String, SolveError> {
		self.calls
			.borrow_mut()
			.push((cube_state.to_string(), max_depth, timeout));
		self.answer.clone()
	}
}

fn args(argv: &[&str]) -> Args {
	Args::try_parse_from(std::iter::once("cube-solver").chain(argv.iter().copied())).unwrap()
}

#[test]
fn default_cube_state() {
	let solver = FakeSolver::answering(Ok(String::new()));
	let mut out = Vec::new();

	run(&args(&[]), &solver, &mut out).unwrap();

	assert_eq!(
		solver.calls.borrow().as_slice(),
		&[(DEFAULT_CUBE_STATE.to_string(), 0, 0.3)]
	);
	assert_eq!(DEFAULT_CUBE_STATE.len(), 54);
	assert_eq!(out, b"\n");
}

#[test]
fn given_cube_state() {
	let state = "DUUBULDBFRBFRRULLLBRDFFFBLURDBFDFDRFRULBLUFDURRBLBDUDL";
	let solver = FakeSolver::answering(Ok("R U R' U'".to_string()));
	let mut out = Vec::new();

	run(&args(&[state]), &solver, &mut out).unwrap();

	assert_eq!(solver.calls.borrow().as_slice(), &[(state.to_string(), 0, 0.3)]);
	assert_eq!(String::from_utf8(out).unwrap(), "R U R' U'\n");
}

#[test]
/// The state is passed on untouched, even if it is not a cube
fn state_is_not_checked() {
	let solver = FakeSolver::answering(Ok("F".to_string()));
	let mut out = Vec::new();

	run(&args(&["hello"]), &solver, &mut out).unwrap();
	assert_eq!(solver.calls.borrow()[0].0, "hello");
}

#[test]
fn solver_options() {
	let solver = FakeSolver::answering(Ok(String::new()));
	let mut out = Vec::new();

	run(
		&args(&["--max-depth", "21", "--timeout", "2.5", DEFAULT_CUBE_STATE]),
		&solver,
		&mut out,
	)
	.unwrap();
	assert_eq!(
		solver.calls.borrow().as_slice(),
		&[(DEFAULT_CUBE_STATE.to_string(), 21, 2.5)]
	);
}

#[test]
/// Errors reach the caller and nothing is printed
fn solver_error() {
	let solver = FakeSolver::answering(Err(SolveError::NoSolution));
	let mut out = Vec::new();

	let err = run(&args(&[]), &solver, &mut out).unwrap_err();
	assert_eq!(err.downcast_ref::<SolveError>(), Some(&SolveError::NoSolution));
	assert!(out.is_empty());
}

#[test]
fn color_input() {
	// The solved cube with white up, red right and green front
	let colors = "WWWWWWWWWRRRRRRRRRGGGGGGGGGYYYYYYYYYOOOOOOOOOBBBBBBBBB";
	let solver = FakeSolver::answering(Ok(String::new()));
	let mut out = Vec::new();

	run(&args(&["--colors", colors]), &solver, &mut out).unwrap();
	assert_eq!(solver.calls.borrow()[0].0, DEFAULT_CUBE_STATE);

	let err = run(&args(&["--colors", "WWW"]), &solver, &mut out).unwrap_err();
	assert_eq!(err.downcast_ref::<CubeError>(), Some(&CubeError::Length(3)));
	assert_eq!(solver.calls.borrow().len(), 1);
	assert!(out == b"\n");
}

#[test]
fn argument_parsing() {
	let parsed = args(&[]);
	assert_eq!(parsed.cube_state, None);
	assert_eq!(parsed.max_depth, 0);
	assert_eq!(parsed.timeout, 0.3);
	assert!(!parsed.colors);
	assert_eq!(parsed.tables, None);
	assert_eq!(parsed.verbose, 0);

	assert_eq!(args(&["-vv"]).verbose, 2);
	assert_eq!(
		args(&["--tables", "cache/tables.bin"]).tables,
		Some(std::path::PathBuf::from("cache/tables.bin"))
	);
	assert!(Args::try_parse_from(["cube-solver", "a", "b"]).is_err());
	assert!(Args::try_parse_from(["cube-solver", "--max-depth", "-1"]).is_err());
}

#[test]
/// The real solver behind the wrapper
fn solve_with_tables() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("tables.bin");

	let tables = load_tables(&args(&["--tables", path.to_str().unwrap()]));
	assert!(path.exists());
	assert!(Tables::load(&path).unwrap() == tables);
	let solver = Solver::new(&tables);

	let mut cube = CubieCube::new();
	cube.apply_turns(parse_turns("R U2 F'").unwrap());
	let state = FaceCube::from(&cube).to_string();

	let mut out = Vec::new();
	run(&args(&[state.as_str(), "--timeout", "5"]), &solver, &mut out).unwrap();

	let solution = String::from_utf8(out).unwrap();
	assert!(solution.ends_with('\n'));
	cube.apply_turns(parse_turns(&solution).unwrap());
	assert!(cube.is_solved());

	let mut out = Vec::new();
	run(&args(&[]), &solver, &mut out).unwrap();
	assert_eq!(out, b"\n");
}

#[test]
/// Without --tables the tables stay in memory
fn no_table_file_by_default() {
	let dir = tempfile::tempdir().unwrap();
	std::env::set_current_dir(dir.path()).unwrap();

	let tables = load_tables(&args(&[]));
	assert!(std::fs::read_dir(dir.path()).unwrap().next().is_none());

	let mut out = Vec::new();
	run(&args(&[]), &Solver::new(&tables), &mut out).unwrap();
	assert_eq!(out, b"\n");
	assert!(std::fs::read_dir(dir.path()).unwrap().next().is_none());
}
