use std::{io::Write, path::PathBuf};

use clap::Parser;
use tracing::debug;

use twophase::prelude::*;

/// The solved cube, used when no state is given
pub const DEFAULT_CUBE_STATE: &str = "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB";
pub const DEFAULT_MAX_DEPTH: usize = 0;
pub const DEFAULT_TIMEOUT: f64 = 0.3;

/// Solve a Rubik's Cube with Kociemba's two phase algorithm
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
	/// The cube as 54 facelets, face by face in the order U, R, F, D, L, B.
	/// Defaults to the solved cube
	pub cube_state: Option<String>,

	/// Stop as soon as a solution with at most this many turns is found.
	/// 0 keeps improving until the timeout
	#[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
	pub max_depth: usize,

	/// Seconds after which the best solution so far is returned
	#[arg(long, default_value_t = DEFAULT_TIMEOUT)]
	pub timeout: f64,

	/// The facelets are sticker colors (any six letters) instead of face letters
	#[arg(long, default_value_t = false)]
	pub colors: bool,

	/// Cache the solver tables in this file. Without it they are built in
	/// memory and nothing is written
	#[arg(long)]
	pub tables: Option<PathBuf>,

	/// Print more information to stderr, can be repeated
	#[arg(short, long, action = clap::ArgAction::Count)]
	pub verbose: u8,
}

/// The tables for the solver, read from and stored to `--tables` if given.
pub fn load_tables(args: &Args) -> Tables {
	match &args.tables {
		Some(path) => Tables::load_or_generate(path),
		None => Tables::generate(),
	}
}

/// Solve the requested cube and print the solution as its own line.
///
/// Nothing is written unless the solver succeeds.
pub fn run<S: Solve, W: Write>(args: &Args, solver: &S, out: &mut W) -> anyhow::Result<()> {
	let state = args.cube_state.as_deref().unwrap_or(DEFAULT_CUBE_STATE);

	let state = if args.colors {
		FaceCube::from_colors(state)?.to_string()
	} else {
		state.to_string()
	};
	debug!(%state, max_depth = args.max_depth, timeout = args.timeout, "Solving");

	let solution = solver.solve(&state, args.max_depth, args.timeout)?;

	writeln!(out, "{}", solution)?;
	Ok(())
}
