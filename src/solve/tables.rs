use std::{
	collections::VecDeque,
	fs::{self, File},
	io::{BufReader, BufWriter, Write},
	path::Path,
	time::Instant,
};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::cube::{cubiecube::*, turn::*, Face, RubiksCube};

/// v[coord][i] is the coordinate when applying move i on coord
pub type Movetable = Vec<Vec<u16>>;

/// v[slice * N + coord] is the number of turns needed to bring the pair
/// (slice, coord) back to (0, 0)
pub type Pruningtable = Vec<u8>;

const UNVISITED: u8 = u8::MAX;

/// The turns which keep a cube in G1, sorted by `Turn::index`
pub const PHASE2_TURNS: [Turn; 10] = [
	Turn::new(Face::Up, TurnWise::Clockwise),
	Turn::new(Face::Up, TurnWise::Double),
	Turn::new(Face::Up, TurnWise::CounterClockwise),
	Turn::new(Face::Right, TurnWise::Double),
	Turn::new(Face::Front, TurnWise::Double),
	Turn::new(Face::Down, TurnWise::Clockwise),
	Turn::new(Face::Down, TurnWise::Double),
	Turn::new(Face::Down, TurnWise::CounterClockwise),
	Turn::new(Face::Left, TurnWise::Double),
	Turn::new(Face::Back, TurnWise::Double),
];

pub fn is_phase2_turn(turn: Turn) -> bool {
	PHASE2_TURNS.contains(&turn)
}

#[derive(thiserror::Error, Debug)]
pub enum TableError {
	#[error("Could not access the table file: {0}")]
	Io(#[from] std::io::Error),
	#[error("Could not encode or decode the tables: {0}")]
	Encoding(#[from] bincode::Error),
	#[error("The stored tables have an unexpected shape")]
	Shape,
}

/// Everything the search needs to know beforehand.
///
/// Phase 1 tables are indexed with all 18 turns (`Turn::index`), phase 2
/// tables with the position of the turn in `PHASE2_TURNS`.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug)]
pub struct Tables {
	pub(crate) twist_move: Movetable,
	pub(crate) flip_move: Movetable,
	pub(crate) udslice_move: Movetable,

	pub(crate) corner_move: Movetable,
	pub(crate) edge8_move: Movetable,
	pub(crate) slice_perm_move: Movetable,

	pub(crate) slice_twist_prune: Pruningtable,
	pub(crate) slice_flip_prune: Pruningtable,
	pub(crate) slice_corner_prune: Pruningtable,
	pub(crate) slice_edge8_prune: Pruningtable,
}

// ===== Table Generating =====

/// Create a movetable
fn create_movetable(
	num_states: usize,
	moves: &[Turn],
	to_idx: fn(&CubieCube) -> usize,
	from_idx: fn(usize) -> CubieCube,
) -> Movetable {
	(0..num_states)
		.into_par_iter()
		.map(|idx| {
			// Create cube from current idx
			let cube = from_idx(idx);

			// Apply each turn to the cube and save the corresponding index
			moves
				.iter()
				.map(|turn| {
					let mut ncube = cube.clone();
					ncube.apply_turn(*turn);
					to_idx(&ncube) as u16
				})
				.collect()
		})
		.collect()
}

/// Breadth first search from (0, 0) over all pairs of the two coordinates.
/// Both movetables must be indexed by the same turns.
fn create_pruning_table(
	slice_move: &Movetable,
	num_slice: usize,
	coord_move: &Movetable,
	num_coord: usize,
) -> Pruningtable {
	let mut out = vec![UNVISITED; num_slice * num_coord];
	let mut queue = VecDeque::new();

	out[0] = 0;
	queue.push_back(0);

	while let Some(idx) = queue.pop_front() {
		let depth = out[idx];
		let (slice, coord) = (idx / num_coord, idx % num_coord);

		for (s, c) in slice_move[slice].iter().zip(coord_move[coord].iter()) {
			let dst = *s as usize * num_coord + *c as usize;
			if out[dst] == UNVISITED {
				out[dst] = depth + 1;
				queue.push_back(dst);
			}
		}
	}

	out
}

impl Tables {
	/// Generate all tables from scratch.
	pub fn generate() -> Self {
		let start = Instant::now();

		// Phase 1
		let twist_move = create_movetable(TWIST, &ALL_TURNS, CubieCube::get_twist_coord, |idx| {
			let mut cube = CubieCube::new();
			cube.set_twist_coord(idx);
			cube
		});
		let flip_move = create_movetable(FLIP, &ALL_TURNS, CubieCube::get_flip_coord, |idx| {
			let mut cube = CubieCube::new();
			cube.set_flip_coord(idx);
			cube
		});
		let udslice_move = create_movetable(UDSLICE, &ALL_TURNS, CubieCube::get_udslice_coord, |idx| {
			let mut cube = CubieCube::new();
			cube.set_udslice_coord(idx);
			cube
		});

		// Phase 2
		let corner_move = create_movetable(CORNER_PERM, &PHASE2_TURNS, CubieCube::get_corner_perm_coord, |idx| {
			let mut cube = CubieCube::new();
			cube.set_corner_perm_coord(idx);
			cube
		});
		let edge8_move = create_movetable(EDGE8_PERM, &PHASE2_TURNS, CubieCube::get_edge8_perm_coord, |idx| {
			let mut cube = CubieCube::new();
			cube.set_edge8_perm_coord(idx);
			cube
		});
		let slice_perm_move = create_movetable(SLICE_PERM, &PHASE2_TURNS, CubieCube::get_slice_perm_coord, |idx| {
			let mut cube = CubieCube::new();
			cube.set_slice_perm_coord(idx);
			cube
		});
		debug!(elapsed = ?start.elapsed(), "Generated move tables");

		let ((slice_twist_prune, slice_flip_prune), (slice_corner_prune, slice_edge8_prune)) = rayon::join(
			|| {
				rayon::join(
					|| create_pruning_table(&udslice_move, UDSLICE, &twist_move, TWIST),
					|| create_pruning_table(&udslice_move, UDSLICE, &flip_move, FLIP),
				)
			},
			|| {
				rayon::join(
					|| create_pruning_table(&slice_perm_move, SLICE_PERM, &corner_move, CORNER_PERM),
					|| create_pruning_table(&slice_perm_move, SLICE_PERM, &edge8_move, EDGE8_PERM),
				)
			},
		);
		debug!(elapsed = ?start.elapsed(), "Generated pruning tables");

		Self {
			twist_move,
			flip_move,
			udslice_move,
			corner_move,
			edge8_move,
			slice_perm_move,
			slice_twist_prune,
			slice_flip_prune,
			slice_corner_prune,
			slice_edge8_prune,
		}
	}

	/// Read tables written by `Tables::save`.
	pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, TableError> {
		let file = File::open(path)?;
		let tables: Self = bincode::deserialize_from(BufReader::new(file))?;
		tables.check()?;
		Ok(tables)
	}

	pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), TableError> {
		let path = path.as_ref();
		if let Some(dir) = path.parent() {
			fs::create_dir_all(dir)?;
		}

		let mut file = BufWriter::new(File::create(path)?);
		bincode::serialize_into(&mut file, self)?;
		file.flush()?;
		Ok(())
	}

	/// Load the tables from `path`. If that fails, generate them and try to
	/// store them there for the next time.
	pub fn load_or_generate<P: AsRef<Path>>(path: P) -> Self {
		let path = path.as_ref();

		match Self::load(path) {
			Ok(tables) => {
				debug!(path = %path.display(), "Loaded solver tables");
				tables
			}
			Err(e) => {
				info!(path = %path.display(), reason = %e, "Must generate solver tables, this may take a while...");
				let tables = Self::generate();
				match tables.save(path) {
					Ok(()) => info!(path = %path.display(), "Saved solver tables"),
					Err(e) => warn!(path = %path.display(), error = %e, "Could not save solver tables"),
				}
				tables
			}
		}
	}

	/// Make sure every table has the size the search relies on.
	fn check(&self) -> Result<(), TableError> {
		let phase1 = ALL_TURNS.len();
		let phase2 = PHASE2_TURNS.len();

		let movetables = [
			(&self.twist_move, TWIST, phase1),
			(&self.flip_move, FLIP, phase1),
			(&self.udslice_move, UDSLICE, phase1),
			(&self.corner_move, CORNER_PERM, phase2),
			(&self.edge8_move, EDGE8_PERM, phase2),
			(&self.slice_perm_move, SLICE_PERM, phase2),
		];
		for (table, states, moves) in movetables {
			let valid = table.len() == states
				&& table
					.iter()
					.all(|row| row.len() == moves && row.iter().all(|&c| (c as usize) < states));
			if !valid {
				return Err(TableError::Shape);
			}
		}

		let pruningtables = [
			(&self.slice_twist_prune, UDSLICE * TWIST),
			(&self.slice_flip_prune, UDSLICE * FLIP),
			(&self.slice_corner_prune, SLICE_PERM * CORNER_PERM),
			(&self.slice_edge8_prune, SLICE_PERM * EDGE8_PERM),
		];
		if pruningtables.iter().any(|(table, len)| table.len() != *len) {
			return Err(TableError::Shape);
		}

		Ok(())
	}

	/// Lower bound of the turns needed to reach G1
	pub fn phase1_distance(&self, twist: usize, flip: usize, udslice: usize) -> usize {
		let a = self.slice_twist_prune[udslice * TWIST + twist];
		let b = self.slice_flip_prune[udslice * FLIP + flip];
		a.max(b) as usize
	}

	/// Lower bound of the G1 turns needed to solve a cube in G1
	pub fn phase2_distance(&self, corner: usize, edge8: usize, slice: usize) -> usize {
		let a = self.slice_corner_prune[slice * CORNER_PERM + corner];
		let b = self.slice_edge8_prune[slice * EDGE8_PERM + edge8];
		a.max(b) as usize
	}
}
