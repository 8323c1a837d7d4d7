pub mod cubiecube;
pub mod facecube;
pub mod turn;

use strum::EnumCount;
use turn::*;

/// The dimension of the cube
pub const CUBE_DIM: usize = 3;

/// The number of facelets per face
pub const CUBE_AREA: usize = CUBE_DIM * CUBE_DIM;

/// The number of faces of a cube
pub const NUM_FACES: usize = Face::COUNT;

/// The number of facelets of the whole cube
pub const NUM_FACELETS: usize = CUBE_AREA * NUM_FACES;

/// The faces in the order they appear in a facelet string.
#[derive(
	Eq, PartialEq, PartialOrd, Copy, Clone, Debug, Hash, strum::EnumCount, strum::EnumIter,
)]
#[repr(usize)]
pub enum Face {
	// It must only contain unit fields!
	Up,
	Right,
	Front,
	Down,
	Left,
	Back,
}

impl Face {
	/// The letter used for this face in facelet strings and turns.
	pub const fn letter(self) -> char {
		match self {
			Face::Up => 'U',
			Face::Right => 'R',
			Face::Front => 'F',
			Face::Down => 'D',
			Face::Left => 'L',
			Face::Back => 'B',
		}
	}

	pub fn from_letter(c: char) -> Option<Self> {
		let face = match c {
			'U' => Face::Up,
			'R' => Face::Right,
			'F' => Face::Front,
			'D' => Face::Down,
			'L' => Face::Left,
			'B' => Face::Back,
			_ => return None,
		};
		Some(face)
	}

	/// The face on the other side of the cube.
	pub const fn opposite(self) -> Self {
		match self {
			Face::Up => Face::Down,
			Face::Right => Face::Left,
			Face::Front => Face::Back,
			Face::Down => Face::Up,
			Face::Left => Face::Right,
			Face::Back => Face::Front,
		}
	}
}

impl std::fmt::Display for Face {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "{}", self.letter())
	}
}

// ===== Edge Piece =====

/// All the different position names for an Edge
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, strum::EnumIter, strum::EnumCount, strum::Display, Debug)]
#[repr(usize)]
#[rustfmt::skip]
pub enum Edge {
	#[default]
	UR, UF, UL, UB, // up edges
	DR, DF, DL, DB, // down edges
	FR, FL, BL, BR, // ud-slice (middle edges)
}

pub const NUM_EDGES: usize = Edge::COUNT;

impl Edge {
	/// Whether the edge belongs to the slice between the up and down face.
	pub const fn is_udslice(self) -> bool {
		self as usize >= Edge::FR as usize
	}
}

// ===== Corner Piece =====

/// A corner piece
/// The first letter is always the up or down face, the others follow clockwise.
#[derive(
	Clone, Copy, Default, PartialEq, Eq, Hash, Debug, strum::EnumIter, strum::EnumCount, strum::Display
)]
#[allow(clippy::upper_case_acronyms)]
#[repr(usize)]
#[rustfmt::skip]
pub enum Corner {
	#[default]
	URF, UFL, ULB, UBR,
	DFR, DLF, DBL, DRB,
}

pub const NUM_CORNERS: usize = Corner::COUNT;

/// It contains all the different ways a cube description
/// could be illegal.
/// From it, you are able to know how to fix the cube.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
	#[error("The cube string has length {0}, expected {}", NUM_FACELETS)]
	Length(usize),
	#[error("The cube string contains the invalid facelet '{0}'")]
	Facelet(char),
	#[error("Not every color appears exactly {} times", CUBE_AREA)]
	ColorCount,
	#[error("The centers don't have six different colors")]
	ColorScheme,
	#[error("The center of face {0} has the wrong color")]
	Center(Face),
	#[error("The corner at position {0} has an invalid color combination")]
	CornerColors(Corner),
	#[error("The edge at position {0} has an invalid color combination")]
	EdgeColors(Edge),
	#[error("The orientation-parity of the corners are off by +{0}")]
	CornerOrientation(usize),
	#[error("The orientation-parity of the edges are off by 1")]
	EdgeOrientation,
	#[error("The number of swaps needed is odd")]
	Permutation,
	#[error("Not all cubies are present on the cube")]
	Cubies,
}

/// The RubiksCube trait.
pub trait RubiksCube {
	fn apply_turn(&mut self, turn: Turn);

	/// Apply the given sequence of turns.
	fn apply_turns<I>(&mut self, turns: I)
	where
		I: IntoIterator<Item = Turn>,
		Self: Sized,
	{
		for turn in turns {
			self.apply_turn(turn);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::{cubiecube::*, *};
	use std::{error::Error, str::FromStr};
	use strum::IntoEnumIterator;

	#[test]
	/// Opposite faces are paired up
	fn opposite_faces() {
		for face in Face::iter() {
			assert_ne!(face, face.opposite());
			assert_eq!(face, face.opposite().opposite());
			assert_eq!(Face::from_letter(face.letter()), Some(face));
		}
	}

	#[test]
	/// Check that well known sequences of order n are the identity after n repetitions
	fn sequence_orders() -> Result<(), Box<dyn Error>> {
		let buildup = vec![(parse_turns("R U R' U'")?, 6), (parse_turns("R U")?, 105)];

		for (seq, order) in buildup.iter() {
			let mut cube = CubieCube::new();
			for i in 0..*order {
				cube.apply_turns(seq.iter().copied());
				if i + 1 < *order {
					assert!(!cube.is_solved());
				}
			}

			if !cube.is_solved() {
				panic!("{:?} doesn't have order {}", seq, order);
			}
		}

		let mut cube = CubieCube::new();
		cube.apply_turn(Turn::from_str("F2")?);
		cube.apply_turn(Turn::from_str("F'")?);
		cube.apply_turn(Turn::from_str("F")?);
		assert_eq!(cube, {
			let mut c = CubieCube::new();
			c.apply_turn(Turn::from_str("F2")?);
			c
		});

		Ok(())
	}
}
