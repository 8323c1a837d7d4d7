use std::{collections::HashMap, str::FromStr};

use strum::IntoEnumIterator;

use crate::cube::{cubiecube::*, *};

use crate::cube::Face::{Back as B, Down as D, Front as F, Left as L, Right as R, Up as U};

/// A Rubiks Cube given by the face (color) of each of its 54 facelets.
///
/// The faces follow each other in the order U, R, F, D, L, B, and the
/// facelets of a face are numbered 1..=9 row by row, as seen when looking
/// straight at that face:
///
/// ```text
///              |U1 U2 U3|
///              |U4 U5 U6|
///              |U7 U8 U9|
///  |L1 L2 L3|  |F1 F2 F3|  |R1 R2 R3|  |B1 B2 B3|
///  |L4 L5 L6|  |F4 F5 F6|  |R4 R5 R6|  |B4 B5 B6|
///  |L7 L8 L9|  |F7 F8 F9|  |R7 R8 R9|  |B7 B8 B9|
///              |D1 D2 D3|
///              |D4 D5 D6|
///              |D7 D8 D9|
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct FaceCube {
	pub data: [Face; NUM_FACELETS],
}

/// Return the index of facelet n (1..=9) of the given face.
const fn at(face: Face, n: usize) -> usize {
	face as usize * CUBE_AREA + n - 1
}

/// The facelets of each corner position, starting with the up or down
/// facelet and going on clockwise.
#[rustfmt::skip]
const CORNER_FACELETS: [[usize; 3]; NUM_CORNERS] = [
	[at(U, 9), at(R, 1), at(F, 3)], // URF
	[at(U, 7), at(F, 1), at(L, 3)], // UFL
	[at(U, 1), at(L, 1), at(B, 3)], // ULB
	[at(U, 3), at(B, 1), at(R, 3)], // UBR
	[at(D, 3), at(F, 9), at(R, 7)], // DFR
	[at(D, 1), at(L, 9), at(F, 7)], // DLF
	[at(D, 7), at(B, 9), at(L, 7)], // DBL
	[at(D, 9), at(R, 9), at(B, 7)], // DRB
];

/// The facelets of each edge position
#[rustfmt::skip]
const EDGE_FACELETS: [[usize; 2]; NUM_EDGES] = [
	[at(U, 6), at(R, 2)], [at(U, 8), at(F, 2)], [at(U, 4), at(L, 2)], [at(U, 2), at(B, 2)],
	[at(D, 6), at(R, 8)], [at(D, 2), at(F, 8)], [at(D, 4), at(L, 8)], [at(D, 8), at(B, 8)],
	[at(F, 6), at(R, 4)], [at(F, 4), at(L, 6)], [at(B, 6), at(L, 4)], [at(B, 4), at(R, 6)],
];

/// The colors of each corner, in the same order as CORNER_FACELETS
#[rustfmt::skip]
const CORNER_COLORS: [[Face; 3]; NUM_CORNERS] = [
	[U, R, F], [U, F, L], [U, L, B], [U, B, R],
	[D, F, R], [D, L, F], [D, B, L], [D, R, B],
];

#[rustfmt::skip]
const EDGE_COLORS: [[Face; 2]; NUM_EDGES] = [
	[U, R], [U, F], [U, L], [U, B],
	[D, R], [D, F], [D, L], [D, B],
	[F, R], [F, L], [B, L], [B, R],
];

impl Default for FaceCube {
	/// Creates a *solved* rubiks cube!
	fn default() -> Self {
		let mut data = [Face::Up; NUM_FACELETS];
		for face in Face::iter() {
			for n in 1..=CUBE_AREA {
				data[at(face, n)] = face;
			}
		}
		Self { data }
	}
}

impl FaceCube {
	pub fn new() -> Self {
		Self::default()
	}

	/// Parse a cube given in sticker colors (six arbitrary distinct characters,
	/// e.g. R, B, W, G, O, Y). Every color is mapped to the face whose center
	/// carries it.
	pub fn from_colors(s: &str) -> Result<Self, CubeError> {
		let colors: Vec<char> = s.chars().collect();
		if colors.len() != NUM_FACELETS {
			return Err(CubeError::Length(colors.len()));
		}

		let mut scheme = HashMap::with_capacity(NUM_FACES);
		for face in Face::iter() {
			if scheme.insert(colors[at(face, 5)], face).is_some() {
				return Err(CubeError::ColorScheme);
			}
		}

		let faces = colors
			.iter()
			.map(|c| {
				scheme
					.get(c)
					.map(|face| face.letter())
					.ok_or(CubeError::Facelet(*c))
			})
			.collect::<Result<String, _>>()?;

		faces.parse()
	}
}

impl FromStr for FaceCube {
	type Err = CubeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let len = s.chars().count();
		if len != NUM_FACELETS {
			return Err(CubeError::Length(len));
		}

		let mut cube = FaceCube::new();
		let mut count = [0; NUM_FACES];

		for (i, c) in s.chars().enumerate() {
			let face = Face::from_letter(c).ok_or(CubeError::Facelet(c))?;
			count[face as usize] += 1;
			cube.data[i] = face;
		}

		if count.iter().any(|&n| n != CUBE_AREA) {
			return Err(CubeError::ColorCount);
		}

		Ok(cube)
	}
}

impl std::fmt::Display for FaceCube {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		for face in self.data.iter() {
			write!(f, "{}", face.letter())?;
		}
		Ok(())
	}
}

impl TryFrom<&FaceCube> for CubieCube {
	type Error = CubeError;

	fn try_from(value: &FaceCube) -> Result<Self, Self::Error> {
		// The centers are fixed, a rotated cube is not accepted
		for face in Face::iter() {
			if value.data[at(face, 5)] != face {
				return Err(CubeError::Center(face));
			}
		}

		let mut out = CubieCube::new();

		for (pos, facelets) in Corner::iter().zip(CORNER_FACELETS.iter()) {
			// The twist is the place of the up/down color
			let ori = facelets
				.iter()
				.position(|&i| matches!(value.data[i], Face::Up | Face::Down))
				.ok_or(CubeError::CornerColors(pos))?;
			let cols = [
				value.data[facelets[ori]],
				value.data[facelets[(ori + 1) % 3]],
				value.data[facelets[(ori + 2) % 3]],
			];

			let corner = Corner::iter()
				.find(|c| CORNER_COLORS[*c as usize] == cols)
				.ok_or(CubeError::CornerColors(pos))?;
			out.corners[pos as usize] = (corner, ori as Ori);
		}

		for (pos, facelets) in Edge::iter().zip(EDGE_FACELETS.iter()) {
			let cols = [value.data[facelets[0]], value.data[facelets[1]]];

			// If the colors are in the order, it is not flipped
			let edge = Edge::iter()
				.find_map(|e| {
					let [c0, c1] = EDGE_COLORS[e as usize];
					if cols == [c0, c1] {
						Some((e, 0))
					} else if cols == [c1, c0] {
						Some((e, 1))
					} else {
						None
					}
				})
				.ok_or(CubeError::EdgeColors(pos))?;
			out.edges[pos as usize] = edge;
		}

		Ok(out)
	}
}

impl From<&CubieCube> for FaceCube {
	fn from(val: &CubieCube) -> Self {
		let mut out = FaceCube::new();

		for (pos, facelets) in Corner::iter().zip(CORNER_FACELETS.iter()) {
			let (c, o) = val.corner(pos);
			for (n, color) in CORNER_COLORS[c as usize].iter().enumerate() {
				out.data[facelets[(n + o as usize) % 3]] = *color;
			}
		}

		for (pos, facelets) in Edge::iter().zip(EDGE_FACELETS.iter()) {
			let (e, o) = val.edge(pos);
			for (n, color) in EDGE_COLORS[e as usize].iter().enumerate() {
				out.data[facelets[(n + o as usize) % 2]] = *color;
			}
		}

		out
	}
}

// ===== Tests =====
