use const_for::const_for;
use rand::Rng;
use strum::IntoEnumIterator;

use crate::{cube::*, math::*};

pub type Ori = u8;

type CornerList = [(Corner, Ori); NUM_CORNERS];
type EdgeList = [(Edge, Ori); NUM_EDGES];

/// The cube specification as Kociemba published in
/// https://kociemba.org/math/cubielevel.htm
///
/// `corners[i]` is the corner sitting at position `i` together with its twist,
/// `edges[i]` the edge at position `i` together with its flip.
#[derive(PartialEq, Eq, Clone, Debug, Hash)]
pub struct CubieCube {
	pub corners: CornerList,
	pub edges: EdgeList,
}

// ===== Tranformation-Corners =====
#[rustfmt::skip]
const TC_BASE: CornerList = [
	(Corner::URF, 0), (Corner::UFL, 0), (Corner::ULB, 0), (Corner::UBR, 0),
	(Corner::DFR, 0), (Corner::DLF, 0), (Corner::DBL, 0), (Corner::DRB, 0),
];
#[rustfmt::skip]
const TC_UP: CornerList = [
	(Corner::UBR, 0), (Corner::URF, 0), (Corner::UFL, 0), (Corner::ULB, 0),
	(Corner::DFR, 0), (Corner::DLF, 0), (Corner::DBL, 0), (Corner::DRB, 0),
];
#[rustfmt::skip]
const TC_RIGHT: CornerList = [
	(Corner::DFR, 2), (Corner::UFL, 0), (Corner::ULB, 0), (Corner::URF, 1),
	(Corner::DRB, 1), (Corner::DLF, 0), (Corner::DBL, 0), (Corner::UBR, 2),
];
#[rustfmt::skip]
const TC_FRONT: CornerList = [
	(Corner::UFL, 1), (Corner::DLF, 2), (Corner::ULB, 0), (Corner::UBR, 0),
	(Corner::URF, 2), (Corner::DFR, 1), (Corner::DBL, 0), (Corner::DRB, 0),
];
#[rustfmt::skip]
const TC_DOWN: CornerList = [
	(Corner::URF, 0), (Corner::UFL, 0), (Corner::ULB, 0), (Corner::UBR, 0),
	(Corner::DLF, 0), (Corner::DBL, 0), (Corner::DRB, 0), (Corner::DFR, 0),
];
#[rustfmt::skip]
const TC_LEFT: CornerList = [
	(Corner::URF, 0), (Corner::ULB, 1), (Corner::DBL, 2), (Corner::UBR, 0),
	(Corner::DFR, 0), (Corner::UFL, 2), (Corner::DLF, 1), (Corner::DRB, 0),
];
#[rustfmt::skip]
const TC_BACK: CornerList = [
	(Corner::URF, 0), (Corner::UFL, 0), (Corner::UBR, 1), (Corner::DRB, 2),
	(Corner::DFR, 0), (Corner::DLF, 0), (Corner::ULB, 2), (Corner::DBL, 1),
];

/// Chain 2 transformations, first t1 then t2.
const fn chain_corners(t1: CornerList, t2: CornerList) -> CornerList {
	let mut out = TC_BASE;

	const_for!(i in 0..NUM_CORNERS => {
		let (c2, o2) = t2[i];
		let (c1, o1) = t1[c2 as usize];

		out[i] = (c1, (o1 + o2) % 3);
	});

	out
}

const fn generate_corner_transform_table() -> [[CornerList; NUM_TURNWISES]; NUM_TURNTYPES] {
	// Sorted like `Face`
	const BASE: [CornerList; NUM_FACES] = [TC_UP, TC_RIGHT, TC_FRONT, TC_DOWN, TC_LEFT, TC_BACK];

	let mut out = [[TC_BASE; NUM_TURNWISES]; NUM_TURNTYPES];

	const_for!(i in 0..NUM_FACES => {
		out[i][0] = BASE[i];
		out[i][1] = chain_corners(out[i][0], BASE[i]);
		out[i][2] = chain_corners(out[i][1], BASE[i]);
	});

	out
}

const CORNER_TRANSFORM: [[CornerList; NUM_TURNWISES]; NUM_TURNTYPES] =
	generate_corner_transform_table();

// ===== Edge Transformations =====
#[rustfmt::skip]
const TE_BASE: EdgeList = [
	(Edge::UR,0), (Edge::UF,0), (Edge::UL,0), (Edge::UB,0),
	(Edge::DR,0), (Edge::DF,0), (Edge::DL,0), (Edge::DB,0),
	(Edge::FR,0), (Edge::FL,0), (Edge::BL,0), (Edge::BR,0),
];
#[rustfmt::skip]
const TE_UP: EdgeList = [
	(Edge::UB,0), (Edge::UR,0), (Edge::UF,0), (Edge::UL,0),
	(Edge::DR,0), (Edge::DF,0), (Edge::DL,0), (Edge::DB,0),
	(Edge::FR,0), (Edge::FL,0), (Edge::BL,0), (Edge::BR,0),
];
#[rustfmt::skip]
const TE_RIGHT: EdgeList = [
	(Edge::FR,0), (Edge::UF,0), (Edge::UL,0), (Edge::UB,0),
	(Edge::BR,0), (Edge::DF,0), (Edge::DL,0), (Edge::DB,0),
	(Edge::DR,0), (Edge::FL,0), (Edge::BL,0), (Edge::UR,0),
];
#[rustfmt::skip]
const TE_FRONT: EdgeList = [
	(Edge::UR,0), (Edge::FL,1), (Edge::UL,0), (Edge::UB,0),
	(Edge::DR,0), (Edge::FR,1), (Edge::DL,0), (Edge::DB,0),
	(Edge::UF,1), (Edge::DF,1), (Edge::BL,0), (Edge::BR,0),
];
#[rustfmt::skip]
const TE_DOWN: EdgeList = [
	(Edge::UR,0), (Edge::UF,0), (Edge::UL,0), (Edge::UB,0),
	(Edge::DF,0), (Edge::DL,0), (Edge::DB,0), (Edge::DR,0),
	(Edge::FR,0), (Edge::FL,0), (Edge::BL,0), (Edge::BR,0),
];
#[rustfmt::skip]
const TE_LEFT: EdgeList = [
	(Edge::UR,0), (Edge::UF,0), (Edge::BL,0), (Edge::UB,0),
	(Edge::DR,0), (Edge::DF,0), (Edge::FL,0), (Edge::DB,0),
	(Edge::FR,0), (Edge::UL,0), (Edge::DL,0), (Edge::BR,0),
];
#[rustfmt::skip]
const TE_BACK: EdgeList = [
	(Edge::UR,0), (Edge::UF,0), (Edge::UL,0), (Edge::BR,1),
	(Edge::DR,0), (Edge::DF,0), (Edge::DL,0), (Edge::BL,1),
	(Edge::FR,0), (Edge::FL,0), (Edge::UB,1), (Edge::DB,1),
];

const fn chain_edges(t1: EdgeList, t2: EdgeList) -> EdgeList {
	let mut out = TE_BASE;

	const_for!(i in 0..NUM_EDGES => {
		let (e2, o2) = t2[i];
		let (e1, o1) = t1[e2 as usize];

		out[i] = (e1, (o1 + o2) & 1);
	});

	out
}

const fn generate_edge_transform_table() -> [[EdgeList; NUM_TURNWISES]; NUM_TURNTYPES] {
	const BASE: [EdgeList; NUM_FACES] = [TE_UP, TE_RIGHT, TE_FRONT, TE_DOWN, TE_LEFT, TE_BACK];

	let mut out = [[TE_BASE; NUM_TURNWISES]; NUM_TURNTYPES];

	const_for!(i in 0..NUM_FACES => {
		out[i][0] = BASE[i];
		out[i][1] = chain_edges(out[i][0], BASE[i]);
		out[i][2] = chain_edges(out[i][1], BASE[i]);
	});

	out
}

const EDGE_TRANSFORM: [[EdgeList; NUM_TURNWISES]; NUM_TURNTYPES] = generate_edge_transform_table();

// ===== Coordinate sizes =====

pub const TWIST: usize = 2187; // 3^7
pub const FLIP: usize = 2048; // 2^11
pub const UDSLICE: usize = 495; // 12 choose 4

pub const CORNER_PERM: usize = 40320; // 8!
pub const EDGE_PERM: usize = 479001600; // 12!
pub const EDGE8_PERM: usize = 40320; // 8!
pub const SLICE_PERM: usize = 24; // 4!

impl Default for CubieCube {
	fn default() -> Self {
		Self::new()
	}
}

impl CubieCube {
	/// The solved cube
	pub const fn new() -> Self {
		CubieCube {
			corners: TC_BASE,
			edges: TE_BASE,
		}
	}

	/// A uniformly chosen solvable cube.
	pub fn random() -> Self {
		Self::random_with(&mut rand::thread_rng())
	}

	pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
		let mut cube = Self::new();

		cube.set_corner_perm_coord(rng.gen_range(0..CORNER_PERM));
		cube.set_edge_perm_coord(rng.gen_range(0..EDGE_PERM));
		// A single swap fixes the parity
		if cube.corner_parity() != cube.edge_parity() {
			cube.edges.swap(NUM_EDGES - 2, NUM_EDGES - 1);
		}

		cube.set_twist_coord(rng.gen_range(0..TWIST));
		cube.set_flip_coord(rng.gen_range(0..FLIP));

		cube
	}

	/// Get the corner and orientation at position 'c'
	pub const fn corner(&self, c: Corner) -> (Corner, Ori) {
		self.corners[c as usize]
	}

	/// Get the edge and orientation at position 'e'
	pub const fn edge(&self, e: Edge) -> (Edge, Ori) {
		self.edges[e as usize]
	}

	// ===== Phase 1 coordinates =====

	/// Return the cube's corner orientation coordinate
	pub fn get_twist_coord(&self) -> usize {
		self.corners
			.iter()
			.take(NUM_CORNERS - 1)
			.fold(0, |acc, (_, o)| 3 * acc + *o as usize)
	}

	/// Set the corner orientation according to the given coordinate
	pub fn set_twist_coord(&mut self, coord: usize) {
		debug_assert!(coord < TWIST);

		let mut x = coord;
		let mut parity = 0;
		for i in (0..NUM_CORNERS - 1).rev() {
			self.corners[i].1 = (x % 3) as Ori;
			parity += x % 3;
			x /= 3;
		}
		self.corners[NUM_CORNERS - 1].1 = ((3 - parity % 3) % 3) as Ori;
	}

	/// Return the cube's edges orientation coordinate
	pub fn get_flip_coord(&self) -> usize {
		self.edges
			.iter()
			.take(NUM_EDGES - 1)
			.fold(0, |acc, (_, o)| 2 * acc + *o as usize)
	}

	/// Set the edge orientation according to the given coordinate
	pub fn set_flip_coord(&mut self, coord: usize) {
		debug_assert!(coord < FLIP);

		let mut x = coord;
		let mut parity = 0;
		for i in (0..NUM_EDGES - 1).rev() {
			self.edges[i].1 = (x % 2) as Ori;
			parity += x % 2;
			x /= 2;
		}
		self.edges[NUM_EDGES - 1].1 = (parity % 2) as Ori;
	}

	/// Return the cube's udslice position coordinate
	/// That's the coordinate which tells us the position of the UD-Slice (FR, FL, BL, BR)
	/// but not their order. It is 0 when they are all in the slice.
	pub fn get_udslice_coord(&self) -> usize {
		// https://kociemba.org/math/UDSliceCoord.htm
		let mut a = 0;
		let mut x = 0;
		for j in (0..NUM_EDGES).rev() {
			if self.edges[j].0.is_udslice() {
				a += c_nk(NUM_EDGES - 1 - j, x + 1);
				x += 1;
			}
		}
		a
	}

	/// Place the UD-Slice edges according to the given coordinate
	pub fn set_udslice_coord(&mut self, coord: usize) {
		debug_assert!(coord < UDSLICE);

		let slice: Vec<Edge> = Edge::iter().filter(|e| e.is_udslice()).collect();
		let other: Vec<Edge> = Edge::iter().filter(|e| !e.is_udslice()).collect();

		let mut a = coord;
		let mut x = slice.len();
		let (mut s, mut o) = (0, 0);
		for j in 0..NUM_EDGES {
			let c = c_nk(NUM_EDGES - 1 - j, x);
			if x > 0 && a >= c {
				a -= c;
				x -= 1;
				self.edges[j].0 = slice[s];
				s += 1;
			} else {
				self.edges[j].0 = other[o];
				o += 1;
			}
		}
	}

	// ===== Permutation coordinates =====

	/// Return the cube's corner permutation as a coordinate.
	pub fn get_corner_perm_coord(&self) -> usize {
		let perm: Vec<_> = self.corners.iter().map(|(c, _)| *c as usize).collect();
		map_permutation(&perm)
	}

	/// Set the corner permutation according to the given coordinate
	pub fn set_corner_perm_coord(&mut self, coord: usize) {
		debug_assert!(coord < CORNER_PERM);

		let cs: Vec<Corner> = permute_vec(Corner::iter().collect(), coord);
		for (i, corner) in cs.into_iter().enumerate() {
			self.corners[i].0 = corner;
		}
	}

	/// Return the cube's edge permutation as a coordinate
	pub fn get_edge_perm_coord(&self) -> usize {
		let perm: Vec<_> = self.edges.iter().map(|(e, _)| *e as usize).collect();
		map_permutation(&perm)
	}

	/// Set the edge permutation according to the given coordinate
	pub fn set_edge_perm_coord(&mut self, coord: usize) {
		debug_assert!(coord < EDGE_PERM);

		let es: Vec<Edge> = permute_vec(Edge::iter().collect(), coord);
		for (i, edge) in es.into_iter().enumerate() {
			self.edges[i].0 = edge;
		}
	}

	/// Return the permutation coordinate of the edges in the up and down layer.
	/// Only meaningful if the UD-Slice edges are in the slice (phase 2).
	pub fn get_edge8_perm_coord(&self) -> usize {
		let perm: Vec<_> = self
			.edges
			.iter()
			.take(8)
			.map(|(e, _)| *e as usize)
			.collect();
		map_permutation(&perm)
	}

	pub fn set_edge8_perm_coord(&mut self, coord: usize) {
		debug_assert!(coord < EDGE8_PERM);

		let es: Vec<Edge> = permute_vec(Edge::iter().take(8).collect(), coord);
		for (i, edge) in es.into_iter().enumerate() {
			self.edges[i].0 = edge;
		}
	}

	/// Return the order of the UD-Slice edges as a coordinate.
	/// Only meaningful if they are in the slice (phase 2).
	pub fn get_slice_perm_coord(&self) -> usize {
		let perm: Vec<_> = self
			.edges
			.iter()
			.skip(8)
			.map(|(e, _)| *e as usize)
			.collect();
		map_permutation(&perm)
	}

	pub fn set_slice_perm_coord(&mut self, coord: usize) {
		debug_assert!(coord < SLICE_PERM);

		let es: Vec<Edge> = permute_vec(Edge::iter().skip(8).collect(), coord);
		for (i, edge) in es.into_iter().enumerate() {
			self.edges[8 + i].0 = edge;
		}
	}

	// ===== Utility functions =====

	pub fn apply_transformation(&mut self, tc: CornerList, te: EdgeList) {
		self.corners = chain_corners(self.corners, tc);
		self.edges = chain_edges(self.edges, te);
	}

	pub fn is_solved(&self) -> bool {
		self.edges == TE_BASE && self.corners == TC_BASE
	}

	fn corner_parity(&self) -> usize {
		let perm: Vec<_> = self.corners.iter().map(|(c, _)| *c as usize).collect();
		permutation_parity(&perm)
	}

	fn edge_parity(&self) -> usize {
		let perm: Vec<_> = self.edges.iter().map(|(e, _)| *e as usize).collect();
		permutation_parity(&perm)
	}

	/// Check whether the cube can be solved by turning faces only.
	pub fn verify(&self) -> Result<(), CubeError> {
		// Check that all corners and edges are there once
		let mut corners = [false; NUM_CORNERS];
		for (c, _) in self.corners.iter() {
			corners[*c as usize] = true;
		}
		let mut edges = [false; NUM_EDGES];
		for (e, _) in self.edges.iter() {
			edges[*e as usize] = true;
		}
		if corners.into_iter().chain(edges).any(|b| !b) {
			return Err(CubeError::Cubies);
		}

		// The sum of the corner orientations have to be divisible by 3
		let twist = self.corners.iter().map(|(_, o)| *o as usize).sum::<usize>();
		if twist % 3 != 0 {
			return Err(CubeError::CornerOrientation(twist % 3));
		}

		// The sum of the edge orientations have to be divisible by 2
		let flip = self.edges.iter().map(|(_, o)| *o as usize).sum::<usize>();
		if flip % 2 != 0 {
			return Err(CubeError::EdgeOrientation);
		}

		// There must be an even number of swaps throughout the permutations
		if self.corner_parity() != self.edge_parity() {
			return Err(CubeError::Permutation);
		}

		Ok(())
	}
}

impl RubiksCube for CubieCube {
	fn apply_turn(&mut self, turn: Turn) {
		let tc = CORNER_TRANSFORM[turn.side as usize][turn.wise as usize];
		let te = EDGE_TRANSFORM[turn.side as usize][turn.wise as usize];
		self.apply_transformation(tc, te);
	}
}
