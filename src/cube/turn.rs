use std::str::FromStr;

use const_for::const_for;
use strum::EnumCount;

use super::Face;

/// Total number of faces you can turn
pub const NUM_TURNTYPES: usize = Face::COUNT;
/// Total number of ways to adjust your turn
pub const NUM_TURNWISES: usize = TurnWise::COUNT;
/// Total number of distinct turns
pub const NUM_TURNS: usize = NUM_TURNTYPES * NUM_TURNWISES;

/// You can either turn a side in (Counter-)Clockwise and Half turns
/// This is the enum for that
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, strum::EnumIter, strum::EnumCount)]
#[repr(usize)]
pub enum TurnWise {
	Clockwise,
	Double,
	CounterClockwise,
}

impl std::fmt::Display for TurnWise {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			TurnWise::Clockwise => write!(f, ""),
			TurnWise::CounterClockwise => write!(f, "'"),
			TurnWise::Double => write!(f, "2"),
		}
	}
}

/// An entire turn
///
/// side: The face to turn
/// wise: See the definiton of TurnWise
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Turn {
	pub side: Face,
	pub wise: TurnWise,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum TurnError {
	#[error("Turn string has invalid size: \"{0}\"")]
	Size(String),
	#[error("Turn string has an invalid face character: \"{0}\"")]
	Face(String),
	#[error("Turn string has an invalid turn modifier: \"{0}\"")]
	Wise(String),
}

impl Turn {
	pub const fn new(side: Face, wise: TurnWise) -> Self {
		Self { side, wise }
	}

	/// Index of the turn in the move tables: 3 * face + wise
	pub const fn index(self) -> usize {
		self.side as usize * NUM_TURNWISES + self.wise as usize
	}

	/// Turn itself to the turn, which negates itself.
	/// In terms of set theory, convert itself the inverse operation of the current one.
	pub fn invert(&mut self) {
		match self.wise {
			TurnWise::CounterClockwise => self.wise = TurnWise::Clockwise,
			TurnWise::Clockwise => self.wise = TurnWise::CounterClockwise,
			_ => {}
		}
	}
}

impl std::fmt::Display for Turn {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "{}{}", self.side, self.wise)
	}
}

impl FromStr for Turn {
	type Err = TurnError;

	/// Accepts "U", "U2", "U'" and the numbered forms "U1", "U3".
	fn from_str(item: &str) -> Result<Self, Self::Err> {
		let mut chars = item.chars();

		let side = match chars.next() {
			Some(c) => Face::from_letter(c).ok_or_else(|| TurnError::Face(item.to_string()))?,
			None => return Err(TurnError::Size(item.to_string())),
		};

		let wise = match chars.next() {
			None | Some('1') => TurnWise::Clockwise,
			Some('2') => TurnWise::Double,
			Some('\'') | Some('3') => TurnWise::CounterClockwise,
			Some(_) => return Err(TurnError::Wise(item.to_string())),
		};

		if chars.next().is_some() {
			return Err(TurnError::Size(item.to_string()));
		}

		Ok(Self { side, wise })
	}
}

/// Every turn, sorted by `Turn::index`
pub const ALL_TURNS: [Turn; NUM_TURNS] = generate_all_turns();

const fn generate_all_turns() -> [Turn; NUM_TURNS] {
	const SIDES: [Face; NUM_TURNTYPES] = [
		Face::Up,
		Face::Right,
		Face::Front,
		Face::Down,
		Face::Left,
		Face::Back,
	];
	const WISES: [TurnWise; NUM_TURNWISES] = [
		TurnWise::Clockwise,
		TurnWise::Double,
		TurnWise::CounterClockwise,
	];

	let mut out = [Turn::new(Face::Up, TurnWise::Clockwise); NUM_TURNS];
	const_for!(i in 0..NUM_TURNS => {
		out[i] = Turn::new(SIDES[i / NUM_TURNWISES], WISES[i % NUM_TURNWISES]);
	});

	out
}

/// Parse a whitespace separated sequence of turns.
pub fn parse_turns(string: &str) -> Result<Vec<Turn>, TurnError> {
	string.split_whitespace().map(Turn::from_str).collect()
}
