use std::error::Error;

use twophase::prelude::*;

fn main() -> Result<(), Box<dyn Error>> {
	let cube = CubieCube::random();
	let state = FaceCube::from(&cube).to_string();
	println!("{}", state);

	let solution = parse_turns(&solve(&state, 0, 1.0)?)?;
	println!("{}", format_turns(&solution));

	// Undoing the solution scrambles a solved cube into the same state
	let scramble: Vec<Turn> = solution
		.iter()
		.rev()
		.map(|turn| {
			let mut turn = *turn;
			turn.invert();
			turn
		})
		.collect();
	let mut scrambled = CubieCube::new();
	scrambled.apply_turns(scramble);
	assert_eq!(scrambled, cube);

	Ok(())
}
