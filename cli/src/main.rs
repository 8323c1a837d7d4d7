use clap::Parser;
use tracing::Level;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

use cube_solver::{load_tables, run, Args};
use twophase::prelude::*;

fn main() -> anyhow::Result<()> {
	let args = Args::parse();

	let level = match args.verbose {
		0 => Level::WARN,
		1 => Level::INFO,
		2 => Level::DEBUG,
		_ => Level::TRACE,
	};
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::builder()
				.with_default_directive(LevelFilter::from_level(level).into())
				.from_env_lossy(),
		)
		.with_writer(std::io::stderr)
		.init();

	let tables = load_tables(&args);
	let solver = Solver::new(&tables);

	run(&args, &solver, &mut std::io::stdout().lock())
}
