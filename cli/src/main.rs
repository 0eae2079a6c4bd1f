use std::{error::Error, io::Write, path::Path, str::FromStr};

use clap::Parser;
use log::{info, warn, LevelFilter};
use strum::IntoEnumIterator;

use pocketcube::prelude::*;

/// The scramble solved when no cube is given. It needs 14 turns.
const DEFAULT_SCRAMBLE: &str = "6 7 8 20 18 19 3 4 5 16 17 15 0 1 2 14 12 13 10 11 9 21 22 23";

/// Pocket cube (2x2x2) solver: finds a shortest sequence of quarter turns
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// Use a sequence (of F Fi L Li U Ui) to apply on the solved cube
	#[arg(short, default_value_t = String::new())]
	sequence: String,

	/// Set the cube from its 24 facelet indices (slot i holds facelet set[i])
	#[arg(long, default_value_t = String::new())]
	set: String,

	/// The state to reach, as 24 facelet indices (default: solved)
	#[arg(long, default_value_t = String::new())]
	goal: String,

	/// Scramble the cube
	#[arg(short, long, default_value_t = false)]
	random: bool,

	/// Specify the search used for solving
	#[arg(long, default_value_t = SearchStrategy::default())]
	algorithm: SearchStrategy,

	/// Print all possible algorithms and quit
	#[arg(long, default_value_t = false)]
	list_algorithm: bool,

	/// Don't reject unsolvable cubes before searching
	#[arg(long, default_value_t = false)]
	no_precheck: bool,

	/// Solve with the distance table at the given path (generated if missing)
	#[arg(long)]
	table: Option<String>,

	/// Output length of sequence
	#[arg(short, long, default_value_t = false)]
	length: bool,

	/// Print the output to a file rather to the stdout
	#[arg(short, long, default_value_t = String::new())]
	output: String,

	/// More logging (-v info, -vv debug, -vvv trace)
	#[arg(short, long, action = clap::ArgAction::Count)]
	verbose: u8,
}

/// Load the distance table, or generate and save it.
fn load_table(path: &str) -> OrbitTable {
	match OrbitTable::load(path) {
		Ok(table) => table,
		Err(e) => {
			warn!("Could not load {}: {}", path, e);
			println!("Must generate the distance table, this may take a while...");
			let table = OrbitTable::generate();
			if let Some(dir) = Path::new(path).parent() {
				if let Err(e) = std::fs::create_dir_all(dir) {
					eprintln!("Could not create {}: {}", dir.display(), e);
				}
			}
			match table.save(path) {
				Ok(()) => info!("Saved the distance table to {}", path),
				Err(e) => eprintln!("Could not save the distance table: {}", e),
			}
			table
		}
	}
}

fn main() -> Result<(), Box<dyn Error>> {
	let args = Args::parse();

	env_logger::Builder::new()
		.filter_level(match args.verbose {
			0 => LevelFilter::Warn,
			1 => LevelFilter::Info,
			2 => LevelFilter::Debug,
			_ => LevelFilter::Trace,
		})
		.init();

	// Whether to redirect it to the stdout or a file
	let mut out: Box<dyn Write> = if args.output.is_empty() {
		Box::new(std::io::stdout())
	} else {
		Box::new(std::fs::File::create(&args.output)?)
	};

	// List the algorithm and exit
	if args.list_algorithm {
		for algo in SearchStrategy::iter() {
			writeln!(out, "{}", algo)?;
		}
		return Ok(());
	}

	let mut cube = if !args.set.is_empty() {
		Permutation::from_str(&args.set)?
	} else if args.random {
		CubieCube::random().into()
	} else if !args.sequence.is_empty() {
		Permutation::identity()
	} else {
		Permutation::from_str(DEFAULT_SCRAMBLE)?
	};

	// Applies turns from args
	cube.apply_turns(parse_turns(&args.sequence)?);

	let goal = if args.goal.is_empty() {
		Permutation::identity()
	} else {
		Permutation::from_str(&args.goal)?
	};
	info!("Solving {}", cube);

	let solution = match &args.table {
		Some(path) => load_table(path).solve(&cube, &goal)?,
		None => Solver::new()
			.with_strategy(args.algorithm)
			.with_precheck(!args.no_precheck)
			.solve(&cube, &goal),
	};

	match (args.length, solution.len()) {
		(true, Some(len)) => writeln!(out, "{} (len={})", solution, len)?,
		_ => writeln!(out, "{}", solution)?,
	}

	Ok(())
}
