//! A table holding the distance to the solved cube for every state of the orbit.
//!
//! The orbit is small enough (3 674 160 states) to enumerate completely, which
//! gives an independent way to find optimal solutions.

use std::{
	fs::File,
	io::{BufReader, BufWriter},
	path::Path,
};

use log::{debug, info};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::{
	cube::{cubiecube::*, permutation::Permutation, turn::*},
	solve::Solution,
};

const UNVISITED: u8 = u8::MAX;

#[derive(thiserror::Error, Debug)]
pub enum TableError {
	#[error("Could not access the table file: {0}")]
	Io(#[from] std::io::Error),
	#[error("Could not encode or decode the table: {0}")]
	Encoding(#[from] bincode::Error),
	#[error("The table has {0} entries instead of {}", ORBIT_SIZE)]
	Size(usize),
	#[error("No turn leads closer to the goal at distance {0}")]
	Inconsistent(u8),
}

/// The index of an orbit state in the table. None for states outside the orbit.
fn coordinate(cube: &Permutation) -> Option<usize> {
	let cubie = CubieCube::try_from(cube).ok()?;
	cubie.check_solvability().ok()?;
	Some(cubie.corner_perm_coord() * CORNER_ORI + cubie.twist_coord())
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct OrbitTable {
	distances: Vec<u8>,
}

impl OrbitTable {
	/// Run a breadth first search from the solved cube over the whole orbit.
	pub fn generate() -> Self {
		Self::generate_to_depth(UNVISITED - 1)
	}

	/// Stops after `max_depth` layers, deeper states stay unvisited.
	fn generate_to_depth(max_depth: u8) -> Self {
		let mut distances = vec![UNVISITED; ORBIT_SIZE];
		let solved = Permutation::identity();
		// The solved cube has coordinate 0
		distances[0] = 0;

		let mut frontier = vec![solved];
		let mut depth: u8 = 0;

		while !frontier.is_empty() && depth < max_depth {
			let successors: Vec<(usize, Permutation)> = frontier
				.par_iter()
				.flat_map_iter(|cube| Turn::iter().map(move |turn| cube.applied(turn)))
				.filter_map(|next| coordinate(&next).map(|coord| (coord, next)))
				.filter(|(coord, _)| distances[*coord] == UNVISITED)
				.collect();

			depth += 1;
			let mut next = Vec::new();
			for (coord, cube) in successors {
				if distances[coord] == UNVISITED {
					distances[coord] = depth;
					next.push(cube);
				}
			}

			debug!("Depth {}: {} states", depth, next.len());
			frontier = next;
		}

		let deepest = if frontier.is_empty() { depth - 1 } else { depth };
		info!("Generated the distance table, the deepest state needs {} turns", deepest);
		Self { distances }
	}

	pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, TableError> {
		let reader = BufReader::new(File::open(path)?);
		let table: Self = bincode::deserialize_from(reader)?;

		if table.distances.len() != ORBIT_SIZE {
			return Err(TableError::Size(table.distances.len()));
		}
		Ok(table)
	}

	pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), TableError> {
		let writer = BufWriter::new(File::create(path)?);
		bincode::serialize_into(writer, self)?;
		Ok(())
	}

	/// The length of a shortest turn sequence from `start` to `goal`.
	/// None if the goal can't be reached.
	pub fn distance(&self, start: &Permutation, goal: &Permutation) -> Option<u8> {
		let relative = goal.inverse() * *start;
		let coord = coordinate(&relative)?;
		match self.distances.get(coord) {
			Some(&UNVISITED) | None => None,
			Some(&d) => Some(d),
		}
	}

	/// Find a shortest solution by always taking a turn which gets one step closer.
	pub fn solve(&self, start: &Permutation, goal: &Permutation) -> Result<Solution, TableError> {
		if start == goal {
			return Ok(Solution::AlreadySolved);
		}
		let Some(mut dist) = self.distance(start, goal) else {
			return Ok(Solution::NoSolution);
		};

		let mut cube = *start;
		let mut out = Vec::<Turn>::with_capacity(dist as usize);
		while 0 < dist {
			let turn = Turn::iter()
				.find(|turn| self.distance(&cube.applied(*turn), goal) == Some(dist - 1))
				.ok_or(TableError::Inconsistent(dist))?;

			cube = cube.applied(turn);
			out.push(turn);
			dist -= 1;
		}

		Ok(Solution::Turns(out))
	}

	/// v[d] is the number of states at distance d from the solved cube.
	pub fn depth_histogram(&self) -> Vec<usize> {
		let mut out = Vec::<usize>::new();
		for &d in self.distances.iter().filter(|&&d| d != UNVISITED) {
			if out.len() <= d as usize {
				out.resize(d as usize + 1, 0);
			}
			out[d as usize] += 1;
		}
		out
	}
}
