pub mod bidirectional;
pub mod table;

use std::fmt;

use log::info;

use crate::cube::{cubiecube::CubieCube, permutation::Permutation, turn::*, CubeError};

/// How the two searches of the bidirectional BFS take turns.
#[derive(
	PartialEq, Eq, Default, Debug, Copy, Clone, strum::Display, strum::EnumString, strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum SearchStrategy {
	/// Expand the whole depth layer of the smaller frontier at a time
	#[default]
	Layered,
	/// Both searches share one FIFO queue
	Interleaved,
}

/// The outcome of a search.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Solution {
	/// Start and goal are the same state
	AlreadySolved,
	/// The goal can't be reached from the start
	NoSolution,
	/// The turns leading from the start to the goal, in order
	Turns(Vec<Turn>),
}

impl Solution {
	/// The solving turns. Empty if already solved.
	pub fn turns(&self) -> Option<&[Turn]> {
		match self {
			Solution::AlreadySolved => Some(&[]),
			Solution::NoSolution => None,
			Solution::Turns(turns) => Some(turns),
		}
	}

	/// The number of turns of the solution
	pub fn len(&self) -> Option<usize> {
		self.turns().map(<[Turn]>::len)
	}
}

impl fmt::Display for Solution {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Solution::AlreadySolved => write!(f, "Already Solved!"),
			Solution::NoSolution => write!(f, "No Solution!"),
			Solution::Turns(turns) => write!(f, "{}", format_turns(turns)),
		}
	}
}

/// Check that the turns can lead from `start` to `goal`, without searching.
///
/// The cube `goal⁻¹ · start` is what is left to solve when the goal is
/// relabeled to be the solved cube.
pub fn check_reachable(start: &Permutation, goal: &Permutation) -> Result<(), CubeError> {
	let relative = goal.inverse() * *start;
	CubieCube::try_from(&relative)?.check_solvability()
}

/// Finds shortest turn sequences between two cube states.
#[derive(Clone, Copy, Debug)]
pub struct Solver {
	strategy: SearchStrategy,
	precheck: bool,
}

impl Default for Solver {
	fn default() -> Self {
		Self::new()
	}
}

impl Solver {
	pub const fn new() -> Self {
		Self {
			strategy: SearchStrategy::Layered,
			precheck: true,
		}
	}

	pub const fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
		self.strategy = strategy;
		self
	}

	/// Whether to reject unreachable goals before searching (default).
	/// Without the check, they are only detected after both searches
	/// exhausted their orbits.
	pub const fn with_precheck(mut self, precheck: bool) -> Self {
		self.precheck = precheck;
		self
	}

	pub const fn strategy(&self) -> SearchStrategy {
		self.strategy
	}

	/// Find a shortest sequence of turns leading from `start` to `goal`.
	pub fn solve(&self, start: &Permutation, goal: &Permutation) -> Solution {
		if start == goal {
			return Solution::AlreadySolved;
		}

		if self.precheck {
			if let Err(e) = check_reachable(start, goal) {
				info!("The goal is out of reach: {}", e);
				return Solution::NoSolution;
			}
		}

		let turns = match self.strategy {
			SearchStrategy::Layered => bidirectional::layered(start, goal),
			SearchStrategy::Interleaved => bidirectional::interleaved(start, goal),
		};

		match turns {
			Some(turns) => {
				info!("Found a solution with {} turns ({} search)", turns.len(), self.strategy);
				Solution::Turns(turns)
			}
			None => Solution::NoSolution,
		}
	}
}

/// Solve with the default solver.
pub fn solve(start: &Permutation, goal: &Permutation) -> Solution {
	Solver::new().solve(start, goal)
}
