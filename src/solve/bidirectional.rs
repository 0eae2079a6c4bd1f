//! Bidirectional breadth first search between two cube states.
//!
//! One search grows from the start, the other one from the goal. Every state
//! remembers the turn which discovered it, so when a state shows up in both
//! searches the two parent chains are walked back and joined to a solution.

use std::collections::{hash_map::Entry, VecDeque};

use fxhash::FxHashMap;
use log::debug;
use strum::IntoEnumIterator;

use crate::cube::{permutation::Permutation, turn::*};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Direction {
	Forward,
	Backward,
}

impl Direction {
	fn opposite(self) -> Self {
		match self {
			Direction::Forward => Direction::Backward,
			Direction::Backward => Direction::Forward,
		}
	}
}

/// Maps every visited state to the turn which discovered it.
/// The root of a search maps to None.
type ParentMap = FxHashMap<Permutation, Option<Turn>>;

enum Discovery {
	/// This direction has seen the state before
	Known,
	/// Newly recorded, the other direction hasn't seen it yet
	New,
	/// Newly recorded and already known to the other direction
	Meeting,
}

struct Search {
	forward: ParentMap,
	backward: ParentMap,
}

impl Search {
	fn new(start: &Permutation, goal: &Permutation) -> Self {
		let mut forward = ParentMap::default();
		forward.insert(*start, None);
		let mut backward = ParentMap::default();
		backward.insert(*goal, None);

		Self { forward, backward }
	}

	fn parents(&self, dir: Direction) -> &ParentMap {
		match dir {
			Direction::Forward => &self.forward,
			Direction::Backward => &self.backward,
		}
	}

	fn parents_mut(&mut self, dir: Direction) -> &mut ParentMap {
		match dir {
			Direction::Forward => &mut self.forward,
			Direction::Backward => &mut self.backward,
		}
	}

	/// Record that `state` was reached in direction `dir` by applying `turn`.
	/// The first discoverer of a state keeps it.
	fn discover(&mut self, dir: Direction, state: Permutation, turn: Turn) -> Discovery {
		match self.parents_mut(dir).entry(state) {
			Entry::Occupied(_) => return Discovery::Known,
			Entry::Vacant(v) => {
				v.insert(Some(turn));
			}
		}

		if self.parents(dir.opposite()).contains_key(&state) {
			Discovery::Meeting
		} else {
			Discovery::New
		}
	}

	/// Expand `state` with every turn. Returns the meeting state, if any.
	fn expand(&mut self, dir: Direction, state: &Permutation, out: &mut Vec<Permutation>) -> Option<Permutation> {
		for turn in Turn::iter() {
			let next = state.applied(turn);
			match self.discover(dir, next, turn) {
				Discovery::Known => continue,
				Discovery::New => out.push(next),
				Discovery::Meeting => return Some(next),
			}
		}
		None
	}

	/// Walk both parent chains from `meeting` back to their roots.
	fn reconstruct(&self, meeting: &Permutation) -> Vec<Turn> {
		let mut out = Vec::<Turn>::new();

		// start -> meeting, collected backwards
		let mut cube = *meeting;
		while let Some(turn) = self.forward.get(&cube).copied().flatten() {
			out.push(turn);
			cube = cube.applied(turn.inverse());
		}
		out.reverse();

		// meeting -> goal. The backward search turned away from the goal,
		// so the way back is the inverted turn.
		let mut cube = *meeting;
		while let Some(mut turn) = self.backward.get(&cube).copied().flatten() {
			turn.invert();
			out.push(turn);
			cube = cube.applied(turn);
		}

		debug!("Joined path: {}", out.iter().map(|t| t.label()).collect::<String>());
		out
	}

	fn visited(&self) -> usize {
		self.forward.len() + self.backward.len()
	}
}

/// Both searches share a single FIFO queue.
///
/// The queue holds whole depth layers in turn (forward layer d, then
/// backward layer d, then forward layer d+1, ...), so the first meeting
/// state lies on a shortest path.
pub(crate) fn interleaved(start: &Permutation, goal: &Permutation) -> Option<Vec<Turn>> {
	let mut search = Search::new(start, goal);
	let mut queue = VecDeque::<(Permutation, Direction)>::new();
	queue.push_back((*start, Direction::Forward));
	queue.push_back((*goal, Direction::Backward));

	let mut expanded: usize = 0;
	while let Some((state, dir)) = queue.pop_front() {
		expanded += 1;

		let mut next = Vec::with_capacity(NUM_TURNS);
		if let Some(meeting) = search.expand(dir, &state, &mut next) {
			debug!("Frontiers met after expanding {} states ({} visited)", expanded, search.visited());
			return Some(search.reconstruct(&meeting));
		}
		queue.extend(next.into_iter().map(|s| (s, dir)));
	}

	debug!("Ran out of states after expanding {} states", expanded);
	None
}

/// Each search keeps its own frontier. The smaller frontier expands its
/// whole depth layer before the searches are compared again.
pub(crate) fn layered(start: &Permutation, goal: &Permutation) -> Option<Vec<Turn>> {
	let mut search = Search::new(start, goal);
	let mut forward = vec![*start];
	let mut backward = vec![*goal];
	let mut depth = 0usize;

	while !forward.is_empty() && !backward.is_empty() {
		let dir = if forward.len() <= backward.len() {
			Direction::Forward
		} else {
			Direction::Backward
		};
		let frontier = match dir {
			Direction::Forward => &mut forward,
			Direction::Backward => &mut backward,
		};

		let mut layer = Vec::with_capacity(frontier.len() * NUM_TURNS);
		for state in frontier.iter() {
			if let Some(meeting) = search.expand(dir, state, &mut layer) {
				debug!("Frontiers met after {} layers ({} visited)", depth + 1, search.visited());
				return Some(search.reconstruct(&meeting));
			}
		}

		depth += 1;
		debug!("Layer {} ({:?}): {} new states", depth, dir, layer.len());
		*frontier = layer;
	}

	debug!("Ran out of states ({} visited)", search.visited());
	None
}
