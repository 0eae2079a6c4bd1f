use std::collections::HashMap;

use log::info;
use pocketcube::prelude::*;
use rand::{rngs::StdRng, SeedableRng};
use strum::IntoEnumIterator;

#[rustfmt::skip]
const SCRAMBLE_14: [u8; NUM_FACELETS] = [6, 7, 8, 20, 18, 19, 3, 4, 5, 16, 17, 15, 0, 1, 2, 14, 12, 13, 10, 11, 9, 21, 22, 23];
#[rustfmt::skip]
const TWISTED: [u8; NUM_FACELETS] = [7, 8, 6, 20, 18, 19, 3, 4, 5, 16, 17, 15, 0, 1, 2, 14, 12, 13, 10, 11, 9, 21, 22, 23];

fn solvers() -> impl Iterator<Item = Solver> {
	SearchStrategy::iter().map(|s| Solver::new().with_strategy(s))
}

fn assert_reaches(start: &Permutation, goal: &Permutation, solution: &Solution) {
	let turns = solution.turns().expect("expected a solution");
	let mut cube = *start;
	cube.apply_turns(turns.iter().copied());
	assert_eq!(cube, *goal, "{} doesn't solve {}", solution, start);
}

/// Breadth first search from the solved cube up to `max_depth` turns.
/// Brute force, no tricks: every state gets its exact distance.
fn distances_up_to(max_depth: usize) -> HashMap<Permutation, usize> {
	let mut dist = HashMap::new();
	dist.insert(Permutation::identity(), 0);
	let mut frontier = vec![Permutation::identity()];

	for depth in 1..=max_depth {
		let mut next = Vec::new();
		for cube in frontier {
			for turn in Turn::iter() {
				let n = cube.applied(turn);
				if !dist.contains_key(&n) {
					dist.insert(n, depth);
					next.push(n);
				}
			}
		}
		frontier = next;
	}

	dist
}

#[test_log::test]
fn scramble_needs_14_turns() {
	let start = Permutation::try_from(SCRAMBLE_14).unwrap();
	let goal = Permutation::identity();

	for solver in solvers() {
		let solution = solver.solve(&start, &goal);
		info!("{}: {}", solver.strategy(), solution);
		assert_eq!(solution.len(), Some(14));
		assert_reaches(&start, &goal, &solution);
	}
}

#[test_log::test]
fn twisted_corner_has_no_solution() {
	let start = Permutation::try_from(TWISTED).unwrap();
	let goal = Permutation::identity();

	assert_eq!(check_reachable(&start, &goal), Err(CubeError::CornerOrientation(1)));
	for solver in solvers() {
		assert_eq!(solver.solve(&start, &goal), Solution::NoSolution);
		assert_eq!(solver.solve(&start, &goal).to_string(), "No Solution!");
	}
}

#[test_log::test]
#[ignore = "exhausts the orbits of both searches"]
fn twisted_corner_without_precheck() {
	let start = Permutation::try_from(TWISTED).unwrap();
	let goal = Permutation::identity();

	for solver in solvers() {
		let solver = solver.with_precheck(false);
		assert_eq!(solver.solve(&start, &goal), Solution::NoSolution);
	}
}

#[test_log::test]
fn solved_cube() {
	let goal = Permutation::identity();
	for solver in solvers() {
		let solution = solver.solve(&goal, &goal);
		assert_eq!(solution, Solution::AlreadySolved);
		assert_eq!(solution.to_string(), "Already Solved!");
	}
}

#[test_log::test]
fn single_turn() {
	let goal = Permutation::identity();
	for turn in Turn::iter() {
		let start = goal.applied(turn);
		for solver in solvers() {
			let solution = solver.solve(&start, &goal);
			assert_eq!(solution, Solution::Turns(vec![turn.inverse()]));
			assert_eq!(start.apply(solution.turns().unwrap()[0].permutation()), goal);
		}
	}
}

#[test_log::test]
/// Every state within four turns, and samples further out, get solutions of
/// exactly their brute force distance. This holds for the shared queue too.
fn solutions_are_optimal() {
	let dist = distances_up_to(6);
	assert_eq!(dist.len(), 1 + 6 + 27 + 120 + 534 + 2256 + 8969);

	let goal = Permutation::identity();
	let mut checked = 0;
	for (cube, &d) in dist.iter() {
		// All states of depth <= 4, about an eighth of the rest
		if 4 < d && cube.as_array()[0] % 10 != 0 {
			continue;
		}
		for solver in solvers() {
			let solution = solver.solve(cube, &goal);
			assert_eq!(solution.len(), Some(d), "{} for {}", solution, cube);
			if d != 0 {
				assert_reaches(cube, &goal, &solution);
			}
		}
		checked += 1;
	}
	info!("Checked {} states", checked);
}

#[test_log::test]
/// The distance between two states only depends on goal⁻¹ · start
fn optimal_towards_any_goal() {
	let mut states: Vec<(Permutation, usize)> = distances_up_to(5).into_iter().collect();
	states.sort();
	let mut rng = StdRng::seed_from_u64(5);

	for (relative, d) in states.into_iter().step_by(10) {
		let goal = Permutation::from(CubieCube::random_with(&mut rng));
		let start = goal * relative;

		for solver in solvers() {
			let solution = solver.solve(&start, &goal);
			assert_eq!(solution.len(), Some(d));
			if d != 0 {
				assert_reaches(&start, &goal, &solution);
			}
		}
	}
}

#[test_log::test]
/// Every state the turns reach stays a cube state
fn closure() {
	for cube in distances_up_to(5).keys() {
		assert!(Permutation::try_from(*cube.as_array()).is_ok());
		let cubie = CubieCube::try_from(cube).unwrap();
		assert_eq!(cubie.check_solvability(), Ok(()));
		for turn in Turn::iter() {
			assert_eq!(cube.applied(turn).applied(turn.inverse()), *cube);
		}
	}
}

#[test_log::test]
fn random_states() {
	let goal = Permutation::identity();
	let mut rng = StdRng::seed_from_u64(3);
	for _ in 0..3 {
		let start = Permutation::from(CubieCube::random_with(&mut rng));
		let solution = solve(&start, &goal);
		assert!(solution.len().is_some_and(|l| l <= 14));
		if start != goal {
			assert_reaches(&start, &goal, &solution);
		}
	}
}
