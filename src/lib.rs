//! Optimal solver for the 2x2x2 pocket cube.
//!
//! A cube state is a permutation of the 24 facelet slots. The turns F, L and U
//! (and their inverses Fi, Li, Ui) generate every reachable state, since on a
//! pocket cube the other three faces are only a reorientation away.
//! A bidirectional breadth first search finds a shortest sequence of turns.
//!
//! ```
//! use pocketcube::prelude::*;
//!
//! let turns = parse_turns("F L Ui").unwrap();
//! let cube = Permutation::from_turns(&turns);
//!
//! let solution = solve(&cube, &Permutation::identity());
//! assert_eq!(solution.to_string(), "U Li Fi");
//! ```

pub mod cube;
mod math;
pub mod solve;

pub mod prelude {
	pub use crate::cube::{cubiecube::*, permutation::*, turn::*, *};
	pub use crate::solve::{check_reachable, solve, table::OrbitTable, SearchStrategy, Solution, Solver};
}
