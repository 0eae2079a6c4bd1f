use rand::{seq::SliceRandom, Rng};
use strum::IntoEnumIterator;

use crate::{
	cube::{permutation::Permutation, *},
	math::*,
};

pub type Ori = u8;

type CornerList = [(Corner, Ori); NUM_CORNERS];

/// The cube seen cubie by cubie: every corner position holds a cubie
/// together with its twist.
///
/// A twist of `t` means the sticker in the first slot of the position
/// (its F or B face) is the `t`-th facelet of the cubie.
/// Only states where every position holds a whole cubie can be
/// represented, which is a superset of the states the turns can reach.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct CubieCube {
	corners: CornerList,
}

#[rustfmt::skip]
const TC_BASE: CornerList = [
	(Corner::FLU, 0), (Corner::FUR, 0), (Corner::FDL, 0), (Corner::FRD, 0),
	(Corner::BUL, 0), (Corner::BRU, 0), (Corner::BLD, 0), (Corner::BDR, 0),
];

/// Number of corner permutations with the fixed corner in place (7!)
pub const CORNER_PERM: usize = factorial(NUM_CORNERS - 1);
/// Number of twist combinations: six free corners, the seventh follows (3^6)
pub const CORNER_ORI: usize = 729;
/// Number of states the turns F, L and U can reach from the solved cube
pub const ORBIT_SIZE: usize = CORNER_PERM * CORNER_ORI;

impl Default for CubieCube {
	fn default() -> Self {
		Self::new()
	}
}

impl CubieCube {
	pub const fn new() -> Self {
		CubieCube { corners: TC_BASE }
	}

	/// Get the corner and twist at position 'c'
	pub const fn corner(&self, c: Corner) -> (Corner, Ori) {
		self.corners[c as usize]
	}

	/// Check that the turns F, L and U can solve this cube.
	pub fn check_solvability(&self) -> Result<(), CubeError> {
		if self.corner(FIXED_CORNER) != (FIXED_CORNER, 0) {
			return Err(CubeError::FixedCorner);
		}

		// Every quarter turn twists its corners by a multiple of 3 in total
		let ori = self.corners.iter().map(|(_, o)| *o as usize).sum::<usize>();
		match ori % NUM_TWISTS {
			0 => Ok(()),
			off => Err(CubeError::CornerOrientation(off)),
		}
	}

	// ===== Coordinates functions =====

	/// Return the cube's corner permutation as a coordinate in `0..CORNER_PERM`.
	/// Only meaningful for solvable cubes.
	pub fn corner_perm_coord(&self) -> usize {
		let perm: Vec<_> = self
			.corners
			.iter()
			.take(NUM_CORNERS - 1)
			.map(|(c, _)| *c as usize)
			.collect();
		map_permutation(&perm)
	}

	/// Return the cube's twist coordinate in `0..CORNER_ORI`.
	/// The last two positions are left out, they follow from the others.
	pub fn twist_coord(&self) -> usize {
		self.corners
			.iter()
			.take(NUM_CORNERS - 2)
			.rev()
			.fold(0, |x, (_, o)| x * NUM_TWISTS + *o as usize)
	}

	/// Generate a uniformly random cube out of the reachable orbit.
	pub fn random() -> Self {
		Self::random_with(&mut rand::thread_rng())
	}

	pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
		let mut cubies: Vec<Corner> = Corner::iter().filter(|c| *c != FIXED_CORNER).collect();
		cubies.shuffle(rng);

		let mut cube = Self::new();
		let mut parity = 0;
		for (pos, cubie) in cubies.into_iter().enumerate() {
			let ori = if pos < NUM_CORNERS - 2 {
				rng.gen_range(0..NUM_TWISTS)
			} else {
				(NUM_TWISTS - parity % NUM_TWISTS) % NUM_TWISTS
			};
			parity += ori;
			cube.corners[pos] = (cubie, ori as Ori);
		}

		cube
	}
}

impl TryFrom<&Permutation> for CubieCube {
	type Error = CubeError;

	fn try_from(value: &Permutation) -> Result<Self, Self::Error> {
		let mut out = CubieCube::new();

		for pos in Corner::iter() {
			let base = pos as usize * NUM_TWISTS;
			let first = Facelet::from_repr(value[base]).ok_or(CubeError::Cubies(pos))?;
			let (cubie, ori) = (first.corner(), first.twist());
			let stickers = cubie.facelets();

			// The other two stickers must follow in clockwise order
			for j in 1..NUM_TWISTS {
				if value[base + j] != stickers[(ori + j) % NUM_TWISTS] as u8 {
					return Err(CubeError::Cubies(pos));
				}
			}

			out.corners[pos as usize] = (cubie, ori as Ori);
		}

		Ok(out)
	}
}

impl TryFrom<Permutation> for CubieCube {
	type Error = CubeError;

	fn try_from(value: Permutation) -> Result<Self, Self::Error> {
		Self::try_from(&value)
	}
}

impl From<CubieCube> for Permutation {
	fn from(val: CubieCube) -> Self {
		let mut data = [0; NUM_FACELETS];

		for pos in Corner::iter() {
			let (c, o) = val.corner(pos);
			let base = pos as usize * NUM_TWISTS;
			let stickers = c.facelets();

			for j in 0..NUM_TWISTS {
				data[base + j] = stickers[(o as usize + j) % NUM_TWISTS] as u8;
			}
		}

		// The corners of a CubieCube are always distinct
		Permutation::from_data(data)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::cube::turn::*;
	use rand::{rngs::StdRng, SeedableRng};
	use std::collections::HashSet;

	#[rustfmt::skip]
	const SCRAMBLE: [u8; NUM_FACELETS] = [6, 7, 8, 20, 18, 19, 3, 4, 5, 16, 17, 15, 0, 1, 2, 14, 12, 13, 10, 11, 9, 21, 22, 23];
	#[rustfmt::skip]
	const TWISTED: [u8; NUM_FACELETS] = [7, 8, 6, 20, 18, 19, 3, 4, 5, 16, 17, 15, 0, 1, 2, 14, 12, 13, 10, 11, 9, 21, 22, 23];

	#[test]
	fn solved_cube() {
		let cube = CubieCube::try_from(Permutation::identity()).unwrap();
		assert_eq!(cube, CubieCube::new());
		assert_eq!(cube.corner_perm_coord(), 0);
		assert_eq!(cube.twist_coord(), 0);
		assert!(Permutation::from(cube).is_identity());
	}

	#[test]
	fn solvability() {
		let cube = CubieCube::try_from(Permutation::try_from(SCRAMBLE).unwrap()).unwrap();
		assert_eq!(cube.corner(Corner::FLU), (Corner::FDL, 0));
		assert_eq!(cube.corner(Corner::FUR), (Corner::BLD, 2));
		assert_eq!(cube.check_solvability(), Ok(()));

		// A single twisted corner can't be solved
		let cube = CubieCube::try_from(Permutation::try_from(TWISTED).unwrap()).unwrap();
		assert_eq!(cube.corner(Corner::FLU), (Corner::FDL, 1));
		assert_eq!(cube.check_solvability(), Err(CubeError::CornerOrientation(1)));
	}

	#[test]
	fn broken_cubies() {
		// Mirroring a corner swaps two of its stickers
		let mut data = *Permutation::identity().as_array();
		data.swap(1, 2);
		let perm = Permutation::try_from(data).unwrap();
		assert_eq!(CubieCube::try_from(perm), Err(CubeError::Cubies(Corner::FLU)));

		// Stickers of two different cubies at one position
		let mut data = *Permutation::identity().as_array();
		data.swap(5, 6);
		let perm = Permutation::try_from(data).unwrap();
		assert_eq!(CubieCube::try_from(perm), Err(CubeError::Cubies(Corner::FUR)));
	}

	#[test]
	fn fixed_corner() {
		// Rotating the whole cube moves the BDR corner, which F, L and U never do
		let mut data = *Permutation::identity().as_array();
		let base = FIXED_CORNER as usize * NUM_TWISTS;
		data[base..base + NUM_TWISTS].rotate_left(1);
		data[0..NUM_TWISTS].rotate_right(1);
		let cube = CubieCube::try_from(Permutation::try_from(data).unwrap()).unwrap();
		assert_eq!(cube.check_solvability(), Err(CubeError::FixedCorner));
	}

	#[test]
	/// Turning keeps the cube solvable
	fn turns_keep_solvability() {
		let mut rng = StdRng::seed_from_u64(100);
		let mut perm = Permutation::identity();
		for turn in random_sequence_with(&mut rng, 100) {
			perm.apply_turn(turn);
			let cube = CubieCube::try_from(&perm).unwrap();
			assert_eq!(cube.check_solvability(), Ok(()));
			assert_eq!(Permutation::from(cube), perm);
		}
	}

	#[test]
	fn random_cubes() {
		let mut rng = StdRng::seed_from_u64(200);
		let mut coords = HashSet::new();
		for _ in 0..200 {
			let cube = CubieCube::random_with(&mut rng);
			assert_eq!(cube.check_solvability(), Ok(()));

			let perm = Permutation::from(cube);
			assert_eq!(CubieCube::try_from(&perm), Ok(cube));

			assert!(cube.corner_perm_coord() < CORNER_PERM);
			assert!(cube.twist_coord() < CORNER_ORI);
			coords.insert((cube.corner_perm_coord(), cube.twist_coord()));
		}
		// Collisions out of 3.6 million states are possible, but not many
		assert!(coords.len() > 190);
	}

	#[test]
	fn orbit_size() {
		assert_eq!(CORNER_PERM, 5040);
		assert_eq!(CORNER_ORI, NUM_TWISTS.pow(NUM_CORNERS as u32 - 2));
		assert_eq!(ORBIT_SIZE, 3_674_160);
	}
}
