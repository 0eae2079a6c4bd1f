use std::{fmt, ops::Index, ops::Mul, str::FromStr};

use bit_set::BitSet;
use const_for::const_for;

use crate::cube::{turn::*, Facelet, RubiksCube, NUM_FACELETS};

type PermData = [u8; NUM_FACELETS];

/// A configuration of the pocket cube as a permutation of the 24 facelet slots.
///
/// Slot `i` holds the facelet `data[i]`, so the identity is the solved cube.
/// Applying a transformation `t` to a state `s` gives the state `n` with
/// `n[i] = s[t[i]]`, i.e. `t[i]` names the slot whose sticker moves to `i`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Permutation {
	data: PermData,
}

impl Default for Permutation {
	/// Creates a *solved* cube!
	fn default() -> Self {
		Self::identity()
	}
}

// ==== TRANSFORMATION MATRICES =====

/*
 * The generators, written with the facelet names: slot i of the
 * transformation names the facelet whose sticker ends up in slot i.
 * Only F, L and U are needed, the BDR corner never moves.
 */

use crate::cube::Facelet::*;

#[rustfmt::skip]
const T_FRONT: Permutation = Permutation::from_facelets([
	FDL, DLF, LFD, FLU, LUF, UFL, FRD, RDF, DFR, FUR, URF, RFU,
	BUL, ULB, LBU, BRU, RUB, UBR, BLD, LDB, DBL, BDR, DRB, RBD,
]);

#[rustfmt::skip]
const T_LEFT: Permutation = Permutation::from_facelets([
	ULB, LBU, BUL, FUR, URF, RFU, UFL, FLU, LUF, FRD, RDF, DFR,
	DBL, BLD, LDB, BRU, RUB, UBR, DLF, LFD, FDL, BDR, DRB, RBD,
]);

#[rustfmt::skip]
const T_UP: Permutation = Permutation::from_facelets([
	RFU, FUR, URF, RUB, UBR, BRU, FDL, DLF, LFD, FRD, RDF, DFR,
	LUF, UFL, FLU, LBU, BUL, ULB, BLD, LDB, DBL, BDR, DRB, RBD,
]);

/// The generator table, indexed by `Turn as usize`.
pub static TRANSFORM: [Permutation; NUM_TURNS] = [
	T_FRONT,
	T_FRONT.inverse(),
	T_LEFT,
	T_LEFT.inverse(),
	T_UP,
	T_UP.inverse(),
];

// =========

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum PermutationError {
	#[error("A permutation needs exactly {} entries, got {0}", NUM_FACELETS)]
	Length(usize),
	#[error("The entry {0} is not a facelet index")]
	OutOfRange(usize),
	#[error("The entry {0} appears more than once")]
	Duplicate(usize),
	#[error("Could not parse \"{0}\" as a facelet index")]
	Parse(String),
}

impl Permutation {
	pub const fn identity() -> Self {
		let mut data = [0; NUM_FACELETS];
		const_for!(i in 0..NUM_FACELETS => {
			data[i] = i as u8;
		});
		Self { data }
	}

	const fn from_facelets(facelets: [Facelet; NUM_FACELETS]) -> Self {
		let mut data = [0; NUM_FACELETS];
		const_for!(i in 0..NUM_FACELETS => {
			data[i] = facelets[i] as u8;
		});
		Self { data }
	}

	/// The caller guarantees that `data` is a bijection.
	pub(crate) const fn from_data(data: PermData) -> Self {
		Self { data }
	}

	/// Build the state reached from the solved cube by the given turns.
	pub fn from_turns(turns: &[Turn]) -> Self {
		let mut out = Self::identity();
		out.apply_turns(turns.iter().copied());
		out
	}

	/// Chain 2 transformations to one: first `self` is applied, then `perm`.
	pub const fn apply(&self, perm: &Permutation) -> Permutation {
		let mut data = [0; NUM_FACELETS];
		const_for!(i in 0..NUM_FACELETS => {
			data[i] = self.data[perm.data[i] as usize];
		});
		Self { data }
	}

	/// Return the transformation which undoes this one.
	pub const fn inverse(&self) -> Permutation {
		let mut data = [0; NUM_FACELETS];
		const_for!(i in 0..NUM_FACELETS => {
			data[self.data[i] as usize] = i as u8;
		});
		Self { data }
	}

	/// The state after applying `turn`, leaving `self` untouched.
	pub fn applied(&self, turn: Turn) -> Permutation {
		self.apply(turn.permutation())
	}

	pub fn is_identity(&self) -> bool {
		*self == Self::identity()
	}

	pub fn as_array(&self) -> &PermData {
		&self.data
	}

	fn from_entries(entries: &[usize]) -> Result<Self, PermutationError> {
		if entries.len() != NUM_FACELETS {
			return Err(PermutationError::Length(entries.len()));
		}

		let mut seen = BitSet::with_capacity(NUM_FACELETS);
		let mut data = [0; NUM_FACELETS];
		for (slot, &entry) in entries.iter().enumerate() {
			if NUM_FACELETS <= entry {
				return Err(PermutationError::OutOfRange(entry));
			}
			if !seen.insert(entry) {
				return Err(PermutationError::Duplicate(entry));
			}
			data[slot] = entry as u8;
		}

		Ok(Self { data })
	}
}

impl RubiksCube for Permutation {
	fn apply_turn(&mut self, turn: Turn) {
		*self = self.applied(turn);
	}
}

impl Index<usize> for Permutation {
	type Output = u8;

	fn index(&self, slot: usize) -> &u8 {
		&self.data[slot]
	}
}

impl Mul for Permutation {
	type Output = Self;

	fn mul(self, rhs: Self) -> Self {
		self.apply(&rhs)
	}
}

impl TryFrom<PermData> for Permutation {
	type Error = PermutationError;

	fn try_from(value: PermData) -> Result<Self, Self::Error> {
		Self::try_from(&value[..])
	}
}

impl TryFrom<&[u8]> for Permutation {
	type Error = PermutationError;

	fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
		let entries: Vec<usize> = value.iter().map(|&e| e as usize).collect();
		Self::from_entries(&entries)
	}
}

impl FromStr for Permutation {
	type Err = PermutationError;

	/// Parses 24 indices separated by whitespace or commas,
	/// optionally wrapped in braces: `{6, 7, 8, ...}`.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let inner = s.trim().trim_start_matches(['{', '[']).trim_end_matches(['}', ']']);

		let entries = inner
			.split(|c: char| c == ',' || c.is_whitespace())
			.filter(|tok| !tok.is_empty())
			.map(|tok| tok.parse::<usize>().map_err(|_| PermutationError::Parse(tok.to_owned())))
			.collect::<Result<Vec<_>, _>>()?;

		Self::from_entries(&entries)
	}
}

impl fmt::Display for Permutation {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		for (i, entry) in self.data.iter().enumerate() {
			if i != 0 {
				write!(f, " ")?;
			}
			write!(f, "{}", entry)?;
		}
		Ok(())
	}
}

// ===== Tests =====
