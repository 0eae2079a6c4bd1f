pub mod cubiecube;
pub mod permutation;
pub mod turn;

use strum::EnumCount;
use turn::*;

/// The number of corner cubies of a pocket cube
pub const NUM_CORNERS: usize = Corner::COUNT;

/// The number of facelets on every cubie
pub const NUM_TWISTS: usize = 3;

/// The number of facelet slots of the whole cube
pub const NUM_FACELETS: usize = Facelet::COUNT;

/// The corner which is never moved by any of the turns F, L and U.
pub const FIXED_CORNER: Corner = Corner::BDR;

// ===== Corner Piece =====

/// A corner cubie, named by its faces: first F or B, then clockwise
/// looking in from the outside.
/// Note that the order defines the facelet indices!
#[derive(
	Clone, Copy, Default, PartialEq, Eq, Hash, Debug, strum::EnumIter, strum::EnumString, strum::EnumCount, strum::Display, strum::FromRepr,
)]
#[allow(clippy::upper_case_acronyms)]
#[repr(u8)]
#[rustfmt::skip]
pub enum Corner {
	#[default]
	FLU, FUR, FDL, FRD, // front layer
	BUL, BRU, BLD, BDR, // back layer
}

const CORNERS: [Corner; NUM_CORNERS] = [
	Corner::FLU,
	Corner::FUR,
	Corner::FDL,
	Corner::FRD,
	Corner::BUL,
	Corner::BRU,
	Corner::BLD,
	Corner::BDR,
];

impl Corner {
	/// The three facelets of this cubie in clockwise order.
	pub fn facelets(self) -> [Facelet; NUM_TWISTS] {
		let base = self as usize * NUM_TWISTS;
		[FACELETS[base], FACELETS[base + 1], FACELETS[base + 2]]
	}
}

// ===== Facelets =====

/// A single sticker of the cube.
///
/// The name is the name of its cubie, cyclically rotated so that the face the
/// sticker lies on comes first. So the cubie FLU carries the facelets FLU
/// (front), LUF (left) and UFL (up). The discriminant is the canonical index
/// `3 * cubie + twist`.
#[derive(
	Clone, Copy, PartialEq, Eq, Hash, Debug, strum::EnumIter, strum::EnumString, strum::EnumCount, strum::Display, strum::FromRepr,
)]
#[allow(clippy::upper_case_acronyms)]
#[repr(u8)]
#[rustfmt::skip]
pub enum Facelet {
	FLU, LUF, UFL,
	FUR, URF, RFU,
	FDL, DLF, LFD,
	FRD, RDF, DFR,
	BUL, ULB, LBU,
	BRU, RUB, UBR,
	BLD, LDB, DBL,
	BDR, DRB, RBD,
}

#[rustfmt::skip]
const FACELETS: [Facelet; NUM_FACELETS] = [
	Facelet::FLU, Facelet::LUF, Facelet::UFL,
	Facelet::FUR, Facelet::URF, Facelet::RFU,
	Facelet::FDL, Facelet::DLF, Facelet::LFD,
	Facelet::FRD, Facelet::RDF, Facelet::DFR,
	Facelet::BUL, Facelet::ULB, Facelet::LBU,
	Facelet::BRU, Facelet::RUB, Facelet::UBR,
	Facelet::BLD, Facelet::LDB, Facelet::DBL,
	Facelet::BDR, Facelet::DRB, Facelet::RBD,
];

impl Facelet {
	/// The cubie carrying this facelet
	pub fn corner(self) -> Corner {
		CORNERS[self as usize / NUM_TWISTS]
	}

	/// Position of the facelet inside its cubie (0 is the F or B sticker)
	pub fn twist(self) -> usize {
		self as usize % NUM_TWISTS
	}
}

/// All the reasons a permutation is not part of the orbit the
/// generators F, L and U can reach.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum CubeError {
	#[error("The corner position {0} does not hold the stickers of a single cubie")]
	Cubies(Corner),
	#[error("The corner {} has to stay solved", FIXED_CORNER)]
	FixedCorner,
	#[error("The orientation-parity of the corners are off by +{0}")]
	CornerOrientation(usize),
}

/// The RubiksCube trait.
pub trait RubiksCube {
	fn apply_turn(&mut self, turn: Turn);

	/// Apply the given sequence of turns.
	fn apply_turns<I>(&mut self, turns: I)
	where
		I: IntoIterator<Item = Turn>,
		Self: Sized,
	{
		for turn in turns {
			self.apply_turn(turn);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::str::FromStr;
	use strum::IntoEnumIterator;

	#[test]
	/// The naming table must match the canonical indices
	fn facelet_indices() {
		for (i, facelet) in Facelet::iter().enumerate() {
			assert_eq!(facelet as usize, i);
			assert_eq!(FACELETS[i], facelet);
			assert_eq!(Facelet::from_repr(i as u8), Some(facelet));
		}
		for (i, corner) in Corner::iter().enumerate() {
			assert_eq!(CORNERS[i], corner);
		}
	}

	#[test]
	/// Each facelet name is a rotation of its cubie name
	fn facelet_names() -> Result<(), strum::ParseError> {
		for corner in Corner::iter() {
			let name = corner.to_string();
			for (twist, facelet) in corner.facelets().into_iter().enumerate() {
				let rotated: String = name.chars().cycle().skip(twist).take(NUM_TWISTS).collect();
				assert_eq!(facelet.corner(), corner);
				assert_eq!(facelet.twist(), twist);
				assert_eq!(Facelet::from_str(&rotated)?, facelet);
			}
		}
		Ok(())
	}
}
