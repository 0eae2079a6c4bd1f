use rand::Rng;
use strum::EnumCount;

use crate::cube::permutation::{Permutation, TRANSFORM};

/// Total number of turns (the generators of the group)
pub const NUM_TURNS: usize = Turn::COUNT;

/// A quarter turn. The `i` suffix marks the counterclockwise (inverted) turn.
///
/// The discriminant indexes the generator table, so don't change the order.
#[derive(
	Clone, Copy, PartialEq, Eq, Hash, Debug, strum::EnumIter, strum::EnumCount, strum::EnumString, strum::Display, strum::FromRepr,
)]
#[repr(u8)]
#[rustfmt::skip]
pub enum Turn {
	F, Fi,
	L, Li,
	U, Ui,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum TurnError {
	#[error("Unknown turn \"{0}\", expected one of F Fi L Li U Ui")]
	Unknown(String),
}

impl Turn {
	/// The turn which undoes this one.
	pub const fn inverse(self) -> Self {
		match self {
			Turn::F => Turn::Fi,
			Turn::Fi => Turn::F,
			Turn::L => Turn::Li,
			Turn::Li => Turn::L,
			Turn::U => Turn::Ui,
			Turn::Ui => Turn::U,
		}
	}

	/// Turn itself to the turn which negates itself.
	pub fn invert(&mut self) {
		*self = self.inverse();
	}

	/// The one-character label: the side's letter, lowercase when inverted.
	pub const fn label(self) -> char {
		match self {
			Turn::F => 'F',
			Turn::Fi => 'f',
			Turn::L => 'L',
			Turn::Li => 'l',
			Turn::U => 'U',
			Turn::Ui => 'u',
		}
	}

	/// The permutation of the facelet slots this turn performs.
	pub fn permutation(self) -> &'static Permutation {
		&TRANSFORM[self as usize]
	}
}

/// Parse a whitespace separated sequence like "F Li U".
pub fn parse_turns<T>(string: T) -> Result<Vec<Turn>, TurnError>
where
	T: AsRef<str>,
{
	string
		.as_ref()
		.split_whitespace()
		.map(|s| s.parse::<Turn>().map_err(|_| TurnError::Unknown(s.to_owned())))
		.collect()
}

/// Render turns the way the solver prints them.
pub fn format_turns(turns: &[Turn]) -> String {
	turns.iter().map(Turn::to_string).collect::<Vec<_>>().join(" ")
}

/// Generate a random sequence of `len` turns.
/// A turn is never directly followed by its inverse.
pub fn random_sequence(len: usize) -> Vec<Turn> {
	random_sequence_with(&mut rand::thread_rng(), len)
}

/// Like [`random_sequence`], drawing from the given generator.
pub fn random_sequence_with<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<Turn> {
	let mut out = Vec::<Turn>::with_capacity(len);

	while out.len() < len {
		let turn = match Turn::from_repr(rng.gen_range(0..NUM_TURNS) as u8) {
			Some(turn) => turn,
			None => continue,
		};
		if out.last().is_some_and(|last| last.inverse() == turn) {
			continue;
		}
		out.push(turn);
	}

	out
}
