use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{IpsumError, Result};

/// Percentage band used to vary a requested count.
///
/// The default band is `[60, 140]`, i.e. −40% / +40% around the request.
///
/// # Invariants
/// - `lower <= upper`
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(try_from = "(u32, u32)", into = "(u32, u32)")]
pub struct Variance {
	lower: u32,
	upper: u32,
}

impl Default for Variance {
	fn default() -> Self {
		Self { lower: 60, upper: 140 }
	}
}

impl TryFrom<(u32, u32)> for Variance {
	type Error = IpsumError;

	fn try_from((lower, upper): (u32, u32)) -> Result<Self> {
		Self::new(lower, upper)
	}
}

impl From<Variance> for (u32, u32) {
	fn from(variance: Variance) -> Self {
		(variance.lower, variance.upper)
	}
}

impl Variance {
	/// Creates a band from two percentages.
	///
	/// # Errors
	/// Returns `InvalidRange` if `lower > upper`.
	pub fn new(lower: u32, upper: u32) -> Result<Self> {
		if lower > upper {
			return Err(IpsumError::InvalidRange { min: lower as i64, max: upper as i64 });
		}
		Ok(Self { lower, upper })
	}

	pub fn lower(&self) -> u32 {
		self.lower
	}

	pub fn upper(&self) -> u32 {
		self.upper
	}

	/// Returns a random count near `n`.
	///
	/// # Parameters
	/// - `floor_exact`: the upper side of the band is pinned to 100%.
	/// - `ceil_exact`: the lower side of the band is pinned to 100%.
	///
	/// With both flags `n` is returned unchanged. Otherwise a percentage `p`
	/// is drawn in the band and `floor(n * p / 100) + 1` is returned, which is
	/// never zero.
	pub fn randomize<R: Rng + ?Sized>(&self, rng: &mut R, n: usize, floor_exact: bool, ceil_exact: bool) -> usize {
		if floor_exact && ceil_exact {
			return n;
		}
		let lower = if ceil_exact { 100 } else { self.lower };
		let upper = if floor_exact { 100 } else { self.upper };
		// A pinned side can cross the band (e.g. lower 120 with floor_exact)
		let (lower, upper) = (lower.min(upper), lower.max(upper));
		let percent = rng.random_range(lower..=upper) as usize;
		n.saturating_mul(percent) / 100 + 1
	}
}

/// Returns a random count near `n` using the default −40% / +40% band.
///
/// See `Variance::randomize` for the meaning of the flags.
pub fn randomize_nb_elements<R: Rng + ?Sized>(rng: &mut R, n: usize, floor_exact: bool, ceil_exact: bool) -> usize {
	Variance::default().randomize(rng, n, floor_exact, ceil_exact)
}
