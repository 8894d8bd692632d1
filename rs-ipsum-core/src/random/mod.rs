//! Randomization primitives.
//!
//! All functions draw from an explicit random source (`R: Rng`) instead of a
//! process-wide generator. Pass `rand::rng()` for everyday use, or a seeded
//! `StdRng` for reproducible output.

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::error::{IpsumError, Result};

/// Weighted and uniform element selection over a `Pool`.
pub mod pool;

/// Placeholder substitution (`numerify`, `lexify`, `bothify`).
pub mod template;

/// Natural-looking length variance around a requested count.
pub mod variance;

/// Upper and lower case ASCII letters.
pub const ASCII_LETTERS: &[u8; 52] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Largest digit count `random_number` can represent in an `i64`.
pub const MAX_DIGITS: u32 = 18;

/// Returns a uniform random integer in `[min, max]` (both inclusive).
///
/// # Errors
/// Returns `InvalidRange` if `min > max`.
pub fn random_int<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> Result<i64> {
	if min > max {
		return Err(IpsumError::InvalidRange { min, max });
	}
	Ok(rng.random_range(min..=max))
}

/// Returns a random digit between 0 and 9.
pub fn random_digit<R: Rng + ?Sized>(rng: &mut R) -> u8 {
	rng.random_range(0..=9)
}

/// Returns a random non-zero digit between 1 and 9.
pub fn random_digit_not_null<R: Rng + ?Sized>(rng: &mut R) -> u8 {
	rng.random_range(1..=9)
}

/// Returns a random digit, or `None` half of the time.
pub fn random_digit_or_empty<R: Rng + ?Sized>(rng: &mut R) -> Option<u8> {
	if rng.random_bool(0.5) {
		Some(random_digit(rng))
	} else {
		None
	}
}

/// Returns a random non-zero digit, or `None` half of the time.
pub fn random_digit_not_null_or_empty<R: Rng + ?Sized>(rng: &mut R) -> Option<u8> {
	if rng.random_bool(0.5) {
		Some(random_digit_not_null(rng))
	} else {
		None
	}
}

/// Returns a random number made of up to `digits` digits.
///
/// # Parameters
/// - `digits`: maximum number of digits. `None` draws a digit count in `[0, 9]`.
/// - `fix_len`: when `true`, the number has exactly `digits` digits.
///
/// # Errors
/// - `TooManyDigits` above `MAX_DIGITS`.
/// - `InvalidRange` when a fixed length of zero digits is requested.
pub fn random_number<R: Rng + ?Sized>(rng: &mut R, digits: Option<u32>, fix_len: bool) -> Result<i64> {
	let digits = match digits {
		Some(d) => d,
		None => random_digit(rng) as u32,
	};
	if digits > MAX_DIGITS {
		return Err(IpsumError::TooManyDigits(digits));
	}

	let upper = 10i64.pow(digits) - 1;
	if fix_len {
		// 10^(d-1), or an empty range for d == 0
		let lower = if digits == 0 { 1 } else { 10i64.pow(digits - 1) };
		random_int(rng, lower, upper)
	} else {
		random_int(rng, 0, upper)
	}
}

/// Returns a random ASCII letter (`a-z` or `A-Z`).
pub fn random_letter<R: Rng + ?Sized>(rng: &mut R) -> char {
	// Should not fail, the alphabet is a non-empty constant
	ASCII_LETTERS.choose(rng).map_or('a', |b| *b as char)
}
