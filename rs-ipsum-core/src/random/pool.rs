use std::collections::HashSet;
use std::hash::Hash;

use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;

use crate::error::{IpsumError, Result};

/// A set of values to pick from.
///
/// # Variants
/// - `Uniform(&[T])`: every entry has the same probability.
/// - `Weighted(&[(T, f64)])`: each entry is picked proportionally to its weight.
///   For example `[("a", 0.5), ("b", 0.3), ("c", 0.2)]` yields `a` 50% of the time.
#[derive(Debug)]
pub enum Pool<'a, T> {
	Uniform(&'a [T]),
	Weighted(&'a [(T, f64)]),
}

// Manual impls: a pool only borrows its values, `T` does not need to be `Copy`.
impl<T> Clone for Pool<'_, T> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<T> Copy for Pool<'_, T> {}

impl<'a, T> Pool<'a, T> {
	/// Number of entries in the pool.
	pub fn len(&self) -> usize {
		match self {
			Pool::Uniform(values) => values.len(),
			Pool::Weighted(entries) => entries.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Picks one element.
	///
	/// # Errors
	/// - `EmptyPool` if the pool has no entries.
	/// - `InvalidWeight` if the weights are negative, not finite, or sum to zero.
	pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&'a T> {
		Ok(self.sampler()?.sample(rng))
	}

	/// Validates the pool once so that repeated draws are cheap.
	fn sampler(&self) -> Result<Sampler<'a, T>> {
		if self.is_empty() {
			return Err(IpsumError::EmptyPool);
		}
		match *self {
			Pool::Uniform(values) => Ok(Sampler::Uniform(values)),
			Pool::Weighted(entries) => {
				let index = WeightedIndex::new(entries.iter().map(|(_, weight)| *weight))
					.map_err(|e| IpsumError::InvalidWeight(e.to_string()))?;
				Ok(Sampler::Weighted(entries, index))
			}
		}
	}
}

/// A non-empty pool ready to be drawn from.
enum Sampler<'a, T> {
	Uniform(&'a [T]),
	Weighted(&'a [(T, f64)], WeightedIndex<f64>),
}

impl<'a, T> Sampler<'a, T> {
	fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> &'a T {
		match self {
			Sampler::Uniform(values) => {
				let values: &'a [T] = *values;
				// Index stays in bounds: the pool is non-empty
				&values[rng.random_range(0..values.len())]
			}
			Sampler::Weighted(entries, index) => {
				let entries: &'a [(T, f64)] = *entries;
				&entries[index.sample(rng)].0
			}
		}
	}
}

impl<'a, T: Eq + Hash> Pool<'a, T> {
	/// Number of distinct values that can actually be drawn.
	///
	/// Duplicated values count once, zero-weight entries are never drawn.
	fn selectable(&self) -> usize {
		match self {
			Pool::Uniform(values) => values.iter().collect::<HashSet<_>>().len(),
			Pool::Weighted(entries) => entries
				.iter()
				.filter(|(_, weight)| *weight > 0.0)
				.map(|(value, _)| value)
				.collect::<HashSet<_>>()
				.len(),
		}
	}
}

/// Returns a random element from the pool.
///
/// Uniform pools are sampled uniformly, weighted pools proportionally to the
/// weight of each entry.
///
/// # Errors
/// `EmptyPool` if the pool is empty, `InvalidWeight` for unusable weights.
pub fn random_element<'a, T, R: Rng + ?Sized>(rng: &mut R, pool: Pool<'a, T>) -> Result<&'a T> {
	pool.choose(rng)
}

/// Returns `length` elements drawn independently (with replacement).
///
/// When `length` is `None`, a length in `[1, |pool|]` is drawn.
///
/// # Errors
/// `EmptyPool` if the pool is empty and at least one element is requested.
pub fn random_sample<'a, T, R: Rng + ?Sized>(
	rng: &mut R,
	pool: Pool<'a, T>,
	length: Option<usize>,
) -> Result<Vec<&'a T>> {
	let length = match length {
		Some(length) => length,
		None => default_length(rng, &pool)?,
	};
	if length == 0 {
		return Ok(Vec::new());
	}
	let sampler = pool.sampler()?;
	Ok((0..length).map(|_| sampler.sample(rng)).collect())
}

/// Returns a set of `length` distinct elements.
///
/// Draws and deduplicates until the set is full: meant for small pools.
/// When `length` is `None`, a length in `[1, |pool|]` is drawn.
///
/// # Errors
/// `InvalidLength` if fewer than `length` distinct values can be drawn.
pub fn random_sample_unique<'a, T, R>(
	rng: &mut R,
	pool: Pool<'a, T>,
	length: Option<usize>,
) -> Result<HashSet<&'a T>>
where
	T: Eq + Hash,
	R: Rng + ?Sized,
{
	let length = match length {
		Some(length) => length,
		None => default_length(rng, &pool)?,
	};
	if length > pool.len() {
		return Err(IpsumError::InvalidLength { length, available: pool.len() });
	}
	let available = pool.selectable();
	if length > available {
		return Err(IpsumError::InvalidLength { length, available });
	}

	let mut sample = HashSet::with_capacity(length);
	if length == 0 {
		return Ok(sample);
	}
	let sampler = pool.sampler()?;
	while sample.len() < length {
		sample.insert(sampler.sample(rng));
	}
	Ok(sample)
}

/// Random length in `[1, |pool|]`.
fn default_length<T, R: Rng + ?Sized>(rng: &mut R, pool: &Pool<'_, T>) -> Result<usize> {
	if pool.is_empty() {
		return Err(IpsumError::EmptyPool);
	}
	Ok(rng.random_range(1..=pool.len()))
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	const LETTERS: [&str; 3] = ["a", "b", "c"];

	#[test]
	fn uniform_element_comes_from_pool() {
		let mut rng = StdRng::seed_from_u64(42);
		for _ in 0..100 {
			let picked = random_element(&mut rng, Pool::Uniform(&LETTERS)).unwrap();
			assert!(LETTERS.contains(picked));
		}
	}

	#[test]
	fn empty_pool_fails() {
		let mut rng = StdRng::seed_from_u64(42);
		let empty: [&str; 0] = [];
		assert!(matches!(random_element(&mut rng, Pool::Uniform(&empty)), Err(IpsumError::EmptyPool)));
		let empty: [(&str, f64); 0] = [];
		assert!(matches!(random_element(&mut rng, Pool::Weighted(&empty)), Err(IpsumError::EmptyPool)));
	}

	#[test]
	fn weighted_element_follows_weights() {
		let mut rng = StdRng::seed_from_u64(42);
		let entries = [("often", 0.9), ("rarely", 0.1), ("never", 0.0)];
		let mut often = 0;
		for _ in 0..2000 {
			match *random_element(&mut rng, Pool::Weighted(&entries)).unwrap() {
				"often" => often += 1,
				"rarely" => (),
				other => panic!("unexpected pick {other}"),
			}
		}
		assert!(often > 1600, "picked 'often' only {often} times");
	}

	#[test]
	fn weighted_pool_rejects_bad_weights() {
		let mut rng = StdRng::seed_from_u64(42);
		let zeros = [("a", 0.0), ("b", 0.0)];
		assert!(matches!(random_element(&mut rng, Pool::Weighted(&zeros)), Err(IpsumError::InvalidWeight(_))));
		let negative = [("a", 1.0), ("b", -1.0)];
		assert!(matches!(random_element(&mut rng, Pool::Weighted(&negative)), Err(IpsumError::InvalidWeight(_))));
	}

	#[test]
	fn weighted_sample_reuses_one_index() {
		let mut rng = StdRng::seed_from_u64(9);
		let entries = [("a", 1.0), ("b", 0.0)];
		let sample = random_sample(&mut rng, Pool::Weighted(&entries), Some(50)).unwrap();
		assert_eq!(sample.len(), 50);
		assert!(sample.iter().all(|v| **v == "a"));

		let bad = [("a", -1.0)];
		assert!(matches!(random_sample(&mut rng, Pool::Weighted(&bad), Some(3)), Err(IpsumError::InvalidWeight(_))));
		assert!(random_sample(&mut rng, Pool::Weighted(&bad), Some(0)).unwrap().is_empty());
	}

	#[test]
	fn sample_has_requested_length() {
		let mut rng = StdRng::seed_from_u64(9);
		let sample = random_sample(&mut rng, Pool::Uniform(&LETTERS), Some(10)).unwrap();
		assert_eq!(sample.len(), 10);

		for _ in 0..50 {
			let sample = random_sample(&mut rng, Pool::Uniform(&LETTERS), None).unwrap();
			assert!((1..=3).contains(&sample.len()));
		}
	}

	#[test]
	fn unique_sample_is_distinct() {
		let mut rng = StdRng::seed_from_u64(9);
		for length in 0..=3 {
			let sample = random_sample_unique(&mut rng, Pool::Uniform(&LETTERS), Some(length)).unwrap();
			assert_eq!(sample.len(), length);
		}
		assert!(matches!(
			random_sample_unique(&mut rng, Pool::Uniform(&LETTERS), Some(4)),
			Err(IpsumError::InvalidLength { length: 4, available: 3 })
		));
	}

	#[test]
	fn unique_sample_counts_distinct_values() {
		let mut rng = StdRng::seed_from_u64(9);
		let repeated = ["a", "a", "b"];
		assert!(matches!(
			random_sample_unique(&mut rng, Pool::Uniform(&repeated), Some(3)),
			Err(IpsumError::InvalidLength { length: 3, available: 2 })
		));

		let entries = [("a", 1.0), ("b", 0.0), ("c", 2.0)];
		let sample = random_sample_unique(&mut rng, Pool::Weighted(&entries), Some(2)).unwrap();
		assert!(sample.contains(&"a") && sample.contains(&"c"));
	}
}
