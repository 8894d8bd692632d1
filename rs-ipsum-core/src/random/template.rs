use rand::Rng;

use super::{
	random_digit, random_digit_not_null, random_digit_not_null_or_empty, random_digit_or_empty,
	random_letter,
};

/// Replaced by a digit (0-9).
pub const DIGIT: char = '#';
/// Replaced by a non-zero digit (1-9).
pub const DIGIT_NOT_NULL: char = '%';
/// Replaced by a digit or removed.
pub const DIGIT_OR_EMPTY: char = '!';
/// Replaced by a non-zero digit or removed.
pub const DIGIT_NOT_NULL_OR_EMPTY: char = '@';
/// Replaced by an ASCII letter.
pub const LETTER: char = '?';

/// Rebuilds `text`, letting `fill` write the value of every `placeholder`.
fn substitute<F>(text: &str, placeholder: char, mut fill: F) -> String
where
	F: FnMut(&mut String),
{
	let mut output = String::with_capacity(text.len());
	for c in text.chars() {
		if c == placeholder {
			fill(&mut output);
		} else {
			output.push(c);
		}
	}
	output
}

fn push_digit(output: &mut String, digit: Option<u8>) {
	if let Some(d) = digit {
		output.push(char::from(b'0' + d));
	}
}

/// Replaces every numeric placeholder of `text` with a random value.
///
/// One full left-to-right pass per placeholder kind, in this order:
/// - `#` → digit (0-9)
/// - `%` → non-zero digit (1-9)
/// - `!` → digit or nothing
/// - `@` → non-zero digit or nothing
///
/// Example: `"###-%%"` → `"042-17"`
pub fn numerify<R: Rng + ?Sized>(rng: &mut R, text: &str) -> String {
	let text = substitute(text, DIGIT, |out| push_digit(out, Some(random_digit(rng))));
	let text = substitute(&text, DIGIT_NOT_NULL, |out| push_digit(out, Some(random_digit_not_null(rng))));
	let text = substitute(&text, DIGIT_OR_EMPTY, |out| push_digit(out, random_digit_or_empty(rng)));
	substitute(&text, DIGIT_NOT_NULL_OR_EMPTY, |out| push_digit(out, random_digit_not_null_or_empty(rng)))
}

/// Replaces every `?` of `text` with a random ASCII letter.
pub fn lexify<R: Rng + ?Sized>(rng: &mut R, text: &str) -> String {
	substitute(text, LETTER, |out| out.push(random_letter(rng)))
}

/// Applies `numerify` then `lexify`.
///
/// Example: `"## ??"` → `"71 kQ"`
pub fn bothify<R: Rng + ?Sized>(rng: &mut R, text: &str) -> String {
	let text = numerify(rng, text);
	lexify(rng, &text)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	#[test]
	fn numerify_hashes_are_digits() {
		let mut rng = StdRng::seed_from_u64(21);
		for _ in 0..100 {
			let value = numerify(&mut rng, "###");
			assert_eq!(value.len(), 3);
			assert!(value.chars().all(|c| c.is_ascii_digit()));
		}
	}

	#[test]
	fn numerify_percent_is_never_zero() {
		let mut rng = StdRng::seed_from_u64(21);
		for _ in 0..100 {
			let value = numerify(&mut rng, "%%%%");
			assert!(value.chars().all(|c| ('1'..='9').contains(&c)), "{value}");
		}
	}

	#[test]
	fn numerify_optional_placeholders_may_vanish() {
		let mut rng = StdRng::seed_from_u64(21);
		let lengths: Vec<usize> = (0..200).map(|_| numerify(&mut rng, "x!@x").len()).collect();
		assert!(lengths.iter().all(|l| (2..=4).contains(l)));
		assert!(lengths.contains(&2));
		assert!(lengths.contains(&4));
	}

	#[test]
	fn numerify_keeps_other_characters() {
		let mut rng = StdRng::seed_from_u64(21);
		let value = numerify(&mut rng, "Tel: ## ?");
		assert!(value.starts_with("Tel: "));
		assert!(value.ends_with(" ?"));
	}

	#[test]
	fn lexify_produces_letters() {
		let mut rng = StdRng::seed_from_u64(21);
		let value = lexify(&mut rng, "????");
		assert_eq!(value.len(), 4);
		assert!(value.chars().all(|c| c.is_ascii_alphabetic()));
	}

	#[test]
	fn bothify_fills_digits_and_letters() {
		let mut rng = StdRng::seed_from_u64(21);
		for _ in 0..100 {
			let value: Vec<char> = bothify(&mut rng, "## ??").chars().collect();
			assert_eq!(value.len(), 5);
			assert!(value[0].is_ascii_digit() && value[1].is_ascii_digit());
			assert_eq!(value[2], ' ');
			assert!(value[3].is_ascii_alphabetic() && value[4].is_ascii_alphabetic());
		}
	}
}
