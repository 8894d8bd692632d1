use rand::SeedableRng;
use rand::rngs::StdRng;

use rs_ipsum_core::random::template::{bothify, numerify};
use rs_ipsum_core::random::pool::random_sample_unique;
use rs_ipsum_core::{randomize_nb_elements, IpsumError, Pool, Theme};

#[test]
fn paragraph_has_at_least_ten_chars() {
	let mut rng = StdRng::seed_from_u64(2024);
	let theme = Theme::cake();
	for _ in 0..50 {
		assert!(theme.paragraph(&mut rng, 3, true).unwrap().chars().count() >= 10);
	}
}

#[test]
fn word_is_never_empty() {
	let mut rng = StdRng::seed_from_u64(2024);
	let theme = Theme::cake();
	for _ in 0..50 {
		assert!(!theme.word(&mut rng).unwrap().is_empty());
	}
}

#[test]
fn sentences_are_capitalized_and_punctuated() {
	let mut rng = StdRng::seed_from_u64(2024);
	let theme = Theme::cake();
	let sentences = theme.sentences(&mut rng, 3).unwrap();
	assert_eq!(sentences.len(), 3);
	for nb_words in 1..12 {
		let sentence = theme.sentence(&mut rng, nb_words, true).unwrap();
		assert!(sentence.starts_with(|c: char| c.is_uppercase()), "{sentence}");
		assert!(sentence.ends_with('.'));
	}
}

#[test]
fn words_length_matches_request() {
	let mut rng = StdRng::seed_from_u64(2024);
	let theme = Theme::cake();
	for n in 1..30 {
		assert_eq!(theme.words(&mut rng, n).unwrap().len(), n);
	}
}

#[test]
fn zero_sized_units_are_empty() {
	let mut rng = StdRng::seed_from_u64(2024);
	let theme = Theme::cake();
	assert_eq!(theme.sentence(&mut rng, 0, false).unwrap(), "");
	assert_eq!(theme.paragraph(&mut rng, 0, false).unwrap(), "");
}

#[test]
fn text_rejects_tiny_budgets() {
	let mut rng = StdRng::seed_from_u64(2024);
	let theme = Theme::cake();
	assert!(matches!(theme.text(&mut rng, 4), Err(IpsumError::InvalidSize(4))));
}

#[test]
fn text_of_each_tier() {
	let mut rng = StdRng::seed_from_u64(2024);
	let theme = Theme::cake();
	for max_chars in [5, 10, 24, 25, 50, 99, 100, 200, 500] {
		let text = theme.text(&mut rng, max_chars).unwrap();
		assert!(!text.is_empty());
		assert!(text.starts_with(|c: char| c.is_uppercase()), "{max_chars}: {text}");
	}
}

#[test]
fn default_text_is_long_enough() {
	let mut rng = StdRng::seed_from_u64(2024);
	let theme = Theme::cake();
	for _ in 0..20 {
		let text = theme.text(&mut rng, 200).unwrap();
		assert!(text.chars().count() >= 10, "{text}");
	}
}

#[test]
fn same_seed_same_text() {
	let theme = Theme::cake();
	let first = theme.text(&mut StdRng::seed_from_u64(99), 300).unwrap();
	let second = theme.text(&mut StdRng::seed_from_u64(99), 300).unwrap();
	assert_eq!(first, second);
}

#[test]
fn unique_sample_of_cake_words() {
	let mut rng = StdRng::seed_from_u64(2024);
	let pool = ["a", "b", "c", "d"];
	let sample = random_sample_unique(&mut rng, Pool::Uniform(&pool), Some(4)).unwrap();
	assert_eq!(sample.len(), 4);
	assert!(random_sample_unique(&mut rng, Pool::Uniform(&pool), Some(5)).is_err());
}

#[test]
fn templates() {
	let mut rng = StdRng::seed_from_u64(2024);
	let number = numerify(&mut rng, "###");
	assert!(number.len() == 3 && number.chars().all(|c| c.is_ascii_digit()));

	let both: Vec<char> = bothify(&mut rng, "## ??").chars().collect();
	assert_eq!(both.len(), 5);
	assert!(both[..2].iter().all(char::is_ascii_digit));
	assert_eq!(both[2], ' ');
	assert!(both[3..].iter().all(char::is_ascii_alphabetic));
}

#[test]
fn exact_flags_pin_count() {
	let mut rng = StdRng::seed_from_u64(2024);
	assert_eq!(randomize_nb_elements(&mut rng, 100, true, true), 100);
}
