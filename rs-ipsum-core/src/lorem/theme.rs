use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{IpsumError, Result};
use crate::io;
use crate::random::variance::Variance;

/// Word list of the built-in cake theme, one word per line.
const CAKE_WORDS: &str = include_str!("../../data/cake.txt");

/// Default string joining words and sentences.
pub const DEFAULT_CONNECTOR: &str = " ";

/// Default string ending a sentence.
pub const DEFAULT_PUNCTUATION: &str = ".";

/// Default retry cap of the length-targeted text assembly.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// A themed vocabulary and the rules used to assemble it into text.
///
/// ## Responsibilities:
/// - Hold the word pool (immutable once built)
/// - Hold the connector, terminal punctuation and count variance
/// - Serve as the configuration of every generation method
///
/// ## Invariants
/// - `words` is never empty
/// - `max_attempts` is at least 1
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(try_from = "RawTheme")]
pub struct Theme {
	/// Name of the theme (file stem when loaded from disk).
	name: String,
	/// Vocabulary words are drawn from.
	words: Vec<String>,
	/// Joins words inside a sentence and sentences inside a paragraph.
	connector: String,
	/// Appended to every sentence.
	punctuation: String,
	/// Band applied to requested word and sentence counts.
	variance: Variance,
	/// Number of attempts `text` makes before giving up.
	max_attempts: usize,
}

/// Unvalidated theme, as found in serialized data.
///
/// Field order must match `Theme`: postcard is not self-describing, every
/// field is always present.
#[derive(Deserialize)]
struct RawTheme {
	name: String,
	words: Vec<String>,
	connector: String,
	punctuation: String,
	variance: Variance,
	max_attempts: usize,
}

fn default_connector() -> String {
	DEFAULT_CONNECTOR.to_owned()
}

fn default_punctuation() -> String {
	DEFAULT_PUNCTUATION.to_owned()
}

impl TryFrom<RawTheme> for Theme {
	type Error = IpsumError;

	fn try_from(raw: RawTheme) -> Result<Self> {
		Ok(Self::new(raw.name, raw.words)?
			.with_connector(raw.connector)
			.with_punctuation(raw.punctuation)
			.with_variance(raw.variance)
			.with_max_attempts(raw.max_attempts))
	}
}

impl Theme {
	/// Creates a theme with the default connector (`" "`), punctuation (`"."`)
	/// and variance (−40% / +40%).
	///
	/// Words are trimmed and blank words are dropped.
	///
	/// # Errors
	/// Returns `EmptyPool` if no word is left.
	pub fn new<S, I>(name: S, words: I) -> Result<Self>
	where
		S: Into<String>,
		I: IntoIterator,
		I::Item: Into<String>,
	{
		let words: Vec<String> = words
			.into_iter()
			.map(Into::into)
			.map(|word| word.trim().to_owned())
			.filter(|word| !word.is_empty())
			.collect();
		if words.is_empty() {
			return Err(IpsumError::EmptyPool);
		}
		Ok(Self {
			name: name.into(),
			words,
			connector: default_connector(),
			punctuation: default_punctuation(),
			variance: Variance::default(),
			max_attempts: DEFAULT_MAX_ATTEMPTS,
		})
	}

	/// The built-in cake theme.
	///
	/// The bundled list keeps the periods of its source text; they are
	/// stripped so sentences end with a single punctuation mark.
	pub fn cake() -> Self {
		Self {
			name: "cake".to_owned(),
			words: CAKE_WORDS
				.lines()
				.map(|w| w.trim().trim_end_matches('.'))
				.filter(|w| !w.is_empty())
				.map(str::to_owned)
				.collect(),
			connector: default_connector(),
			punctuation: default_punctuation(),
			variance: Variance::default(),
			max_attempts: DEFAULT_MAX_ATTEMPTS,
		}
	}

	/// Loads a theme from a word-per-line text file.
	///
	/// - The theme name is the file name without extension.
	/// - Blank lines are ignored, words are trimmed.
	/// - If a `.bin` file with the same stem exists, it is loaded instead.
	/// - Otherwise the text file is read and the `.bin` cache is written.
	///   Failing to write the cache is logged and does not fail the load.
	///
	/// # Errors
	/// - I/O errors while reading the source file.
	/// - `Codec` if an existing cache cannot be decoded.
	/// - `EmptyPool` if the file holds no word.
	pub fn load<P: AsRef<Path>>(filepath: P) -> Result<Self> {
		let binary_data_path = io::build_output_path(&filepath, "bin")?;
		if binary_data_path.exists() {
			log::debug!("loading theme cache {}", binary_data_path.display());
			let bytes = std::fs::read(&binary_data_path)?;
			return Ok(postcard::from_bytes(&bytes)?);
		}

		let name = io::get_filename(&filepath)?;
		let words = io::read_file(&filepath)?
			.into_iter()
			.map(|line| line.trim().to_owned())
			.filter(|line| !line.is_empty());
		let theme = Self::new(name, words)?;
		log::debug!("loaded theme '{}' with {} words", theme.name, theme.words.len());

		if let Err(e) = theme.save(&binary_data_path) {
			log::warn!("could not write theme cache {}: {e}", binary_data_path.display());
		}
		Ok(theme)
	}

	/// Serializes the theme with `postcard` to `filepath`.
	pub fn save<P: AsRef<Path>>(&self, filepath: P) -> Result<()> {
		let bytes = postcard::to_stdvec(self)?;
		std::fs::write(&filepath, bytes)?;
		log::debug!("wrote theme cache {}", filepath.as_ref().display());
		Ok(())
	}

	/// Sets the string joining words and sentences.
	pub fn with_connector<S: Into<String>>(mut self, connector: S) -> Self {
		self.connector = connector.into();
		self
	}

	/// Sets the string ending sentences.
	pub fn with_punctuation<S: Into<String>>(mut self, punctuation: S) -> Self {
		self.punctuation = punctuation.into();
		self
	}

	/// Sets the band applied to word and sentence counts.
	pub fn with_variance(mut self, variance: Variance) -> Self {
		self.variance = variance;
		self
	}

	/// Sets the retry cap of `text` (at least 1).
	pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
		self.max_attempts = max_attempts.max(1);
		self
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	/// The word pool.
	pub fn words_pool(&self) -> &[String] {
		&self.words
	}

	pub fn connector(&self) -> &str {
		&self.connector
	}

	pub fn punctuation(&self) -> &str {
		&self.punctuation
	}

	pub fn variance(&self) -> Variance {
		self.variance
	}

	pub fn max_attempts(&self) -> usize {
		self.max_attempts
	}
}
