use std::collections::HashMap;
use std::path::Path;

use super::theme::Theme;
use crate::error::Result;
use crate::io;

/// Named collection of themes.
///
/// The built-in cake theme is always registered; themes loaded from disk
/// with the same name replace it.
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
	themes: HashMap<String, Theme>,
}

impl Default for ThemeRegistry {
	fn default() -> Self {
		let cake = Theme::cake();
		Self { themes: HashMap::from([(cake.name().to_owned(), cake)]) }
	}
}

impl ThemeRegistry {
	/// Creates a registry with every `.txt` theme of a directory.
	///
	/// # Parameters
	/// - `folder`: directory holding word-per-line theme files.
	///   `"."` and `"./"` resolve to the working directory.
	///
	/// # Errors
	/// - Returns an error if the directory cannot be read.
	/// - Returns an error if a theme fails to load.
	pub fn load<P: AsRef<Path>>(folder: P) -> Result<Self> {
		let folder = io::normalize_folder(folder);
		let mut registry = Self::default();

		for file in io::list_files(&folder, "txt")? {
			registry.insert(Theme::load(&file)?);
		}

		log::debug!("registered {} themes from {}", registry.themes.len(), folder.display());
		Ok(registry)
	}

	/// Registers a theme under its name, returning the one it replaces.
	pub fn insert(&mut self, theme: Theme) -> Option<Theme> {
		self.themes.insert(theme.name().to_owned(), theme)
	}

	pub fn get(&self, name: &str) -> Option<&Theme> {
		self.themes.get(name)
	}

	/// Returns the registered theme names, sorted.
	pub fn names(&self) -> Vec<&str> {
		let mut names: Vec<&str> = self.themes.keys().map(String::as_str).collect();
		names.sort_unstable();
		names
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_registry_has_cake() {
		let registry = ThemeRegistry::default();
		assert_eq!(registry.names(), ["cake"]);
		assert!(registry.get("cake").is_some());
		assert!(registry.get("pie").is_none());
	}

	#[test]
	fn load_registers_text_files() {
		let dir = tempfile::tempdir().unwrap();
		std::fs::write(dir.path().join("fruit.txt"), "apple\npear\n").unwrap();
		std::fs::write(dir.path().join("veggie.txt"), "leek\n").unwrap();
		std::fs::write(dir.path().join("notes.md"), "ignored\n").unwrap();

		let registry = ThemeRegistry::load(dir.path()).unwrap();
		assert_eq!(registry.names(), ["cake", "fruit", "veggie"]);
		assert_eq!(registry.get("veggie").unwrap().words_pool(), ["leek"]);
	}

	#[test]
	fn missing_folder_fails() {
		let dir = tempfile::tempdir().unwrap();
		assert!(ThemeRegistry::load(dir.path().join("nope")).is_err());
	}

	#[test]
	fn insert_replaces_by_name() {
		let mut registry = ThemeRegistry::default();
		let replaced = registry.insert(Theme::new("cake", ["sponge"]).unwrap());
		assert!(replaced.is_some());
		assert_eq!(registry.get("cake").unwrap().words_pool(), ["sponge"]);
	}
}
