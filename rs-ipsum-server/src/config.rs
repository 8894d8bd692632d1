use std::path::PathBuf;

/// Server settings, read from the environment.
///
/// | Variable          | Default     |
/// |-------------------|-------------|
/// | `RS_IPSUM_HOST`   | `127.0.0.1` |
/// | `RS_IPSUM_PORT`   | `5000`      |
/// | `RS_IPSUM_THEMES` | `./data`    |
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
	pub host: String,
	pub port: u16,
	/// Folder holding the `.txt` theme files.
	pub theme_dir: PathBuf,
}

impl Default for ServerConfig {
	fn default() -> Self {
		Self {
			host: "127.0.0.1".to_owned(),
			port: 5000,
			theme_dir: PathBuf::from("./data"),
		}
	}
}

impl ServerConfig {
	pub fn from_env() -> Result<Self, String> {
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	/// Builds the configuration from a variable lookup, falling back to defaults.
	///
	/// # Errors
	/// Returns an error if the port is not a valid `u16`.
	pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
	where
		F: Fn(&str) -> Option<String>,
	{
		let mut config = Self::default();
		if let Some(host) = lookup("RS_IPSUM_HOST") {
			config.host = host;
		}
		if let Some(port) = lookup("RS_IPSUM_PORT") {
			config.port = port
				.parse()
				.map_err(|_| format!("RS_IPSUM_PORT must be a port number, got '{port}'"))?;
		}
		if let Some(dir) = lookup("RS_IPSUM_THEMES") {
			config.theme_dir = PathBuf::from(dir);
		}
		Ok(config)
	}
}
