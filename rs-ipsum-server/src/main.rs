mod config;

use actix_cors::Cors;
use actix_web::{get, middleware::Logger, web, App, HttpResponse, HttpServer, Responder};

use serde::Deserialize;
use rs_ipsum_core::lorem::{DEFAULT_MAX_CHARS, DEFAULT_NB, DEFAULT_NB_SENTENCES, DEFAULT_NB_WORDS};
use rs_ipsum_core::random::template::{bothify, lexify, numerify};
use rs_ipsum_core::{IpsumError, Theme, ThemeRegistry};

use crate::config::ServerConfig;

/// Theme used when a request does not name one.
const DEFAULT_THEME: &str = "cake";

/// Upper bound on the number of units a single request may ask for.
const MAX_UNITS: usize = 1_000;

/// Upper bound on the `max_chars` of `/v1/text`.
const MAX_TEXT_CHARS: usize = 100_000;

/// Query parameters shared by the generation endpoints.
#[derive(Deserialize)]
struct GenerateParams {
	theme: Option<String>,
	nb: Option<usize>,
	nb_words: Option<usize>,
	nb_sentences: Option<usize>,
	variable: Option<bool>,
	max_chars: Option<usize>,
}

/// Query parameters of `/v1/template`.
#[derive(Deserialize)]
struct TemplateParams {
	pattern: String,
	mode: Option<String>, // numerify, lexify or bothify (default)
}

impl GenerateParams {
	/// Looks up the requested theme, `404` if unknown.
	fn theme<'a>(&self, registry: &'a ThemeRegistry) -> Result<&'a Theme, HttpResponse> {
		let name = self.theme.as_deref().unwrap_or(DEFAULT_THEME);
		registry
			.get(name)
			.ok_or_else(|| HttpResponse::NotFound().body(format!("Unknown theme '{name}'")))
	}

	/// Number of units to generate, `400` above `MAX_UNITS`.
	fn nb(&self) -> Result<usize, HttpResponse> {
		bounded(self.nb.unwrap_or(DEFAULT_NB), MAX_UNITS, "nb")
	}
}

fn bounded(value: usize, max: usize, name: &str) -> Result<usize, HttpResponse> {
	if value > max {
		Err(HttpResponse::BadRequest().body(format!("{name} must be at most {max}")))
	} else {
		Ok(value)
	}
}

/// Turns a generation result into a plain-text response.
fn respond(result: Result<String, IpsumError>) -> HttpResponse {
	match result {
		Ok(body) => HttpResponse::Ok().body(body),
		Err(e) => {
			log::debug!("generation failed: {e}");
			HttpResponse::BadRequest().body(e.to_string())
		}
	}
}

/// Early-returns the `HttpResponse` of a failed parameter check.
macro_rules! try_param {
	($e:expr) => {
		match $e {
			Ok(value) => value,
			Err(response) => return response,
		}
	};
}

#[get("/v1/themes")]
async fn get_themes(registry: web::Data<ThemeRegistry>) -> impl Responder {
	HttpResponse::Ok().body(registry.names().join("\n"))
}

#[get("/v1/word")]
async fn get_word(registry: web::Data<ThemeRegistry>, query: web::Query<GenerateParams>) -> impl Responder {
	let theme = try_param!(query.theme(&registry));
	respond(theme.word(&mut rand::rng()).map(str::to_owned))
}

#[get("/v1/words")]
async fn get_words(registry: web::Data<ThemeRegistry>, query: web::Query<GenerateParams>) -> impl Responder {
	let theme = try_param!(query.theme(&registry));
	let nb = try_param!(query.nb());
	respond(theme.words(&mut rand::rng(), nb).map(|words| words.join("\n")))
}

#[get("/v1/sentence")]
async fn get_sentence(registry: web::Data<ThemeRegistry>, query: web::Query<GenerateParams>) -> impl Responder {
	let theme = try_param!(query.theme(&registry));
	let nb_words = try_param!(bounded(query.nb_words.unwrap_or(DEFAULT_NB_WORDS), MAX_UNITS, "nb_words"));
	respond(theme.sentence(&mut rand::rng(), nb_words, query.variable.unwrap_or(true)))
}

#[get("/v1/sentences")]
async fn get_sentences(registry: web::Data<ThemeRegistry>, query: web::Query<GenerateParams>) -> impl Responder {
	let theme = try_param!(query.theme(&registry));
	let nb = try_param!(query.nb());
	respond(theme.sentences(&mut rand::rng(), nb).map(|sentences| sentences.join("\n")))
}

#[get("/v1/paragraph")]
async fn get_paragraph(registry: web::Data<ThemeRegistry>, query: web::Query<GenerateParams>) -> impl Responder {
	let theme = try_param!(query.theme(&registry));
	let nb_sentences = try_param!(bounded(query.nb_sentences.unwrap_or(DEFAULT_NB_SENTENCES), MAX_UNITS, "nb_sentences"));
	respond(theme.paragraph(&mut rand::rng(), nb_sentences, query.variable.unwrap_or(true)))
}

#[get("/v1/paragraphs")]
async fn get_paragraphs(registry: web::Data<ThemeRegistry>, query: web::Query<GenerateParams>) -> impl Responder {
	let theme = try_param!(query.theme(&registry));
	let nb = try_param!(query.nb());
	respond(theme.paragraphs(&mut rand::rng(), nb).map(|paragraphs| paragraphs.join("\n")))
}

#[get("/v1/text")]
async fn get_text(registry: web::Data<ThemeRegistry>, query: web::Query<GenerateParams>) -> impl Responder {
	let theme = try_param!(query.theme(&registry));
	let max_chars = try_param!(bounded(query.max_chars.unwrap_or(DEFAULT_MAX_CHARS), MAX_TEXT_CHARS, "max_chars"));
	respond(theme.text(&mut rand::rng(), max_chars))
}

#[get("/v1/template")]
async fn get_template(query: web::Query<TemplateParams>) -> impl Responder {
	let mut rng = rand::rng();
	match query.mode.as_deref().map(str::to_lowercase).as_deref() {
		None | Some("bothify") => HttpResponse::Ok().body(bothify(&mut rng, &query.pattern)),
		Some("numerify") => HttpResponse::Ok().body(numerify(&mut rng, &query.pattern)),
		Some("lexify") => HttpResponse::Ok().body(lexify(&mut rng, &query.pattern)),
		Some(other) => HttpResponse::BadRequest().body(format!("Unknown mode '{other}', expected numerify, lexify or bothify")),
	}
}

/// Registers every endpoint.
fn routes(cfg: &mut web::ServiceConfig) {
	cfg.service(get_themes)
		.service(get_word)
		.service(get_words)
		.service(get_sentence)
		.service(get_sentences)
		.service(get_paragraph)
		.service(get_paragraphs)
		.service(get_text)
		.service(get_template);
}

/// Main entry point for the server.
///
/// Loads the themes of the configured folder (the built-in cake theme is
/// always available) and starts an Actix-web HTTP server.
///
/// # Notes
/// - The registry is read-only once loaded, so it is shared without a lock.
/// - A missing theme folder is not fatal: only the built-in theme is served.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let config = ServerConfig::from_env().map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

	let registry = match ThemeRegistry::load(&config.theme_dir) {
		Ok(registry) => registry,
		Err(e) => {
			log::warn!("could not load themes from {}: {e}", config.theme_dir.display());
			ThemeRegistry::default()
		}
	};
	log::info!("serving themes: {}", registry.names().join(", "));
	let registry = web::Data::new(registry);

	log::info!("listening on {}:{}", config.host, config.port);
	HttpServer::new(move || {
		App::new()
			.wrap(Logger::default())
			.wrap(Cors::permissive())
			.app_data(registry.clone())
			.configure(routes)
	})
		.bind((config.host.as_str(), config.port))?
		.run()
		.await
}
