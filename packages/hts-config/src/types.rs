use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub catalog: Catalog,
	pub search: Search,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct Catalog {
	/// Path to the tariff schedule CSV. Read once per process; never watched or
	/// reloaded.
	pub path: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct Search {
	/// Query tokens of this length or shorter are discarded before matching.
	#[serde(default = "default_min_token_len")]
	pub min_token_len: usize,
	/// How many ranked results follow the primary one in a search response.
	#[serde(default = "default_max_alternatives")]
	pub max_alternatives: usize,
}

fn default_min_token_len() -> usize {
	2
}

fn default_max_alternatives() -> usize {
	3
}
