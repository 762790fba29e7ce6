pub mod details;
pub mod search;

pub use details::{DetailsRequest, DetailsResponse};
pub use search::{RankedMatch, SearchRequest, SearchResponse};

use std::sync::Arc;

use hts_catalog::{Catalog, CatalogCache};
use hts_config::Config;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug)]
pub enum ServiceError {
	InvalidQuery { field: String, message: String },
	NotFound { code: String },
	Catalog { source: hts_catalog::Error },
}

impl std::fmt::Display for ServiceError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::InvalidQuery { message, .. } => write!(f, "Invalid query: {message}"),
			Self::NotFound { code } => write!(f, "No tariff entry with code {code:?}."),
			Self::Catalog { source } => write!(f, "Catalog error: {source}"),
		}
	}
}

impl std::error::Error for ServiceError {}

impl From<hts_catalog::Error> for ServiceError {
	fn from(source: hts_catalog::Error) -> Self {
		Self::Catalog { source }
	}
}

/// Stateless query service over the process-lifetime tariff catalog.
///
/// The only shared mutable state is the lazily populated [`CatalogCache`];
/// every query is a synchronous, side-effect-free read against the loaded
/// catalog.
pub struct HtsService {
	pub cfg: Config,
	catalog: CatalogCache,
}

impl HtsService {
	pub fn new(cfg: Config) -> Self {
		let catalog = CatalogCache::new(cfg.catalog.path.clone());

		Self { cfg, catalog }
	}

	pub(crate) fn catalog(&self) -> ServiceResult<Arc<Catalog>> {
		Ok(self.catalog.get_or_load()?)
	}
}
