mod cache;
mod error;
mod loader;

pub use cache::CatalogCache;
pub use error::{Error, Result};
pub use loader::load_catalog;

use hts_domain::TariffEntry;

/// The full ordered tariff schedule, immutable after construction.
#[derive(Debug)]
pub struct Catalog {
	entries: Vec<TariffEntry>,
}

impl Catalog {
	pub fn new(entries: Vec<TariffEntry>) -> Self {
		Self { entries }
	}

	pub fn entries(&self) -> &[TariffEntry] {
		&self.entries
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Exact, case-sensitive match on `code`; first match wins. Linear scan,
	/// bounded by the catalog size.
	pub fn get_by_code(&self, code: &str) -> Option<&TariffEntry> {
		self.entries.iter().find(|entry| entry.code == code)
	}
}
