use std::{
	path::PathBuf,
	sync::{Arc, Mutex},
};

use crate::{Catalog, Result, loader};

/// Lazily populated, process-lifetime catalog cache.
///
/// The first `get_or_load` parses the dataset under the lock, so concurrent
/// first requests cannot race to read the file twice or observe a partially
/// built catalog. Later calls clone the shared `Arc`. The cache is never
/// invalidated; there is no file watch and no TTL.
pub struct CatalogCache {
	path: PathBuf,
	inner: Mutex<Option<Arc<Catalog>>>,
}

impl CatalogCache {
	pub fn new(path: PathBuf) -> Self {
		Self { path, inner: Mutex::new(None) }
	}

	pub fn get_or_load(&self) -> Result<Arc<Catalog>> {
		let mut slot = self.inner.lock().unwrap_or_else(|err| err.into_inner());

		if let Some(catalog) = slot.as_ref() {
			return Ok(catalog.clone());
		}

		let catalog = Arc::new(loader::load_catalog(&self.path)?);

		*slot = Some(catalog.clone());

		Ok(catalog)
	}

	pub fn is_loaded(&self) -> bool {
		self.inner.lock().unwrap_or_else(|err| err.into_inner()).is_some()
	}
}
