use std::sync::Arc;

use hts_service::HtsService;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<HtsService>,
}
impl AppState {
	pub fn new(config: hts_config::Config) -> Self {
		// The catalog itself loads lazily on the first query and stays cached
		// for the process lifetime.
		Self { service: Arc::new(HtsService::new(config)) }
	}
}
