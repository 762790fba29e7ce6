use hts_domain::TariffEntry;

use crate::{HtsService, ServiceError, ServiceResult};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct DetailsRequest {
	pub code: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct DetailsResponse {
	pub entry: TariffEntry,
}

impl HtsService {
	/// Exact single-record lookup by code.
	pub fn details(&self, req: DetailsRequest) -> ServiceResult<DetailsResponse> {
		let code = req.code.trim();

		if code.is_empty() {
			return Err(ServiceError::InvalidQuery {
				field: "$.code".to_string(),
				message: "code must be non-empty.".to_string(),
			});
		}

		let catalog = self.catalog()?;
		let entry = catalog
			.get_by_code(code)
			.ok_or_else(|| ServiceError::NotFound { code: code.to_string() })?
			.clone();

		Ok(DetailsResponse { entry })
	}
}
