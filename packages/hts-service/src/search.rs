use hts_domain::{
	TariffEntry,
	query::{normalize_code_query, tokenize},
	score::{self, EXACT_MATCH},
};

use crate::{HtsService, ServiceError, ServiceResult};

pub const NO_MATCH_CODE: &str = "0000.00";
pub const NO_MATCH_DESCRIPTION: &str = "No matching HTS code found";

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SearchRequest {
	pub query: String,
	/// Selects code-prefix mode instead of keyword mode.
	#[serde(default)]
	pub match_by_code: bool,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RankedMatch {
	pub entry: TariffEntry,
	/// Integer in [0, 100]. Always 100 in code-prefix mode; in keyword mode,
	/// the fraction of query tokens found in the description.
	pub confidence: u8,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SearchResponse {
	pub primary: RankedMatch,
	pub alternatives: Vec<RankedMatch>,
	/// Total candidates before truncation to primary plus alternatives.
	pub candidate_count: usize,
}

impl HtsService {
	/// Ranks catalog entries against a free-text query or a partial code.
	///
	/// Zero candidates is a legitimate outcome and yields the no-match
	/// sentinel, never an error; only an empty query is rejected.
	pub fn search(&self, req: SearchRequest) -> ServiceResult<SearchResponse> {
		let query = req.query.trim();

		if query.is_empty() {
			return Err(ServiceError::InvalidQuery {
				field: "$.query".to_string(),
				message: "query must be non-empty.".to_string(),
			});
		}

		let catalog = self.catalog()?;
		let ranked = if req.match_by_code {
			rank_by_code_prefix(catalog.entries(), query)
		} else {
			rank_by_keywords(catalog.entries(), query, self.cfg.search.min_token_len)
		};

		tracing::debug!(
			query,
			match_by_code = req.match_by_code,
			candidates = ranked.len(),
			"Search ranked."
		);

		Ok(shape_response(ranked, self.cfg.search.max_alternatives))
	}
}

fn rank_by_code_prefix(entries: &[TariffEntry], query: &str) -> Vec<RankedMatch> {
	let digits = normalize_code_query(query);

	// Every code starts with the empty string; a digit-free query must not
	// select the whole catalog.
	if digits.is_empty() {
		return Vec::new();
	}

	let mut out: Vec<RankedMatch> = entries
		.iter()
		.filter(|entry| entry.code.starts_with(&digits))
		.map(|entry| RankedMatch { entry: entry.clone(), confidence: EXACT_MATCH })
		.collect();

	// Stable, so equal codes keep their catalog order.
	out.sort_by(|a, b| a.entry.code.cmp(&b.entry.code));

	out
}

fn rank_by_keywords(entries: &[TariffEntry], query: &str, min_token_len: usize) -> Vec<RankedMatch> {
	let tokens = tokenize(query, min_token_len);

	if tokens.is_empty() {
		return Vec::new();
	}

	let total = tokens.len();
	let mut out = Vec::new();

	for entry in entries {
		let matched = score::matched_token_count(&entry.description, &tokens);

		if matched == 0 {
			continue;
		}

		out.push(RankedMatch {
			entry: entry.clone(),
			confidence: score::confidence(matched, total),
		});
	}

	// Stable, so equal confidences keep their catalog order.
	out.sort_by(|a, b| b.confidence.cmp(&a.confidence));

	out
}

fn shape_response(ranked: Vec<RankedMatch>, max_alternatives: usize) -> SearchResponse {
	let candidate_count = ranked.len();
	let mut ranked = ranked.into_iter();
	let Some(primary) = ranked.next() else {
		return no_match_response();
	};

	let alternatives = ranked.take(max_alternatives).collect();

	SearchResponse { primary, alternatives, candidate_count }
}

fn no_match_response() -> SearchResponse {
	let entry = TariffEntry {
		code: NO_MATCH_CODE.to_string(),
		indent_level: 0,
		description: NO_MATCH_DESCRIPTION.to_string(),
		units_of_quantity: Vec::new(),
		general_rate: String::new(),
		special_rate: String::new(),
	};

	SearchResponse {
		primary: RankedMatch { entry, confidence: 0 },
		alternatives: Vec::new(),
		candidate_count: 0,
	}
}
