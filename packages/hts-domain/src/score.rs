/// Confidence score awarded to every code-prefix match.
pub const EXACT_MATCH: u8 = 100;

/// Keyword-mode confidence: `round(100 * matched / total)`.
///
/// `matched` counts distinct query tokens found in the description, `total` is
/// the token count after length filtering. A zero `total` yields zero; callers
/// must have returned the no-match sentinel before scoring in that case.
pub fn confidence(matched: usize, total: usize) -> u8 {
	if total == 0 {
		return 0;
	}

	(100.0 * matched as f64 / total as f64).round() as u8
}

/// Counts how many of `tokens` occur as a substring of the lower-cased
/// description.
pub fn matched_token_count(description: &str, tokens: &[String]) -> usize {
	let haystack = description.to_lowercase();

	tokens.iter().filter(|token| haystack.contains(token.as_str())).count()
}
