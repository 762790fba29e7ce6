use std::collections::HashSet;

/// Reduces a code query to its digits, e.g. "84-71.30" becomes "847130".
pub fn normalize_code_query(query: &str) -> String {
	query.chars().filter(char::is_ascii_digit).collect()
}

/// Splits a free-text query into distinct lower-cased keyword tokens.
///
/// Tokens of length `min_token_len` or shorter are discarded as noise; the
/// filter applies at every call site. Duplicates keep their first position.
pub fn tokenize(query: &str, min_token_len: usize) -> Vec<String> {
	let lowered = query.to_lowercase();
	let mut out = Vec::new();
	let mut seen = HashSet::new();

	for token in lowered.split_whitespace() {
		if token.chars().count() <= min_token_len {
			continue;
		}
		if seen.insert(token) {
			out.push(token.to_string());
		}
	}

	out
}
