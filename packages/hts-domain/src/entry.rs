/// One row of the tariff schedule.
///
/// `code` and `description` are non-empty after loading; both have any wrapping
/// quote characters stripped. Entries are never mutated once the catalog is
/// built.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TariffEntry {
	/// Hierarchical numeric identifier, e.g. "8471.30.0100". Not unique across
	/// indent levels.
	pub code: String,
	/// Nesting depth within the chapter/heading/subheading hierarchy.
	pub indent_level: u32,
	pub description: String,
	/// Ordered units, e.g. ["No.", "kg"]. May be empty.
	pub units_of_quantity: Vec<String>,
	/// Opaque duty-rate text; never parsed numerically.
	pub general_rate: String,
	pub special_rate: String,
}

/// Strips every matching layer of wrapping `"` characters.
///
/// The CSV reader already handles standard CSV quoting; this removes literal
/// quote characters embedded in the cell text itself.
pub fn strip_quotes(value: &str) -> &str {
	let mut out = value.trim();

	while out.len() >= 2 && out.starts_with('"') && out.ends_with('"') {
		out = out[1..out.len() - 1].trim();
	}

	out
}
