use std::{fs, path::Path};

use csv::StringRecord;

use hts_domain::{TariffEntry, entry::strip_quotes};

use crate::{Catalog, Error, Result};

const COLUMN_CODE: &str = "HTS Number";
const COLUMN_INDENT: &str = "Indent";
const COLUMN_DESCRIPTION: &str = "Description";
const COLUMN_UNITS: &str = "Unit of Quantity";
const COLUMN_GENERAL_RATE: &str = "General Rate of Duty";
const COLUMN_SPECIAL_RATE: &str = "Special Rate of Duty";

struct Columns {
	code: usize,
	indent: usize,
	description: usize,
	units: usize,
	general_rate: usize,
	special_rate: usize,
}

/// Reads the tariff schedule CSV into a [`Catalog`].
///
/// The first row names the columns; positions are resolved from it. Rows that
/// fail to parse are skipped with a warning rather than failing the whole
/// load; a missing required column fails fast.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
	let file = fs::File::open(path)
		.map_err(|err| Error::DataUnavailable { path: path.to_path_buf(), source: err })?;
	let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);
	let headers = reader
		.headers()
		.map_err(|err| Error::Malformed { path: path.to_path_buf(), source: err })?
		.clone();
	let columns = resolve_columns(&headers, path)?;
	let mut entries = Vec::new();
	let mut skipped = 0_usize;

	for (idx, result) in reader.records().enumerate() {
		// Header occupies line 1.
		let line = idx + 2;
		let record = match result {
			Ok(record) => record,
			Err(err) => {
				tracing::warn!(line, error = %err, "Skipped unreadable catalog row.");

				skipped += 1;

				continue;
			},
		};

		match parse_row(&record, &columns) {
			Ok(entry) => entries.push(entry),
			Err(reason) => {
				tracing::warn!(line, reason, "Skipped malformed catalog row.");

				skipped += 1;
			},
		}
	}

	tracing::info!(path = ?path, rows = entries.len(), skipped, "Catalog loaded.");

	Ok(Catalog::new(entries))
}

fn resolve_columns(headers: &StringRecord, path: &Path) -> Result<Columns> {
	let position = |column: &'static str| {
		headers
			.iter()
			.position(|header| header.trim() == column)
			.ok_or_else(|| Error::MissingColumn { path: path.to_path_buf(), column })
	};

	Ok(Columns {
		code: position(COLUMN_CODE)?,
		indent: position(COLUMN_INDENT)?,
		description: position(COLUMN_DESCRIPTION)?,
		units: position(COLUMN_UNITS)?,
		general_rate: position(COLUMN_GENERAL_RATE)?,
		special_rate: position(COLUMN_SPECIAL_RATE)?,
	})
}

fn parse_row(record: &StringRecord, columns: &Columns) -> Result<TariffEntry, &'static str> {
	let code = strip_quotes(record.get(columns.code).unwrap_or(""));

	if code.is_empty() {
		return Err("Empty HTS number.");
	}

	let description = strip_quotes(record.get(columns.description).unwrap_or(""));

	if description.is_empty() {
		return Err("Empty description.");
	}

	let indent_level = record
		.get(columns.indent)
		.unwrap_or("")
		.trim()
		.parse::<u32>()
		.map_err(|_| "Non-numeric indent.")?;
	let units_of_quantity = parse_units(record.get(columns.units).unwrap_or(""));

	Ok(TariffEntry {
		code: code.to_string(),
		indent_level,
		description: description.to_string(),
		units_of_quantity,
		general_rate: record.get(columns.general_rate).unwrap_or("").trim().to_string(),
		special_rate: record.get(columns.special_rate).unwrap_or("").trim().to_string(),
	})
}

/// The units cell encodes a serialized list: a JSON array of strings when
/// bracketed, otherwise a bare non-empty cell is a single unit.
fn parse_units(cell: &str) -> Vec<String> {
	let cell = cell.trim();

	if cell.is_empty() {
		return Vec::new();
	}
	if cell.starts_with('[')
		&& let Ok(units) = serde_json::from_str::<Vec<String>>(cell)
	{
		return units.into_iter().map(|unit| unit.trim().to_string()).collect();
	}

	vec![strip_quotes(cell).to_string()]
}
