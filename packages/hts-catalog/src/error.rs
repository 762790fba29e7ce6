pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// The dataset file is missing or unreadable. Fatal to the loader.
	#[error("Failed to read catalog file at {path:?}.")]
	DataUnavailable { path: std::path::PathBuf, source: std::io::Error },
	#[error("Catalog file at {path:?} is missing required column {column:?}.")]
	MissingColumn { path: std::path::PathBuf, column: &'static str },
	#[error("Failed to parse catalog file at {path:?}.")]
	Malformed { path: std::path::PathBuf, source: csv::Error },
}

impl Error {
	pub fn is_data_unavailable(&self) -> bool {
		matches!(self, Self::DataUnavailable { .. })
	}
}
