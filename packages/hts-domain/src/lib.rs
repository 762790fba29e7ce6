pub mod entry;
pub mod query;
pub mod score;

pub use entry::TariffEntry;
