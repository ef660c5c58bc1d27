//! Inventory domain module.
//!
//! This crate owns the item model and the in-memory store that holds every
//! item for the lifetime of the process (no IO, no HTTP).

pub mod export;
pub mod item;
pub mod pagination;
pub mod store;

pub use export::{CsvExport, CsvRecord, CSV_HEADER};
pub use item::{Item, ItemName, NameError, NewItem};
pub use pagination::PageRequest;
pub use store::{InMemoryInventoryStore, InventoryStore};
