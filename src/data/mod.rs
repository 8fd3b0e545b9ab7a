//! Data module - CSV loading and cleaning

pub mod frame;
mod loader;
pub mod pipeline;
mod processor;
pub mod schema;
pub mod text;

pub use loader::{DataLoader, LoaderError};
pub use pipeline::{clean_table, CleanedTable, Stage};
pub use processor::{DataProcessor, Deduplicated, ProcessorError};
