//! Storage infrastructure: the published set on disk.

mod json_set_store;

pub use json_set_store::JsonSetStore;
