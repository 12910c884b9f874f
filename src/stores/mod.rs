// Stores layer - Data access and repository pattern
pub mod client_store;
pub mod item_store;
pub mod record_meta;

pub use client_store::ClientStore;
pub use item_store::ItemStore;
