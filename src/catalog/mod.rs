pub mod client;
pub mod error;
pub mod record;

pub use client::{CatalogClient, CoverImage};
pub use error::CatalogError;
