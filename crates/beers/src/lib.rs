//! Beer domain: the persisted record, the style catalogue, and storage.

pub mod beer;
pub mod repository;

pub use beer::{Beer, BeerStyle};
pub use repository::{BeerRepository, InMemoryBeerRepository, StoreError};
