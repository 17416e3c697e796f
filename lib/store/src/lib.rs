mod client;
mod error;
mod mapper;
mod repository;
pub mod sparql;

pub use client::{HttpSparqlEndpoint, SparqlEndpoint, HTTP_TIMEOUT};
pub use error::StoreError;
pub use mapper::EntityRow;
pub use repository::EntityRepository;
pub use sparql::ListFilters;
