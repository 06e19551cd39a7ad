pub mod local;
pub mod rest;
pub mod traits;

pub use local::LocalProgressStore;
pub use rest::{RestCatalogProvider, RestProgressStore};
pub use traits::{CatalogProvider, ProgressStore};
