pub mod catalog;
pub mod error;
pub mod store;
pub mod uploads;

pub use catalog::{Catalog, RatingSummary};
pub use error::StoreError;
pub use store::DocumentStore;
pub use uploads::UploadStore;
