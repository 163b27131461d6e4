mod dataset;
mod errors;
mod ports;

// Re-export the domain boundary types and ports.
pub use dataset::{Dataset, UnknownDataset};
pub use errors::DatasetError;
pub use ports::{DashboardPages, DatasetSource};
