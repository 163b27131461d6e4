use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{Dataset, DatasetError};

// Port for reading dataset payloads used by the load use case.
#[async_trait]
pub trait DatasetSource: Send + Sync {
    async fn load(&self, dataset: Dataset) -> Result<Value, DatasetError>;
}

// Port for fetching the dashboard page markup.
#[async_trait]
pub trait DashboardPages: Send + Sync {
    async fn index(&self) -> Result<String, String>;
}
