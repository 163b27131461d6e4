use serde_json::Value;

use crate::domain::{Dataset, DatasetError, DatasetSource};

// Dataset retrieval use case with an injected source.
pub struct LoadDatasetUseCase<S> {
    pub source: S,
}

impl<S> LoadDatasetUseCase<S>
where
    S: DatasetSource,
{
    // Reads the dataset fresh on every call; nothing is cached between requests.
    pub async fn execute(&self, dataset: Dataset) -> Result<Value, DatasetError> {
        let payload = self.source.load(dataset).await?;
        tracing::debug!(%dataset, "dataset loaded");
        Ok(payload)
    }
}
