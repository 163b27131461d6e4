use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{DashboardPages, Dataset, DatasetError, DatasetSource};

// What the stub hands back for a dataset; absent entries behave like missing files.
#[derive(Clone)]
pub(crate) enum StubEntry {
    Payload(Value),
    Malformed,
    Unreadable,
}

#[derive(Clone)]
pub(crate) struct StubSource {
    entries: Arc<Mutex<HashMap<Dataset, StubEntry>>>,
    loads: Arc<AtomicUsize>,
}

impl StubSource {
    pub(crate) fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            loads: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub(crate) fn set(&self, dataset: Dataset, entry: StubEntry) {
        let mut guard = self.entries.lock().expect("entries mutex poisoned");
        guard.insert(dataset, entry);
    }

    pub(crate) fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DatasetSource for StubSource {
    async fn load(&self, dataset: Dataset) -> Result<Value, DatasetError> {
        self.loads.fetch_add(1, Ordering::SeqCst);

        let guard = self.entries.lock().expect("entries mutex poisoned");
        match guard.get(&dataset) {
            Some(StubEntry::Payload(value)) => Ok(value.clone()),
            Some(StubEntry::Malformed) => Err(DatasetError::Malformed),
            Some(StubEntry::Unreadable) => Err(DatasetError::Unreadable("read failed".to_string())),
            None => Err(DatasetError::NotFound),
        }
    }
}

// Fixed page source for render tests.
pub(crate) struct StubPages(pub(crate) Result<String, String>);

#[async_trait]
impl DashboardPages for StubPages {
    async fn index(&self) -> Result<String, String> {
        self.0.clone()
    }
}
