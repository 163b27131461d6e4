use async_trait::async_trait;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::{DashboardPages, Dataset, DatasetError, DatasetSource};

// Application state: directory locations only, fixed at startup.
#[derive(Clone)]
pub struct AppState {
    pub data_dir: Arc<Path>,
    pub template_dir: Arc<Path>,
    // Served as-is under /static.
    pub static_dir: Arc<Path>,
}

impl AppState {
    pub fn new(data_dir: PathBuf, template_dir: PathBuf, static_dir: PathBuf) -> Self {
        Self {
            data_dir: Arc::from(data_dir.as_path()),
            template_dir: Arc::from(template_dir.as_path()),
            static_dir: Arc::from(static_dir.as_path()),
        }
    }
}

// Filesystem-backed dataset source reading `<data_dir>/<name>.json`.
#[derive(Clone)]
pub struct FsDatasetSource {
    pub data_dir: Arc<Path>,
}

#[async_trait]
impl DatasetSource for FsDatasetSource {
    async fn load(&self, dataset: Dataset) -> Result<Value, DatasetError> {
        let path = dataset.path_in(&self.data_dir);

        // The handle is opened and closed inside `read` on every exit path.
        let bytes = tokio::fs::read(&path).await.map_err(|err| match err.kind() {
            ErrorKind::NotFound => DatasetError::NotFound,
            _ => DatasetError::Unreadable(format!("{}: {err}", path.display())),
        })?;

        serde_json::from_slice(&bytes).map_err(|err| {
            tracing::debug!(%dataset, error = %err, "dataset file is not valid json");
            DatasetError::Malformed
        })
    }
}

// Filesystem-backed dashboard page reading `<template_dir>/index.html`.
#[derive(Clone)]
pub struct FsDashboardPages {
    pub template_dir: Arc<Path>,
}

#[async_trait]
impl DashboardPages for FsDashboardPages {
    async fn index(&self) -> Result<String, String> {
        let path = self.template_dir.join("index.html");
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|err| format!("{}: {err}", path.display()))
    }
}
