use crate::domain::{Dataset, DatasetError};
use crate::interface_adapters::protocol::ErrorResponse;
use crate::interface_adapters::state::{AppState, FsDashboardPages, FsDatasetSource};
use crate::use_cases::{LoadDatasetUseCase, RenderDashboardUseCase};
use axum::{Json, extract::State, http::StatusCode, response::Html};
use serde_json::Value;

// Bundled copy of the dashboard page, used when the template directory is unusable.
const BUNDLED_DASHBOARD: &str = include_str!("../../templates/index.html");

// Handler for the dashboard shell page.
#[tracing::instrument(name = "dashboard_index", skip_all)]
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let use_case = RenderDashboardUseCase {
        pages: FsDashboardPages {
            template_dir: state.template_dir.clone(),
        },
        fallback: BUNDLED_DASHBOARD,
    };

    Html(use_case.execute().await)
}

// Handler shared by every dataset route; the dataset is bound at registration.
#[tracing::instrument(name = "get_dataset", skip_all, fields(dataset = %dataset))]
pub async fn get_dataset(
    State(state): State<AppState>,
    dataset: Dataset,
) -> Result<Json<Value>, (StatusCode, Json<ErrorResponse>)> {
    let use_case = LoadDatasetUseCase {
        source: FsDatasetSource {
            data_dir: state.data_dir.clone(),
        },
    };

    let payload = use_case.execute(dataset).await.map_err(map_dataset_error)?;

    Ok(Json(payload))
}

// Helper to build a JSON error response.
fn error_response(status: StatusCode, message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

fn map_dataset_error(err: DatasetError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match &err {
        DatasetError::NotFound => {
            tracing::warn!("data file not found");
            StatusCode::NOT_FOUND
        }
        DatasetError::Malformed => {
            tracing::error!("data file holds invalid json");
            StatusCode::INTERNAL_SERVER_ERROR
        }
        DatasetError::Unreadable(cause) => {
            tracing::error!(error = %cause, "failed to read data file");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    error_response(status, err.message())
}
