use crate::domain::Dataset;
use crate::interface_adapters::handlers::{get_dataset, index};
use crate::interface_adapters::state::AppState;
use axum::{Router, extract::State, routing::get};
use tower_http::{services::ServeDir, trace::TraceLayer};

pub fn app(state: AppState) -> Router {
    // One GET route per dataset, all served by the same handler.
    let api = Dataset::ALL
        .into_iter()
        .fold(Router::<AppState>::new(), |router, dataset| {
            router.route(
                &format!("/api/{dataset}"),
                get(move |state: State<AppState>| get_dataset(state, dataset)),
            )
        });

    Router::new()
        .route("/", get(index))
        .merge(api)
        .nest_service("/static", ServeDir::new(&*state.static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
