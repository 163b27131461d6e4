pub mod load_dataset;
pub mod render_dashboard;

#[cfg(test)]
pub(crate) mod test_support;

pub use load_dataset::LoadDatasetUseCase;
pub use render_dashboard::RenderDashboardUseCase;
