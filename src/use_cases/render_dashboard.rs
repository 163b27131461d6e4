use crate::domain::DashboardPages;

// Dashboard page use case; falls back to the bundled page when the
// template cannot be read so `/` never fails.
pub struct RenderDashboardUseCase<P> {
    pub pages: P,
    pub fallback: &'static str,
}

impl<P> RenderDashboardUseCase<P>
where
    P: DashboardPages,
{
    pub async fn execute(&self) -> String {
        match self.pages.index().await {
            Ok(html) => html,
            Err(err) => {
                tracing::warn!(error = %err, "dashboard template unavailable, serving bundled page");
                self.fallback.to_string()
            }
        }
    }
}
