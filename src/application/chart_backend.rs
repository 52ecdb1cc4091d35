// Backend trait for the remote charting collaborator
use crate::domain::chart::{ChartOptions, PlotConfirmation, Trace};
use async_trait::async_trait;

#[async_trait]
pub trait ChartBackend: Send + Sync {
    /// Render the given traces as a named remote chart, replacing or keeping
    /// any existing chart of that name per the options.
    async fn create_chart(
        &self,
        traces: &[Trace],
        options: &ChartOptions,
    ) -> anyhow::Result<PlotConfirmation>;
}
