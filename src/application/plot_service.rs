// Error plot service - Use case for submitting the GPS error chart
use crate::application::chart_backend::ChartBackend;
use crate::application::sample_parser::parse_samples;
use crate::domain::chart::{ChartOptions, PlotConfirmation};
use std::sync::Arc;

#[derive(Clone)]
pub struct ErrorPlotService {
    backend: Arc<dyn ChartBackend>,
    options: ChartOptions,
}

impl ErrorPlotService {
    pub fn new(backend: Arc<dyn ChartBackend>, options: ChartOptions) -> Self {
        Self { backend, options }
    }

    /// Parse the sample file contents and submit both traces as one chart.
    pub async fn submit_error_chart(&self, contents: &str) -> anyhow::Result<PlotConfirmation> {
        let total_lines = contents.split('\n').count();
        let (adafruit, tinygps) = parse_samples(contents);

        tracing::debug!(
            "accepted {} of {} lines from the sample file",
            adafruit.len(),
            total_lines
        );

        let traces = vec![adafruit, tinygps];
        self.backend.create_chart(&traces, &self.options).await
    }
}
