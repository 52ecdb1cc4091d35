// Main entry point - Read the GPS error samples and submit the chart
mod application;
mod domain;
mod infrastructure;

use std::sync::Arc;

use anyhow::Context;

use crate::application::plot_service::ErrorPlotService;
use crate::domain::chart::ChartOptions;
use crate::infrastructure::config::load_config;
use crate::infrastructure::plotly_client::PlotlyClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration (credentials are explicit, never ambient state)
    let config = load_config()?;

    // Read the sample file once, in full, before any parsing
    let contents = tokio::fs::read_to_string(&config.input.path)
        .await
        .with_context(|| format!("Failed to read sample file {}", config.input.path))?;

    // Create the charting backend (infrastructure layer)
    let backend = Arc::new(PlotlyClient::new(
        config.plotly.base_url,
        config.plotly.username,
        config.plotly.api_key,
    ));

    // Create the service (application layer)
    let options = ChartOptions::new(config.chart.filename, config.chart.fileopt);
    let service = ErrorPlotService::new(backend, options);

    // One awaited submission; the outcome is printed either way
    match service.submit_error_chart(&contents).await {
        Ok(confirmation) => {
            println!("{}", confirmation.message);
            if let Some(url) = confirmation.url {
                println!("{}", url);
            }
            if let Some(warning) = confirmation.warning {
                tracing::warn!("charting service warning: {}", warning);
            }
        }
        Err(e) => {
            tracing::error!("chart submission failed: {:#}", e);
        }
    }

    Ok(())
}
