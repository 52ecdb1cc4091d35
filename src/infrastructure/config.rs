// Configuration loading for credentials, chart target, and input path
use crate::domain::chart::WriteMode;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ErrorPlotConfig {
    pub plotly: PlotlySettings,
    pub chart: ChartSettings,
    pub input: InputSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PlotlySettings {
    pub base_url: String,
    pub username: String,
    pub api_key: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChartSettings {
    pub filename: String,
    #[serde(default)]
    pub fileopt: WriteMode,
}

#[derive(Debug, Deserialize, Clone)]
pub struct InputSettings {
    pub path: String,
}

pub fn load_config() -> anyhow::Result<ErrorPlotConfig> {
    let settings = config::Config::builder()
        .set_default("plotly.base_url", "https://plot.ly")?
        .set_default("chart.filename", "gps-error")?
        .set_default("input.path", "t6.txt")?
        .add_source(config::File::with_name("config/errorplot"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
