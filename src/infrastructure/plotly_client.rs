// Plotly v1 client - clientresp endpoint implementation of ChartBackend
use crate::application::chart_backend::ChartBackend;
use crate::domain::chart::{ChartOptions, PlotConfirmation, Trace};
use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlotlyError {
    #[error("charting service rejected the request: {0}")]
    Service(String),
    #[error("charting service returned status {status}: {body}")]
    Http { status: u16, body: String },
}

#[derive(Debug, Clone)]
pub struct PlotlyClient {
    base_url: String,
    username: String,
    api_key: String,
    http: reqwest::Client,
}

/// Reply shape of the v1 `clientresp` endpoint. All fields arrive as strings;
/// absent ones are empty rather than missing.
#[derive(Debug, Deserialize)]
struct ClientResponse {
    #[serde(default)]
    url: String,
    #[serde(default)]
    message: String,
    #[serde(default)]
    filename: String,
    #[serde(default)]
    warning: String,
    #[serde(default)]
    error: String,
}

impl PlotlyClient {
    pub fn new(base_url: String, username: String, api_key: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            username,
            api_key,
            http: reqwest::Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/clientresp", self.base_url)
    }

    fn build_form(
        &self,
        traces: &[Trace],
        options: &ChartOptions,
    ) -> anyhow::Result<Vec<(&'static str, String)>> {
        let args = serde_json::to_string(traces).context("Failed to serialize chart traces")?;
        let kwargs =
            serde_json::to_string(options).context("Failed to serialize chart options")?;

        Ok(vec![
            ("un", self.username.clone()),
            ("key", self.api_key.clone()),
            ("origin", "plot".to_string()),
            ("platform", "rust".to_string()),
            ("version", env!("CARGO_PKG_VERSION").to_string()),
            ("args", args),
            ("kwargs", kwargs),
        ])
    }
}

fn into_confirmation(response: ClientResponse) -> Result<PlotConfirmation, PlotlyError> {
    if !response.error.is_empty() {
        return Err(PlotlyError::Service(response.error));
    }
    let non_empty = |s: String| if s.is_empty() { None } else { Some(s) };
    Ok(PlotConfirmation {
        url: non_empty(response.url),
        message: response.message,
        filename: non_empty(response.filename),
        warning: non_empty(response.warning),
    })
}

#[async_trait]
impl ChartBackend for PlotlyClient {
    async fn create_chart(
        &self,
        traces: &[Trace],
        options: &ChartOptions,
    ) -> anyhow::Result<PlotConfirmation> {
        let form = self.build_form(traces, options)?;

        tracing::debug!("submitting {} traces to {}", traces.len(), self.endpoint());
        let response = self
            .http
            .post(self.endpoint())
            .form(&form)
            .send()
            .await
            .context("Failed to send request to the charting service")?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(PlotlyError::Http { status, body }.into());
        }

        let reply = response
            .json::<ClientResponse>()
            .await
            .context("Failed to parse the charting service response")?;

        Ok(into_confirmation(reply)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::WriteMode;

    fn client() -> PlotlyClient {
        PlotlyClient::new(
            "https://plot.ly/".to_string(),
            "rickkas7".to_string(),
            "xxxx".to_string(),
        )
    }

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        assert_eq!(client().endpoint(), "https://plot.ly/clientresp");
    }

    #[test]
    fn test_form_carries_credentials_and_payloads() {
        let mut adafruit = Trace::scatter("Adafruit");
        adafruit.push(1.0, 2.0);
        let tinygps = Trace::scatter("TinyGPS++");
        let options = ChartOptions::new("gps-error", WriteMode::Overwrite);

        let form = client().build_form(&[adafruit, tinygps], &options).unwrap();
        let get = |k: &str| &form.iter().find(|(key, _)| *key == k).unwrap().1;

        assert_eq!(get("un"), "rickkas7");
        assert_eq!(get("key"), "xxxx");
        assert_eq!(get("origin"), "plot");

        let args: serde_json::Value = serde_json::from_str(get("args")).unwrap();
        assert_eq!(args[0]["name"], "Adafruit");
        assert_eq!(args[0]["type"], "scatter");
        assert_eq!(args[0]["x"][0], 1.0);
        assert_eq!(args[1]["name"], "TinyGPS++");

        let kwargs: serde_json::Value = serde_json::from_str(get("kwargs")).unwrap();
        assert_eq!(kwargs["filename"], "gps-error");
        assert_eq!(kwargs["fileopt"], "overwrite");
    }

    #[test]
    fn test_nan_sample_serializes_as_null() {
        let mut trace = Trace::scatter("Adafruit");
        trace.push(1.0, f64::NAN);
        let options = ChartOptions::new("gps-error", WriteMode::Overwrite);

        let form = client().build_form(&[trace], &options).unwrap();
        let args = &form.iter().find(|(key, _)| *key == "args").unwrap().1;
        let parsed: serde_json::Value = serde_json::from_str(args).unwrap();
        assert!(parsed[0]["y"][0].is_null());
    }

    #[test]
    fn test_service_error_field_maps_to_error() {
        let reply: ClientResponse = serde_json::from_str(
            r#"{"url": "", "message": "", "warning": "", "filename": "", "error": "Invalid API key"}"#,
        )
        .unwrap();
        let err = into_confirmation(reply).unwrap_err();
        assert!(matches!(err, PlotlyError::Service(msg) if msg == "Invalid API key"));
    }

    #[test]
    fn test_successful_reply_maps_to_confirmation() {
        let reply: ClientResponse = serde_json::from_str(
            r#"{"url": "https://plot.ly/~rickkas7/29", "message": "High five! You successfully sent some data to your account on plotly.", "warning": "", "filename": "gps-error", "error": ""}"#,
        )
        .unwrap();
        let confirmation = into_confirmation(reply).unwrap();
        assert_eq!(confirmation.url.as_deref(), Some("https://plot.ly/~rickkas7/29"));
        assert_eq!(confirmation.filename.as_deref(), Some("gps-error"));
        assert!(confirmation.warning.is_none());
        assert!(confirmation.message.starts_with("High five!"));
    }

    #[test]
    fn test_missing_reply_fields_default_to_empty() {
        let reply: ClientResponse = serde_json::from_str(r#"{"message": "ok"}"#).unwrap();
        let confirmation = into_confirmation(reply).unwrap();
        assert_eq!(confirmation.message, "ok");
        assert!(confirmation.url.is_none());
    }
}
